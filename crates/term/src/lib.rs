//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders a
//! [`core::GameSnapshot`] into a framebuffer that is then flushed to the
//! terminal backend, so the engine never knows anything about drawing.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep rendering pure up to the final flush
//! - Allow precise control over tile aspect ratio

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, for_each_changed_run, TerminalRenderer};
