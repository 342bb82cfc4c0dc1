//! Input module (engine-facing).
//!
//! This crate is independent of any UI framework. It maps `crossterm` key
//! events and touch-style swipe deltas into [`crate::types::GameAction`]s, and
//! provides a trailing-edge [`Debouncer`] so bursts of directional input
//! (key-repeat, fast swipes) reach the engine as at most one move per window.

pub mod debounce;
pub mod map;
pub mod swipe;

pub use tui_2048_types as types;

pub use debounce::Debouncer;
pub use map::{handle_key_event, should_quit};
pub use swipe::{SwipeInput, DEFAULT_SWIPE_MIN_DISTANCE};
