//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no game logic, making them usable in any
//! context (engine, input mapping, terminal rendering).
//!
//! # Board Dimensions
//!
//! The board is a square of `N x N` cells. The classic game uses `N = 4`;
//! any size in `MIN_BOARD_SIZE..=MAX_BOARD_SIZE` is accepted.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval of the terminal loop (~60 FPS) |
//! | `DEFAULT_DEBOUNCE_MS` | 100 | Trailing-edge debounce window for directional input |
//!
//! # Spawn Rules
//!
//! - Two tiles valued `INITIAL_TILE_VALUE` are placed when a game starts.
//! - After every effective move, one tile spawns: 4 with `SPAWN_FOUR_PERCENT`%
//!   probability, 2 otherwise.
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, DEFAULT_BOARD_SIZE};
//!
//! let dir = Direction::parse("left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.as_str(), "left");
//!
//! assert!(Direction::parse("sideways").is_err());
//!
//! let action = GameAction::Move("move_up".parse().unwrap());
//! assert_eq!(action, GameAction::Move(Direction::Up));
//!
//! assert_eq!(DEFAULT_BOARD_SIZE, 4);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classic board size (4x4)
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Smallest playable board (two distinct initial cells are required)
pub const MIN_BOARD_SIZE: usize = 2;

/// Largest supported board; bounds the stack buffers used for line scans
pub const MAX_BOARD_SIZE: usize = 8;

/// Number of tiles placed when a game starts
pub const INITIAL_TILE_COUNT: usize = 2;

/// Value of the tiles placed when a game starts
pub const INITIAL_TILE_VALUE: u64 = 2;

/// Chance (in percent) that a spawned tile is a 4 instead of a 2
pub const SPAWN_FOUR_PERCENT: u32 = 10;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Trailing-edge debounce window for directional input
pub const DEFAULT_DEBOUNCE_MS: u32 = 100;

/// Errors raised at the boundaries of the engine.
///
/// Move resolution itself never fails: a full board with no legal move is a
/// state (`is_over`), not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Tile value is below 2 or not a power of two.
    #[error("invalid tile value {0}: must be a power of two >= 2")]
    InvalidTileValue(u64),
    /// Direction token not recognised at the input boundary.
    #[error("invalid direction {0:?}: expected up, down, left or right")]
    InvalidDirection(String),
    /// Board size outside the supported range.
    #[error("invalid board size {0}: must be between 2 and 8")]
    InvalidBoardSize(usize),
    /// Fixture layout is not a square of supported size.
    #[error("invalid grid layout: rows must form a square between 2x2 and 8x8")]
    InvalidLayout,
}

/// The four cardinal move directions.
///
/// A direction names the edge tiles slide *toward*.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in a stable order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse a direction token (case-insensitive).
    ///
    /// Accepts `up`/`down`/`left`/`right` and the `move_up`-style command
    /// tokens emitted by older front-ends.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameError};
    ///
    /// assert_eq!(Direction::parse("UP"), Ok(Direction::Up));
    /// assert_eq!(Direction::parse("move_right"), Ok(Direction::Right));
    /// assert_eq!(
    ///     Direction::parse("north"),
    ///     Err(GameError::InvalidDirection("north".to_string()))
    /// );
    /// ```
    pub fn parse(token: &str) -> Result<Self, GameError> {
        let lowered = token.trim().to_lowercase();
        let name = lowered.strip_prefix("move_").unwrap_or(&lowered);
        match name {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(GameError::InvalidDirection(token.to_string())),
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::parse(s)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Actions produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every tile toward an edge
    Move(Direction),
    /// Start a fresh game of the same size
    Restart,
}
