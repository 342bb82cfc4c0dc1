//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the 2048 rules: the grid model, directional move
//! resolution, tile spawning and game-over detection. It has **zero
//! dependencies** on UI, input or I/O, making it:
//!
//! - **Deterministic**: Same seed and moves produce identical games
//! - **Pure**: Every transition returns a new grid; inputs are never mutated
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`tile`]: Tile values, identity-keys and the per-game key allocator
//! - [`grid`]: `N x N` board of optional tiles
//! - [`engine`]: Slide/merge resolution, spawn step, terminal detection
//! - [`game_state`]: A game session (grid, score, RNG, keys) as a value
//! - [`rng`]: Seeded LCG used for tile placement
//! - [`snapshot`]: Read-only views for renderers
//!
//! # Game Rules
//!
//! - **Slide**: Tiles move as far as possible toward the chosen edge
//! - **Merge**: Two equal adjacent tiles combine into one of double value;
//!   a tile merges at most once per move and only with its immediate neighbour
//! - **Score**: Each merge adds the value of the resulting tile
//! - **Spawn**: After every move that changed the board, one tile (2 at 90%,
//!   4 at 10%) appears on a random empty cell
//! - **Game over**: The board is full and no two orthogonal neighbours match
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{GameState, Grid};
//! use tui_2048_types::Direction;
//!
//! let grid = Grid::from_values(&[
//!     vec![2, 2, 0, 0],
//!     vec![0, 0, 0, 0],
//!     vec![0, 0, 0, 0],
//!     vec![0, 0, 0, 4],
//! ])
//! .unwrap();
//!
//! let game = GameState::from_grid(grid, 12345);
//! let next = game.apply_move(Direction::Left);
//!
//! assert_eq!(next.score(), 4);
//! assert_eq!(next.grid().tiles().count(), 3); // merged 4, slid 4, one spawn
//! assert_eq!(game.score(), 0); // the previous state is untouched
//! ```

pub mod engine;
pub mod game_state;
pub mod grid;
pub mod rng;
pub mod snapshot;
pub mod tile;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use engine::{is_game_over, resolve, slide, spawn, MoveOutcome};
pub use game_state::GameState;
pub use grid::Grid;
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, TileView};
pub use tile::{is_valid_value, KeyAllocator, Tile, TileId};
