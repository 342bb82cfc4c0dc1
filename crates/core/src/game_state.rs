//! Game state module - one game session as an immutable value
//!
//! `GameState` ties together the grid, the score, the terminal flag and the
//! per-game mutable pieces (RNG and identity-key allocator). Applying a move
//! never mutates the state in place: it returns the next state, so callers can
//! compare old and new states directly.

use tracing::{debug, info};

use crate::engine::{is_game_over, resolve};
use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::snapshot::{GameSnapshot, TileView};
use crate::tile::{KeyAllocator, Tile, TileId};
use crate::types::{Direction, GameError, INITIAL_TILE_COUNT, INITIAL_TILE_VALUE};

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    grid: Grid,
    score: u64,
    is_over: bool,
    rng: SimpleRng,
    keys: KeyAllocator,
    /// Seed the game was created with (kept for replays).
    seed: u32,
    /// Number of effective moves applied so far.
    moves: u32,
    /// Score gained by the most recent effective move.
    last_score_delta: u64,
    /// Tiles that absorbed another tile in the most recent effective move.
    last_merged: Vec<TileId>,
}

impl GameState {
    /// Start a new game: an empty `board_size x board_size` grid with two
    /// value-2 tiles on distinct random cells.
    pub fn new(board_size: usize, seed: u32) -> Result<Self, GameError> {
        let mut grid = Grid::new(board_size)?;
        let mut rng = SimpleRng::new(seed);
        let mut keys = KeyAllocator::new();

        for _ in 0..INITIAL_TILE_COUNT {
            let empty = grid.empty_cells();
            let (row, col) = empty[rng.next_range(empty.len() as u32) as usize];
            grid.place(Tile::spawned(keys.issue(), INITIAL_TILE_VALUE, row, col)?);
        }

        debug!(board_size, seed, "new game");
        Ok(Self::assemble(grid, rng, keys, seed))
    }

    /// Resume from an existing grid (fixtures, replays, tests).
    ///
    /// The key allocator continues after the largest id on the grid, and the
    /// terminal flag is computed from the grid.
    pub fn from_grid(grid: Grid, seed: u32) -> Self {
        let keys = KeyAllocator::starting_after(grid.max_id());
        Self::assemble(grid, SimpleRng::new(seed), keys, seed)
    }

    fn assemble(grid: Grid, rng: SimpleRng, keys: KeyAllocator, seed: u32) -> Self {
        let is_over = is_game_over(&grid);
        Self {
            grid,
            score: 0,
            is_over,
            rng,
            keys,
            seed,
            moves: 0,
            last_score_delta: 0,
            last_merged: Vec::new(),
        }
    }

    /// Apply one directional move and return the next state.
    ///
    /// Returns an equal state when the game is already over or when the move
    /// has no effect; in both cases no tile spawns and the RNG does not advance.
    pub fn apply_move(&self, direction: Direction) -> Self {
        if self.is_over {
            debug!(direction = %direction, "move ignored: game is over");
            return self.clone();
        }

        let mut rng = self.rng.clone();
        let mut keys = self.keys.clone();
        let outcome = resolve(&self.grid, direction, &mut rng, &mut keys);
        if !outcome.moved {
            return self.clone();
        }

        let is_over = is_game_over(&outcome.grid);
        let score = self.score.saturating_add(outcome.score_delta);
        debug!(
            direction = %direction,
            score_delta = outcome.score_delta,
            score,
            "move applied"
        );
        if is_over {
            info!(score, moves = self.moves + 1, "game over");
        }

        Self {
            grid: outcome.grid,
            score,
            is_over,
            rng,
            keys,
            seed: self.seed,
            moves: self.moves + 1,
            last_score_delta: outcome.score_delta,
            last_merged: outcome.merged,
        }
    }

    /// A fresh game of the same size, seeded from the current RNG state.
    pub fn restart(&self) -> Self {
        let seed = self.rng.state();
        // Size is already validated by the existing grid.
        Self::new(self.grid.size(), seed).unwrap_or_else(|_| self.clone())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn board_size(&self) -> usize {
        self.grid.size()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn last_score_delta(&self) -> u64 {
        self.last_score_delta
    }

    pub fn best_tile(&self) -> u64 {
        self.grid.max_value()
    }

    /// Ids of the tiles that merged during the most recent effective move.
    pub fn last_merged(&self) -> &[TileId] {
        &self.last_merged
    }

    /// Read-only view for renderers.
    pub fn snapshot(&self) -> GameSnapshot {
        let tiles = self
            .grid
            .tiles()
            .map(|t| TileView {
                id: t.id(),
                value: t.value(),
                row: t.row(),
                col: t.col(),
                just_spawned: t.just_spawned(),
                just_merged: self.last_merged.contains(&t.id()),
            })
            .collect();

        GameSnapshot {
            size: self.grid.size(),
            tiles,
            score: self.score,
            is_over: self.is_over,
            moves: self.moves,
            best_tile: self.best_tile(),
        }
    }
}
