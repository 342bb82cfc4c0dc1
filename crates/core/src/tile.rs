//! Tile module - a single numbered piece on the board
//!
//! Tiles are immutable values. Every transition (slide, merge, spawn) builds a
//! new `Tile`; nothing is shared or mutated between grid snapshots.

use crate::types::GameError;

/// Stable identity-key of a tile, used by renderers to key animations.
pub type TileId = u32;

/// Check whether `value` may appear on a tile: at least 2 and a power of two.
///
/// # Examples
///
/// ```
/// use tui_2048_core::is_valid_value;
///
/// assert!(is_valid_value(2));
/// assert!(is_valid_value(2048));
/// assert!(!is_valid_value(0));
/// assert!(!is_valid_value(1));
/// assert!(!is_valid_value(6));
/// ```
pub fn is_valid_value(value: u64) -> bool {
    value >= 2 && value.is_power_of_two()
}

/// A numbered tile at a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    id: TileId,
    value: u64,
    row: usize,
    col: usize,
    just_spawned: bool,
    just_merged: bool,
}

impl Tile {
    /// Create a tile, rejecting values that are not a power of two >= 2.
    pub fn new(id: TileId, value: u64, row: usize, col: usize) -> Result<Self, GameError> {
        if !is_valid_value(value) {
            return Err(GameError::InvalidTileValue(value));
        }
        Ok(Self {
            id,
            value,
            row,
            col,
            just_spawned: false,
            just_merged: false,
        })
    }

    /// Create a tile flagged as spawned by the current move.
    pub fn spawned(id: TileId, value: u64, row: usize, col: usize) -> Result<Self, GameError> {
        Ok(Self {
            just_spawned: true,
            ..Self::new(id, value, row, col)?
        })
    }

    /// Spawn-step constructor; callers only pass 2 or 4.
    pub(crate) fn fresh(id: TileId, value: u64, row: usize, col: usize) -> Self {
        debug_assert!(is_valid_value(value));
        Self {
            id,
            value,
            row,
            col,
            just_spawned: true,
            just_merged: false,
        }
    }

    pub fn id(&self) -> TileId {
        self.id
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn just_spawned(&self) -> bool {
        self.just_spawned
    }

    pub fn just_merged(&self) -> bool {
        self.just_merged
    }

    /// The same tile relocated to `(row, col)`, with transient flags reset.
    pub(crate) fn moved_to(&self, row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            just_spawned: false,
            just_merged: false,
            ..*self
        }
    }

    /// This tile after absorbing an equal tile: doubled value, same id and
    /// position, flagged as merged for the rest of the move.
    ///
    /// `None` when the doubled value does not fit in a `u64`; such a pair
    /// stays unmerged.
    pub(crate) fn absorbed(&self) -> Option<Self> {
        let value = self.value.checked_mul(2)?;
        Some(Self {
            value,
            just_merged: true,
            just_spawned: false,
            ..*self
        })
    }

    /// The same tile with its merge flag cleared.
    pub(crate) fn settled(&self) -> Self {
        Self {
            just_merged: false,
            ..*self
        }
    }
}

/// Monotonic issuer of tile identity-keys, one per game.
///
/// Ids are never recycled, even after a tile disappears into a merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAllocator {
    last: TileId,
}

impl KeyAllocator {
    /// Allocator whose first issued id is 1.
    pub fn new() -> Self {
        Self { last: 0 }
    }

    /// Allocator that continues after `last` (e.g. the largest id on a loaded board).
    pub fn starting_after(last: TileId) -> Self {
        Self { last }
    }

    /// Issue the next id, strictly greater than every id issued before.
    pub fn issue(&mut self) -> TileId {
        self.last += 1;
        self.last
    }

    /// Largest id issued so far (0 if none).
    pub fn last_issued(&self) -> TileId {
        self.last
    }
}

impl Default for KeyAllocator {
    fn default() -> Self {
        Self::new()
    }
}
