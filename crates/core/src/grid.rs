//! Grid module - the N x N board of optional tiles
//!
//! The grid is the single source of position truth: a tile sits in exactly one
//! slot and its recorded `(row, col)` always matches that slot.
//! Storage is a flat row-major `Vec` (`row * size + col`).
//!
//! The only public way to change a grid is through the move engine; the
//! constructors here build empty boards or fixed fixtures.

use arrayvec::ArrayVec;

use crate::tile::{Tile, TileId};
use crate::types::{GameError, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Upper bound on cells, used for stack-only cell lists.
pub const MAX_CELLS: usize = MAX_BOARD_SIZE * MAX_BOARD_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Tile>>,
}

impl Grid {
    /// Create an empty `size x size` grid.
    pub fn new(size: usize) -> Result<Self, GameError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GameError::InvalidBoardSize(size));
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
        })
    }

    /// An empty grid with the same size as `self`.
    pub(crate) fn empty_like(&self) -> Self {
        Self {
            size: self.size,
            cells: vec![None; self.cells.len()],
        }
    }

    /// Build a grid from rows of values, `0` meaning empty.
    ///
    /// Tiles get ids `1, 2, ...` in row-major order. Intended for fixtures,
    /// replays and tests.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::Grid;
    ///
    /// let grid = Grid::from_values(&[vec![2, 0], vec![4, 2]]).unwrap();
    /// assert_eq!(grid.size(), 2);
    /// assert_eq!(grid.get(1, 0).map(|t| t.value()), Some(4));
    /// assert!(grid.get(0, 1).is_none());
    /// ```
    pub fn from_values(rows: &[Vec<u64>]) -> Result<Self, GameError> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return Err(GameError::InvalidLayout);
        }
        let mut grid = Self::new(size).map_err(|_| GameError::InvalidLayout)?;
        let mut next_id: TileId = 1;
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                grid.place(Tile::new(next_id, value, row, col)?);
                next_id += 1;
            }
        }
        Ok(grid)
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Tile at `(row, col)`; `None` for empty or out-of-bounds cells.
    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        self.index(row, col).and_then(|i| self.cells[i].as_ref())
    }

    /// Put `tile` into the slot named by its own position.
    pub(crate) fn place(&mut self, tile: Tile) {
        if let Some(i) = self.index(tile.row(), tile.col()) {
            self.cells[i] = Some(tile);
        }
    }

    /// Map every tile through `f`, keeping positions.
    pub(crate) fn map_tiles(&self, f: impl Fn(&Tile) -> Tile) -> Self {
        Self {
            size: self.size,
            cells: self.cells.iter().map(|c| c.as_ref().map(&f)).collect(),
        }
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter().flatten()
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), MAX_CELLS> {
        let mut out = ArrayVec::new();
        for (i, cell) in self.cells.iter().enumerate() {
            if cell.is_none() {
                out.push((i / self.size, i % self.size));
            }
        }
        out
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Sum of all tile values on the board.
    pub fn total_value(&self) -> u64 {
        self.tiles().map(|t| t.value()).sum()
    }

    /// Largest tile value, or 0 on an empty board.
    pub fn max_value(&self) -> u64 {
        self.tiles().map(|t| t.value()).max().unwrap_or(0)
    }

    /// Largest identity-key present on the board, or 0 when empty.
    pub fn max_id(&self) -> TileId {
        self.tiles().map(|t| t.id()).max().unwrap_or(0)
    }

    /// Rows of values, `0` for empty cells.
    pub fn values(&self) -> Vec<Vec<u64>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|c| c.map_or(0, |t| t.value())).collect())
            .collect()
    }
}
