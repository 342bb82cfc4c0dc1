//! Engine module - directional move resolution
//!
//! Every function here is pure with respect to the grid: the input is never
//! touched and a new grid is returned. The only mutable inputs are the
//! per-game RNG and key allocator, which are advanced by the spawn step alone.
//!
//! # Resolution
//!
//! Each line (a row for `Left`/`Right`, a column for `Up`/`Down`) is scanned
//! starting at the edge tiles move toward. A write cursor counts the tiles
//! already placed in the new line. Every source tile first tries to merge into
//! the tile placed immediately before it; that succeeds only if the values are
//! equal and the destination has not merged yet this move. Otherwise the tile
//! is packed into the next free slot.
//!
//! So `[2, 2, 2, 2]` moved left becomes `[4, 4, _, _]`, and `[2, 4, 2]` does
//! not merge at all.

use arrayvec::ArrayVec;
use tracing::{debug, trace, warn};

use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::tile::{KeyAllocator, Tile, TileId};
use crate::types::{Direction, MAX_BOARD_SIZE};

/// Result of resolving one directional move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Grid after the move (the input grid itself when nothing moved).
    pub grid: Grid,
    /// Sum of the values of every tile produced by a merge this move.
    pub score_delta: u64,
    /// True if any tile changed position or merged.
    pub moved: bool,
    /// Ids of tiles that absorbed another tile this move.
    pub merged: Vec<TileId>,
}

/// Cell coordinates of one line, ordered from the edge tiles move toward.
fn line_cells(
    direction: Direction,
    line: usize,
    size: usize,
) -> ArrayVec<(usize, usize), MAX_BOARD_SIZE> {
    (0..size)
        .map(|k| match direction {
            Direction::Left => (line, k),
            Direction::Right => (line, size - 1 - k),
            Direction::Up => (k, line),
            Direction::Down => (size - 1 - k, line),
        })
        .collect()
}

/// Slide and merge every line toward `direction`, without spawning.
///
/// When nothing moves, the returned grid is a clone of the input and
/// `score_delta` is 0. Merge flags are cleared on the returned grid; the ids
/// of merged tiles are reported in [`MoveOutcome::merged`].
pub fn slide(grid: &Grid, direction: Direction) -> MoveOutcome {
    let size = grid.size();
    let mut next = grid.empty_like();
    let mut score_delta = 0u64;
    let mut moved = false;
    let mut merged = Vec::new();

    for line in 0..size {
        let cells = line_cells(direction, line, size);
        let mut cnt = 0usize;

        for &(row, col) in &cells {
            let Some(src) = grid.get(row, col) else {
                continue;
            };

            // Look back exactly one slot: the most recently placed tile.
            if cnt > 0 {
                let (dst_row, dst_col) = cells[cnt - 1];
                let absorbed = next
                    .get(dst_row, dst_col)
                    .filter(|dst| dst.value() == src.value() && !dst.just_merged())
                    .and_then(Tile::absorbed);
                if let Some(absorbed) = absorbed {
                    score_delta = score_delta.saturating_add(absorbed.value());
                    merged.push(absorbed.id());
                    next.place(absorbed);
                    moved = true;
                    continue;
                }
            }

            let (dst_row, dst_col) = cells[cnt];
            next.place(src.moved_to(dst_row, dst_col));
            if (dst_row, dst_col) != (row, col) {
                moved = true;
            }
            cnt += 1;
        }
    }

    if !moved {
        return MoveOutcome {
            grid: grid.clone(),
            score_delta: 0,
            moved: false,
            merged,
        };
    }

    MoveOutcome {
        grid: next.map_tiles(Tile::settled),
        score_delta,
        moved,
        merged,
    }
}

/// Resolve a full move: slide/merge, then spawn one tile if anything moved.
///
/// A move that changes nothing returns the input grid unchanged and leaves
/// `rng` and `keys` untouched.
pub fn resolve(
    grid: &Grid,
    direction: Direction,
    rng: &mut SimpleRng,
    keys: &mut KeyAllocator,
) -> MoveOutcome {
    let outcome = slide(grid, direction);
    if !outcome.moved {
        trace!(direction = %direction, "move had no effect");
        return outcome;
    }

    let grid = spawn(&outcome.grid, rng, keys);
    MoveOutcome { grid, ..outcome }
}

/// Place one new tile (2 at 90%, 4 at 10%) on a random empty cell.
///
/// The cell is drawn uniformly from the empty cells. A full grid is returned
/// unchanged; after an effective move that cannot happen.
pub fn spawn(grid: &Grid, rng: &mut SimpleRng, keys: &mut KeyAllocator) -> Grid {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        warn!("spawn requested on a full grid; skipping");
        return grid.clone();
    }

    let (row, col) = empty[rng.next_range(empty.len() as u32) as usize];
    let value = rng.spawn_value();
    let tile = Tile::fresh(keys.issue(), value, row, col);
    debug!(id = tile.id(), value, row, col, "spawned tile");

    let mut next = grid.clone();
    next.place(tile);
    next
}

/// True when the board is full and no two orthogonal neighbours are equal.
pub fn is_game_over(grid: &Grid) -> bool {
    if !grid.is_full() {
        return false;
    }

    let size = grid.size();
    for row in 0..size {
        for col in 0..size {
            let Some(tile) = grid.get(row, col) else {
                return false;
            };
            let neighbours = [
                row.checked_sub(1).map(|r| (r, col)),
                (row + 1 < size).then_some((row + 1, col)),
                col.checked_sub(1).map(|c| (row, c)),
                (col + 1 < size).then_some((row, col + 1)),
            ];
            for (r, c) in neighbours.into_iter().flatten() {
                if grid.get(r, c).map(|n| n.value()) == Some(tile.value()) {
                    return false;
                }
            }
        }
    }

    true
}
