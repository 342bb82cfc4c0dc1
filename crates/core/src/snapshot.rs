use serde::Serialize;

use crate::tile::TileId;

/// Render-facing view of one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileView {
    pub id: TileId,
    pub value: u64,
    pub row: usize,
    pub col: usize,
    pub just_spawned: bool,
    pub just_merged: bool,
}

/// Render-facing view of a whole game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub size: usize,
    pub tiles: Vec<TileView>,
    pub score: u64,
    pub is_over: bool,
    pub moves: u32,
    pub best_tile: u64,
}

impl GameSnapshot {
    /// Tile at `(row, col)`, if any.
    pub fn tile_at(&self, row: usize, col: usize) -> Option<&TileView> {
        self.tiles.iter().find(|t| t.row == row && t.col == col)
    }

    pub fn playable(&self) -> bool {
        !self.is_over
    }
}
