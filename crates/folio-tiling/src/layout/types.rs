//! Layout engine types.

use folio_common::types::{Rect, TileId};
use serde::{Deserialize, Serialize};

use crate::tile::Tile;

/// Computes leaf rectangles from a split tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEngine {
    /// Spacing between neighboring tiles. Each leaf is inset by half of it
    /// on every side.
    pub gap: f64,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self { gap: 8.0 }
    }
}

/// Final placement of one tile. `tile` is a snapshot taken when the layout
/// was computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayout {
    pub tile_id: TileId,
    pub rect: Rect,
    pub tile: Tile,
}
