//! Layout computation for TilingEngine.

use folio_common::types::Rect;

use crate::layout::TileLayout;

use super::TilingEngine;

impl TilingEngine {
    /// Flat pre-order list of tile placements inside `container`.
    ///
    /// Pure with respect to engine state: repeated calls without a mutation
    /// in between return identical results.
    pub fn calculate_layouts(&self, container: Rect) -> Vec<TileLayout> {
        self.layout_engine
            .compute(&self.tree, container)
            .into_iter()
            .filter_map(|(tile_id, rect)| {
                let tile = self.tiles.get(&tile_id)?.clone();
                Some(TileLayout {
                    tile_id,
                    rect,
                    tile,
                })
            })
            .collect()
    }
}
