//! Core types and constructors for TilingEngine.

use std::collections::HashMap;

use folio_common::types::TileId;
use folio_config::TilingConfig;

use crate::layout::LayoutEngine;
use crate::strategy::{self, SplitStrategy};
use crate::tile::Tile;
use crate::tree::TileTree;

/// Owns the split tree and the tile registry for one workspace.
///
/// Single-owner and synchronous: every operation runs to completion and
/// leaves the tree consistent before returning.
pub struct TilingEngine {
    /// The split tree; leaves name tiles by id.
    pub(super) tree: TileTree,
    /// Registry of all tiles by id.
    pub(super) tiles: HashMap<TileId, Tile>,
    /// Tile ids in insertion order.
    pub(super) order: Vec<TileId>,
    pub(super) config: TilingConfig,
    pub(super) layout_engine: LayoutEngine,
    pub(super) strategy: Box<dyn SplitStrategy>,
}

/// A tile taken out of the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedTile {
    pub tile: Tile,
    /// First leaf (pre-order) of the sibling subtree that inherited the
    /// removed tile's region. `None` when the engine is now empty.
    pub successor: Option<TileId>,
}

impl TilingEngine {
    /// Create an empty engine using the split strategy the config names.
    pub fn new(config: TilingConfig) -> Self {
        let strategy = strategy::from_policy(config.split_policy);
        Self::with_strategy(config, strategy)
    }

    /// Create an empty engine with a caller-supplied split strategy.
    pub fn with_strategy(mut config: TilingConfig, strategy: Box<dyn SplitStrategy>) -> Self {
        if !(config.default_split_ratio > 0.0 && config.default_split_ratio < 1.0) {
            tracing::warn!(
                "default_split_ratio {} outside (0, 1), using 0.5",
                config.default_split_ratio
            );
            config.default_split_ratio = 0.5;
        }
        Self {
            tree: TileTree::new(),
            tiles: HashMap::new(),
            order: Vec::new(),
            layout_engine: LayoutEngine { gap: config.gap },
            config,
            strategy,
        }
    }

    // -- Accessors --

    pub fn config(&self) -> &TilingConfig {
        &self.config
    }

    pub fn tree(&self) -> &TileTree {
        &self.tree
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn contains(&self, id: &TileId) -> bool {
        self.tiles.contains_key(id)
    }

    pub fn tile(&self, id: &TileId) -> Option<&Tile> {
        self.tiles.get(id)
    }

    /// All tiles in insertion order.
    pub fn get_tiles(&self) -> Vec<&Tile> {
        self.order.iter().filter_map(|id| self.tiles.get(id)).collect()
    }

    /// Tile ids in insertion order.
    pub fn tile_ids(&self) -> &[TileId] {
        &self.order
    }

    /// Tile ids in tree (visual) order.
    pub fn ordered_tile_ids(&self) -> Vec<TileId> {
        self.tree.collect_tile_ids()
    }

    pub fn focused_tile(&self) -> Option<&Tile> {
        self.get_tiles().into_iter().find(|t| t.focused)
    }

    pub fn gap(&self) -> f64 {
        self.layout_engine.gap
    }

    /// Update the gap between tiles. Takes effect on the next layout.
    pub fn set_gap(&mut self, gap: f64) {
        self.config.gap = gap;
        self.layout_engine.gap = gap;
    }
}

impl Default for TilingEngine {
    fn default() -> Self {
        Self::new(TilingConfig::default())
    }
}
