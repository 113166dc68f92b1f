//! Core types and constructors for WindowController.

use folio_common::types::{Rect, TileId};
use folio_config::{FocusSuccession, TilingConfig};

use crate::engine::TilingEngine;
use crate::layout::TileLayout;
use crate::tile::Tile;

/// Drives one [`TilingEngine`] on behalf of the UI.
///
/// Every mutation recomputes the layout list before returning, so
/// [`layouts`](Self::layouts) never reflects a half-applied change.
pub struct WindowController {
    pub(super) engine: TilingEngine,
    /// Container the layout list was computed against.
    pub(super) container: Rect,
    /// Layout list as of the last mutation or resize.
    pub(super) layouts: Vec<TileLayout>,
    pub(super) succession: FocusSuccession,
}

impl WindowController {
    pub fn new(config: TilingConfig, container: Rect) -> Self {
        let succession = config.focus_succession;
        Self::with_engine(TilingEngine::new(config), container, succession)
    }

    /// Wrap an existing engine.
    pub fn with_engine(engine: TilingEngine, container: Rect, succession: FocusSuccession) -> Self {
        let layouts = engine.calculate_layouts(container);
        Self {
            engine,
            container,
            layouts,
            succession,
        }
    }

    // -- Accessors --

    pub fn engine(&self) -> &TilingEngine {
        &self.engine
    }

    pub fn layouts(&self) -> &[TileLayout] {
        &self.layouts
    }

    pub fn container(&self) -> Rect {
        self.container
    }

    pub fn tiles(&self) -> Vec<&Tile> {
        self.engine.get_tiles()
    }

    pub fn tile_count(&self) -> usize {
        self.engine.len()
    }

    pub fn focused_id(&self) -> Option<&TileId> {
        self.engine.focused_tile().map(|t| &t.id)
    }

    pub(super) fn refresh(&mut self) {
        self.layouts = self.engine.calculate_layouts(self.container);
    }
}
