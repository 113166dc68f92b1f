//! Spawn, close, focus, and resize handling for WindowController.

use folio_common::types::{Rect, TileId, TileKind};
use folio_common::{new_tile_id, TilingError};
use folio_config::FocusSuccession;
use tracing::debug;

use crate::tile::Tile;

use super::WindowController;

impl WindowController {
    /// Create a focused tile of `kind` and return its id.
    pub fn spawn_tile(
        &mut self,
        kind: TileKind,
        data: Option<serde_json::Value>,
    ) -> Result<TileId, TilingError> {
        let id = new_tile_id(kind);
        let tile = Tile::new(id.clone(), kind)
            .with_data(data.unwrap_or_default())
            .with_focus(true);

        self.engine.add_tile(tile)?;
        self.engine.focus_tile(&id)?;
        self.refresh();
        debug!(tile = %id, %kind, "spawned tile");
        Ok(id)
    }

    /// Close a tile. If it held focus, focus passes on according to the
    /// configured succession rule.
    pub fn close_tile(&mut self, id: &TileId) -> Result<(), TilingError> {
        let was_focused = self.engine.tile(id).is_some_and(|t| t.focused);

        let removed = self.engine.remove_tile(id).inspect_err(|e| {
            debug!("close ignored: {e}");
        })?;

        if was_focused {
            let next = match self.succession {
                FocusSuccession::Last => self.engine.tile_ids().last().cloned(),
                FocusSuccession::Sibling => removed.successor,
            };
            if let Some(next) = next {
                self.engine.focus_tile(&next)?;
            }
        }

        self.refresh();
        debug!(tile = %id, remaining = self.engine.len(), "closed tile");
        Ok(())
    }

    /// Focus a tile. The layout list is refreshed even when the id is
    /// unknown, since the engine may have cleared focus.
    pub fn focus_tile(&mut self, id: &TileId) -> Result<(), TilingError> {
        let result = self.engine.focus_tile(id);
        self.refresh();
        if let Err(e) = &result {
            debug!("focus miss: {e}");
        }
        result
    }

    /// React to a container size change. Never touches the tree.
    pub fn on_resize(&mut self, container: Rect) {
        self.container = container;
        self.refresh();
    }

    /// Close every tile.
    pub fn clear(&mut self) {
        self.engine.clear();
        self.refresh();
    }
}
