//! Add, remove, focus, and clear operations on the TilingEngine.

use folio_common::types::TileId;
use folio_common::TilingError;
use folio_config::MissingFocusPolicy;

use crate::strategy::SplitContext;
use crate::tile::Tile;
use crate::tree::Direction;

use super::{RemovedTile, TilingEngine};

impl TilingEngine {
    /// Insert a tile, letting the split strategy pick the orientation.
    pub fn add_tile(&mut self, tile: Tile) -> Result<(), TilingError> {
        if self.tiles.contains_key(&tile.id) {
            return Err(TilingError::DuplicateIdentifier(tile.id));
        }
        let direction = self.choose_direction(&tile.id);
        self.insert(tile, direction)
    }

    /// Insert a tile with an explicit split orientation.
    pub fn add_tile_split(&mut self, tile: Tile, direction: Direction) -> Result<(), TilingError> {
        if self.tiles.contains_key(&tile.id) {
            return Err(TilingError::DuplicateIdentifier(tile.id));
        }
        self.insert(tile, direction)
    }

    fn choose_direction(&mut self, incoming: &TileId) -> Direction {
        let Some(target) = self.tree.insertion_target() else {
            // Root insert: no split happens.
            return Direction::Horizontal;
        };
        let Some(target_tile) = self.tree.node(target).and_then(|n| n.tile_id()) else {
            return Direction::Horizontal;
        };
        let ctx = SplitContext {
            target: target_tile,
            incoming,
            depth: self.tree.depth(target),
            leaf_count: self.tree.leaf_count(),
        };
        self.strategy.choose(&ctx)
    }

    fn insert(&mut self, tile: Tile, direction: Direction) -> Result<(), TilingError> {
        self.tree
            .insert(tile.id.clone(), direction, self.config.default_split_ratio)?;
        self.order.push(tile.id.clone());
        self.tiles.insert(tile.id.clone(), tile);
        self.debug_check();
        Ok(())
    }

    /// Remove a tile. Its parent split collapses and the sibling subtree
    /// takes over the whole region.
    ///
    /// Unknown ids return `NotFound` and leave the engine untouched.
    pub fn remove_tile(&mut self, id: &TileId) -> Result<RemovedTile, TilingError> {
        let tile = self
            .tiles
            .remove(id)
            .ok_or_else(|| TilingError::NotFound(id.clone()))?;
        self.order.retain(|t| t != id);

        let removal = self.tree.remove(id);
        debug_assert!(removal.is_some(), "registered tile {id} had no leaf");
        let successor = removal
            .and_then(|r| r.promoted)
            .and_then(|node| self.tree.first_leaf_under(node))
            .and_then(|leaf| self.tree.node(leaf)?.tile_id().cloned());

        self.debug_check();
        Ok(RemovedTile { tile, successor })
    }

    /// Focus one tile and unfocus every other.
    ///
    /// For an unknown id the result depends on `missing_focus`: `Clear`
    /// unfocuses everything, `Ignore` keeps the current focus. Both return
    /// `NotFound`.
    pub fn focus_tile(&mut self, id: &TileId) -> Result<(), TilingError> {
        if !self.tiles.contains_key(id) {
            if self.config.missing_focus == MissingFocusPolicy::Clear {
                for tile in self.tiles.values_mut() {
                    tile.focused = false;
                }
            }
            return Err(TilingError::NotFound(id.clone()));
        }
        for (tile_id, tile) in self.tiles.iter_mut() {
            tile.focused = tile_id == id;
        }
        Ok(())
    }

    /// Reset to the empty state.
    pub fn clear(&mut self) {
        self.tree.clear();
        self.tiles.clear();
        self.order.clear();
    }

    fn debug_check(&self) {
        debug_assert_eq!(self.tree.check_invariants(), Ok(()));
        debug_assert_eq!(self.tree.leaf_count(), self.tiles.len());
        debug_assert_eq!(self.tree.is_empty(), self.tiles.is_empty());
    }
}
