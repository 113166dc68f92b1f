//! Mutating operations on the split tree: insert, remove, clear.

use folio_common::types::TileId;
use folio_common::TilingError;

use super::{Direction, Node, NodeBody, NodeId, TileTree};

/// Outcome of removing a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removal {
    /// The sibling subtree that took over the collapsed parent's slot, or
    /// `None` when the removed leaf was the root.
    pub promoted: Option<NodeId>,
}

impl TileTree {
    /// Insert a tile.
    ///
    /// On an empty tree the tile becomes the root leaf and `direction` is
    /// unused. Otherwise the first leaf in pre-order is split in place: its
    /// tile moves to a new `left` leaf and the incoming tile becomes the
    /// `right` leaf.
    pub fn insert(
        &mut self,
        tile_id: TileId,
        direction: Direction,
        ratio: f64,
    ) -> Result<NodeId, TilingError> {
        if self.leaves.contains_key(&tile_id) {
            return Err(TilingError::DuplicateIdentifier(tile_id));
        }

        let Some(target) = self.insertion_target() else {
            let id = self.alloc(Node {
                parent: None,
                body: NodeBody::Leaf {
                    tile_id: tile_id.clone(),
                },
            });
            self.root = Some(id);
            self.leaves.insert(tile_id, id);
            return Ok(id);
        };

        let existing = match self.node(target).map(|n| &n.body) {
            Some(NodeBody::Leaf { tile_id: existing }) => existing.clone(),
            _ => unreachable!("insertion target is always a leaf"),
        };

        let left = self.alloc(Node {
            parent: Some(target),
            body: NodeBody::Leaf {
                tile_id: existing.clone(),
            },
        });
        let right = self.alloc(Node {
            parent: Some(target),
            body: NodeBody::Leaf {
                tile_id: tile_id.clone(),
            },
        });
        if let Some(node) = self.node_mut(target) {
            node.body = NodeBody::Split {
                direction,
                ratio,
                left,
                right,
            };
        }

        self.leaves.insert(existing, left);
        self.leaves.insert(tile_id, right);
        Ok(right)
    }

    /// Remove a tile's leaf and collapse its parent split, handing the
    /// parent's region to the sibling subtree. Returns `None` if the tile is
    /// not in the tree.
    pub fn remove(&mut self, tile_id: &TileId) -> Option<Removal> {
        let leaf = self.leaves.remove(tile_id)?;
        let parent = self.release(leaf).and_then(|n| n.parent);

        let Some(parent) = parent else {
            self.root = None;
            return Some(Removal { promoted: None });
        };

        let Some((left, right)) = self.children(parent) else {
            unreachable!("parent of a leaf is always a split");
        };
        let sibling = if left == leaf { right } else { left };
        let grandparent = self.release(parent).and_then(|n| n.parent);

        if let Some(node) = self.node_mut(sibling) {
            node.parent = grandparent;
        }

        match grandparent {
            Some(grandparent) => {
                if let Some(Node {
                    body: NodeBody::Split { left, right, .. },
                    ..
                }) = self.node_mut(grandparent)
                {
                    if *left == parent {
                        *left = sibling;
                    } else if *right == parent {
                        *right = sibling;
                    }
                }
            }
            None => self.root = Some(sibling),
        }

        Some(Removal {
            promoted: Some(sibling),
        })
    }

    /// Drop every node.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.root = None;
        self.leaves.clear();
    }
}
