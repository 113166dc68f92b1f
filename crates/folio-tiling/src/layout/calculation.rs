//! Layout calculation: recursive tree-to-rect computation.

use folio_common::types::{Rect, TileId};

use crate::tree::{Direction, NodeBody, NodeId, TileTree};

use super::LayoutEngine;

impl LayoutEngine {
    /// Rectangles for every leaf in pre-order. Splits partition the full
    /// rectangle; only leaves apply the gap inset.
    pub fn compute(&self, tree: &TileTree, bounds: Rect) -> Vec<(TileId, Rect)> {
        let mut results = Vec::with_capacity(tree.leaf_count());
        if let Some(root) = tree.root() {
            self.layout_node(tree, root, bounds, &mut results);
        }
        results
    }

    fn layout_node(
        &self,
        tree: &TileTree,
        id: NodeId,
        bounds: Rect,
        out: &mut Vec<(TileId, Rect)>,
    ) {
        let Some(node) = tree.node(id) else {
            return;
        };
        match node.body() {
            NodeBody::Leaf { tile_id } => {
                out.push((tile_id.clone(), inset(bounds, self.gap)));
            }
            NodeBody::Split {
                direction,
                ratio,
                left,
                right,
            } => {
                let (a, b) = partition(bounds, *direction, *ratio);
                self.layout_node(tree, *left, a, out);
                self.layout_node(tree, *right, b, out);
            }
        }
    }
}

fn partition(bounds: Rect, direction: Direction, ratio: f64) -> (Rect, Rect) {
    match direction {
        Direction::Horizontal => {
            let w1 = bounds.width * ratio;
            (
                Rect {
                    width: w1,
                    ..bounds
                },
                Rect {
                    x: bounds.x + w1,
                    width: bounds.width * (1.0 - ratio),
                    ..bounds
                },
            )
        }
        Direction::Vertical => {
            let h1 = bounds.height * ratio;
            (
                Rect {
                    height: h1,
                    ..bounds
                },
                Rect {
                    y: bounds.y + h1,
                    height: bounds.height * (1.0 - ratio),
                    ..bounds
                },
            )
        }
    }
}

/// Shrink by `gap / 2` on every side. Width and height bottom out at zero.
pub(super) fn inset(bounds: Rect, gap: f64) -> Rect {
    let half = gap / 2.0;
    Rect {
        x: bounds.x + half,
        y: bounds.y + half,
        width: (bounds.width - gap).max(0.0),
        height: (bounds.height - gap).max(0.0),
    }
}
