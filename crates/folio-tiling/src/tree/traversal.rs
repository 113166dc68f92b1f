//! Read-only traversal of the split tree.

use folio_common::types::TileId;

use super::{NodeBody, NodeId, TileTree};

impl TileTree {
    /// The leaf a new tile will split: the first leaf in pre-order
    /// (left before right). This always descends the left spine.
    pub fn insertion_target(&self) -> Option<NodeId> {
        self.root.and_then(|root| self.first_leaf_under(root))
    }

    /// First leaf in pre-order within the subtree rooted at `node`.
    pub fn first_leaf_under(&self, node: NodeId) -> Option<NodeId> {
        let mut current = node;
        loop {
            match self.node(current)?.body {
                NodeBody::Leaf { .. } => return Some(current),
                NodeBody::Split { left, .. } => current = left,
            }
        }
    }

    /// Number of edges between `node` and the root.
    pub fn depth(&self, node: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.node(node).and_then(|n| n.parent);
        while let Some(parent) = current {
            depth += 1;
            current = self.node(parent).and_then(|n| n.parent);
        }
        depth
    }

    /// All node ids in pre-order.
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.node_count());
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some((left, right)) = self.children(id) {
                stack.push(right);
                stack.push(left);
            }
        }
        out
    }

    /// Tile ids of every leaf in pre-order (matches visual reading order).
    pub fn collect_tile_ids(&self) -> Vec<TileId> {
        self.preorder()
            .into_iter()
            .filter_map(|id| self.node(id)?.tile_id().cloned())
            .collect()
    }
}
