//! Core types for the arena-backed split tree.

use std::collections::HashMap;

use folio_common::types::TileId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Children sit side by side; the split divides width.
    Horizontal,
    /// Children stack top to bottom; the split divides height.
    Vertical,
}

/// Index of a node slot in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(super) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeBody {
    Leaf {
        tile_id: TileId,
    },
    Split {
        direction: Direction,
        ratio: f64,
        left: NodeId,
        right: NodeId,
    },
}

/// A tree node. `parent` is a plain index used only for upward traversal;
/// the arena owns every node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(super) parent: Option<NodeId>,
    pub(super) body: NodeBody,
}

impl Node {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn body(&self) -> &NodeBody {
        &self.body
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.body, NodeBody::Leaf { .. })
    }

    pub fn tile_id(&self) -> Option<&TileId> {
        match &self.body {
            NodeBody::Leaf { tile_id } => Some(tile_id),
            NodeBody::Split { .. } => None,
        }
    }
}

/// Binary split tree stored in a slot arena with a free list.
///
/// Leaves are indexed by tile id so lookups never walk the tree.
#[derive(Debug, Clone, Default)]
pub struct TileTree {
    pub(super) slots: Vec<Option<Node>>,
    pub(super) free: Vec<usize>,
    pub(super) root: Option<NodeId>,
    pub(super) leaves: HashMap<TileId, NodeId>,
}

impl TileTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub fn leaf_of(&self, tile_id: &TileId) -> Option<NodeId> {
        self.leaves.get(tile_id).copied()
    }

    pub fn contains(&self, tile_id: &TileId) -> bool {
        self.leaves.contains_key(tile_id)
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// Number of live nodes, leaves and splits together.
    pub fn node_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub(super) fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    pub(super) fn children(&self, id: NodeId) -> Option<(NodeId, NodeId)> {
        match self.node(id)?.body {
            NodeBody::Split { left, right, .. } => Some((left, right)),
            NodeBody::Leaf { .. } => None,
        }
    }

    pub(super) fn alloc(&mut self, node: Node) -> NodeId {
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                NodeId(index)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    pub(super) fn release(&mut self, id: NodeId) -> Option<Node> {
        let node = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        Some(node)
    }
}
