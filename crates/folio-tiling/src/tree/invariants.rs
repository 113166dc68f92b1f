//! Structural consistency check for the split tree.

use folio_common::TilingError;

use super::{NodeBody, TileTree};

impl TileTree {
    /// Verify the arena describes a well-formed binary tree.
    ///
    /// A failure here means the tree code itself is broken; callers should
    /// treat it as a bug, not a recoverable condition.
    pub fn check_invariants(&self) -> Result<(), TilingError> {
        let corrupted = |msg: String| Err(TilingError::Corrupted(msg));

        let Some(root) = self.root else {
            if !self.leaves.is_empty() {
                return corrupted(format!("empty tree indexes {} leaves", self.leaves.len()));
            }
            if self.node_count() != 0 {
                return corrupted(format!("empty tree holds {} live nodes", self.node_count()));
            }
            return Ok(());
        };

        match self.node(root) {
            None => return corrupted(format!("root {} is a free slot", root.index())),
            Some(node) if node.parent.is_some() => {
                return corrupted(format!("root {} has a parent", root.index()))
            }
            Some(_) => {}
        }

        let mut visited = vec![false; self.slots.len()];
        let mut reached = 0usize;
        let mut leaves = 0usize;
        let mut stack = vec![root];

        while let Some(id) = stack.pop() {
            if std::mem::replace(&mut visited[id.index()], true) {
                return corrupted(format!("node {} is reachable twice", id.index()));
            }
            reached += 1;

            let Some(node) = self.node(id) else {
                return corrupted(format!("node {} is a free slot", id.index()));
            };

            match &node.body {
                NodeBody::Leaf { tile_id } => {
                    leaves += 1;
                    if self.leaves.get(tile_id) != Some(&id) {
                        return corrupted(format!("leaf for {tile_id} is not indexed"));
                    }
                }
                NodeBody::Split {
                    ratio, left, right, ..
                } => {
                    if left == right {
                        return corrupted(format!("split {} has one child", id.index()));
                    }
                    if !(*ratio > 0.0 && *ratio < 1.0) {
                        return corrupted(format!("split {} has ratio {ratio}", id.index()));
                    }
                    for child in [*left, *right] {
                        let parent = self.node(child).and_then(|c| c.parent);
                        if parent != Some(id) {
                            return corrupted(format!(
                                "child {} does not point back to {}",
                                child.index(),
                                id.index()
                            ));
                        }
                        stack.push(child);
                    }
                }
            }
        }

        if leaves != self.leaves.len() {
            return corrupted(format!(
                "{} leaves reachable but {} indexed",
                leaves,
                self.leaves.len()
            ));
        }
        if reached != self.node_count() {
            return corrupted(format!(
                "{} nodes reachable but {} live",
                reached,
                self.node_count()
            ));
        }
        Ok(())
    }
}
