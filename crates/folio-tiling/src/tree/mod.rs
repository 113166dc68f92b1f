mod invariants;
mod operations;
mod traversal;
mod types;

pub use operations::Removal;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use folio_common::types::TileId;
    use folio_common::TilingError;

    fn id(s: &str) -> TileId {
        TileId::from(s)
    }

    fn tree_of(ids: &[&str], direction: Direction) -> TileTree {
        let mut tree = TileTree::new();
        for s in ids {
            tree.insert(id(s), direction, 0.5).unwrap();
        }
        tree
    }

    fn split_of(tree: &TileTree, node: NodeId) -> (Direction, NodeId, NodeId) {
        match tree.node(node).unwrap().body() {
            NodeBody::Split {
                direction,
                left,
                right,
                ..
            } => (*direction, *left, *right),
            NodeBody::Leaf { .. } => panic!("expected split"),
        }
    }

    #[test]
    fn empty_tree() {
        let tree = TileTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
        assert_eq!(tree.insertion_target(), None);
        assert!(tree.collect_tile_ids().is_empty());
        assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn first_insert_becomes_root_leaf() {
        let tree = tree_of(&["a"], Direction::Horizontal);
        let root = tree.root().unwrap();
        assert!(tree.node(root).unwrap().is_leaf());
        assert_eq!(tree.node(root).unwrap().parent(), None);
        assert_eq!(tree.leaf_of(&id("a")), Some(root));
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn second_insert_splits_root_in_place() {
        let tree = tree_of(&["a", "b"], Direction::Vertical);
        let root = tree.root().unwrap();
        let (direction, left, right) = split_of(&tree, root);
        assert_eq!(direction, Direction::Vertical);
        assert_eq!(tree.node(left).unwrap().tile_id(), Some(&id("a")));
        assert_eq!(tree.node(right).unwrap().tile_id(), Some(&id("b")));
        assert_eq!(tree.node(left).unwrap().parent(), Some(root));
        assert_eq!(tree.node_count(), 3);
        assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn insertion_is_left_biased() {
        // Every insert splits the leftmost leaf, so "a" stays first and the
        // newest tile lands right after it.
        let tree = tree_of(&["a", "b", "c", "d"], Direction::Horizontal);
        assert_eq!(tree.collect_tile_ids(), vec![id("a"), id("d"), id("c"), id("b")]);
        assert_eq!(tree.depth(tree.leaf_of(&id("a")).unwrap()), 3);
        assert_eq!(tree.depth(tree.leaf_of(&id("b")).unwrap()), 1);
        assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn split_keeps_ratio() {
        let mut tree = TileTree::new();
        tree.insert(id("a"), Direction::Horizontal, 0.3).unwrap();
        tree.insert(id("b"), Direction::Horizontal, 0.3).unwrap();
        match tree.node(tree.root().unwrap()).unwrap().body() {
            NodeBody::Split { ratio, .. } => assert!((ratio - 0.3).abs() < f64::EPSILON),
            NodeBody::Leaf { .. } => panic!("expected split"),
        }
    }

    #[test]
    fn duplicate_insert_is_rejected_and_tree_unchanged() {
        let mut tree = tree_of(&["a", "b"], Direction::Horizontal);
        let err = tree.insert(id("a"), Direction::Vertical, 0.5).unwrap_err();
        assert_eq!(err, TilingError::DuplicateIdentifier(id("a")));
        assert_eq!(tree.node_count(), 3);
        assert_eq!(tree.collect_tile_ids(), vec![id("a"), id("b")]);
    }

    #[test]
    fn remove_only_leaf_empties_tree() {
        let mut tree = tree_of(&["a"], Direction::Horizontal);
        let removal = tree.remove(&id("a")).unwrap();
        assert_eq!(removal.promoted, None);
        assert!(tree.is_empty());
        assert_eq!(tree.node_count(), 0);
        assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn remove_missing_is_none() {
        let mut tree = tree_of(&["a"], Direction::Horizontal);
        assert_eq!(tree.remove(&id("zzz")), None);
        assert_eq!(tree.leaf_count(), 1);
    }

    #[test]
    fn remove_child_of_root_promotes_sibling_to_root() {
        let mut tree = tree_of(&["a", "b"], Direction::Horizontal);
        let b_leaf = tree.leaf_of(&id("b")).unwrap();
        let removal = tree.remove(&id("a")).unwrap();
        assert_eq!(removal.promoted, Some(b_leaf));
        assert_eq!(tree.root(), Some(b_leaf));
        assert_eq!(tree.node(b_leaf).unwrap().parent(), None);
        assert_eq!(tree.node_count(), 1);
        assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn remove_nested_leaf_reattaches_sibling_to_grandparent() {
        // Tree: H(V(a, c), b)
        let mut tree = TileTree::new();
        tree.insert(id("a"), Direction::Horizontal, 0.5).unwrap();
        tree.insert(id("b"), Direction::Horizontal, 0.5).unwrap();
        tree.insert(id("c"), Direction::Vertical, 0.5).unwrap();
        let root = tree.root().unwrap();
        let c_leaf = tree.leaf_of(&id("c")).unwrap();

        let removal = tree.remove(&id("a")).unwrap();
        assert_eq!(removal.promoted, Some(c_leaf));
        let (direction, left, right) = split_of(&tree, root);
        assert_eq!(direction, Direction::Horizontal);
        assert_eq!(left, c_leaf);
        assert_eq!(tree.node(right).unwrap().tile_id(), Some(&id("b")));
        assert_eq!(tree.node(c_leaf).unwrap().parent(), Some(root));
        assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn remove_right_child_promotes_left_subtree() {
        let mut tree = tree_of(&["a", "b", "c"], Direction::Horizontal);
        // H(H(a, c), b): removing b lifts H(a, c) to the root.
        let inner = tree.node(tree.leaf_of(&id("a")).unwrap()).unwrap().parent();
        let removal = tree.remove(&id("b")).unwrap();
        assert_eq!(removal.promoted, inner);
        assert_eq!(tree.root(), inner);
        assert_eq!(tree.collect_tile_ids(), vec![id("a"), id("c")]);
        assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut tree = tree_of(&["a", "b"], Direction::Horizontal);
        tree.remove(&id("b"));
        assert_eq!(tree.node_count(), 1);
        tree.insert(id("c"), Direction::Horizontal, 0.5).unwrap();
        assert_eq!(tree.slots.len(), 3);
        assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn first_leaf_under_subtree() {
        let tree = tree_of(&["a", "b", "c"], Direction::Horizontal);
        let root = tree.root().unwrap();
        let (_, left, right) = split_of(&tree, root);
        assert_eq!(tree.first_leaf_under(left), tree.leaf_of(&id("a")));
        assert_eq!(tree.first_leaf_under(right), tree.leaf_of(&id("b")));
    }

    #[test]
    fn preorder_visits_parents_before_children() {
        let tree = tree_of(&["a", "b", "c"], Direction::Horizontal);
        let order = tree.preorder();
        assert_eq!(order.len(), 5);
        assert_eq!(order[0], tree.root().unwrap());
        assert!(!tree.node(order[0]).unwrap().is_leaf());
    }

    #[test]
    fn clear_resets() {
        let mut tree = tree_of(&["a", "b", "c"], Direction::Vertical);
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.leaf_count(), 0);
        assert_eq!(tree.node_count(), 0);
        assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn invariants_catch_broken_back_reference() {
        let mut tree = tree_of(&["a", "b"], Direction::Horizontal);
        let a_leaf = tree.leaf_of(&id("a")).unwrap();
        tree.node_mut(a_leaf).unwrap().parent = None;
        let err = tree.check_invariants().unwrap_err();
        assert!(matches!(err, TilingError::Corrupted(msg) if msg.contains("point back")));
    }

    #[test]
    fn invariants_catch_stale_index_entry() {
        let mut tree = tree_of(&["a"], Direction::Horizontal);
        tree.leaves.insert(id("ghost"), NodeId(7));
        assert!(tree.check_invariants().is_err());
    }

    #[test]
    fn invariants_catch_orphaned_node() {
        let mut tree = tree_of(&["a"], Direction::Horizontal);
        tree.alloc(Node {
            parent: None,
            body: NodeBody::Leaf { tile_id: id("orphan") },
        });
        let err = tree.check_invariants().unwrap_err();
        assert!(matches!(err, TilingError::Corrupted(msg) if msg.contains("live")));
    }
}
