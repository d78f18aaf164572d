use crate::binary_tree;
use crate::bst::node::Node;
use crate::bst::tree;
use crate::error::InvariantViolation;
use crate::ordered_set::OrderedSet;

/// An ordered set of integers implemented using an unbalanced binary search tree.
///
/// # Examples
/// ```
/// use balanced_trees::{BstSet, OrderedSet};
///
/// let set = BstSet::new().insert(1).insert(2).insert(3);
/// assert_eq!(set.height(), 2);
/// assert_eq!(set.node_count(), 3);
/// ```
///
/// Sorted input degenerates the tree into a chain, so every operation on this set, dropping it
/// included, walks the tree without recursion.
pub struct BstSet {
    tree: tree::Tree,
}

impl BstSet {
    /// Constructs a new, empty `BstSet`.
    pub fn new() -> Self {
        BstSet { tree: None }
    }
}

impl OrderedSet for BstSet {
    type Node = Node;

    fn root(&self) -> &tree::Tree {
        &self.tree
    }

    fn into_root(mut self) -> tree::Tree {
        self.tree.take()
    }

    fn insert(mut self, value: i32) -> Self {
        BstSet {
            tree: tree::insert(self.tree.take(), value),
        }
    }

    fn remove(mut self, value: i32) -> Self {
        BstSet {
            tree: tree::remove(self.tree.take(), value),
        }
    }

    fn validate(&self) -> Result<(), InvariantViolation> {
        tree::validate(&self.tree)
    }

    fn find(&self, value: i32) -> bool {
        tree::find(&self.tree, value)
    }
}

impl Drop for BstSet {
    fn drop(&mut self) {
        binary_tree::free(self.tree.take());
    }
}

impl_set_traits!(BstSet);
