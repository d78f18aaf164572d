use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::error::InvariantViolation;
use crate::ordered_set::OrderedSet;

/// An ordered set of integers implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one.
///
/// # Examples
/// ```
/// use balanced_trees::{AvlSet, Order, OrderedSet};
///
/// let set = AvlSet::new();
/// let set = set.insert(0);
/// let set = set.insert(3);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.min_value(), 0);
/// assert!(set.find(3));
///
/// let set = set.remove(0);
/// assert_eq!(set.dump(Order::Descending).collect::<Vec<i32>>(), vec![3]);
/// ```
pub struct AvlSet {
    tree: tree::Tree,
}

impl AvlSet {
    /// Constructs a new, empty `AvlSet`.
    ///
    /// # Examples
    /// ```
    /// use balanced_trees::AvlSet;
    ///
    /// let set = AvlSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> Self {
        AvlSet { tree: None }
    }
}

impl OrderedSet for AvlSet {
    type Node = Node;

    fn root(&self) -> &tree::Tree {
        &self.tree
    }

    fn into_root(self) -> tree::Tree {
        self.tree
    }

    fn insert(self, value: i32) -> Self {
        AvlSet {
            tree: tree::insert(self.tree, value),
        }
    }

    fn remove(self, value: i32) -> Self {
        AvlSet {
            tree: tree::remove(self.tree, value),
        }
    }

    fn validate(&self) -> Result<(), InvariantViolation> {
        tree::validate(&self.tree)
    }

    fn find(&self, value: i32) -> bool {
        tree::find(&self.tree, value)
    }

    fn height(&self) -> i32 {
        tree::height(&self.tree)
    }
}

impl_set_traits!(AvlSet);
