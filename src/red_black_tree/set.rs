use crate::error::InvariantViolation;
use crate::ordered_set::OrderedSet;
use crate::red_black_tree::node::Node;
use crate::red_black_tree::tree;

/// An ordered set of integers implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that keeps its root black, never lets
/// a red node have a red child, and gives every path from a node to an empty position the same
/// number of black nodes. Insertions restore all three properties. Removals repair the color of
/// the removed node's surroundings locally and may leave black heights uneven, which
/// [`validate`](OrderedSet::validate) reports.
///
/// # Examples
/// ```
/// use balanced_trees::{Order, OrderedSet, RedBlackSet};
///
/// let set = [20, -10, 30, 40, 60, 25, 50]
///     .iter()
///     .fold(RedBlackSet::new(), |set, &value| set.insert(value));
/// assert!(set.find(30));
/// assert!(!set.find(45));
///
/// let set = set.remove(-10).remove(40);
/// assert_eq!(
///     set.dump(Order::Ascending).collect::<Vec<i32>>(),
///     vec![20, 25, 30, 50, 60],
/// );
/// ```
pub struct RedBlackSet {
    tree: tree::Tree,
}

impl RedBlackSet {
    /// Constructs a new, empty `RedBlackSet`.
    ///
    /// # Examples
    /// ```
    /// use balanced_trees::RedBlackSet;
    ///
    /// let set = RedBlackSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> Self {
        RedBlackSet { tree: None }
    }
}

impl OrderedSet for RedBlackSet {
    type Node = Node;

    fn root(&self) -> &tree::Tree {
        &self.tree
    }

    fn into_root(self) -> tree::Tree {
        self.tree
    }

    fn insert(self, value: i32) -> Self {
        RedBlackSet {
            tree: tree::insert(self.tree, value),
        }
    }

    fn remove(self, value: i32) -> Self {
        RedBlackSet {
            tree: tree::remove(self.tree, value),
        }
    }

    fn validate(&self) -> Result<(), InvariantViolation> {
        tree::validate(&self.tree)
    }

    fn find(&self, value: i32) -> bool {
        tree::find(&self.tree, value)
    }
}

impl_set_traits!(RedBlackSet);
