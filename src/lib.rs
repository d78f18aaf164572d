//! Classic search structures over plain integers: an unbalanced binary search tree, an AVL tree
//! and a red-black tree behind one [`OrderedSet`] interface, plus a binary max-heap and a
//! priority queue built on top of the sets.
//!
//! Every tree is a `Option<Box<Node>>` handle owned by its caller. Insertions and removals consume
//! the handle and return the root to use afterwards, so a rotation at the top of the tree is
//! never observed through a stale reference.
//!
//! # Examples
//! ```
//! use balanced_trees::{AvlSet, Order, OrderedSet};
//!
//! let set = [20, -10, 30, 40]
//!     .iter()
//!     .fold(AvlSet::new(), |set, &value| set.insert(value));
//! assert!(set.find(30));
//! assert!(!set.find(60));
//!
//! let set = set.insert(60).insert(25).insert(50);
//! assert_eq!(
//!     set.dump(Order::Ascending).collect::<Vec<i32>>(),
//!     vec![-10, 20, 25, 30, 40, 50, 60],
//! );
//!
//! let set = set.remove(-10).remove(40);
//! assert_eq!(
//!     set.dump(Order::Ascending).collect::<Vec<i32>>(),
//!     vec![20, 25, 30, 50, 60],
//! );
//! ```

#[macro_use]
mod ordered_set;

pub mod avl_tree;
pub mod binary_tree;
pub mod bst;
pub mod error;
pub mod heap;
pub mod priority_queue;
pub mod red_black_tree;
pub mod script;

pub use crate::avl_tree::AvlSet;
pub use crate::binary_tree::Order;
pub use crate::bst::BstSet;
pub use crate::error::{InvariantViolation, ScriptError};
pub use crate::ordered_set::OrderedSet;
pub use crate::red_black_tree::RedBlackSet;
