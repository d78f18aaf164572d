use crate::binary_tree::{self, BinaryNode, Dump, Order, Tree};
use crate::error::InvariantViolation;

/// The operations every tree variant offers, so that callers can swap one variant for another.
///
/// Mutating operations take the set by value and hand back the set to use from then on, mirroring
/// how the underlying trees thread their root through every insertion and removal.
///
/// # Examples
/// ```
/// use balanced_trees::{AvlSet, Order, OrderedSet, RedBlackSet};
///
/// fn fill<S: OrderedSet>(set: S) -> S {
///     [20, -10, 30, 40].iter().fold(set, |set, &value| set.insert(value))
/// }
///
/// let avl = fill(AvlSet::new());
/// let red_black = fill(RedBlackSet::new());
/// assert!(avl.dump(Order::Ascending).eq(red_black.dump(Order::Ascending)));
/// ```
pub trait OrderedSet: Default + Sized {
    type Node: BinaryNode;

    /// Borrows the root of the underlying tree.
    fn root(&self) -> &Tree<Self::Node>;

    /// Consumes the set and returns the root of the underlying tree.
    fn into_root(self) -> Tree<Self::Node>;

    /// Inserts a value. Values that are already present are ignored.
    fn insert(self, value: i32) -> Self;

    /// Removes a value. Removing an absent value leaves the set unchanged.
    fn remove(self, value: i32) -> Self;

    /// Checks the ordering invariant and the variant's balancing invariants.
    fn validate(&self) -> Result<(), InvariantViolation>;

    fn find(&self, value: i32) -> bool {
        binary_tree::contains(self.root(), value)
    }

    /// Height of the underlying tree, `-1` if the set is empty.
    fn height(&self) -> i32 {
        binary_tree::height(self.root())
    }

    fn node_count(&self) -> usize {
        binary_tree::node_count(self.root())
    }

    /// Returns the smallest value.
    ///
    /// # Panics
    /// Panics if the set is empty.
    fn min_value(&self) -> i32 {
        binary_tree::min_value(self.root())
    }

    /// Returns the values in ascending or descending order.
    fn dump(&self, order: Order) -> Dump<'_, Self::Node> {
        binary_tree::dump(self.root(), order)
    }

    /// Releases every node of the set.
    fn free(self) {
        binary_tree::free(self.into_root());
    }
}

/// Implements the conversion, comparison and serialization traits shared by every set.
macro_rules! impl_set_traits {
    ($type_name:ident) => {
        impl $type_name {
            /// Returns the number of values in the set.
            pub fn len(&self) -> usize {
                $crate::ordered_set::OrderedSet::node_count(self)
            }

            /// Returns `true` if the set holds no values.
            pub fn is_empty(&self) -> bool {
                self.tree.is_none()
            }

            /// Checks if a value exists in the set.
            pub fn contains(&self, value: i32) -> bool {
                $crate::binary_tree::contains(&self.tree, value)
            }

            /// Returns an iterator over the set in ascending order.
            pub fn iter(&self) -> $crate::binary_tree::Dump<'_, Node> {
                $crate::binary_tree::dump(&self.tree, $crate::binary_tree::Order::Ascending)
            }
        }

        impl Default for $type_name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<'a> IntoIterator for &'a $type_name {
            type Item = i32;
            type IntoIter = $crate::binary_tree::Dump<'a, Node>;

            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }

        impl std::iter::FromIterator<i32> for $type_name {
            fn from_iter<I>(iter: I) -> Self
            where
                I: IntoIterator<Item = i32>,
            {
                iter.into_iter().fold(
                    Self::new(),
                    $crate::ordered_set::OrderedSet::insert,
                )
            }
        }

        impl PartialEq for $type_name {
            fn eq(&self, other: &$type_name) -> bool {
                self.iter().eq(other.iter())
            }
        }

        impl Eq for $type_name {}

        impl std::fmt::Debug for $type_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_set().entries(self.iter()).finish()
            }
        }

        impl serde::Serialize for $type_name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_seq(self.iter())
            }
        }

        impl<'de> serde::Deserialize<'de> for $type_name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let values: Vec<i32> = serde::Deserialize::deserialize(deserializer)?;
                Ok(values.into_iter().collect())
            }
        }
    };
}
