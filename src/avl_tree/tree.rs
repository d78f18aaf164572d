use crate::avl_tree::node::Node;
use crate::binary_tree::{self, rotate_left, rotate_right};
use crate::error::InvariantViolation;
use log::trace;
use std::cmp::Ordering;

pub type Tree = binary_tree::Tree<Node>;

/// Cached height of the tree, `-1` if it is empty.
pub fn height(tree: &Tree) -> i32 {
    match tree {
        None => -1,
        Some(ref node) => node.height,
    }
}

// Rebalances a node on the insert path. The side of the imbalance that received `value` decides
// between a single and a double rotation.
fn balance_insert(mut node: Box<Node>, value: i32) -> Box<Node> {
    let balance = node.balance();
    if balance > 1 {
        if let Some(child) = node.left.take() {
            if value > child.value {
                trace!("avl left-right rotation at {}", node.value);
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        rotate_right(node)
    } else if balance < -1 {
        if let Some(child) = node.right.take() {
            if value < child.value {
                trace!("avl right-left rotation at {}", node.value);
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        rotate_left(node)
    } else {
        node
    }
}

// Rebalances a node on the remove path, where only the grandchildren's heights are known.
fn balance_remove(mut node: Box<Node>) -> Box<Node> {
    let balance = node.balance();
    if balance > 1 {
        if let Some(child) = node.left.take() {
            if height(&child.left) >= height(&child.right) {
                node.left = Some(child);
            } else {
                trace!("avl left-right rotation at {}", node.value);
                node.left = Some(rotate_left(child));
            }
        }
        rotate_right(node)
    } else if balance < -1 {
        if let Some(child) = node.right.take() {
            if height(&child.right) >= height(&child.left) {
                node.right = Some(child);
            } else {
                trace!("avl right-left rotation at {}", node.value);
                node.right = Some(rotate_right(child));
            }
        }
        rotate_left(node)
    } else {
        node
    }
}

/// Inserts `value` and returns the new root. Inserting a value that is already present returns
/// the tree unchanged.
pub fn insert(tree: Tree, value: i32) -> Tree {
    let mut node = match tree {
        Some(node) => node,
        None => return Some(Box::new(Node::new(value))),
    };

    match value.cmp(&node.value) {
        Ordering::Less => node.left = insert(node.left.take(), value),
        Ordering::Greater => node.right = insert(node.right.take(), value),
        Ordering::Equal => return Some(node),
    }

    node.update();
    Some(balance_insert(node, value))
}

/// Removes `value` and returns the new root. Removing an absent value returns the tree
/// unchanged.
pub fn remove(tree: Tree, value: i32) -> Tree {
    let mut node = tree?;

    match value.cmp(&node.value) {
        Ordering::Less => node.left = remove(node.left.take(), value),
        Ordering::Greater => node.right = remove(node.right.take(), value),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => return None,
            (Some(child), None) | (None, Some(child)) => return Some(child),
            (left, right) => {
                let successor = binary_tree::min_value(&right);
                node.value = successor;
                node.left = left;
                node.right = remove(right, successor);
            },
        },
    }

    node.update();
    Some(balance_remove(node))
}

pub fn find(tree: &Tree, value: i32) -> bool {
    binary_tree::contains(tree, value)
}

/// Checks ordering, cached heights and balance factors of every node.
pub fn validate(tree: &Tree) -> Result<(), InvariantViolation> {
    fn check(tree: &Tree) -> Result<i32, InvariantViolation> {
        let node = match tree {
            None => return Ok(-1),
            Some(ref node) => node,
        };
        let left = check(&node.left)?;
        let right = check(&node.right)?;
        let actual = left.max(right) + 1;
        if node.height != actual {
            return Err(InvariantViolation::StaleHeight {
                value: node.value,
                cached: node.height,
                actual,
            });
        }
        if (left - right).abs() > 1 {
            return Err(InvariantViolation::Unbalanced {
                value: node.value,
                balance: left - right,
            });
        }
        Ok(actual)
    }

    binary_tree::check_order(tree)?;
    check(tree).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary_tree::{dump, node_count, Order};

    fn build(values: &[i32]) -> Tree {
        values.iter().fold(None, |tree, &value| insert(tree, value))
    }

    fn root_value(tree: &Tree) -> i32 {
        tree.as_ref().map(|node| node.value).expect("Expected non-empty tree.")
    }

    #[test]
    fn test_left_left_case() {
        let tree = build(&[3, 2, 1]);
        assert_eq!(root_value(&tree), 2);
        assert_eq!(height(&tree), 1);
        assert_eq!(validate(&tree), Ok(()));
    }

    #[test]
    fn test_left_right_case() {
        let tree = build(&[3, 1, 2]);
        assert_eq!(root_value(&tree), 2);
        assert_eq!(validate(&tree), Ok(()));
    }

    #[test]
    fn test_right_right_case() {
        let tree = build(&[1, 2, 3]);
        assert_eq!(root_value(&tree), 2);
        assert_eq!(validate(&tree), Ok(()));
    }

    #[test]
    fn test_right_left_case() {
        let tree = build(&[1, 3, 2]);
        assert_eq!(root_value(&tree), 2);
        assert_eq!(validate(&tree), Ok(()));
    }

    #[test]
    fn test_duplicate_insert() {
        let tree = build(&[2, 1, 3]);
        let tree = insert(tree, 1);
        assert_eq!(node_count(&tree), 3);
        assert_eq!(dump(&tree, Order::Ascending).collect::<Vec<i32>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_rebalances_with_single_rotation() {
        // 3 has a left-left heavy subtree once 4 is gone.
        let tree = build(&[3, 2, 4, 1]);
        let tree = remove(tree, 4);
        assert_eq!(root_value(&tree), 2);
        assert_eq!(validate(&tree), Ok(()));
    }

    #[test]
    fn test_remove_rebalances_with_double_rotation() {
        let tree = build(&[3, 1, 4, 2]);
        let tree = remove(tree, 4);
        assert_eq!(root_value(&tree), 2);
        assert_eq!(dump(&tree, Order::Ascending).collect::<Vec<i32>>(), vec![1, 2, 3]);
        assert_eq!(validate(&tree), Ok(()));
    }

    #[test]
    fn test_remove_two_children_uses_successor() {
        let tree = build(&[2, 1, 4, 3, 5]);
        let tree = remove(tree, 2);
        assert_eq!(root_value(&tree), 3);
        assert_eq!(validate(&tree), Ok(()));
    }

    #[test]
    fn test_remove_absent() {
        let tree = build(&[2, 1, 3]);
        let tree = remove(tree, 7);
        assert_eq!(node_count(&tree), 3);
        assert!(remove(None, 7).is_none());
    }

    #[test]
    fn test_remove_all_but_one() {
        let values: Vec<i32> = (0..64).collect();
        let mut tree = build(&values);
        for value in 1..64 {
            tree = remove(tree, value);
            assert_eq!(validate(&tree), Ok(()));
        }
        assert_eq!(height(&tree), 0);
        assert_eq!(node_count(&tree), 1);
    }

    #[test]
    fn test_validate_stale_height() {
        let mut tree = build(&[2, 1, 3]);
        if let Some(ref mut node) = tree {
            node.height = 5;
        }
        assert_eq!(
            validate(&tree),
            Err(InvariantViolation::StaleHeight { value: 2, cached: 5, actual: 1 }),
        );
    }

    #[test]
    fn test_validate_unbalanced() {
        let leaf = Some(Box::new(Node::new(1)));
        let middle = Some(Box::new(Node {
            value: 2,
            height: 1,
            left: leaf,
            right: None,
        }));
        let tree = Some(Box::new(Node {
            value: 3,
            height: 2,
            left: middle,
            right: None,
        }));
        assert_eq!(
            validate(&tree),
            Err(InvariantViolation::Unbalanced { value: 3, balance: 2 }),
        );
    }
}
