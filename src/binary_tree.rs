//! Shape shared by every tree in this crate: owned child links, the two rotations, and the
//! read-only traversals that do not depend on how a variant keeps itself balanced.

use crate::error::InvariantViolation;
use std::cmp;

/// A possibly empty tree. The root is exclusively owned by whoever holds the handle.
pub type Tree<N> = Option<Box<N>>;

/// Traversal direction for [`dump`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

/// Which child of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A node that owns at most two children and stores a single integer.
pub trait BinaryNode: Sized {
    fn value(&self) -> i32;
    fn left(&self) -> &Tree<Self>;
    fn right(&self) -> &Tree<Self>;
    fn left_mut(&mut self) -> &mut Tree<Self>;
    fn right_mut(&mut self) -> &mut Tree<Self>;

    /// Recomputes any metadata derived from the children. Called by the rotations on the two
    /// nodes that moved.
    fn update(&mut self) {}

    fn child(&self, side: Side) -> &Tree<Self> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Tree<Self> {
        match side {
            Side::Left => self.left_mut(),
            Side::Right => self.right_mut(),
        }
    }
}

/// Makes the right child the new local root. Returns `node` unchanged if it has no right child.
pub fn rotate_left<N: BinaryNode>(mut node: Box<N>) -> Box<N> {
    let mut child = match node.right_mut().take() {
        Some(child) => child,
        None => return node,
    };
    *node.right_mut() = child.left_mut().take();
    node.update();
    *child.left_mut() = Some(node);
    child.update();
    child
}

/// Makes the left child the new local root. Returns `node` unchanged if it has no left child.
pub fn rotate_right<N: BinaryNode>(mut node: Box<N>) -> Box<N> {
    let mut child = match node.left_mut().take() {
        Some(child) => child,
        None => return node,
    };
    *node.left_mut() = child.right_mut().take();
    node.update();
    *child.right_mut() = Some(node);
    child.update();
    child
}

/// Lifts the child on `side` above `node`.
pub fn rotate_up<N: BinaryNode>(node: Box<N>, side: Side) -> Box<N> {
    match side {
        Side::Left => rotate_right(node),
        Side::Right => rotate_left(node),
    }
}

/// Number of edges on the longest root-to-leaf path, `-1` for an empty tree.
///
/// Walks the tree one level at a time, so degenerate trees do not grow the call stack.
pub fn height<N: BinaryNode>(tree: &Tree<N>) -> i32 {
    let mut level: Vec<&N> = Vec::new();
    if let Some(ref node) = tree {
        level.push(node);
    }

    let mut height = -1;
    while !level.is_empty() {
        height += 1;
        let mut next = Vec::new();
        for node in level {
            if let Some(ref child) = node.left() {
                next.push(&**child);
            }
            if let Some(ref child) = node.right() {
                next.push(&**child);
            }
        }
        level = next;
    }
    height
}

pub fn node_count<N: BinaryNode>(tree: &Tree<N>) -> usize {
    dump(tree, Order::Ascending).count()
}

pub fn contains<N: BinaryNode>(tree: &Tree<N>, value: i32) -> bool {
    let mut curr = tree;
    while let Some(ref node) = curr {
        curr = match value.cmp(&node.value()) {
            cmp::Ordering::Less => node.left(),
            cmp::Ordering::Greater => node.right(),
            cmp::Ordering::Equal => return true,
        };
    }
    false
}

// precondition: the tree is not empty
pub fn min_value<N: BinaryNode>(tree: &Tree<N>) -> i32 {
    let mut curr = tree
        .as_ref()
        .expect("`min_value` requires a non-empty tree.");
    while let Some(ref left_node) = curr.left() {
        curr = left_node;
    }
    curr.value()
}

/// Returns a lazy in-order (or reverse in-order) iterator over the values of `tree`.
pub fn dump<N: BinaryNode>(tree: &Tree<N>, order: Order) -> Dump<'_, N> {
    let mut dump = Dump {
        stack: Vec::new(),
        order,
    };
    dump.descend(tree);
    dump
}

/// Releases every node, children before their parent.
///
/// Links are detached onto an explicit stack before a node is dropped, so the drop of each `Box`
/// never recurses into a long chain.
pub fn free<N: BinaryNode>(tree: Tree<N>) {
    let mut stack: Vec<(Box<N>, bool)> = tree.into_iter().map(|node| (node, false)).collect();
    while let Some((mut node, detached)) = stack.pop() {
        if detached {
            continue;
        }
        let left = node.left_mut().take();
        let right = node.right_mut().take();
        stack.push((node, true));
        stack.extend(right.into_iter().map(|node| (node, false)));
        stack.extend(left.into_iter().map(|node| (node, false)));
    }
}

/// Checks that values strictly increase in in-order position.
pub fn check_order<N: BinaryNode>(tree: &Tree<N>) -> Result<(), InvariantViolation> {
    let mut prev: Option<i32> = None;
    for value in dump(tree, Order::Ascending) {
        if let Some(prev) = prev {
            if prev >= value {
                return Err(InvariantViolation::OutOfOrder { value });
            }
        }
        prev = Some(value);
    }
    Ok(())
}

/// An iterator over the values of a tree in either direction.
///
/// The iterator holds the path of nodes whose values have not been yielded yet, so it only
/// borrows the tree and can be recreated at any time.
pub struct Dump<'a, N> {
    stack: Vec<&'a N>,
    order: Order,
}

impl<'a, N> Dump<'a, N>
where
    N: BinaryNode,
{
    fn descend(&mut self, mut tree: &'a Tree<N>) {
        while let Some(node) = tree {
            let node: &'a N = node;
            self.stack.push(node);
            tree = match self.order {
                Order::Ascending => node.left(),
                Order::Descending => node.right(),
            };
        }
    }
}

impl<'a, N> Iterator for Dump<'a, N>
where
    N: BinaryNode,
{
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        match self.order {
            Order::Ascending => self.descend(node.right()),
            Order::Descending => self.descend(node.left()),
        }
        Some(node.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avl_tree::Node as AvlNode;
    use crate::bst::Node;

    fn node(value: i32, left: Tree<Node>, right: Tree<Node>) -> Box<Node> {
        Box::new(Node { value, left, right })
    }

    fn leaf(value: i32) -> Tree<Node> {
        Some(Box::new(Node::new(value)))
    }

    fn values(tree: &Tree<Node>) -> Vec<i32> {
        dump(tree, Order::Ascending).collect()
    }

    #[test]
    fn test_rotate_left_without_right_child() {
        let root = rotate_left(node(2, leaf(1), None));
        assert_eq!(root.value, 2);
        assert_eq!(root.left.as_ref().map(|child| child.value), Some(1));
        assert!(root.right.is_none());
    }

    #[test]
    fn test_rotate_right_without_left_child() {
        let root = rotate_right(node(2, None, leaf(3)));
        assert_eq!(root.value, 2);
        assert!(root.left.is_none());
        assert_eq!(root.right.as_ref().map(|child| child.value), Some(3));
    }

    #[test]
    fn test_rotate_left_shape() {
        let chain = node(1, None, Some(node(2, None, leaf(3))));
        let tree = Some(rotate_left(chain));
        let root = tree.as_ref().expect("Expected non-empty tree.");

        assert_eq!(root.value, 2);
        assert_eq!(root.left.as_ref().map(|child| child.value), Some(1));
        assert_eq!(root.right.as_ref().map(|child| child.value), Some(3));
        assert_eq!(height(&tree), 1);
        assert_eq!(values(&tree), vec![1, 2, 3]);
    }

    #[test]
    fn test_rotate_right_moves_inner_subtree() {
        let tree = node(4, Some(node(2, leaf(1), leaf(3))), leaf(5));
        let tree = Some(rotate_right(tree));
        let root = tree.as_ref().expect("Expected non-empty tree.");

        assert_eq!(root.value, 2);
        let right = root.right.as_ref().expect("Expected right child.");
        assert_eq!(right.value, 4);
        assert_eq!(right.left.as_ref().map(|child| child.value), Some(3));
        assert_eq!(values(&tree), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_rotate_updates_old_then_new_root() {
        let middle = AvlNode {
            value: 2,
            height: 1,
            left: None,
            right: Some(Box::new(AvlNode::new(3))),
        };
        let chain = Box::new(AvlNode {
            value: 1,
            height: 2,
            left: None,
            right: Some(Box::new(middle)),
        });

        let root = rotate_up(chain, Side::Right);
        assert_eq!(root.value, 2);
        assert_eq!(root.height, 1);
        assert_eq!(root.left.as_ref().map(|child| child.height), Some(0));
        assert_eq!(root.right.as_ref().map(|child| child.height), Some(0));
    }

    #[test]
    fn test_check_order_out_of_order() {
        let tree = Some(node(2, leaf(3), None));
        assert_eq!(check_order(&tree), Err(InvariantViolation::OutOfOrder { value: 2 }));
    }

    #[test]
    fn test_check_order_duplicate() {
        let tree = Some(node(2, None, leaf(2)));
        assert_eq!(check_order(&tree), Err(InvariantViolation::OutOfOrder { value: 2 }));
    }

    #[test]
    fn test_empty_tree() {
        let tree: Tree<Node> = None;
        assert_eq!(height(&tree), -1);
        assert_eq!(node_count(&tree), 0);
        assert_eq!(dump(&tree, Order::Ascending).next(), None);
        assert_eq!(dump(&tree, Order::Descending).next(), None);
        assert_eq!(check_order(&tree), Ok(()));
        assert!(!contains(&tree, 0));
        free(tree);
    }

    #[test]
    fn test_dump_restarts() {
        let tree = Some(node(2, leaf(1), leaf(3)));
        let mut dump_asc = dump(&tree, Order::Ascending);
        assert_eq!(dump_asc.next(), Some(1));
        assert_eq!(values(&tree), vec![1, 2, 3]);
        assert_eq!(dump(&tree, Order::Descending).collect::<Vec<i32>>(), vec![3, 2, 1]);
    }

    #[test]
    fn test_deep_chain() {
        let tree = (0..100_000).rev().fold(None, |tree, value| Some(node(value, None, tree)));
        assert_eq!(height(&tree), 99_999);
        assert_eq!(node_count(&tree), 100_000);
        assert_eq!(check_order(&tree), Ok(()));
        free(tree);
    }
}
