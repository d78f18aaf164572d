use crate::binary_tree::{self, rotate_left, rotate_right, rotate_up, BinaryNode, Side};
use crate::error::InvariantViolation;
use crate::red_black_tree::node::{Color, Node};
use log::trace;
use std::cmp::Ordering;

pub type Tree = binary_tree::Tree<Node>;

pub fn is_red(tree: &Tree) -> bool {
    match tree {
        None => false,
        Some(ref node) => node.is_red(),
    }
}

fn paint(tree: &mut Tree, color: Color) {
    if let Some(ref mut node) = tree {
        node.color = color;
    }
}

// Repairs a red child with a red grandchild below `root`. Only the first matching pattern is
// applied; a violation between `root` and its own parent is left to the caller one level up.
fn fix(mut root: Box<Node>) -> Box<Node> {
    if let Some(mut child) = root.left.take() {
        if child.is_red() && is_red(&child.left) {
            trace!("red black left-left repair at {}", root.value);
            paint(&mut child.left, Color::Black);
            root.left = Some(child);
            return rotate_right(root);
        }
        if child.is_red() && is_red(&child.right) {
            trace!("red black left-right repair at {}", root.value);
            child.color = Color::Black;
            root.left = Some(rotate_left(child));
            return rotate_right(root);
        }
        root.left = Some(child);
    }

    if let Some(mut child) = root.right.take() {
        if child.is_red() && is_red(&child.right) {
            trace!("red black right-right repair at {}", root.value);
            paint(&mut child.right, Color::Black);
            root.right = Some(child);
            return rotate_left(root);
        }
        if child.is_red() && is_red(&child.left) {
            trace!("red black right-left repair at {}", root.value);
            child.color = Color::Black;
            root.right = Some(rotate_right(child));
            return rotate_left(root);
        }
        root.right = Some(child);
    }

    root
}

fn insert_fixing(tree: Tree, value: i32) -> Box<Node> {
    let mut node = match tree {
        Some(node) => node,
        None => return Box::new(Node::new(value)),
    };

    match value.cmp(&node.value) {
        Ordering::Less => node.left = Some(insert_fixing(node.left.take(), value)),
        Ordering::Greater => node.right = Some(insert_fixing(node.right.take(), value)),
        Ordering::Equal => return node,
    }

    fix(node)
}

/// Inserts `value` as a red node, repairs red-red edges on the way back up, then blackens the
/// root. Inserting a value that is already present returns the tree unchanged.
pub fn insert(tree: Tree, value: i32) -> Tree {
    let mut root = insert_fixing(tree, value);
    root.color = Color::Black;
    Some(root)
}

// Repairs the black height deficit left on `side` of `parent` by a removed black node.
//
// The deficit never travels further up: recoloring a black sibling red always blackens the
// parent, whatever color it had, and a red sibling is only rotated above the parent.
fn fix_double_black(mut parent: Box<Node>, side: Side) -> Box<Node> {
    let far = side.opposite();
    let colors = parent.child(far).as_ref().map(|sibling| {
        (
            sibling.is_red(),
            is_red(sibling.child(side)),
            is_red(sibling.child(far)),
        )
    });
    let (sibling_red, inner_red, outer_red) = match colors {
        Some(colors) => colors,
        None => return parent,
    };

    if sibling_red {
        trace!("red black red sibling below {}", parent.value);
        paint(parent.child_mut(far), Color::Black);
        parent.color = Color::Red;
        return rotate_up(parent, far);
    }

    if !inner_red && !outer_red {
        trace!("red black black sibling below {}", parent.value);
        paint(parent.child_mut(far), Color::Red);
        parent.color = Color::Black;
        return parent;
    }

    if inner_red {
        trace!("red black red inner nephew below {}", parent.value);
        if let Some(mut sibling) = parent.child_mut(far).take() {
            paint(sibling.child_mut(side), Color::Black);
            *parent.child_mut(far) = Some(rotate_up(sibling, side));
        }
    }

    let outer_red = parent
        .child(far)
        .as_ref()
        .map_or(false, |sibling| is_red(sibling.child(far)));
    if outer_red {
        trace!("red black red outer nephew below {}", parent.value);
        let color = parent.color;
        if let Some(ref mut sibling) = parent.child_mut(far) {
            sibling.color = color;
            paint(sibling.child_mut(far), Color::Black);
        }
        parent.color = Color::Black;
        return rotate_up(parent, far);
    }

    parent
}

fn settle(node: Box<Node>, side: Side, double_black: bool) -> Box<Node> {
    if double_black {
        fix_double_black(node, side)
    } else {
        node
    }
}

fn replace_with_successor(mut node: Box<Node>, left: Tree, right: Tree) -> Box<Node> {
    let successor = binary_tree::min_value(&right);
    node.value = successor;
    node.left = left;
    let (right, double_black) = remove_reporting(right, successor);
    node.right = right;
    settle(node, Side::Right, double_black)
}

// Unlinks `node`, returning its replacement and whether the replacement is one black node short.
fn remove_node(mut node: Box<Node>) -> (Tree, bool) {
    let left = node.left.take();
    let right = node.right.take();
    match (node.color, left, right) {
        (Color::Red, None, None) => (None, false),
        (Color::Red, Some(child), None) | (Color::Red, None, Some(child)) => (Some(child), false),
        (Color::Black, Some(mut child), None) | (Color::Black, None, Some(mut child))
            if child.is_red() =>
        {
            child.color = Color::Black;
            (Some(child), false)
        },
        (_, left, right @ Some(_)) => (Some(replace_with_successor(node, left, right)), false),
        (Color::Black, left, None) => (left, true),
    }
}

// Returns the new subtree and whether its black height dropped by one.
fn remove_reporting(tree: Tree, value: i32) -> (Tree, bool) {
    let mut node = match tree {
        Some(node) => node,
        None => return (None, false),
    };

    match value.cmp(&node.value) {
        Ordering::Less => {
            let (left, double_black) = remove_reporting(node.left.take(), value);
            node.left = left;
            (Some(settle(node, Side::Left, double_black)), false)
        },
        Ordering::Greater => {
            let (right, double_black) = remove_reporting(node.right.take(), value);
            node.right = right;
            (Some(settle(node, Side::Right, double_black)), false)
        },
        Ordering::Equal => remove_node(node),
    }
}

/// Removes `value` and returns the new root. Removing an absent value returns the tree
/// unchanged.
///
/// Black heights are not guaranteed to stay equal after a removal; see [`validate`].
pub fn remove(tree: Tree, value: i32) -> Tree {
    remove_reporting(tree, value).0
}

pub fn find(tree: &Tree, value: i32) -> bool {
    binary_tree::contains(tree, value)
}

/// Checks ordering, the black root, the absence of red-red edges and equal black heights.
pub fn validate(tree: &Tree) -> Result<(), InvariantViolation> {
    fn black_height(tree: &Tree) -> Result<usize, InvariantViolation> {
        let node = match tree {
            None => return Ok(0),
            Some(ref node) => node,
        };
        if node.is_red() && (is_red(&node.left) || is_red(&node.right)) {
            return Err(InvariantViolation::RedChildOfRed { value: node.value });
        }
        let left = black_height(&node.left)?;
        let right = black_height(&node.right)?;
        if left != right {
            return Err(InvariantViolation::UnequalBlackHeight {
                value: node.value,
                left,
                right,
            });
        }
        Ok(if node.is_red() { left } else { left + 1 })
    }

    binary_tree::check_order(tree)?;
    if let Some(ref root) = tree {
        if root.is_red() {
            return Err(InvariantViolation::RedRoot { value: root.value });
        }
    }
    black_height(tree).map(|_| ())
}
