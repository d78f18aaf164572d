use crate::binary_tree;
use crate::bst::node::Node;
use crate::error::InvariantViolation;
use std::cmp::Ordering;

pub type Tree = binary_tree::Tree<Node>;

// Follows the search path of `value` and returns the link that holds it, or the empty link where
// it would be attached.
fn search(tree: &mut Tree, value: i32) -> &mut Tree {
    let mut curr = tree;
    loop {
        let ordering = curr.as_ref().map(|node| value.cmp(&node.value));
        curr = match (ordering, curr) {
            (Some(Ordering::Less), Some(node)) => &mut node.left,
            (Some(Ordering::Greater), Some(node)) => &mut node.right,
            (_, link) => return link,
        };
    }
}

pub fn insert(mut tree: Tree, value: i32) -> Tree {
    let link = search(&mut tree, value);
    if link.is_none() {
        *link = Some(Box::new(Node::new(value)));
    }
    tree
}

pub fn remove(mut tree: Tree, value: i32) -> Tree {
    let link = search(&mut tree, value);
    if let Some(mut node) = link.take() {
        *link = match (node.left.take(), node.right.take()) {
            (None, right) => right,
            (left, None) => left,
            (left, right) => {
                let successor = binary_tree::min_value(&right);
                node.value = successor;
                node.left = left;
                node.right = remove(right, successor);
                Some(node)
            },
        };
    }
    tree
}

pub fn find(tree: &Tree, value: i32) -> bool {
    binary_tree::contains(tree, value)
}

pub fn validate(tree: &Tree) -> Result<(), InvariantViolation> {
    binary_tree::check_order(tree)
}
