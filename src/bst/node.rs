use crate::binary_tree::BinaryNode;
use crate::bst::tree;

/// A struct representing an internal node of a binary search tree.
pub struct Node {
    pub value: i32,
    pub left: tree::Tree,
    pub right: tree::Tree,
}

impl Node {
    pub fn new(value: i32) -> Self {
        Node {
            value,
            left: None,
            right: None,
        }
    }
}

impl BinaryNode for Node {
    fn value(&self) -> i32 {
        self.value
    }

    fn left(&self) -> &tree::Tree {
        &self.left
    }

    fn right(&self) -> &tree::Tree {
        &self.right
    }

    fn left_mut(&mut self) -> &mut tree::Tree {
        &mut self.left
    }

    fn right_mut(&mut self) -> &mut tree::Tree {
        &mut self.right
    }
}
