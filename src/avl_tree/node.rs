use crate::avl_tree::tree;
use crate::binary_tree::BinaryNode;
use std::cmp;

/// A struct representing an internal node of an avl tree.
pub struct Node {
    pub value: i32,
    pub height: i32,
    pub left: tree::Tree,
    pub right: tree::Tree,
}

impl Node {
    pub fn new(value: i32) -> Self {
        Node {
            value,
            height: 0,
            left: None,
            right: None,
        }
    }

    pub fn update(&mut self) {
        self.height = cmp::max(tree::height(&self.left), tree::height(&self.right)) + 1;
    }

    pub fn balance(&self) -> i32 {
        tree::height(&self.left) - tree::height(&self.right)
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

    fn update(&mut self) {
        Node::update(self);
    }
}
