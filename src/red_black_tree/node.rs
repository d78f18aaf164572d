use crate::binary_tree::BinaryNode;
use crate::red_black_tree::tree;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// A struct representing an internal node of a red black tree.
pub struct Node {
    pub value: i32,
    pub color: Color,
    pub left: tree::Tree,
    pub right: tree::Tree,
}

impl Node {
    pub fn new(value: i32) -> Self {
        Node {
            value,
            color: Color::Red,
            left: None,
            right: None,
        }
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}

// Rotations leave colors alone; callers recolor around them.
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
