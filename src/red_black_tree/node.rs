use crate::entry::{Entry, Key, Value};
use crate::red_black_tree::tree;
use std::fmt;
use std::mem;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "RED"),
            Color::Black => write!(f, "BLACK"),
        }
    }
}

/// A struct representing an internal node of a red black tree.
pub struct Node {
    pub entry: Entry,
    pub color: Color,
    pub left: tree::Tree,
    pub right: tree::Tree,
}

impl Node {
    pub fn new(key: Key, value: Value) -> Self {
        Node {
            entry: Entry::new(key, value),
            color: Color::Red,
            left: None,
            right: None,
        }
    }

    pub fn flip_colors(&mut self) {
        trace!("flipping colors at key {}", self.entry.key);
        self.color = Color::Red;
        if let Some(ref mut child) = self.left {
            child.color = Color::Black;
        }
        if let Some(ref mut child) = self.right {
            child.color = Color::Black;
        }
    }

    // The right child is promoted in place: after the swap `self` holds the old right child
    // and `child` holds the demoted node, which becomes the new left child.
    pub fn rotate_left(&mut self) {
        trace!("rotating left at key {}", self.entry.key);
        let mut child = self
            .right
            .take()
            .expect("Expected right child node to be `Some`.");
        self.right = child.left.take();
        mem::swap(&mut *child, self);
        self.color = child.color;
        child.color = Color::Red;
        self.left = Some(child);
    }

    pub fn rotate_right(&mut self) {
        trace!("rotating right at key {}", self.entry.key);
        let mut child = self
            .left
            .take()
            .expect("Expected left child node to be `Some`.");
        self.left = child.right.take();
        mem::swap(&mut *child, self);
        self.color = child.color;
        child.color = Color::Red;
        self.right = Some(child);
    }

    /// Restores the left-leaning shape of the subtree rooted at this node after one of its
    /// children changed.
    pub fn balance(&mut self) {
        if tree::is_red(&self.right) && !tree::is_red(&self.left) {
            self.rotate_left();
        }

        let should_rotate = match self.left {
            Some(ref child) => child.color == Color::Red && tree::is_red(&child.left),
            None => false,
        };
        if should_rotate {
            self.rotate_right();
        }

        if tree::is_red(&self.left) && tree::is_red(&self.right) {
            self.flip_colors();
        }
    }
}
