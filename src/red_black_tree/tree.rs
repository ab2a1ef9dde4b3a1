use crate::entry::{Entry, Key};
use crate::error::{Result, TreeError};
use crate::red_black_tree::node::{Color, Node};
use std::cmp::{self, Ordering};
use std::mem;

pub type Tree = Option<Box<Node>>;

// A subtree with its minimum node detached, and that node.
type RemoveMin = (Tree, Box<Node>);

pub fn is_red(tree: &Tree) -> bool {
    match tree {
        None => false,
        Some(ref node) => node.color == Color::Red,
    }
}

pub fn blacken_root(tree: &mut Tree) {
    if let Some(ref mut node) = tree {
        node.color = Color::Black;
    }
}

pub fn insert(tree: &mut Tree, new_node: Node) -> Option<Entry> {
    let ret = match tree {
        Some(ref mut node) => {
            match new_node.entry.key.cmp(&node.entry.key) {
                Ordering::Less => insert(&mut node.left, new_node),
                Ordering::Greater => insert(&mut node.right, new_node),
                Ordering::Equal => Some(mem::replace(&mut node.entry, new_node.entry)),
            }
        },
        None => {
            *tree = Some(Box::new(new_node));
            return None;
        },
    };

    if let Some(ref mut node) = tree {
        node.balance();
    }

    ret
}

fn remove_min(mut node: Box<Node>) -> RemoveMin {
    match node.left.take() {
        Some(left) => {
            let (rest, min) = remove_min(left);
            node.left = rest;
            (Some(node), min)
        },
        None => (node.right.take(), node),
    }
}

// Unlinks `node` from the position held by `tree` without any recoloring or rotation.
fn splice(tree: &mut Tree, mut node: Box<Node>) -> Entry {
    match (node.left.take(), node.right.take()) {
        (None, right) => {
            debug!("removing key {} in favour of its right subtree", node.entry.key);
            *tree = right;
            node.entry
        },
        (left, None) => {
            debug!("removing key {} in favour of its left subtree", node.entry.key);
            *tree = left;
            node.entry
        },
        (left, Some(right)) => {
            let (right, successor) = remove_min(right);
            debug!(
                "removing key {} by moving its successor {} into place",
                node.entry.key, successor.entry.key,
            );
            let removed = mem::replace(&mut node.entry, successor.entry);
            node.left = left;
            node.right = right;
            *tree = Some(node);
            removed
        },
    }
}

pub fn remove(tree: &mut Tree, key: &Key) -> Option<Entry> {
    let ordering = match tree {
        Some(ref node) => key.cmp(&node.entry.key),
        None => {
            debug!("key {} not found for removal", key);
            return None;
        },
    };

    match ordering {
        Ordering::Less => tree.as_mut().and_then(|node| remove(&mut node.left, key)),
        Ordering::Greater => tree.as_mut().and_then(|node| remove(&mut node.right, key)),
        Ordering::Equal => tree.take().map(|node| splice(tree, node)),
    }
}

pub fn get<'a>(tree: &'a Tree, key: &Key) -> Option<&'a Entry> {
    let mut curr = tree;
    while let Some(node) = curr {
        match key.cmp(&node.entry.key) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(&node.entry),
        }
    }
    None
}

pub fn get_mut<'a>(tree: &'a mut Tree, key: &Key) -> Option<&'a mut Entry> {
    tree.as_mut().and_then(|node| {
        match key.cmp(&node.entry.key) {
            Ordering::Less => get_mut(&mut node.left, key),
            Ordering::Greater => get_mut(&mut node.right, key),
            Ordering::Equal => Some(&mut node.entry),
        }
    })
}

pub fn min(tree: &Tree) -> Option<&Entry> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.entry
    })
}

pub fn max(tree: &Tree) -> Option<&Entry> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.entry
    })
}

pub fn height(tree: &Tree) -> i32 {
    match tree {
        None => -1,
        Some(ref node) => 1 + cmp::max(height(&node.left), height(&node.right)),
    }
}

pub fn check_order(tree: &Tree, previous: &mut Option<Key>) -> Result<()> {
    if let Some(ref node) = tree {
        check_order(&node.left, previous)?;
        let key = node.entry.key;
        if let Some(previous) = *previous {
            if previous >= key {
                return Err(TreeError::UnorderedKeys { previous, next: key });
            }
        }
        *previous = Some(key);
        check_order(&node.right, previous)?;
    }
    Ok(())
}

// Returns the number of black nodes on every path from `tree` down to an empty subtree.
fn check_colors(tree: &Tree) -> Result<usize> {
    let node = match tree {
        Some(ref node) => node,
        None => return Ok(0),
    };
    let key = node.entry.key;

    if is_red(&node.right) && !is_red(&node.left) {
        return Err(TreeError::RightLeaningRed { key });
    }
    if node.color == Color::Red && (is_red(&node.left) || is_red(&node.right)) {
        return Err(TreeError::ConsecutiveReds { key });
    }

    let left = check_colors(&node.left)?;
    let right = check_colors(&node.right)?;
    if left != right {
        return Err(TreeError::UnbalancedBlackHeight { key, left, right });
    }

    match node.color {
        Color::Black => Ok(left + 1),
        Color::Red => Ok(left),
    }
}

pub fn validate(tree: &Tree) -> Result<usize> {
    if let Some(ref node) = tree {
        if node.color == Color::Red {
            return Err(TreeError::RedRoot {
                key: node.entry.key,
            });
        }
    }
    check_order(tree, &mut None)?;
    check_colors(tree)
}

/// An in-order iterator over the nodes of a tree.
pub struct Nodes<'a> {
    current: &'a Tree,
    stack: Vec<&'a Node>,
}

impl<'a> Nodes<'a> {
    pub fn new(tree: &'a Tree) -> Self {
        Nodes {
            current: tree,
            stack: Vec::new(),
        }
    }
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            node
        })
    }
}
