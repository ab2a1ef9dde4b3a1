//! Self-balancing binary search tree that uses a color bit on every node to keep the tree
//! approximately balanced during insertions. The tree leans left: a red link always hangs off
//! the left side of its parent.

mod map;
mod node;
mod tree;

pub use self::map::{RedBlackMap, RedBlackMapIntoIter, RedBlackMapIter, Traverse};
pub use self::node::Color;
