//! An ordered map from `i32` keys to `i32` values backed by a left-leaning red black tree.
//!
//! # Examples
//!
//! ```
//! use llrb_map::RedBlackMap;
//!
//! let mut map = RedBlackMap::new();
//! for &(key, value) in &[(5, 50), (3, 30), (8, 80), (1, 10), (4, 40)] {
//!     map.insert(key, value);
//! }
//!
//! assert_eq!(map.get(&3), Some(&30));
//! assert_eq!(map.height(), 2);
//! assert_eq!(map.remove(&3), Some((3, 30)));
//! assert_eq!(map.get(&3), None);
//! ```
//!
//! Nodes store their entries internally; the map only hands out `(key, value)` pairs.
//!
//! ```compile_fail
//! use llrb_map::Entry;
//! ```

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod entry;
mod error;
pub mod red_black_tree;

pub use crate::entry::{Key, Value};
pub use crate::error::{Result, TreeError};
pub use crate::red_black_tree::{Color, RedBlackMap};
