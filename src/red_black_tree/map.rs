use crate::entry::{Entry, Key, Value};
use crate::error::Result;
use crate::red_black_tree::node::{Color, Node};
use crate::red_black_tree::tree;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};

/// An ordered map of integer keys implemented using a left-leaning red black tree.
///
/// A red black tree is a self-balancing binary search tree that tags each node with a color.
/// Insertions repair the colors on the way back up so that the tree stays approximately
/// balanced: the height of a tree with `n` entries never exceeds `2 * log2(n + 1)`.
///
/// Removals unlink the node like an ordinary binary search tree and do not rebalance. Lookups
/// and traversals stay correct after a removal, but the height bound no longer holds.
///
/// # Examples
///
/// ```
/// use llrb_map::red_black_tree::RedBlackMap;
///
/// let mut map = RedBlackMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Some(&0));
/// assert_eq!(map.height(), 1);
///
/// map[&0] = 2;
/// assert_eq!(map.remove(&0), Some((0, 2)));
/// assert_eq!(map.remove(&1), None);
/// ```
pub struct RedBlackMap {
    tree: tree::Tree,
    len: usize,
}

impl RedBlackMap {
    /// Constructs a new, empty `RedBlackMap`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::red_black_tree::RedBlackMap;
    ///
    /// let map = RedBlackMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        RedBlackMap { tree: None, len: 0 }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, it will return
    /// and replace the old key-value pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some((1, 1)));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: Key, value: Value) -> Option<(Key, Value)> {
        let RedBlackMap {
            ref mut tree,
            ref mut len,
        } = self;
        let ret = tree::insert(tree, Node::new(key, value));
        tree::blacken_root(tree);
        match ret {
            Some(entry) => Some(entry.into()),
            None => {
                *len += 1;
                None
            },
        }
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Otherwise it will return `None` and leave the map untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &Key) -> Option<(Key, Value)> {
        let RedBlackMap {
            ref mut tree,
            ref mut len,
        } = self;
        tree::remove(tree, key).map(|entry| {
            tree::blacken_root(tree);
            *len -= 1;
            entry.into()
        })
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key(&self, key: &Key) -> bool {
        self.get(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, -1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&-1));
    /// ```
    pub fn get(&self, key: &Key) -> Option<&Value> {
        tree::get(&self.tree, key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut(&mut self, key: &Key) -> Option<&mut Value> {
        tree::get_mut(&mut self.tree, key).map(|entry| &mut entry.value)
    }

    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the height of the tree, counted in edges along the longest path from the root. An
    /// empty map has a height of `-1` and a map with one entry has a height of `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// assert_eq!(map.height(), -1);
    /// map.insert(1, 1);
    /// assert_eq!(map.height(), 0);
    /// ```
    pub fn height(&self) -> i32 {
        tree::height(&self.tree)
    }

    /// Returns the color of the root node, or `None` if the map is empty.
    pub fn root_color(&self) -> Option<Color> {
        self.tree.as_ref().map(|node| node.color)
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&Key> {
        tree::min(&self.tree).map(|entry| &entry.key)
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&Key> {
        tree::max(&self.tree).map(|entry| &entry.key)
    }

    /// Checks every structural invariant of the tree and returns its black height: the number of
    /// black nodes on any path from the root to an empty subtree.
    ///
    /// Validation always succeeds on a map that has only seen insertions. Removals do not
    /// rebalance, so the color invariants may fail afterwards while the key order still holds;
    /// use `check_order` for the latter.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(2, 2);
    /// map.insert(1, 1);
    /// assert_eq!(map.validate(), Ok(1));
    /// ```
    pub fn validate(&self) -> Result<usize> {
        tree::validate(&self.tree)
    }

    /// Checks that the keys of the tree are strictly ascending in an in-order traversal.
    pub fn check_order(&self) -> Result<()> {
        tree::check_order(&self.tree, &mut None)
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackMapIter<'_> {
        RedBlackMapIter {
            nodes: tree::Nodes::new(&self.tree),
        }
    }

    /// Returns an iterator over the map that also reports the color of every node. The iterator
    /// will yield `(key, value, color)` triples using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::red_black_tree::{Color, RedBlackMap};
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(2, 20);
    /// map.insert(1, 10);
    ///
    /// let mut iterator = map.traverse();
    /// assert_eq!(iterator.next(), Some((1, 10, Color::Red)));
    /// assert_eq!(iterator.next(), Some((2, 20, Color::Black)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn traverse(&self) -> Traverse<'_> {
        Traverse {
            nodes: tree::Nodes::new(&self.tree),
        }
    }
}

impl IntoIterator for RedBlackMap {
    type IntoIter = RedBlackMapIntoIter;
    type Item = (Key, Value);

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a> IntoIterator for &'a RedBlackMap {
    type IntoIter = RedBlackMapIter<'a>;
    type Item = (&'a Key, &'a Value);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `RedBlackMap`.
///
/// This iterator traverses the elements of the map in-order and yields owned entries.
pub struct RedBlackMapIntoIter {
    current: tree::Tree,
    stack: Vec<Node>,
}

impl Iterator for RedBlackMapIntoIter {
    type Item = (Key, Value);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node {
                entry: Entry { key, value },
                right,
                ..
            } = node;
            self.current = right;
            (key, value)
        })
    }
}

/// An iterator for `RedBlackMap`.
///
/// This iterator traverses the elements of the map in-order and yields immutable references.
pub struct RedBlackMapIter<'a> {
    nodes: tree::Nodes<'a>,
}

impl<'a> Iterator for RedBlackMapIter<'a> {
    type Item = (&'a Key, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|node| {
            let Entry { ref key, ref value } = node.entry;
            (key, value)
        })
    }
}

/// A coloring iterator for `RedBlackMap`.
///
/// This iterator traverses the elements of the map in-order and yields copies of each key,
/// value and node color.
pub struct Traverse<'a> {
    nodes: tree::Nodes<'a>,
}

impl<'a> Iterator for Traverse<'a> {
    type Item = (Key, Value, Color);

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes
            .next()
            .map(|node| (node.entry.key, node.entry.value, node.color))
    }
}

impl Default for RedBlackMap {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<(Key, Value)> for RedBlackMap {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (Key, Value)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl FromIterator<(Key, Value)> for RedBlackMap {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (Key, Value)>,
    {
        let mut map = RedBlackMap::new();
        map.extend(iter);
        map
    }
}

impl<'a> Index<&'a Key> for RedBlackMap {
    type Output = Value;

    fn index(&self, key: &Key) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<'a> IndexMut<&'a Key> for RedBlackMap {
    fn index_mut(&mut self, key: &Key) -> &mut Self::Output {
        self.get_mut(key).expect("Error: key does not exist.")
    }
}
