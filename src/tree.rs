//! The AVL tree: a Binary Search Tree that rebalances itself after every insert and delete,
//! keeping its height within `O(lg N)`.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::{Error, Order, Tree};
//!
//! // Duplicates are dropped and the rest are sorted before building.
//! let mut tree = Tree::from_keys([5, 3, 8, 1, 4, 7, 9, 3]);
//! assert_eq!(tree.len(), 7);
//! assert_eq!(tree.height(), 3);
//!
//! // Inserting an existing key does nothing.
//! assert!(tree.insert(6));
//! assert!(!tree.insert(6));
//!
//! // Deleting a node returns its key.
//! assert_eq!(tree.delete(&5), Some(5));
//! assert_eq!(tree.delete(&5), None);
//!
//! assert_eq!(tree.find(&5).unwrap_err(), Error::NotFound);
//! assert_eq!(tree.keys(Order::In), [&1, &3, &4, &6, &7, &8, &9]);
//! assert!(tree.is_balanced());
//! ```

use std::cmp::Ordering;
use std::mem;

use tracing::{debug, trace};

use crate::build::{build, drain_in_order, sorted_unique};
use crate::error::{Error, Result};
use crate::node::{checked_height, Link, Node};
use crate::traversal::{InOrder, Iter, LevelOrder, Order, PostOrder, PreOrder};

/// A self-balancing Binary Search Tree (specifically, an AVL tree) of unique keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a tree of minimal height holding every distinct key of `keys`. The input can
    /// be in any order and contain duplicates.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// // A plain BST would degrade into a 7 level chain here.
    /// let tree = Tree::from_keys(1..=7);
    ///
    /// assert_eq!(tree.height(), 3);
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(4));
    /// ```
    pub fn from_keys<I>(keys: I) -> Self
    where
        K: Ord,
        I: IntoIterator<Item = K>,
    {
        let keys = sorted_unique(keys);
        let len = keys.len();
        debug!(len, "building tree");

        Self {
            root: build(len, &mut keys.into_iter()),
            len,
        }
    }

    /// Number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Number of levels in the tree. An empty tree has a height of 0 and a single node has a
    /// height of 1.
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// Inserts `key` into the tree, rebalancing on the way back up. Returns `false` (and
    /// leaves the tree untouched) if the key was already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in 1..=7 {
    ///     assert!(tree.insert(key));
    ///     assert!(tree.is_balanced());
    /// }
    ///
    /// assert!(!tree.insert(3));
    /// assert_eq!(tree.len(), 7);
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let inserted = match self.root.as_mut() {
            Some(root) => root.insert(key),
            None => {
                self.root = Some(Node::new_boxed(key));
                true
            }
        };

        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Deletes `key` from the tree and returns it. If the tree doesn't contain the key,
    /// nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::from_keys(1..=15);
    ///
    /// assert_eq!(tree.delete(&8), Some(8));
    /// assert_eq!(tree.delete(&8), None);
    /// assert!(!tree.contains(&8));
    /// assert_eq!(tree.len(), 14);
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<K>
    where
        K: Ord,
    {
        let deleted = delete(&mut self.root, key);
        if deleted.is_some() {
            self.len -= 1;
        } else {
            trace!("key to delete not found");
        }
        deleted
    }

    /// Finds the node holding `key`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no node holds `key`, including when the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Error, Tree};
    ///
    /// let tree = Tree::from_keys([1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&3).map(|n| *n.key()), Ok(3));
    /// assert_eq!(tree.find(&100).unwrap_err(), Error::NotFound);
    /// ```
    pub fn find(&self, key: &K) -> Result<&Node<K>>
    where
        K: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Ok(node),
                Ordering::Greater => node.right(),
            };
        }

        Err(Error::NotFound)
    }

    /// Whether the tree holds `key`.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_ok()
    }

    /// Number of edges between the root and the node holding `key`. The root has a depth of
    /// 0.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no node holds `key`, including when the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_keys(1..=7);
    ///
    /// assert_eq!(tree.depth(&4), Ok(0));
    /// assert_eq!(tree.depth(&6), Ok(1));
    /// assert_eq!(tree.depth(&1), Ok(2));
    /// assert!(tree.depth(&8).is_err());
    /// ```
    pub fn depth(&self, key: &K) -> Result<usize>
    where
        K: Ord,
    {
        let mut depth = 0;
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Ok(depth),
                Ordering::Greater => node.right(),
            };
            depth += 1;
        }

        Err(Error::NotFound)
    }

    /// Checks every node of the tree, recomputing heights from scratch, and reports whether
    /// all of their balance factors are within `{-1, 0, 1}`. An empty tree is balanced.
    pub fn is_balanced(&self) -> bool {
        checked_height(self.root()).is_some()
    }

    /// Rebuilds the tree from its keys so that it has the minimal height possible. Keeping
    /// the AVL invariant only guarantees a height within about 1.44 times the minimum, which
    /// a long run of deletions can drift towards.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::from_keys(0..32);
    /// for key in 0..16 {
    ///     tree.delete(&(key * 2));
    /// }
    /// tree.rebuild();
    ///
    /// assert_eq!(tree.len(), 16);
    /// assert_eq!(tree.height(), 5);
    /// ```
    pub fn rebuild(&mut self) {
        let mut keys = Vec::with_capacity(self.len);
        drain_in_order(self.root.take(), &mut keys);
        debug!(len = keys.len(), "rebuilding tree");

        self.len = keys.len();
        self.root = build(self.len, &mut keys.into_iter());
    }

    /// Iterates over the nodes breadth first: the root, then its children from left to
    /// right, and so on.
    pub fn level_order(&self) -> LevelOrder<'_, K> {
        LevelOrder::new(self.root())
    }

    /// Iterates over the nodes, visiting each node before its left and then right subtree.
    pub fn pre_order(&self) -> PreOrder<'_, K> {
        PreOrder::new(self.root())
    }

    /// Iterates over the nodes in ascending key order.
    pub fn in_order(&self) -> InOrder<'_, K> {
        InOrder::new(self.root())
    }

    /// Iterates over the nodes, visiting each node after its left and then right subtree.
    pub fn post_order(&self) -> PostOrder<'_, K> {
        PostOrder::new(self.root())
    }

    /// Calls `visitor` once for every node, in the given `order`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Order, Tree};
    ///
    /// let tree = Tree::from_keys([3, 1, 2]);
    /// let mut leaves = Vec::new();
    /// tree.visit(Order::Post, |node| {
    ///     if node.is_leaf() {
    ///         leaves.push(*node.key());
    ///     }
    /// });
    ///
    /// assert_eq!(leaves, [1, 3]);
    /// ```
    pub fn visit<'a, F>(&'a self, order: Order, visitor: F)
    where
        F: FnMut(&'a Node<K>),
    {
        match order {
            Order::Level => self.level_order().for_each(visitor),
            Order::Pre => self.pre_order().for_each(visitor),
            Order::In => self.in_order().for_each(visitor),
            Order::Post => self.post_order().for_each(visitor),
        }
    }

    /// Collects the keys of the tree in the given `order`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Order, Tree};
    ///
    /// let tree = Tree::from_keys([5, 3, 8, 1, 4, 7, 9]);
    ///
    /// assert_eq!(tree.keys(Order::Level), [&5, &3, &8, &1, &4, &7, &9]);
    /// assert_eq!(tree.keys(Order::Post), [&1, &4, &3, &7, &9, &8, &5]);
    /// ```
    pub fn keys(&self, order: Order) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        self.visit(order, |node| keys.push(node.key()));
        keys
    }

    /// Iterates over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter(self.in_order())
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> Node<K> {
    /// Inserts `key` into this subtree and rebalances every node on the way back up.
    /// Returns `false` if the key was already present, in which case nothing changed.
    fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let inserted = match key.cmp(&self.key) {
            Ordering::Less => match self.left.as_mut() {
                Some(left) => left.insert(key),
                None => {
                    self.left = Some(Self::new_boxed(key));
                    true
                }
            },
            Ordering::Equal => false,
            Ordering::Greater => match self.right.as_mut() {
                Some(right) => right.insert(key),
                None => {
                    self.right = Some(Self::new_boxed(key));
                    true
                }
            },
        };

        if inserted {
            self.rebalance();
        }

        if cfg!(debug_assertions) {
            if let Some(left) = self.left() {
                assert!(self.key > left.key);
            }
            if let Some(right) = self.right() {
                assert!(self.key < right.key);
            }
        }
        inserted
    }
}

/// Deletes `key` from the subtree in `link` and returns it. Every node between the deleted
/// one and `link` is rebalanced. If the key isn't found nothing is touched.
fn delete<K>(link: &mut Link<K>, key: &K) -> Option<K>
where
    K: Ord,
{
    let node = link.as_mut()?;
    let deleted = match key.cmp(&node.key) {
        Ordering::Less => delete(&mut node.left, key)?,
        Ordering::Greater => delete(&mut node.right, key)?,
        Ordering::Equal if node.left.is_some() && node.right.is_some() => {
            // Replace this key with its in-order successor, which is unlinked from the
            // right subtree instead of this node.
            let successor = delete_min(&mut node.right)?;
            mem::replace(&mut node.key, successor)
        }
        Ordering::Equal => {
            // At most one child: it takes this node's place. It is already balanced.
            let Node {
                key, left, right, ..
            } = *link.take()?;
            *link = left.or(right);
            return Some(key);
        }
    };

    node.rebalance();
    Some(deleted)
}

/// Unlinks the leftmost node of the subtree in `link`, splicing its right child into its
/// place, and returns its key. Everything above it is rebalanced.
fn delete_min<K>(link: &mut Link<K>) -> Option<K> {
    let node = link.as_mut()?;
    if node.left.is_some() {
        let min = delete_min(&mut node.left);
        node.rebalance();
        return min;
    }

    let Node { key, right, .. } = *link.take()?;
    *link = right;
    Some(key)
}

#[cfg(test)]
impl<K> Tree<K>
where
    K: Ord,
{
    /// Asserts every invariant of the tree: ordering, balance, cached heights and length.
    pub(crate) fn assert_invariants(&self) {
        /// Returns the height and the number of nodes of the subtree.
        fn check<K: Ord>(
            node: Option<&Node<K>>,
            low: Option<&K>,
            high: Option<&K>,
        ) -> (usize, usize) {
            let Some(node) = node else {
                return (0, 0);
            };
            if let Some(low) = low {
                assert!(node.key > *low, "BST order violated");
            }
            if let Some(high) = high {
                assert!(node.key < *high, "BST order violated");
            }

            let (left, left_len) = check(node.left(), low, Some(&node.key));
            let (right, right_len) = check(node.right(), Some(&node.key), high);
            assert!(left.abs_diff(right) <= 1, "unbalanced node");
            assert_eq!(node.height, left.max(right) + 1, "stale height");
            (node.height, 1 + left_len + right_len)
        }

        assert_eq!(check(self.root(), None, None).1, self.len);
        assert!(self.is_balanced());
    }
}
