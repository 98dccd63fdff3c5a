//! This crate exposes a self-balancing Binary Search Tree (an AVL tree)
//! of unique, ordered keys.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the right subtree.
//!
//! ## Balance
//!
//! Inserting ascending keys into a plain BST builds a linked list with a height of `N`.
//! An AVL tree additionally keeps, for every `Node`, the heights of its two subtrees within
//! one of each other (their difference is the node's "balance factor"). This limits the
//! height to `O(lg N)`. Whenever an insert or delete pushes a balance factor to ±2, the
//! offending `Node` is repaired on the spot with a rotation before moving up to its parent.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::{Order, Tree};
//!
//! let mut tree = Tree::from_keys([5, 3, 8, 1, 4, 7, 9]);
//! tree.insert(6);
//! tree.delete(&3);
//!
//! assert_eq!(tree.keys(Order::In), [&1, &4, &5, &6, &7, &8, &9]);
//! assert_eq!(tree.depth(&6), Ok(3));
//! assert!(tree.is_balanced());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod build;
mod error;
mod node;
mod pretty;
mod rotate;
mod traversal;
mod tree;

pub use error::{Error, Result};
pub use node::Node;
pub use traversal::{InOrder, Iter, LevelOrder, Order, PostOrder, PreOrder};
pub use tree::Tree;
