//! The rotation engine. Rotations repair a single node whose balance factor has reached ±2,
//! assuming everything beneath it is already balanced.
//!
//! There are no parent pointers, so a rotation never swaps out the node being repaired.
//! It moves keys and owned subtrees around underneath it instead. The repaired node stays
//! in the same slot of its parent and keeps its allocation. The child that gets pushed
//! down reuses the allocation of the child that got pulled up, so rotating never
//! allocates.

use std::mem;

use tracing::trace;

use crate::node::{height, Node};

impl<K> Node<K> {
    /// Refreshes this node's height and, if it has become unbalanced, rotates it back into
    /// balance. See https://en.wikipedia.org/wiki/AVL_tree#Rebalancing for terminology.
    pub(crate) fn rebalance(&mut self) {
        self.fix_height();
        match (self.balance_factor(), self.left(), self.right()) {
            (-2, Some(left), _) => match left.balance_factor() {
                n if n <= 0 => self.rotate_right(),
                _ => self.rotate_left_right(),
            },
            (2, _, Some(right)) => match right.balance_factor() {
                n if n >= 0 => self.rotate_left(),
                _ => self.rotate_right_left(),
            },
            _ => {}
        }

        if cfg!(debug_assertions) {
            let left_height = height(&self.left);
            let right_height = height(&self.right);
            assert_eq!(self.height, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
        }
    }

    /// Rotate self to the right. This moves the left child's key up into `self` and the key
    /// of `self` down into a new right child. Used to rebalance the tree when the left child
    /// is too tall.
    ///
    /// # Diagram
    ///
    /// ```text
    ///        self(k)                 self(l)
    ///        /     \                 /     \
    ///     left(l)   z   rotate ->   x    pivot(k)
    ///     /    \                          /  \
    ///    x      y                        y    z
    /// ```
    ///
    /// `pivot` is the old left child's allocation, now holding `k`.
    fn rotate_right(&mut self) {
        let Some(mut pivot) = self.left.take() else {
            return;
        };
        trace!(kind = "right", height = self.height, "rotating");

        mem::swap(&mut self.key, &mut pivot.key);
        self.left = pivot.left.take();
        pivot.left = pivot.right.take();
        pivot.right = self.right.take();

        pivot.fix_height();
        self.right = Some(pivot);
        self.fix_height();
    }

    /// Mirror of [`rotate_right`][Self::rotate_right]. Used when the right child is too
    /// tall.
    ///
    /// ```text
    ///     self(k)                        self(r)
    ///     /     \                        /     \
    ///    x    right(r)    rotate ->  pivot(k)   z
    ///          /   \                  /  \
    ///         y     z                x    y
    /// ```
    fn rotate_left(&mut self) {
        let Some(mut pivot) = self.right.take() else {
            return;
        };
        trace!(kind = "left", height = self.height, "rotating");

        mem::swap(&mut self.key, &mut pivot.key);
        self.right = pivot.right.take();
        pivot.right = pivot.left.take();
        pivot.left = self.left.take();

        pivot.fix_height();
        self.left = Some(pivot);
        self.fix_height();
    }

    /// The left child leans right: straighten it out first, then rotate right. Afterwards
    /// `self` holds the key of its old left child's right child.
    fn rotate_left_right(&mut self) {
        trace!(kind = "left-right", height = self.height, "rotating");
        if let Some(left) = self.left.as_mut() {
            left.rotate_left();
        }
        self.rotate_right();
    }

    /// The right child leans left: straighten it out first, then rotate left.
    fn rotate_right_left(&mut self) {
        trace!(kind = "right-left", height = self.height, "rotating");
        if let Some(right) = self.right.as_mut() {
            right.rotate_right();
        }
        self.rotate_left();
    }
}
