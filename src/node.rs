//! The tree vertex and the balance oracle built on top of it.

/// An owned, possibly empty, child slot. Every `Node` is owned by exactly one `Link`.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A single vertex of a [`Tree`][crate::Tree]. Holds a key and up to two children.
///
/// `Node`s can't be built or mutated from outside the crate. They are handed out by
/// [`Tree::find`][crate::Tree::find] and the traversal iterators for inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) height: usize,
}

impl<K> Node<K> {
    pub(crate) fn new_boxed(key: K) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// The key stored at this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, if any. All of its keys are smaller than
    /// [`key`][Self::key].
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any. All of its keys are larger than
    /// [`key`][Self::key].
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of levels in the subtree rooted here, counting this node. A leaf has a height
    /// of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_keys([2, 1, 3]);
    ///
    /// assert_eq!(tree.find(&2).unwrap().height(), 2);
    /// assert_eq!(tree.find(&3).unwrap().height(), 1);
    /// ```
    pub fn height(&self) -> usize {
        self.height
    }

    /// The difference in height between the right and left subtrees. See [the Wikipedia
    /// page][wiki] for more details.
    ///
    /// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Balance_factor
    pub fn balance_factor(&self) -> isize {
        height(&self.right) as isize - height(&self.left) as isize
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    pub(crate) fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }
}

/// Height of a child slot. An empty slot has a height of 0.
pub(crate) fn height<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}

/// Walks the whole subtree recomputing every height from its shape, ignoring the cached
/// ones. Returns the subtree's height, or `None` as soon as some node has a balance factor
/// outside `{-1, 0, 1}`.
pub(crate) fn checked_height<K>(node: Option<&Node<K>>) -> Option<usize> {
    let Some(node) = node else {
        return Some(0);
    };
    let left = checked_height(node.left())?;
    let right = checked_height(node.right())?;
    if left.abs_diff(right) > 1 {
        return None;
    }

    Some(left.max(right) + 1)
}

/// Recomputes the height of a subtree from its shape.
#[cfg(test)]
pub(crate) fn measured_height<K>(node: Option<&Node<K>>) -> usize {
    node.map_or(0, |n| {
        measured_height(n.left()).max(measured_height(n.right())) + 1
    })
}
