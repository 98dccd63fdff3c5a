//! Depth-first and breadth-first walks over a tree. Every walk keeps its own stack or queue
//! instead of recursing, so they can be paused and resumed as ordinary iterators.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::Node;

/// The order in which a walk visits nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Breadth first: the root, then its children left to right, then their children, ...
    Level,
    /// A node, then its left subtree, then its right subtree.
    Pre,
    /// The left subtree, then the node, then the right subtree. Yields keys in ascending
    /// order.
    In,
    /// The left subtree, then the right subtree, then the node.
    Post,
}

/// Iterator over the nodes of a tree in [level order][Order::Level].
#[derive(Debug, Clone)]
pub struct LevelOrder<'a, K> {
    queue: VecDeque<&'a Node<K>>,
}

impl<'a, K> LevelOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for LevelOrder<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node)
    }
}

impl<K> FusedIterator for LevelOrder<'_, K> {}

/// Iterator over the nodes of a tree in [pre-order][Order::Pre].
#[derive(Debug, Clone)]
pub struct PreOrder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> PreOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so that the left subtree is popped first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node)
    }
}

impl<K> FusedIterator for PreOrder<'_, K> {}

/// Iterator over the nodes of a tree in [in-order][Order::In], i.e. ascending by key.
#[derive(Debug, Clone)]
pub struct InOrder<'a, K> {
    /// Nodes whose left subtree is being (or has been) walked but which haven't been yielded.
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> InOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node)
    }
}

impl<K> FusedIterator for InOrder<'_, K> {}

/// Iterator over the nodes of a tree in [post-order][Order::Post].
#[derive(Debug, Clone)]
pub struct PostOrder<'a, K> {
    /// Each node is pushed twice: once to be expanded into its children and, beneath them,
    /// once more to be yielded after they are done.
    stack: Vec<(&'a Node<K>, bool)>,
}

impl<'a, K> PostOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.into_iter().map(|n| (n, false)).collect(),
        }
    }
}

impl<'a, K> Iterator for PostOrder<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node);
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
    }
}

impl<K> FusedIterator for PostOrder<'_, K> {}

/// Ascending iterator over the keys of a tree. Returned by [`Tree::iter`][crate::Tree::iter].
#[derive(Debug, Clone)]
pub struct Iter<'a, K>(pub(crate) InOrder<'a, K>);

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Node::key)
    }
}

impl<K> FusedIterator for Iter<'_, K> {}
