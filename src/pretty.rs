//! Sideways rendering of a tree's shape for debugging. The right subtree is drawn above a
//! node and the left subtree below it, so tilting your head to the left shows the tree.

use std::fmt;

use crate::node::Node;
use crate::Tree;

/// Renders the tree shape, one key per line.
///
/// # Examples
///
/// ```
/// use balanced_bst::Tree;
///
/// let tree = Tree::from_keys([1, 2, 3]);
/// let expected = "\
/// │   ┌── 3
/// └── 2
///     └── 1
/// ";
/// assert_eq!(tree.to_string(), expected);
/// ```
impl<K> fmt::Display for Tree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => write_node(f, root, "", true),
            None => Ok(()),
        }
    }
}

fn write_node<K>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<K>,
    prefix: &str,
    is_left: bool,
) -> fmt::Result
where
    K: fmt::Display,
{
    if let Some(right) = node.right() {
        let prefix = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
        write_node(f, right, &prefix, false)?;
    }

    writeln!(f, "{}{}{}", prefix, if is_left { "└── " } else { "┌── " }, node.key())?;

    if let Some(left) = node.left() {
        let prefix = format!("{}{}", prefix, if is_left { "    " } else { "│   " });
        write_node(f, left, &prefix, true)?;
    }

    Ok(())
}
