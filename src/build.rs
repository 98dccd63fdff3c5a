//! Building minimal-height trees out of sorted keys.

use crate::node::{Link, Node};

/// Sorts `keys` and drops duplicates. `sort` is stable, so the first of a run of equal keys
/// is the one that is kept.
pub(crate) fn sorted_unique<K, I>(keys: I) -> Vec<K>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    let mut keys: Vec<K> = keys.into_iter().collect();
    keys.sort();
    keys.dedup();
    keys
}

/// Builds a tree out of the next `len` keys of `sorted`, which must be strictly ascending.
///
/// This is the usual "pick the middle element as the root and recurse on both halves"
/// construction. Because the keys arrive in order, the left half is built before the middle
/// key is taken, then the right half afterwards. That lets us move keys straight out of the
/// iterator instead of slicing and cloning.
///
/// The result has a height of `ceil(log2(len + 1))`.
pub(crate) fn build<K, I>(len: usize, sorted: &mut I) -> Link<K>
where
    I: Iterator<Item = K>,
{
    if len == 0 {
        return None;
    }

    let mid = len / 2;
    let left = build(mid, sorted);
    let mut node = Node::new_boxed(sorted.next()?);
    node.left = left;
    node.right = build(len - mid - 1, sorted);
    node.fix_height();

    Some(node)
}

/// Moves every key out of the subtree in ascending order, dropping the nodes as it goes.
pub(crate) fn drain_in_order<K>(link: Link<K>, out: &mut Vec<K>) {
    if let Some(node) = link {
        let Node {
            key, left, right, ..
        } = *node;
        drain_in_order(left, out);
        out.push(key);
        drain_in_order(right, out);
    }
}
