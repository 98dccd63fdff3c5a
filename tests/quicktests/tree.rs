use balanced_bst::{Node, Order, Tree};
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Remove(k) => {
                bst.delete(k);
                set.remove(k);
            }
        }
    }
}

/// Every key in the left subtree of every node is smaller than it, every key in the right
/// subtree is larger.
fn is_ordered<K: Ord>(tree: &Tree<K>) -> bool {
    fn within<K: Ord>(node: Option<&Node<K>>, low: Option<&K>, high: Option<&K>) -> bool {
        let Some(node) = node else {
            return true;
        };
        low.map_or(true, |low| node.key() > low)
            && high.map_or(true, |high| node.key() < high)
            && within(node.left(), low, Some(node.key()))
            && within(node.right(), Some(node.key()), high)
    }

    within(tree.root(), None, None)
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.iter().eq(set.iter()) && tree.len() == set.len()
}

#[quickcheck]
fn stays_balanced_and_ordered(ops: Vec<Op<i16>>) -> bool {
    let mut tree = Tree::new();

    ops.iter().all(|op| {
        match op {
            Op::Insert(k) => {
                tree.insert(*k);
            }
            Op::Remove(k) => {
                tree.delete(k);
            }
        }
        tree.is_balanced() && is_ordered(&tree)
    })
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i32>) -> bool {
    let tree = Tree::from_keys(xs);
    let keys = tree.keys(Order::In);

    keys.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn build_has_minimal_height(xs: Vec<u16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let n = tree.len();

    // ceil(log2(n + 1))
    tree.height() == (usize::BITS - n.leading_zeros()) as usize
}

#[quickcheck]
fn duplicate_insert_is_a_no_op(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let before = tree.clone();

    xs.iter().all(|x| !tree.insert(*x)) && tree == before
}

#[quickcheck]
fn deleting_absent_key_is_a_no_op(xs: Vec<i8>, missing: i8) -> bool {
    let mut tree = Tree::from_keys(xs.into_iter().filter(|&x| x != missing));
    let before = tree.clone();

    tree.delete(&missing).is_none() && tree == before
}

#[quickcheck]
fn depth_is_within_height(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter()
        .all(|x| matches!(tree.depth(x), Ok(depth) if depth < tree.height()))
}

#[quickcheck]
fn every_order_visits_every_key(xs: Vec<i8>) -> bool {
    let tree = Tree::from_keys(xs);
    let ascending = tree.keys(Order::In);

    [Order::Level, Order::Pre, Order::Post].iter().all(|&order| {
        let mut keys = tree.keys(order);
        keys.sort();
        keys == ascending
    })
}
