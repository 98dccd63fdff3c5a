use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// a tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K> {
    /// Insert the K into the tree
    Insert(K),
    /// Remove the K from the tree
    Remove(K),
    /// Compare iterators
    Iter,
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Inserts are weighted
    /// more heavily than removals so that trees get deep enough to need rotations.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).unwrap() {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::Remove(K::arbitrary(g)),
            2 => Op::Iter,
            _ => unreachable!(),
        }
    }
}
