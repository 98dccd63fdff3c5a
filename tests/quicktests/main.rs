//! Property tests against the public API, checking a `Tree` against `BTreeSet` as a model.

use quickcheck::{Arbitrary, Gen};

mod tree;

/// An enum for the various kinds of "things" to do to
/// a tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K> {
    /// Insert the K into the tree
    Insert(K),
    /// Remove the K from the tree
    Remove(K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(K::arbitrary(g))
        } else {
            Op::Remove(K::arbitrary(g))
        }
    }
}
