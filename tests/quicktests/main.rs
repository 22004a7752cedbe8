mod tree_set;

use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// a set in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Add the element to the set
    Insert(T),
    /// Remove the element from the set
    Remove(T),
    /// Empty the set
    Clear,
    /// Check every element the model holds
    Iter,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        // Clearing is rare so sets get a chance to grow between clears.
        match g.choose(&[0, 0, 0, 0, 1, 1, 1, 2, 3, 3]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => Op::Clear,
            3 => Op::Iter,
            _ => unreachable!(),
        }
    }
}
