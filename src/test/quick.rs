use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// a set in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Add the element to the set
    Insert(T),
    /// Remove the element from the set
    Remove(T),
    /// Empty the set
    Clear,
    /// Compare iterators
    Iter,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Clearing is rare so sets get a
    /// chance to grow between clears.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 0, 1, 1, 1, 2, 3, 3]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => Op::Clear,
            3 => Op::Iter,
            _ => unreachable!(),
        }
    }
}
