//! The set interface, for code that only needs uniqueness and membership and shouldn't care how
//! the set is stored.

use crate::TreeSet;

/// A collection of unique elements.
///
/// # Examples
///
/// ```
/// use ordered_tree_set::{OrderedSet, TreeSet};
///
/// fn dedup_count<S: OrderedSet<u32>>(set: &mut S, xs: &[u32]) -> usize {
///     for x in xs {
///         set.add(*x);
///     }
///     set.size()
/// }
///
/// assert_eq!(dedup_count(&mut TreeSet::new(), &[3, 1, 3, 2, 1]), 3);
/// ```
pub trait OrderedSet<T> {
    /// Adds `element` if it isn't already present. Returns `true` if it was added.
    fn add(&mut self, element: T) -> bool;

    /// Makes the set empty.
    fn clear(&mut self);

    /// Whether `element` is in the set.
    fn contains(&self, element: &T) -> bool;

    /// Whether the set has no elements.
    fn is_empty(&self) -> bool;

    /// Removes `element`. Returns `true` if it was present.
    fn remove(&mut self, element: &T) -> bool;

    /// The number of elements in the set.
    fn size(&self) -> usize;
}

impl<T: Ord> OrderedSet<T> for TreeSet<T> {
    fn add(&mut self, element: T) -> bool {
        TreeSet::add(self, element)
    }

    fn clear(&mut self) {
        TreeSet::clear(self)
    }

    fn contains(&self, element: &T) -> bool {
        TreeSet::contains(self, element)
    }

    fn is_empty(&self) -> bool {
        TreeSet::is_empty(self)
    }

    fn remove(&mut self, element: &T) -> bool {
        TreeSet::remove(self, element)
    }

    fn size(&self) -> usize {
        TreeSet::size(self)
    }
}
