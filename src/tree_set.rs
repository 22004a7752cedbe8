//! An unbalanced BST used as an ordered set. Nodes live in an arena and refer to each other by
//! handle, so every structural change is a handle rewrite and the crate needs no `unsafe`.
//!
//! # Examples
//!
//! ```
//! use ordered_tree_set::TreeSet;
//!
//! let mut set = TreeSet::new();
//!
//! // Nothing in here yet.
//! assert!(!set.contains(&1));
//!
//! assert!(set.add(1));
//! assert!(set.contains(&1));
//!
//! // Adding an element that is already present does nothing.
//! assert!(!set.add(1));
//! assert_eq!(set.size(), 1);
//!
//! assert!(set.remove(&1));
//! assert!(set.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;

use generational_arena::{Arena, Index};
use tracing::{instrument, trace};

use crate::error::{Result, TreeSetError};
use crate::iter::{IntoIter, Iter};
use crate::util::Slot;

/// An ordered set backed by a Binary Search Tree. Elements are kept unique and sorted by their
/// [`Ord`] implementation.
///
/// The tree is never rebalanced: inserting elements in sorted order produces a tree whose depth
/// equals its size, and every operation then costs `O(N)`.
#[derive(Clone)]
pub struct TreeSet<T> {
    nodes: Arena<Node<T>>,
    root: Option<Index>,
    len: usize,
}

/// A single element of the tree along with the handles of its neighbours.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) left: Option<Index>,
    pub(crate) right: Option<Index>,
    parent: Option<Index>,
}

impl<T> Node<T> {
    fn new(element: T, parent: Option<Index>) -> Self {
        Self {
            element,
            left: None,
            right: None,
            parent,
        }
    }
}

impl<T> Default for TreeSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TreeSet<T> {
    /// Generates a new, empty `TreeSet`.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// Generates a `TreeSet` holding just `element`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree_set::TreeSet;
    ///
    /// let set = TreeSet::with_element("a");
    /// assert_eq!(set.size(), 1);
    /// assert!(set.contains(&"a"));
    /// ```
    pub fn with_element(element: T) -> Self {
        let mut nodes = Arena::new();
        let root = nodes.insert(Node::new(element, None));
        Self {
            nodes,
            root: Some(root),
            len: 1,
        }
    }

    /// The number of elements in the set.
    pub fn size(&self) -> usize {
        self.len
    }

    /// The number of elements in the set. Same as [`TreeSet::size`].
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the set has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every element from the set.
    #[instrument(level = "trace", skip_all)]
    pub fn clear(&mut self) {
        trace!(dropped = self.len, "clearing set");
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    /// Returns the smallest element in the set.
    ///
    /// # Errors
    ///
    /// [`TreeSetError::EmptySet`] if there are no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree_set::{TreeSet, TreeSetError};
    ///
    /// let mut set = TreeSet::new();
    /// assert_eq!(set.floor(), Err(TreeSetError::EmptySet { operation: "floor" }));
    ///
    /// set.extend([4, 2, 9]);
    /// assert_eq!(set.floor(), Ok(&2));
    /// ```
    pub fn floor(&self) -> Result<&T> {
        self.root
            .map(|root| &self.nodes[self.leftmost(root)].element)
            .ok_or(TreeSetError::EmptySet { operation: "floor" })
    }

    /// Returns the largest element in the set.
    ///
    /// # Errors
    ///
    /// [`TreeSetError::EmptySet`] if there are no elements.
    pub fn max(&self) -> Result<&T> {
        self.root
            .map(|root| &self.nodes[self.rightmost(root)].element)
            .ok_or(TreeSetError::EmptySet { operation: "max" })
    }

    /// An iterator visiting the elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree_set::TreeSet;
    ///
    /// let set: TreeSet<_> = [5, 3, 8, 1].into_iter().collect();
    /// let sorted: Vec<_> = set.iter().copied().collect();
    /// assert_eq!(sorted, [1, 3, 5, 8]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.root, self.len)
    }

    /// Follows left links from `idx` until there are none.
    fn leftmost(&self, mut idx: Index) -> Index {
        while let Some(left) = self.nodes[idx].left {
            idx = left;
        }
        idx
    }

    /// Follows right links from `idx` until there are none. Starting from a left child, this
    /// finds the in-order predecessor of its parent.
    fn rightmost(&self, mut idx: Index) -> Index {
        while let Some(right) = self.nodes[idx].right {
            idx = right;
        }
        idx
    }

    /// Where the node at `idx` is linked from.
    fn slot_of(&self, idx: Index) -> Slot {
        match self.nodes[idx].parent {
            None => Slot::Root,
            Some(parent) if self.nodes[parent].left == Some(idx) => Slot::Left(parent),
            Some(parent) => Slot::Right(parent),
        }
    }

    /// Puts `child` (and its whole subtree) into `slot`, replacing whatever was linked there.
    fn set_slot(&mut self, slot: Slot, child: Option<Index>) {
        match slot {
            Slot::Root => self.root = child,
            Slot::Left(parent) => self.nodes[parent].left = child,
            Slot::Right(parent) => self.nodes[parent].right = child,
        }
        if let Some(child) = child {
            self.nodes[child].parent = slot.parent();
        }
    }

    /// Detaches the node at `idx` from the tree and returns its element. Whatever ends up in the
    /// node's position is relinked in place: nothing is copied except the in-order predecessor's
    /// element when the node has two children.
    fn unlink(&mut self, idx: Index) -> Option<T> {
        let slot = self.slot_of(idx);
        let node = &self.nodes[idx];

        let removed = match (node.left, node.right) {
            (None, None) => {
                trace!(?slot, "detaching leaf");
                self.set_slot(slot, None);
                self.nodes.remove(idx).map(|node| node.element)
            }
            (Some(child), None) | (None, Some(child)) => {
                trace!(?slot, "promoting only child");
                self.set_slot(slot, Some(child));
                self.nodes.remove(idx).map(|node| node.element)
            }
            (Some(left), Some(_)) => {
                // The predecessor has no right child, so its left subtree can take its place.
                // That place is `idx`'s left slot when the predecessor is `left` itself.
                let predecessor = self.rightmost(left);
                let predecessor_slot = self.slot_of(predecessor);
                trace!(?slot, ?predecessor_slot, "replacing with predecessor");

                let orphans = self.nodes[predecessor].left;
                self.set_slot(predecessor_slot, orphans);
                self.nodes
                    .remove(predecessor)
                    .map(|node| std::mem::replace(&mut self.nodes[idx].element, node.element))
            }
        };

        if removed.is_some() {
            self.len -= 1;
        }
        debug_assert_eq!(self.nodes.len(), self.len);
        debug_assert_eq!(self.root.is_none(), self.len == 0);
        removed
    }
}

impl<T: Ord> TreeSet<T> {
    /// Adds `element` to the set. Returns `false`, leaving the set untouched, if an equal element
    /// is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree_set::TreeSet;
    ///
    /// let mut set = TreeSet::new();
    /// assert!(set.add(3));
    /// assert!(set.add(1));
    /// assert!(!set.add(3));
    ///
    /// assert_eq!(set.size(), 2);
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn add(&mut self, element: T) -> bool {
        let Some(mut current) = self.root else {
            trace!("adding root");
            self.root = Some(self.nodes.insert(Node::new(element, None)));
            self.len += 1;
            return true;
        };

        let slot = loop {
            let node = &self.nodes[current];
            match element.cmp(&node.element) {
                Ordering::Less => match node.left {
                    Some(left) => current = left,
                    None => break Slot::Left(current),
                },
                Ordering::Equal => return false,
                Ordering::Greater => match node.right {
                    Some(right) => current = right,
                    None => break Slot::Right(current),
                },
            }
        };

        let added = self.nodes.insert(Node::new(element, slot.parent()));
        self.set_slot(slot, Some(added));
        self.len += 1;
        trace!(?slot, len = self.len, "attached leaf");

        if cfg!(debug_assertions) {
            let parent = &self.nodes[current];
            if let Some(left) = parent.left {
                assert_eq!(self.nodes[left].element.cmp(&parent.element), Ordering::Less);
            }
            if let Some(right) = parent.right {
                assert_eq!(self.nodes[right].element.cmp(&parent.element), Ordering::Greater);
            }
        }
        true
    }

    /// Whether an element equal to `element` is in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree_set::TreeSet;
    ///
    /// let set = TreeSet::from([1, 2]);
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&42));
    /// ```
    pub fn contains(&self, element: &T) -> bool {
        self.find(element).is_some()
    }

    /// Removes the element equal to `element`. Returns `false`, leaving the set untouched, if
    /// there is no such element.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree_set::TreeSet;
    ///
    /// let mut set = TreeSet::from([5, 3, 8]);
    /// assert!(set.remove(&5));
    /// assert!(!set.remove(&5));
    ///
    /// assert_eq!(set.to_string(), "[3, 8]");
    /// ```
    pub fn remove(&mut self, element: &T) -> bool {
        self.take(element).is_some()
    }

    /// Removes the element equal to `element` and hands back the stored one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree_set::TreeSet;
    ///
    /// let mut set = TreeSet::from([String::from("a")]);
    /// assert_eq!(set.take(&String::from("a")), Some(String::from("a")));
    /// assert_eq!(set.take(&String::from("a")), None);
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn take(&mut self, element: &T) -> Option<T> {
        let found = self.find(element)?;
        self.unlink(found)
    }

    /// Finds the handle of the node holding `element`.
    fn find(&self, element: &T) -> Option<Index> {
        let mut current = self.root;
        while let Some(idx) = current {
            let node = &self.nodes[idx];
            current = match element.cmp(&node.element) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(idx),
                Ordering::Greater => node.right,
            };
        }
        None
    }
}

impl<T: fmt::Debug> fmt::Debug for TreeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the elements in ascending order, e.g. `[1, 3, 4]`.
impl<T: fmt::Display> fmt::Display for TreeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")
    }
}

impl<T: PartialEq> PartialEq for TreeSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for TreeSet<T> {}

impl<T: Ord> FromIterator<T> for TreeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for TreeSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for TreeSet<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T> IntoIterator for TreeSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.nodes, self.root)
    }
}

impl<'a, T> IntoIterator for &'a TreeSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
