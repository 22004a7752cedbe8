//! In-order iterators over a [`TreeSet`][crate::TreeSet].

use std::iter::FusedIterator;

use generational_arena::{Arena, Index};

use crate::tree_set::Node;

/// Walks a tree in order by keeping the left spine of the unvisited part on a stack.
struct Cursor {
    stack: Vec<Index>,
}

impl Cursor {
    fn new<T>(nodes: &Arena<Node<T>>, root: Option<Index>) -> Self {
        let mut cursor = Self { stack: Vec::new() };
        cursor.push_left_spine(nodes, root);
        cursor
    }

    fn push_left_spine<T>(&mut self, nodes: &Arena<Node<T>>, mut next: Option<Index>) {
        while let Some(idx) = next {
            self.stack.push(idx);
            next = nodes[idx].left;
        }
    }

    fn next<T>(&mut self, nodes: &Arena<Node<T>>) -> Option<Index> {
        let idx = self.stack.pop()?;
        self.push_left_spine(nodes, nodes[idx].right);
        Some(idx)
    }
}

/// An iterator over the elements of a `TreeSet` in ascending order.
///
/// It is lazy, advancing one node at a time, and can be cloned to restart from the current
/// position. Because it borrows the set, the set cannot change while it is alive.
///
/// Created by [`TreeSet::iter`][crate::TreeSet::iter].
pub struct Iter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    cursor: Cursor,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(nodes: &'a Arena<Node<T>>, root: Option<Index>, len: usize) -> Self {
        Self {
            nodes,
            cursor: Cursor::new(nodes, root),
            remaining: len,
        }
    }
}

/// Manual implementation of `Clone` so cloning the iterator doesn't require `T: Clone`.
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            cursor: Cursor {
                stack: self.cursor.stack.clone(),
            },
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let idx = self.cursor.next(nodes)?;
        self.remaining -= 1;
        Some(&nodes[idx].element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of a `TreeSet` in ascending order.
///
/// The in-order sequence is captured once when the iterator is built.
///
/// Created by `TreeSet::into_iter`.
pub struct IntoIter<T> {
    elements: std::vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(mut nodes: Arena<Node<T>>, root: Option<Index>) -> Self {
        let mut cursor = Cursor::new(&nodes, root);
        let mut order = Vec::with_capacity(nodes.len());
        while let Some(idx) = cursor.next(&nodes) {
            order.push(idx);
        }

        let elements: Vec<T> = order
            .into_iter()
            .filter_map(|idx| nodes.remove(idx))
            .map(|node| node.element)
            .collect();
        Self {
            elements: elements.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.elements.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.elements.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
