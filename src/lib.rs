//! This crate exposes an ordered set, [`TreeSet`], stored in a Binary Search Tree.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). [`TreeSet`] does not rebalance itself, so its
//! height depends entirely on insertion order: random orders give `O(lg N)` height while sorted
//! input gives a chain of height `N`. BSTs also naturally support sorted iteration by visiting
//! the left subtree, then the subtree root, then the right subtree.
//!
//! ## Features
//!
//! - `serde`: implements `Serialize` and `Deserialize` for [`TreeSet`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod iter;
pub mod set;
pub mod tree_set;
mod util;

#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(test)]
mod test;

pub use error::{Result, TreeSetError};
pub use set::OrderedSet;
pub use tree_set::TreeSet;
