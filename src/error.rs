//! Errors reported by [`TreeSet`][crate::TreeSet] operations.
//!
//! Most outcomes of a set operation aren't errors at all: inserting a duplicate or removing a
//! missing element simply reports `false`. The only failure is asking an empty set for one of
//! its extremes.

use thiserror::Error;

/// Errors that can occur when querying a [`TreeSet`][crate::TreeSet].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeSetError {
    /// The operation needs at least one element but the set is empty.
    #[error("cannot take the {operation} of an empty set")]
    EmptySet {
        /// Name of the operation that was attempted (e.g. `"floor"`).
        operation: &'static str,
    },
}

/// Shorthand for results of [`TreeSet`][crate::TreeSet] operations.
pub type Result<T> = std::result::Result<T, TreeSetError>;
