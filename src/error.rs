//! Errors surfaced by tree queries.

use thiserror::Error;

/// The ways a query against a tree can fail.
///
/// Removing a value that isn't in a tree is *not* an error. That is a no-op which returns `None`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The tree has no nodes so there is nothing to return.
    #[error("the tree is empty")]
    EmptyCollection,
}
