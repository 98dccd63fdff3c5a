//! Errors surfaced by [`Tree`][crate::Tree] lookups.

use thiserror::Error;

/// Errors returned by tree operations that need a key to be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The requested key is not stored in the tree (or the tree is empty).
    #[error("key not found in tree")]
    NotFound,
}

/// Shorthand for results whose error defaults to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
