//! Error types for restcheck core operations.

use thiserror::Error;

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while interpreting caller-supplied route configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The action token does not name a REST action.
    ///
    /// Unknown tokens are a caller programming error and are rejected
    /// eagerly rather than silently skipped.
    #[error(
        "unknown REST action `{0}` (expected one of: index, show, new, create, edit, update, destroy)"
    )]
    UnknownAction(String),

    /// The resource token was empty after normalization.
    #[error("resource token must not be empty")]
    EmptyResource,
}
