//! Indexing Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use antdv_extract::models::DocVersion;
use derive_more::{Display, Error};

/// An indexing error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for indexing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The overview page of a version couldn't be fetched; nothing was indexed.
    #[display("could not discover components for {_0}")]
    Discovery(#[error(not(source))] DocVersion),
    /// A component page couldn't be fetched.
    #[display("could not fetch {_0}")]
    Fetch(#[error(not(source))] String),
    /// A component page was fetched but doesn't document a component.
    #[display("could not extract {_0}")]
    Extract(#[error(not(source))] String),
    /// Reading or writing the store failed.
    #[display("cache error")]
    Cache,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Discovery(_) | Self::Fetch(_))
    }
}
