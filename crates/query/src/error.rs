//! Query Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use antdv_extract::models::DocVersion;
use derive_more::{Display, Error};

/// A query error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for query operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Neither a tag nor an alias matched; check the name or index the version.
    #[display("Component not found: {name} ({version})")]
    ComponentNotFound {
        name: String,
        version: DocVersion,
    },
    /// The store couldn't be read.
    #[display("cache error")]
    Cache,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
