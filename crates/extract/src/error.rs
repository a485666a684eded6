//! Extraction Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.
//!
//! Most of the extraction pipeline is deliberately infallible: a heading
//! without a table, a header nobody recognises or a type without literals are
//! all represented as empty lists or absent fields. Only the few things a page
//! genuinely cannot be indexed without end up here.

use derive_more::{Display, Error};

/// An extraction error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Neither the URL nor the first code sample names a component.
    #[display("could not extract component tag from {_0}")]
    UnresolvableTag(#[error(not(source))] String),
    /// A documentation set version token that isn't known.
    #[display("invalid version '{_0}', expected one of: v3, v4")]
    InvalidVersion(#[error(not(source))] String),
    /// A stored value that doesn't parse back into its model.
    #[display("failed to parse field '{field}', found value: {value}")]
    ParseError {
        /// The field that failed to parse.
        field: &'static str,
        /// The offending value.
        value: String,
    },
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // The HTML either names a component or it doesn't.
        false
    }
}
