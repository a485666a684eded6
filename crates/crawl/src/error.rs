//! Crawl Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A crawl error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for crawl operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The server answered, but not with a success status.
    #[display("HTTP {status}: {url}")]
    HttpStatus {
        status: u16,
        url: String,
    },
    /// Connection, TLS, timeout or body decoding failure.
    #[display("network error fetching {_0}")]
    Network(#[error(not(source))] String),
    /// The HTTP client could not be constructed (bad user agent, TLS backend).
    #[display("could not build HTTP client")]
    Client,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            Self::Network(_) => true,
            Self::Client => false,
        }
    }
}
