//! Indexing pipeline: discovery, fetch, change detection, extraction and
//! storage of component documentation.
//!
//! Failures are contained per component. A page that can't be fetched or
//! attributed to a component is logged and skipped; only a failed discovery
//! stops a version from being indexed.

pub mod error;
mod index;

pub use crate::index::{ComponentOutcome, Indexer, VersionSummary};
