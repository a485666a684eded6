//! SQLite store for indexed documentation.
//!
//! The store is a cache of the documentation site, not a source of truth: if
//! the database is deleted it can be rebuilt by indexing again.
//!
//! # Architecture
//! - **Pages**: raw markup and visible text of every fetched page, keyed by
//!   URL, with the content hash used to skip unchanged pages.
//! - **Components**: one row per `(version, tag)`, with lookup aliases.
//! - **API items**: props, events, slots and methods of a component,
//!   replaced as a whole whenever the component is re-indexed.
//!
//! Pages and API items are mirrored into FTS5 tables by triggers, so full-text
//! search never needs a separate indexing step.

mod db;
pub mod error;
mod models;
mod repo;

pub use crate::db::Database;
pub use crate::models::{ApiItemHit, PageHit};
pub use crate::repo::Repository;
