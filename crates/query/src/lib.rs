//! Read-side operations over the indexed documentation: full-text search,
//! component listings, component API lookups and single prop lookups.
//!
//! Component names are resolved leniently. `a-button`, `button`, `Button`
//! and the page title `Button 按钮` all name the same component.

pub mod error;
mod models;
mod service;

pub use crate::models::{ComponentApi, PropLookup, ResultType, SearchResult};
pub use crate::service::{DEFAULT_SEARCH_LIMIT, MAX_SUGGESTIONS, QueryService};
