mod consts;
mod discover;
pub mod error;
pub mod fetcher;
pub mod models;

use std::sync::Arc;

pub use crate::discover::discover_links;
pub use crate::fetcher::{CrawlOptions, Fetcher, HttpFetcher};
#[cfg(feature = "mock")]
pub use crate::fetcher::MockFetcher;
pub use crate::models::{BaseUrls, DiscoveredPage, FetchedPage};

pub type FetcherHandle = Arc<dyn Fetcher>;
