//! Fetcher trait and implementations.

mod http;
#[cfg(feature = "mock")]
mod mock;

pub use self::http::{CrawlOptions, DEFAULT_DELAY, DEFAULT_USER_AGENT, HttpFetcher};
#[cfg(feature = "mock")]
pub use self::mock::MockFetcher;
use antdv_extract::models::DocVersion;
use async_trait::async_trait;
use tracing::{info, instrument};

use crate::discover::discover_links;
use crate::error::Result;
use crate::models::{BaseUrls, DiscoveredPage, FetchedPage};

/// Source of documentation pages.
///
/// Implementations decide how pages are retrieved and how politely; the
/// indexer only ever sees markup and content hashes.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Site roots used to resolve overview pages and relative links.
    fn base_urls(&self) -> &BaseUrls;

    /// Fetch the raw markup of a single page.
    ///
    /// # Errors
    /// [`HttpStatus`](crate::error::ErrorKind::HttpStatus) for non-success
    /// responses, [`Network`](crate::error::ErrorKind::Network) when no
    /// response could be read at all.
    async fn fetch_page(&self, url: &str) -> Result<FetchedPage>;

    /// Enumerate the component pages of a version from its overview page.
    #[instrument(skip(self))]
    async fn discover_components(&self, version: DocVersion) -> Result<Vec<DiscoveredPage>> {
        let overview_url = self.base_urls().overview_url(version);
        let overview = self.fetch_page(&overview_url).await?;
        let pages = discover_links(&overview.html, self.base_urls().get(version));
        info!(%version, count = pages.len(), "discovered components");
        Ok(pages)
    }
}
