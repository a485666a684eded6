//! In-memory fetcher for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::Fetcher;
use crate::error::{ErrorKind, Result};
use crate::models::{BaseUrls, FetchedPage};

/// Serves pages from a `HashMap` keyed by URL, with no delay.
///
/// Unknown URLs answer like a missing page would (`HttpStatus` 404). Pages
/// can be swapped between calls to simulate documentation changing upstream.
///
/// # Examples
///
/// ```
/// use antdv_crawl::{Fetcher, MockFetcher};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let fetcher = MockFetcher::with_pages([
///     ("https://antdv.com/components/button-cn", "<h1>Button</h1>"),
/// ]);
/// let page = fetcher.fetch_page("https://antdv.com/components/button-cn").await?;
/// assert_eq!(page.html, "<h1>Button</h1>");
/// assert!(fetcher.fetch_page("https://antdv.com/components/nope-cn").await.is_err());
/// assert_eq!(fetcher.fetch_count(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MockFetcher {
    base_urls: BaseUrls,
    pages: RwLock<HashMap<String, String>>,
    fetches: AtomicUsize,
}

impl MockFetcher {
    pub fn with_pages(pages: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        let pages = pages.into_iter().map(|(url, html)| (url.into(), html.into())).collect();
        Self {
            pages: RwLock::new(pages),
            ..Self::default()
        }
    }

    pub fn with_base_urls(mut self, base_urls: BaseUrls) -> Self {
        self.base_urls = base_urls;
        self
    }

    /// Add or replace the markup served for `url`.
    pub async fn set_page(&self, url: impl Into<String>, html: impl Into<String>) {
        self.pages.write().await.insert(url.into(), html.into());
    }

    /// Number of `fetch_page` calls so far, including failed ones.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    fn base_urls(&self) -> &BaseUrls {
        &self.base_urls
    }

    async fn fetch_page(&self, url: &str) -> Result<FetchedPage> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let Some(html) = self.pages.read().await.get(url).cloned() else {
            exn::bail!(ErrorKind::HttpStatus {
                status: 404,
                url: url.to_string(),
            });
        };
        Ok(FetchedPage::new(html))
    }
}
