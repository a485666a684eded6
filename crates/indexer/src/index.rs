use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FmtResult};

use antdv_cache::Repository;
use antdv_crawl::FetcherHandle;
use antdv_extract::models::{Component, DocVersion, Page};
use exn::ResultExt;
use time::UtcDateTime;
use tracing::{info, instrument, warn};

use crate::error::{ErrorKind, Result};

/// What happened to a single component page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentOutcome {
    /// The page changed (or is new); page, component and items were written.
    Indexed { tag: String, items: u64 },
    /// The content hash matches the stored page; nothing was written.
    Unchanged,
}

/// Tally of one version's indexing pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSummary {
    pub version: DocVersion,
    pub discovered: usize,
    pub indexed: usize,
    pub unchanged: usize,
    pub failed: usize,
    /// API items written across all indexed components.
    pub items: u64,
}
impl VersionSummary {
    fn new(version: DocVersion, discovered: usize) -> Self {
        Self { version, discovered, indexed: 0, unchanged: 0, failed: 0, items: 0 }
    }
}
impl Display for VersionSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{}: {} components discovered, {} indexed ({} API items), {} unchanged, {} failed",
            self.version, self.discovered, self.indexed, self.items, self.unchanged, self.failed
        )
    }
}

/// Drives discovery, fetching, extraction and storage.
///
/// Components are processed one after the other; the fetcher decides how
/// long to wait between requests.
#[derive(Clone)]
pub struct Indexer {
    fetcher: FetcherHandle,
    repo: Repository,
}
impl Indexer {
    pub fn new(fetcher: FetcherHandle, repo: Repository) -> Self {
        Self { fetcher, repo }
    }

    /// Index every component of a version.
    ///
    /// Only a failed discovery is an error. A component that fails is logged,
    /// counted in [`VersionSummary::failed`], and the loop moves on.
    #[instrument(skip(self))]
    pub async fn index_version(&self, version: DocVersion) -> Result<VersionSummary> {
        let mut pages = self
            .fetcher
            .discover_components(version)
            .await
            .or_raise(|| ErrorKind::Discovery(version))?;
        let mut seen = HashSet::new();
        pages.retain(|page| seen.insert(page.url.clone()));
        info!(count = pages.len(), "indexing components");

        let mut summary = VersionSummary::new(version, pages.len());
        for page in &pages {
            match self.index_component(&page.url, version).await {
                Ok(ComponentOutcome::Indexed { items, .. }) => {
                    summary.indexed += 1;
                    summary.items += items;
                },
                Ok(ComponentOutcome::Unchanged) => summary.unchanged += 1,
                Err(err) => {
                    warn!(url = %page.url, error = ?err, "failed to index component");
                    summary.failed += 1;
                },
            }
        }
        info!(%summary, "finished indexing");
        Ok(summary)
    }

    /// Fetch one component page and store everything extracted from it.
    ///
    /// The page, its component and the component's full item set are written
    /// only when the content hash differs from the stored one.
    #[instrument(skip(self))]
    pub async fn index_component(&self, url: &str, version: DocVersion) -> Result<ComponentOutcome> {
        let fetched = self
            .fetcher
            .fetch_page(url)
            .await
            .or_raise(|| ErrorKind::Fetch(url.to_string()))?;
        let stored_hash = self.repo.page_hash(url).await.or_raise(|| ErrorKind::Cache)?;
        if stored_hash.as_deref() == Some(fetched.content_hash.as_str()) {
            info!("skipped, unchanged");
            return Ok(ComponentOutcome::Unchanged);
        }

        let extracted = antdv_extract::extract_page(url, version, &fetched.html)
            .or_raise(|| ErrorKind::Extract(url.to_string()))?;
        let page = Page {
            url: url.to_string(),
            version,
            title: extracted.title.clone(),
            html: fetched.html,
            text: extracted.text,
            fetched_at: UtcDateTime::now(),
            content_hash: fetched.content_hash,
        };
        let component = Component::new(version, &extracted.component_tag, extracted.title, url);

        self.repo.upsert_page(&page).await.or_raise(|| ErrorKind::Cache)?;
        self.repo.upsert_component(&component).await.or_raise(|| ErrorKind::Cache)?;
        let items = self
            .repo
            .replace_api_items(version, &component.tag, &extracted.items)
            .await
            .or_raise(|| ErrorKind::Cache)?;
        info!(tag = %component.tag, items, "indexed");
        Ok(ComponentOutcome::Indexed { tag: component.tag, items })
    }
}
