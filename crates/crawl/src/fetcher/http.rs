use std::time::Duration;

use async_trait::async_trait;
use exn::ResultExt;
use reqwest::Client;
use tokio::sync::Mutex;
use tokio::time::{Instant, sleep};
use tracing::{debug, info, instrument};

use super::Fetcher;
use crate::error::{ErrorKind, Result};
use crate::models::{BaseUrls, FetchedPage};

pub const DEFAULT_USER_AGENT: &str = concat!("antdv-docs-indexer/", env!("CARGO_PKG_VERSION"));
/// Quiet period between the end of one fetch and the start of the next.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct CrawlOptions {
    pub user_agent: String,
    pub delay: Duration,
    pub base_urls: BaseUrls,
}
impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            delay: DEFAULT_DELAY,
            base_urls: BaseUrls::default(),
        }
    }
}

/// Fetches pages over HTTP, one at a time.
///
/// The lock around the last fetch time is held for the whole request, so
/// concurrent callers queue up and every request starts at least `delay`
/// after the previous one finished.
#[derive(Debug)]
pub struct HttpFetcher {
    client: Client,
    delay: Duration,
    base_urls: BaseUrls,
    last_fetch: Mutex<Option<Instant>>,
}
impl HttpFetcher {
    pub fn new(options: CrawlOptions) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&options.user_agent)
            .redirect(reqwest::redirect::Policy::limited(5))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .or_raise(|| ErrorKind::Client)?;
        Ok(Self {
            client,
            delay: options.delay,
            base_urls: options.base_urls,
            last_fetch: Mutex::new(None),
        })
    }

    async fn get(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .or_raise(|| ErrorKind::Network(url.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            exn::bail!(ErrorKind::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        response.text().await.or_raise(|| ErrorKind::Network(url.to_string()))
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    fn base_urls(&self) -> &BaseUrls {
        &self.base_urls
    }

    #[instrument(skip(self))]
    async fn fetch_page(&self, url: &str) -> Result<FetchedPage> {
        let mut last_fetch = self.last_fetch.lock().await;
        let wait = remaining_delay(*last_fetch, self.delay, Instant::now());
        if !wait.is_zero() {
            debug!(wait_ms = wait.as_millis() as u64, "waiting before next fetch");
            sleep(wait).await;
        }
        info!("fetching");
        let result = self.get(url).await;
        // Failed requests count towards the delay too.
        *last_fetch = Some(Instant::now());
        let html = result?;
        Ok(FetchedPage::new(html))
    }
}

/// How long to wait before the next fetch may start.
fn remaining_delay(last_fetch: Option<Instant>, delay: Duration, now: Instant) -> Duration {
    last_fetch
        .map(|last| (last + delay).saturating_duration_since(now))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::first_fetch(None, 0)]
    #[case::just_finished(Some(0), 1000)]
    #[case::partway(Some(400), 600)]
    #[case::elapsed(Some(1000), 0)]
    #[case::long_ago(Some(5000), 0)]
    fn test_remaining_delay(#[case] elapsed_ms: Option<u64>, #[case] expected_ms: u64) {
        let now = Instant::now();
        let last = elapsed_ms.map(|ms| now - Duration::from_millis(ms));
        assert_eq!(
            remaining_delay(last, DEFAULT_DELAY, now),
            Duration::from_millis(expected_ms)
        );
    }

    #[test]
    fn test_zero_delay_never_waits() {
        let now = Instant::now();
        assert_eq!(remaining_delay(Some(now), Duration::ZERO, now), Duration::ZERO);
    }

    #[test]
    fn test_default_user_agent() {
        assert!(DEFAULT_USER_AGENT.starts_with("antdv-docs-indexer/"));
        let fetcher = HttpFetcher::new(CrawlOptions::default()).unwrap();
        assert_eq!(fetcher.base_urls().get(antdv_extract::models::DocVersion::V4), "https://antdv.com");
    }
}
