use time::UtcDateTime;

use super::DocVersion;

/// A single fetched documentation page, keyed by URL.
///
/// Re-fetching a page whose `content_hash` hasn't changed leaves the stored
/// row untouched, so `fetched_at` records the last time the content changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub url: String,
    pub version: DocVersion,
    pub title: String,
    pub html: String,
    /// Visible text with scripts/styles stripped and whitespace collapsed.
    pub text: String,
    pub fetched_at: UtcDateTime,
    /// BLAKE3 hash of the raw markup.
    pub content_hash: String,
}
