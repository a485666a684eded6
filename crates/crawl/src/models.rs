use antdv_extract::models::DocVersion;

/// Site root of the v3 documentation.
pub const DEFAULT_V3_BASE_URL: &str = "https://3x.antdv.com";
/// Site root of the v4 documentation.
pub const DEFAULT_V4_BASE_URL: &str = "https://antdv.com";

/// A component page linked from the overview page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredPage {
    pub url: String,
    pub title: String,
}

/// Raw markup of a fetched page plus its content hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub html: String,
    pub content_hash: String,
}
impl FetchedPage {
    pub fn new(html: String) -> Self {
        let content_hash = antdv_extract::content_hash(&html);
        Self { html, content_hash }
    }
}

/// Site root for each documentation version, without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrls {
    pub v3: String,
    pub v4: String,
}
impl BaseUrls {
    pub fn new(v3: impl Into<String>, v4: impl Into<String>) -> Self {
        let trim = |url: String| url.trim_end_matches('/').to_string();
        Self { v3: trim(v3.into()), v4: trim(v4.into()) }
    }

    pub fn get(&self, version: DocVersion) -> &str {
        match version {
            DocVersion::V3 => &self.v3,
            DocVersion::V4 => &self.v4,
        }
    }

    /// The page listing every component of a version.
    pub fn overview_url(&self, version: DocVersion) -> String {
        format!("{}/components/overview-cn/", self.get(version))
    }
}
impl Default for BaseUrls {
    fn default() -> Self {
        Self::new(DEFAULT_V3_BASE_URL, DEFAULT_V4_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_urls() {
        let urls = BaseUrls::default();
        assert_eq!(urls.overview_url(DocVersion::V3), "https://3x.antdv.com/components/overview-cn/");
        assert_eq!(urls.overview_url(DocVersion::V4), "https://antdv.com/components/overview-cn/");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let urls = BaseUrls::new("http://localhost:8080/", "http://localhost:8081//");
        assert_eq!(urls.get(DocVersion::V3), "http://localhost:8080");
        assert_eq!(urls.overview_url(DocVersion::V4), "http://localhost:8081/components/overview-cn/");
    }

    #[test]
    fn test_fetched_page_hash() {
        let page = FetchedPage::new("<html></html>".to_string());
        assert_eq!(page.content_hash, antdv_extract::content_hash("<html></html>"));
    }
}
