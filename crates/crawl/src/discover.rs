//! Component link discovery on the overview page.

use std::collections::HashSet;

use scraper::Html;
use tracing::{debug, instrument};

use crate::consts::COMPONENT_LINK_SELECTOR;
use crate::models::DiscoveredPage;

/// Collects the component pages linked from an overview page.
///
/// Only Chinese-locale pages (`...-cn`) with a visible link text count, and
/// the overview page never links to itself. Relative links are resolved
/// against `base_url`. The first link to a URL wins.
///
/// # Examples
///
/// ```
/// use antdv_crawl::discover_links;
/// let html = r#"<a href="/components/button-cn">Button 按钮</a>
///               <a href="/components/button">Button</a>"#;
/// let pages = discover_links(html, "https://antdv.com");
/// assert_eq!(pages.len(), 1);
/// assert_eq!(pages[0].url, "https://antdv.com/components/button-cn");
/// ```
#[instrument(skip(html), fields(html_size = html.len()))]
pub fn discover_links(html: &str, base_url: &str) -> Vec<DiscoveredPage> {
    let document = Html::parse_document(html);
    let base_url = base_url.trim_end_matches('/');
    let mut seen = HashSet::new();
    let mut pages = Vec::new();
    for link in document.select(&COMPONENT_LINK_SELECTOR) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        let title = link.text().collect::<String>().trim().to_string();
        if title.is_empty() || href.contains("/overview") || !href.ends_with("-cn") {
            continue;
        }
        let url = match href.starts_with("http") {
            true => href.to_string(),
            false => format!("{base_url}{href}"),
        };
        if seen.insert(url.clone()) {
            pages.push(DiscoveredPage { url, title });
        }
    }
    debug!(count = pages.len(), "discovered component links");
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    const OVERVIEW: &str = r#"<html><body>
        <nav>
          <a href="/components/overview-cn">组件总览</a>
          <a href="/components/button-cn">Button 按钮</a>
          <a href="/components/button-cn">Button</a>
          <a href="/components/icon-cn"><span>Icon 图标</span></a>
          <a href="/components/typography-cn">   </a>
          <a href="/components/grid">Grid</a>
          <a href="/components/layout-cn/#api">Layout</a>
          <a href="https://3x.antdv.com/components/affix-cn">Affix 固钉</a>
          <a href="/docs/vue/introduce-cn">Introduce</a>
          <a>No href</a>
        </nav>
    </body></html>"#;

    #[test]
    fn test_discover_links() {
        let pages = discover_links(OVERVIEW, "https://3x.antdv.com/");
        assert_eq!(
            pages,
            vec![
                DiscoveredPage {
                    url: "https://3x.antdv.com/components/button-cn".to_string(),
                    title: "Button 按钮".to_string(),
                },
                DiscoveredPage {
                    url: "https://3x.antdv.com/components/icon-cn".to_string(),
                    title: "Icon 图标".to_string(),
                },
                DiscoveredPage {
                    url: "https://3x.antdv.com/components/affix-cn".to_string(),
                    title: "Affix 固钉".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_discover_links_empty_page() {
        assert!(discover_links("<html><body><p>maintenance</p></body></html>", "https://antdv.com").is_empty());
    }
}
