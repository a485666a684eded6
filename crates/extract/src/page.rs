//! Page-level helpers: title, visible text and owning component.

use exn::OptionExt;
use scraper::{ElementRef, Html, Node};

use crate::consts::{self, TAG_PREFIX};
use crate::error::{ErrorKind, Result};

/// Title used when a page has neither an `<h1>` nor a `<title>`.
pub const UNKNOWN_TITLE: &str = "Unknown";

/// Visible text of a raw HTML document, see [`plain_text`].
pub fn extract_plain_text(html: &str) -> String {
    plain_text(&Html::parse_document(html))
}

/// Text content of the document body, without script/style subtrees and
/// with every run of whitespace collapsed to a single space.
pub fn plain_text(document: &Html) -> String {
    let root = document
        .select(&consts::BODY_SELECTOR)
        .next()
        .unwrap_or_else(|| document.root_element());
    let mut text = String::new();
    collect_text(root, &mut text);
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(inner) if consts::NON_CONTENT_ELEMENTS.contains(&inner.name()) => {},
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    collect_text(child, out);
                }
            },
            _ => {},
        }
    }
}

/// First non-empty of the first `<h1>` and the `<title>`, else
/// [`UNKNOWN_TITLE`].
pub fn extract_title(document: &Html) -> String {
    [&*consts::H1_SELECTOR, &*consts::TITLE_SELECTOR]
        .into_iter()
        .filter_map(|selector| document.select(selector).next())
        .map(|element| element.text().collect::<String>().trim().to_string())
        .find(|text| !text.is_empty())
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string())
}

/// Works out which component a page documents.
///
/// The URL wins (`/components/date-picker-cn` is `a-date-picker`); pages that
/// don't follow the URL convention fall back to the first tag used in the
/// first code sample.
///
/// The URL name is prefixed as is, so `affix` becomes `a-affix`. Query input
/// goes through [`normalize_tag`](crate::normalize::normalize_tag) instead.
pub fn extract_component_tag(url: &str, document: &Html) -> Result<String> {
    if let Some(name) = consts::COMPONENT_URL_REGEX.captures(url).and_then(|captures| captures.get(1)) {
        let name = name.as_str().to_lowercase();
        return Ok(match name.starts_with(TAG_PREFIX) {
            true => name,
            false => format!("{TAG_PREFIX}{name}"),
        });
    }
    document
        .select(&consts::CODE_SELECTOR)
        .next()
        .map(|code| code.text().collect::<String>())
        .and_then(|code| {
            consts::CODE_TAG_REGEX
                .captures(&code)
                .and_then(|captures| captures.get(1))
                .map(|tag| tag.as_str().to_string())
        })
        .ok_or_raise(|| ErrorKind::UnresolvableTag(url.to_string()))
}
