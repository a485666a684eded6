//! Locating API tables by their section headings.

use scraper::{ElementRef, Html};
use tracing::trace;

use crate::consts;
use crate::models::ApiKind;
use crate::table::RawTable;

/// Heading keywords per kind, tested in order; the first kind with a matching
/// keyword wins. Note that a bare "API" heading counts as props.
const HEADING_KEYWORDS: &[(ApiKind, &[&str])] = &[
    (ApiKind::Props, &["api", "props", "属性"]),
    (ApiKind::Events, &["event", "事件"]),
    (ApiKind::Slots, &["slot", "插槽"]),
    (ApiKind::Methods, &["method", "方法"]),
];

/// Classifies a section heading by keyword.
///
/// # Examples
///
/// ```
/// use antdv_extract::models::ApiKind;
/// use antdv_extract::sections::classify_heading;
/// assert_eq!(classify_heading("Button Events"), Some(ApiKind::Events));
/// assert_eq!(classify_heading("代码演示"), None);
/// ```
pub fn classify_heading(text: &str) -> Option<ApiKind> {
    let text = text.trim().to_lowercase();
    HEADING_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|(kind, _)| *kind)
}

/// A classified heading and the table that follows it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSection {
    pub kind: ApiKind,
    pub heading: String,
    /// `None` when another section heading came before any table.
    pub table: Option<RawTable>,
}

/// Finds every API section in the document, in document order.
pub fn api_sections(document: &Html) -> Vec<ApiSection> {
    let mut sections = Vec::new();
    for heading in document.select(&consts::HEADING_SELECTOR) {
        let text = heading.text().collect::<String>().trim().to_string();
        let Some(kind) = classify_heading(&text) else {
            continue;
        };
        let table = following_table(heading).map(RawTable::from_element);
        trace!(heading = %text, %kind, has_table = table.is_some(), "classified section heading");
        sections.push(ApiSection { kind, heading: text, table });
    }
    sections
}

/// Walks the heading's following siblings until a table or the next section
/// heading, whichever comes first.
fn following_table(heading: ElementRef<'_>) -> Option<ElementRef<'_>> {
    for sibling in heading.next_siblings().filter_map(ElementRef::wrap) {
        match sibling.value().name() {
            "table" => return Some(sibling),
            "h2" | "h3" => return None,
            _ => {},
        }
    }
    None
}
