mod consts;
pub mod error;
pub mod mapper;
pub mod models;
pub mod normalize;
pub mod page;
pub mod sections;
pub mod table;

use scraper::Html;
use tracing::instrument;

pub use crate::consts::TAG_PREFIX;
use crate::error::Result;
pub use crate::mapper::{ItemContext, map_rows};
use crate::models::{ApiItem, DocVersion};
pub use crate::page::{extract_component_tag, extract_plain_text, extract_title};
pub use crate::sections::{ApiSection, api_sections, classify_heading};
pub use crate::table::RawTable;

/// Hex-encoded BLAKE3 digest used to detect unchanged pages.
pub fn content_hash(bytes: impl AsRef<[u8]>) -> String {
    blake3::hash(bytes.as_ref()).to_string()
}

/// Everything the indexer needs from one component page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPage {
    pub component_tag: String,
    pub title: String,
    pub text: String,
    pub items: Vec<ApiItem>,
}

/// Easy, top-level entrypoint: runs the whole pipeline over a fetched page.
///
/// Only fails when the page can't be attributed to a component; a page
/// without any recognisable API tables still extracts, with no items.
#[instrument(skip(html), fields(html_size = html.len()))]
pub fn extract_page(url: &str, version: DocVersion, html: &str) -> Result<ExtractedPage> {
    let extractor = Extractor::from_html(html);
    let component_tag = extractor.component_tag(url)?;
    let context = ItemContext {
        version,
        component_tag: component_tag.clone(),
        source_url: url.to_string(),
    };
    Ok(ExtractedPage {
        title: extractor.title(),
        text: extractor.plain_text(),
        items: extractor.api_items(&context),
        component_tag,
    })
}

/// Extracts every API item (props, events, slots and methods) from raw HTML.
#[instrument(skip(html), fields(html_size = html.len(), tag = %context.component_tag))]
pub fn extract_api_items(html: &str, context: &ItemContext) -> Vec<ApiItem> {
    Extractor::from_html(html).api_items(context)
}

/// A parsed documentation page.
///
/// [`Html`] is neither `Send` nor `Sync`, so an extractor should be created,
/// used and dropped without crossing an `.await`.
#[derive(Debug)]
pub struct Extractor {
    document: Html,
}
impl Extractor {
    pub fn from_document(document: Html) -> Self {
        Self { document }
    }

    pub fn from_html(html: &str) -> Self {
        Self::from_document(Html::parse_document(html))
    }

    pub fn title(&self) -> String {
        page::extract_title(&self.document)
    }

    pub fn plain_text(&self) -> String {
        page::plain_text(&self.document)
    }

    pub fn component_tag(&self, url: &str) -> Result<String> {
        page::extract_component_tag(url, &self.document)
    }

    pub fn api_sections(&self) -> Vec<ApiSection> {
        sections::api_sections(&self.document)
    }

    /// Items of every classified section, concatenated in document order.
    pub fn api_items(&self, context: &ItemContext) -> Vec<ApiItem> {
        self.api_sections()
            .iter()
            .filter_map(|section| section.table.as_ref().map(|table| map_rows(table, section.kind, context)))
            .flatten()
            .collect()
    }
}
