use antdv_cache::{ApiItemHit, PageHit};
use antdv_extract::models::{ApiItem, ApiKind, Component, DocVersion};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultType {
    Page,
    Api,
}

/// One entry of a merged full-text search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub result_type: ResultType,
    pub title: String,
    pub snippet: String,
    pub url: String,
    pub version: DocVersion,
}
impl From<PageHit> for SearchResult {
    fn from(hit: PageHit) -> Self {
        Self {
            result_type: ResultType::Page,
            title: hit.title,
            snippet: hit.snippet,
            url: hit.url,
            version: hit.version,
        }
    }
}
impl From<ApiItemHit> for SearchResult {
    fn from(hit: ApiItemHit) -> Self {
        // Matches on the tag or name alone produce an empty snippet.
        let snippet = match hit.snippet.is_empty() {
            true => hit.description.unwrap_or_default(),
            false => hit.snippet,
        };
        Self {
            result_type: ResultType::Api,
            title: format!("{}.{} ({})", hit.component_tag, hit.name, hit.kind),
            snippet,
            url: hit.source_url,
            version: hit.version,
        }
    }
}

/// A component with its API items grouped by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentApi {
    pub component: Component,
    pub props: Vec<ApiItem>,
    pub events: Vec<ApiItem>,
    pub slots: Vec<ApiItem>,
    pub methods: Vec<ApiItem>,
}
impl ComponentApi {
    pub(crate) fn new(component: Component, items: Vec<ApiItem>) -> Self {
        let mut api = Self {
            component,
            props: Vec::new(),
            events: Vec::new(),
            slots: Vec::new(),
            methods: Vec::new(),
        };
        for item in items {
            match item.kind {
                ApiKind::Props => api.props.push(item),
                ApiKind::Events => api.events.push(item),
                ApiKind::Slots => api.slots.push(item),
                ApiKind::Methods => api.methods.push(item),
            }
        }
        api
    }
}

/// Outcome of looking up a single API item by name.
///
/// Serializes as `{"found": true, "item": ...}` or
/// `{"found": false, "suggestions": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropLookup {
    Found { item: ApiItem },
    /// Items whose name contains the requested one, possibly empty.
    NotFound { suggestions: Vec<ApiItem> },
}
impl Serialize for PropLookup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PropLookup", 2)?;
        match self {
            Self::Found { item } => {
                state.serialize_field("found", &true)?;
                state.serialize_field("item", item)?;
            },
            Self::NotFound { suggestions } => {
                state.serialize_field("found", &false)?;
                state.serialize_field("suggestions", suggestions)?;
            },
        }
        state.end()
    }
}
