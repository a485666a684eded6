use antdv_extract::models::{ApiKind, DocVersion};
use exn::ResultExt;

use crate::error::{Error, ErrorKind};

/// A page matching a full-text query.
#[derive(Debug, Clone, PartialEq)]
pub struct PageHit {
    pub url: String,
    pub title: String,
    pub version: DocVersion,
    /// Matching excerpt of the page text, matches wrapped in `<mark>`.
    pub snippet: String,
    /// BM25 score; lower is a better match.
    pub score: f64,
}

/// An API item matching a full-text query.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiItemHit {
    pub version: DocVersion,
    pub component_tag: String,
    pub kind: ApiKind,
    pub name: String,
    pub description: Option<String>,
    pub source_url: String,
    /// Matching excerpt of the description, empty when the match was on
    /// the tag or name only.
    pub snippet: String,
    /// BM25 score; lower is a better match.
    pub score: f64,
}

#[derive(sqlx::FromRow)]
pub(crate) struct PageHitRow {
    url: String,
    title: String,
    version: String,
    snippet: Option<String>,
    score: f64,
}
impl TryFrom<PageHitRow> for PageHit {
    type Error = Error;
    fn try_from(row: PageHitRow) -> Result<Self, Self::Error> {
        Ok(Self {
            version: row.version.parse::<DocVersion>().or_raise(|| ErrorKind::InvalidData("version"))?,
            snippet: row.snippet.unwrap_or_default(),
            url: row.url,
            title: row.title,
            score: row.score,
        })
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct ApiItemHitRow {
    version: String,
    component_tag: String,
    kind: String,
    name: String,
    description: Option<String>,
    source_url: String,
    snippet: Option<String>,
    score: f64,
}
impl TryFrom<ApiItemHitRow> for ApiItemHit {
    type Error = Error;
    fn try_from(row: ApiItemHitRow) -> Result<Self, Self::Error> {
        Ok(Self {
            version: row.version.parse::<DocVersion>().or_raise(|| ErrorKind::InvalidData("version"))?,
            kind: row.kind.parse::<ApiKind>().or_raise(|| ErrorKind::InvalidData("kind"))?,
            snippet: row.snippet.unwrap_or_default(),
            component_tag: row.component_tag,
            name: row.name,
            description: row.description,
            source_url: row.source_url,
            score: row.score,
        })
    }
}
