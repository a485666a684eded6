//! Bilingual header and cell value normalization.
//!
//! Documentation tables are written in both Chinese and English, with
//! slightly different vocabulary per API kind ("参数" for props, "事件名称"
//! for events, "Method" for methods, ...). Everything funnels into the small
//! set of canonical [`Field`]s the row mapper understands.

use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::LazyLock;

use crate::consts::{self, TAG_PREFIX};

/// Canonical table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Description,
    Type,
    Default,
    Required,
    Values,
    Since,
    Deprecated,
}
impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Type => "type",
            Field::Default => "default",
            Field::Required => "required",
            Field::Values => "values",
            Field::Since => "since",
            Field::Deprecated => "deprecated",
        }
    }
}
impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// A normalized column header.
///
/// Unrecognised headers are kept (lower-cased and trimmed) rather than
/// rejected; the row mapper simply never looks them up.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Header {
    Known(Field),
    Unknown(String),
}
impl Header {
    pub fn as_str(&self) -> &str {
        match self {
            Header::Known(field) => field.as_str(),
            Header::Unknown(raw) => raw.as_str(),
        }
    }

    pub fn field(&self) -> Option<Field> {
        match self {
            Header::Known(field) => Some(*field),
            Header::Unknown(_) => None,
        }
    }
}
impl Display for Header {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
impl PartialEq<str> for Header {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}
impl PartialEq<&str> for Header {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

static HEADERS: LazyLock<HashMap<&'static str, Field>> = LazyLock::new(|| {
    HashMap::from([
        // Props
        ("参数", Field::Name),
        ("属性", Field::Name),
        ("名称", Field::Name),
        ("property", Field::Name),
        ("prop", Field::Name),
        ("name", Field::Name),
        ("说明", Field::Description),
        ("描述", Field::Description),
        ("description", Field::Description),
        ("类型", Field::Type),
        ("type", Field::Type),
        ("默认值", Field::Default),
        ("默认", Field::Default),
        ("default", Field::Default),
        ("default value", Field::Default),
        ("必填", Field::Required),
        ("必选", Field::Required),
        ("required", Field::Required),
        ("可选值", Field::Values),
        ("可选项", Field::Values),
        ("values", Field::Values),
        ("options", Field::Values),
        ("版本", Field::Since),
        ("version", Field::Since),
        ("since", Field::Since),
        ("废弃", Field::Deprecated),
        ("deprecated", Field::Deprecated),
        // Events
        ("事件名称", Field::Name),
        ("事件", Field::Name),
        ("event", Field::Name),
        ("event name", Field::Name),
        ("回调参数", Field::Type),
        ("callback", Field::Type),
        ("callback arguments", Field::Type),
        // Slots
        ("插槽名", Field::Name),
        ("slot", Field::Name),
        ("slot name", Field::Name),
        // Methods
        ("方法名", Field::Name),
        ("方法", Field::Name),
        ("method", Field::Name),
        ("method name", Field::Name),
    ])
});

/// Maps a raw (possibly Chinese) table header onto its canonical field.
///
/// # Examples
///
/// ```
/// use antdv_extract::normalize::{Field, Header, normalize_header};
/// assert_eq!(normalize_header("参数"), Header::Known(Field::Name));
/// assert_eq!(normalize_header(" Default Value "), Header::Known(Field::Default));
/// assert_eq!(normalize_header("Notes"), Header::Unknown("notes".to_string()));
/// ```
pub fn normalize_header(raw: &str) -> Header {
    let lower = raw.trim().to_lowercase();
    match HEADERS.get(lower.as_str()) {
        Some(field) => Header::Known(*field),
        None => Header::Unknown(lower),
    }
}

/// Extracts quoted literals from a union type such as `'small' | "large"`,
/// in order of appearance.
///
/// # Examples
///
/// ```
/// use antdv_extract::normalize::parse_enum_values;
/// assert_eq!(parse_enum_values("'small' | 'middle' | 'large'"), vec!["small", "middle", "large"]);
/// assert!(parse_enum_values("string").is_empty());
/// ```
pub fn parse_enum_values(type_expr: &str) -> Vec<String> {
    consts::QUOTED_LITERAL_REGEX
        .captures_iter(type_expr)
        .filter_map(|captures| captures.get(1).or_else(|| captures.get(2)))
        .map(|literal| literal.as_str().to_string())
        .collect()
}

/// Splits the text of an explicit "values" column on any of the accepted
/// ASCII and full-width delimiters.
///
/// Parts left empty after trimming (`a,,b`, a trailing `|`) are dropped
/// rather than kept as empty literals.
pub fn split_values(raw: &str) -> Vec<String> {
    raw.split(consts::VALUE_DELIMITERS)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns `true` for the handful of tokens documentation uses to mark a
/// required member. Anything else, including an empty cell, is optional.
pub fn parse_required_flag(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "true" | "yes" | "是" | "必填" | "必选")
}

/// Converts a free-form component name into its canonical tag.
///
/// Already-prefixed names pass through (lower-cased). Otherwise the prefix is
/// attached naively: a leading `a` is taken to be the prefix's own letter, so
/// `affix` becomes `a-ffix` rather than `a-affix`. Lookups and indexing both
/// go through this function, so the quirk is at least consistent.
///
/// # Examples
///
/// ```
/// use antdv_extract::normalize::normalize_tag;
/// assert_eq!(normalize_tag("Button"), "a-button");
/// assert_eq!(normalize_tag("a-button"), "a-button");
/// assert_eq!(normalize_tag("affix"), "a-ffix");
/// ```
pub fn normalize_tag(raw: &str) -> String {
    let lower = raw.trim().to_lowercase();
    if lower.starts_with(TAG_PREFIX) {
        return lower;
    }
    let rest = lower.strip_prefix('a').unwrap_or(&lower);
    format!("{TAG_PREFIX}{rest}")
}
