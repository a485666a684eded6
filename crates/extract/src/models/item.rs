use serde::{Deserialize, Serialize};

use super::{ApiKind, DocVersion};

/// One documented member (prop, event, slot or method) of a component.
///
/// Optional fields are `None` when the documentation table didn't specify
/// them, never an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiItem {
    pub version: DocVersion,
    /// Canonical tag of the owning component (e.g. `a-button`).
    pub component_tag: String,
    pub kind: ApiKind,
    pub name: String,
    /// Type expression exactly as documented (e.g. `'small' | 'large'`).
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub required: bool,
    pub default_value: Option<String>,
    pub description: Option<String>,
    /// Enumerated literal values, in documentation order.
    pub enum_values: Option<Vec<String>>,
    pub since: Option<String>,
    pub deprecated: Option<String>,
    pub source_url: String,
}
