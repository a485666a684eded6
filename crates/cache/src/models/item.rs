use antdv_extract::models::{ApiItem, ApiKind, DocVersion};
use exn::ResultExt;

use crate::error::{Error, ErrorKind};

#[derive(sqlx::FromRow)]
pub(crate) struct ApiItemRow {
    pub(crate) version: String,
    pub(crate) component_tag: String,
    pub(crate) kind: String,
    pub(crate) name: String,
    #[sqlx(rename = "type")]
    pub(crate) type_name: Option<String>,
    pub(crate) required: bool,
    pub(crate) default_value: Option<String>,
    pub(crate) description: Option<String>,
    /// JSON array.
    pub(crate) enum_values: Option<String>,
    pub(crate) since: Option<String>,
    pub(crate) deprecated: Option<String>,
    pub(crate) source_url: String,
}
impl TryFrom<&ApiItem> for ApiItemRow {
    type Error = Error;
    fn try_from(item: &ApiItem) -> Result<Self, Self::Error> {
        Ok(Self {
            version: item.version.to_string(),
            component_tag: item.component_tag.clone(),
            kind: item.kind.to_string(),
            name: item.name.clone(),
            type_name: item.type_name.clone(),
            required: item.required,
            default_value: item.default_value.clone(),
            description: item.description.clone(),
            enum_values: item
                .enum_values
                .as_ref()
                .map(|values| serde_json::to_string(values).or_raise(|| ErrorKind::InvalidData("enum_values")))
                .transpose()?,
            since: item.since.clone(),
            deprecated: item.deprecated.clone(),
            source_url: item.source_url.clone(),
        })
    }
}
impl TryFrom<ApiItemRow> for ApiItem {
    type Error = Error;
    fn try_from(row: ApiItemRow) -> Result<Self, Self::Error> {
        Ok(Self {
            version: row.version.parse::<DocVersion>().or_raise(|| ErrorKind::InvalidData("version"))?,
            kind: row.kind.parse::<ApiKind>().or_raise(|| ErrorKind::InvalidData("kind"))?,
            enum_values: row
                .enum_values
                .map(|json| serde_json::from_str(&json).or_raise(|| ErrorKind::InvalidData("enum_values")))
                .transpose()?,
            component_tag: row.component_tag,
            name: row.name,
            type_name: row.type_name,
            required: row.required,
            default_value: row.default_value,
            description: row.description,
            since: row.since,
            deprecated: row.deprecated,
            source_url: row.source_url,
        })
    }
}
