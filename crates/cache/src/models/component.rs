use antdv_extract::models::{Component, DocVersion};
use exn::ResultExt;

use crate::error::{Error, ErrorKind};

#[derive(sqlx::FromRow)]
pub(crate) struct ComponentRow {
    pub(crate) version: String,
    pub(crate) tag: String,
    pub(crate) title: String,
    pub(crate) doc_url: String,
    /// JSON array.
    pub(crate) aliases: String,
}
impl TryFrom<&Component> for ComponentRow {
    type Error = Error;
    fn try_from(component: &Component) -> Result<Self, Self::Error> {
        Ok(Self {
            version: component.version.to_string(),
            tag: component.tag.clone(),
            title: component.title.clone(),
            doc_url: component.doc_url.clone(),
            aliases: serde_json::to_string(&component.aliases).or_raise(|| ErrorKind::InvalidData("aliases"))?,
        })
    }
}
impl TryFrom<ComponentRow> for Component {
    type Error = Error;
    fn try_from(row: ComponentRow) -> Result<Self, Self::Error> {
        Ok(Self {
            version: row.version.parse::<DocVersion>().or_raise(|| ErrorKind::InvalidData("version"))?,
            aliases: serde_json::from_str(&row.aliases).or_raise(|| ErrorKind::InvalidData("aliases"))?,
            tag: row.tag,
            title: row.title,
            doc_url: row.doc_url,
        })
    }
}
