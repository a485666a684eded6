use antdv_extract::models::{DocVersion, Page};
use exn::ResultExt;
use time::UtcDateTime;

use crate::error::{Error, ErrorKind};

#[derive(sqlx::FromRow)]
pub(crate) struct PageRow {
    pub(crate) url: String,
    pub(crate) version: String,
    pub(crate) title: String,
    pub(crate) html: String,
    pub(crate) text: String,
    pub(crate) fetched_at: i64,
    pub(crate) content_hash: String,
}
impl From<&Page> for PageRow {
    fn from(page: &Page) -> Self {
        Self {
            url: page.url.clone(),
            version: page.version.to_string(),
            title: page.title.clone(),
            html: page.html.clone(),
            text: page.text.clone(),
            fetched_at: page.fetched_at.unix_timestamp(),
            content_hash: page.content_hash.clone(),
        }
    }
}
impl TryFrom<PageRow> for Page {
    type Error = Error;
    fn try_from(row: PageRow) -> Result<Self, Self::Error> {
        Ok(Self {
            version: row.version.parse::<DocVersion>().or_raise(|| ErrorKind::InvalidData("version"))?,
            fetched_at: UtcDateTime::from_unix_timestamp(row.fetched_at)
                .or_raise(|| ErrorKind::InvalidData("fetched_at"))?,
            url: row.url,
            title: row.title,
            html: row.html,
            text: row.text,
            content_hash: row.content_hash,
        })
    }
}
