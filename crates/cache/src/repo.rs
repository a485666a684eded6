//! Repository for pages, components and their API items.
//!
//! Pages and components are upserted one row at a time by their natural keys.
//! API items have no natural key of their own: the set belonging to a
//! `(version, component_tag)` pair is always replaced wholesale.

use antdv_extract::models::{ApiItem, Component, DocVersion, Page, VersionFilter};
use exn::ResultExt;
use sqlx::SqlitePool;
use tracing::{debug, instrument};

use crate::Database;
use crate::error::{ErrorKind, Result};
use crate::models::{ApiItemHit, ApiItemHitRow, ApiItemRow, ComponentRow, PageHit, PageHitRow, PageRow};

/// Repository over the documentation store.
#[derive(Debug, Clone)]
pub struct Repository {
    pool: SqlitePool,
    dry_run: bool,
}
impl From<&Database> for Repository {
    fn from(db: &Database) -> Self {
        Self { pool: db.pool().clone(), dry_run: false }
    }
}
impl Repository {
    /// Create a new repository with the given connection pool.
    ///
    /// A `dry_run` repository reads normally but silently skips every write.
    pub fn new(pool: SqlitePool, dry_run: bool) -> Self {
        Self { pool, dry_run }
    }

    // =========================================================================
    // Pages
    // =========================================================================

    /// Content hash recorded for the page at `url`, if it was ever stored.
    pub async fn page_hash(&self, url: &str) -> Result<Option<String>> {
        let row: Option<(String,)> = sqlx::query_as(include_str!("../queries/get_page_hash.sql"))
            .bind(url)
            .fetch_optional(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        Ok(row.map(|(hash,)| hash))
    }

    pub async fn get_page(&self, url: &str) -> Result<Option<Page>> {
        let row: Option<PageRow> = sqlx::query_as(include_str!("../queries/get_page.sql"))
            .bind(url)
            .fetch_optional(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        row.map(Page::try_from).transpose()
    }

    /// Insert the page, or overwrite every column of the row with the same URL.
    #[instrument(skip_all, fields(url = %page.url))]
    pub async fn upsert_page(&self, page: &Page) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }
        let row = PageRow::from(page);
        sqlx::query(include_str!("../queries/upsert_page.sql"))
            .bind(row.url)
            .bind(row.version)
            .bind(row.title)
            .bind(row.html)
            .bind(row.text)
            .bind(row.fetched_at)
            .bind(row.content_hash)
            .execute(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        Ok(())
    }

    // =========================================================================
    // Components
    // =========================================================================

    #[instrument(skip_all, fields(version = %component.version, tag = %component.tag))]
    pub async fn upsert_component(&self, component: &Component) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }
        let row = ComponentRow::try_from(component)?;
        sqlx::query(include_str!("../queries/upsert_component.sql"))
            .bind(row.version)
            .bind(row.tag)
            .bind(row.title)
            .bind(row.doc_url)
            .bind(row.aliases)
            .execute(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        Ok(())
    }

    /// Every component of a version, ordered by tag.
    pub async fn list_components(&self, version: DocVersion) -> Result<Vec<Component>> {
        let rows: Vec<ComponentRow> = sqlx::query_as(include_str!("../queries/list_components.sql"))
            .bind(version.as_str())
            .fetch_all(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        rows.into_iter().map(Component::try_from).collect()
    }

    pub async fn get_component(&self, version: DocVersion, tag: &str) -> Result<Option<Component>> {
        let row: Option<ComponentRow> = sqlx::query_as(include_str!("../queries/get_component.sql"))
            .bind(version.as_str())
            .bind(tag)
            .fetch_optional(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        row.map(Component::try_from).transpose()
    }

    // =========================================================================
    // API items
    // =========================================================================

    /// Atomically swap the stored items of a component for `items`.
    ///
    /// Readers see either the complete old set or the complete new one.
    /// Returns the number of items inserted.
    #[instrument(skip(self, items), fields(count = items.len()))]
    pub async fn replace_api_items(&self, version: DocVersion, component_tag: &str, items: &[ApiItem]) -> Result<u64> {
        if self.dry_run {
            return Ok(items.len() as u64);
        }
        let rows = items.iter().map(ApiItemRow::try_from).collect::<Result<Vec<_>>>()?;
        let mut tx = self.pool.begin().await.or_raise(|| ErrorKind::Database)?;
        let deleted = sqlx::query(include_str!("../queries/delete_api_items.sql"))
            .bind(version.as_str())
            .bind(component_tag)
            .execute(&mut *tx)
            .await
            .or_raise(|| ErrorKind::Database)?
            .rows_affected();
        let mut inserted = 0;
        for row in rows {
            inserted += sqlx::query(include_str!("../queries/insert_api_item.sql"))
                .bind(row.version)
                .bind(row.component_tag)
                .bind(row.kind)
                .bind(row.name)
                .bind(row.type_name)
                .bind(row.required)
                .bind(row.default_value)
                .bind(row.description)
                .bind(row.enum_values)
                .bind(row.since)
                .bind(row.deprecated)
                .bind(row.source_url)
                .execute(&mut *tx)
                .await
                .or_raise(|| ErrorKind::Database)?
                .rows_affected();
        }
        tx.commit().await.or_raise(|| ErrorKind::Database)?;
        debug!(deleted, inserted, "replaced api items");
        Ok(inserted)
    }

    /// All items of a component, ordered by kind then name.
    pub async fn api_items_for(&self, version: DocVersion, component_tag: &str) -> Result<Vec<ApiItem>> {
        let rows: Vec<ApiItemRow> = sqlx::query_as(include_str!("../queries/get_api_items.sql"))
            .bind(version.as_str())
            .bind(component_tag)
            .fetch_all(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        rows.into_iter().map(ApiItem::try_from).collect()
    }

    /// The first item of a component with exactly this name, of any kind.
    pub async fn find_api_item(&self, version: DocVersion, component_tag: &str, name: &str) -> Result<Option<ApiItem>> {
        let row: Option<ApiItemRow> = sqlx::query_as(include_str!("../queries/find_api_item.sql"))
            .bind(version.as_str())
            .bind(component_tag)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        row.map(ApiItem::try_from).transpose()
    }

    /// Items of a component whose name contains `fragment` literally.
    pub async fn find_api_items_like(
        &self,
        version: DocVersion,
        component_tag: &str,
        fragment: &str,
        limit: u32,
    ) -> Result<Vec<ApiItem>> {
        let rows: Vec<ApiItemRow> = sqlx::query_as(include_str!("../queries/find_api_items_like.sql"))
            .bind(version.as_str())
            .bind(component_tag)
            .bind(format!("%{}%", escape_like(fragment)))
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        rows.into_iter().map(ApiItem::try_from).collect()
    }

    // =========================================================================
    // Full-text search
    // =========================================================================

    /// Pages matching `query`, best match first.
    #[instrument(skip(self))]
    pub async fn search_pages(&self, query: &str, filter: VersionFilter, limit: u32) -> Result<Vec<PageHit>> {
        let Some(expression) = fts_expression(query) else {
            return Ok(Vec::new());
        };
        let rows: Vec<PageHitRow> = sqlx::query_as(include_str!("../queries/search_pages.sql"))
            .bind(expression)
            .bind(filter.version().map(|version| version.as_str()))
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        rows.into_iter().map(PageHit::try_from).collect()
    }

    /// API items matching `query` on tag, name or description, best match first.
    #[instrument(skip(self))]
    pub async fn search_api_items(&self, query: &str, filter: VersionFilter, limit: u32) -> Result<Vec<ApiItemHit>> {
        let Some(expression) = fts_expression(query) else {
            return Ok(Vec::new());
        };
        let rows: Vec<ApiItemHitRow> = sqlx::query_as(include_str!("../queries/search_api_items.sql"))
            .bind(expression)
            .bind(filter.version().map(|version| version.as_str()))
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        rows.into_iter().map(ApiItemHit::try_from).collect()
    }
}

/// Turns free user input into an FTS5 expression that can't be a syntax
/// error: every term becomes a quoted string, so operators and punctuation
/// are matched literally. `None` when there is nothing to search for.
fn fts_expression(query: &str) -> Option<String> {
    let terms: Vec<_> = query
        .split_whitespace()
        .map(|term| format!("\"{}\"", term.replace('"', "\"\"")))
        .collect();
    (!terms.is_empty()).then(|| terms.join(" "))
}

/// Escapes `LIKE` wildcards for use with `ESCAPE '\'`.
fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use antdv_extract::models::ApiKind;
    use rstest::rstest;
    use time::UtcDateTime;

    async fn repository() -> Repository {
        let db = Database::connect_in_memory().await.unwrap();
        Repository::from(&db)
    }

    fn page(url: &str, version: DocVersion, text: &str, hash: &str) -> Page {
        Page {
            url: url.to_string(),
            version,
            title: "Button 按钮".to_string(),
            html: format!("<p>{text}</p>"),
            text: text.to_string(),
            fetched_at: UtcDateTime::from_unix_timestamp(1_700_000_000).unwrap(),
            content_hash: hash.to_string(),
        }
    }

    fn item(version: DocVersion, tag: &str, kind: ApiKind, name: &str, description: Option<&str>) -> ApiItem {
        ApiItem {
            version,
            component_tag: tag.to_string(),
            kind,
            name: name.to_string(),
            type_name: Some("'small' | 'large'".to_string()),
            required: false,
            default_value: None,
            description: description.map(str::to_string),
            enum_values: Some(vec!["small".to_string(), "large".to_string()]),
            since: None,
            deprecated: None,
            source_url: format!("https://antdv.com/components/{tag}-cn"),
        }
    }

    #[rstest]
    #[case("button", Some(r#""button""#))]
    #[case("  size   loading ", Some(r#""size" "loading""#))]
    #[case(r#"say "hi""#, Some(r#""say" """hi""""#))]
    #[case("a-button OR *", Some(r#""a-button" "OR" "*""#))]
    #[case("", None)]
    #[case("   ", None)]
    fn test_fts_expression(#[case] query: &str, #[case] expected: Option<&str>) {
        assert_eq!(fts_expression(query).as_deref(), expected);
    }

    #[rstest]
    #[case("size", "size")]
    #[case("100%", r"100\%")]
    #[case("on_change", r"on\_change")]
    #[case(r"a\b", r"a\\b")]
    fn test_escape_like(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_like(input), expected);
    }

    #[tokio::test]
    async fn test_page_upsert_overwrites() {
        let repo = repository().await;
        let url = "https://antdv.com/components/button-cn";
        assert_eq!(repo.page_hash(url).await.unwrap(), None);

        repo.upsert_page(&page(url, DocVersion::V4, "old text", "hash-1")).await.unwrap();
        assert_eq!(repo.page_hash(url).await.unwrap().as_deref(), Some("hash-1"));

        let updated = page(url, DocVersion::V4, "new text", "hash-2");
        repo.upsert_page(&updated).await.unwrap();
        assert_eq!(repo.get_page(url).await.unwrap(), Some(updated));

        // The FTS index follows the update.
        assert!(repo.search_pages("old", VersionFilter::All, 10).await.unwrap().is_empty());
        assert_eq!(repo.search_pages("new", VersionFilter::All, 10).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_component_roundtrip_and_ordering() {
        let repo = repository().await;
        let table = Component::new(DocVersion::V4, "a-table", "Table 表格", "https://antdv.com/components/table-cn");
        let button = Component::new(DocVersion::V4, "a-button", "Button 按钮", "https://antdv.com/components/button-cn");
        let old = Component::new(DocVersion::V3, "a-button", "Button", "https://3x.antdv.com/components/button-cn");
        for component in [&table, &button, &old] {
            repo.upsert_component(component).await.unwrap();
        }
        let listed = repo.list_components(DocVersion::V4).await.unwrap();
        assert_eq!(listed, vec![button.clone(), table]);
        assert_eq!(repo.get_component(DocVersion::V3, "a-button").await.unwrap(), Some(old));
        assert_eq!(repo.get_component(DocVersion::V3, "a-table").await.unwrap(), None);

        let renamed = Component::new(DocVersion::V4, "a-button", "Button", "https://antdv.com/components/button-cn");
        repo.upsert_component(&renamed).await.unwrap();
        assert_eq!(repo.list_components(DocVersion::V4).await.unwrap().len(), 2);
        assert_eq!(repo.get_component(DocVersion::V4, "a-button").await.unwrap(), Some(renamed));
    }

    #[tokio::test]
    async fn test_replace_api_items_leaves_no_stale_rows() {
        let repo = repository().await;
        let v4 = DocVersion::V4;
        let first = vec![
            item(v4, "a-button", ApiKind::Props, "size", Some("按钮大小")),
            item(v4, "a-button", ApiKind::Props, "ghost", None),
        ];
        assert_eq!(repo.replace_api_items(v4, "a-button", &first).await.unwrap(), 2);
        // Another component and version are untouched by the replace below.
        let other = vec![item(v4, "a-input", ApiKind::Props, "size", None)];
        repo.replace_api_items(v4, "a-input", &other).await.unwrap();
        let v3 = vec![item(DocVersion::V3, "a-button", ApiKind::Props, "size", None)];
        repo.replace_api_items(DocVersion::V3, "a-button", &v3).await.unwrap();

        let second = vec![item(v4, "a-button", ApiKind::Events, "click", Some("点击按钮时的回调"))];
        assert_eq!(repo.replace_api_items(v4, "a-button", &second).await.unwrap(), 1);

        assert_eq!(repo.api_items_for(v4, "a-button").await.unwrap(), second);
        assert_eq!(repo.api_items_for(v4, "a-input").await.unwrap(), other);
        assert_eq!(repo.api_items_for(DocVersion::V3, "a-button").await.unwrap(), v3);
        assert!(repo.search_api_items("按钮大小", VersionFilter::All, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_api_items_ordered_by_kind_then_name() {
        let repo = repository().await;
        let v4 = DocVersion::V4;
        let items = vec![
            item(v4, "a-button", ApiKind::Props, "size", None),
            item(v4, "a-button", ApiKind::Props, "block", None),
            item(v4, "a-button", ApiKind::Events, "click", None),
            item(v4, "a-button", ApiKind::Props, "block", None),
        ];
        repo.replace_api_items(v4, "a-button", &items).await.unwrap();
        let names: Vec<_> = repo
            .api_items_for(v4, "a-button")
            .await
            .unwrap()
            .into_iter()
            .map(|item| (item.kind, item.name))
            .collect();
        assert_eq!(
            names,
            vec![
                (ApiKind::Events, "click".to_string()),
                (ApiKind::Props, "block".to_string()),
                (ApiKind::Props, "block".to_string()),
                (ApiKind::Props, "size".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_find_api_items() {
        let repo = repository().await;
        let v4 = DocVersion::V4;
        let items = vec![
            item(v4, "a-button", ApiKind::Props, "size", None),
            item(v4, "a-button", ApiKind::Props, "htmlType", None),
            item(v4, "a-button", ApiKind::Props, "type", None),
            item(v4, "a-button", ApiKind::Props, "100%_width", None),
        ];
        repo.replace_api_items(v4, "a-button", &items).await.unwrap();

        let found = repo.find_api_item(v4, "a-button", "type").await.unwrap().unwrap();
        assert_eq!(found.name, "type");
        assert_eq!(found.enum_values, Some(vec!["small".to_string(), "large".to_string()]));
        assert_eq!(repo.find_api_item(v4, "a-button", "Type").await.unwrap(), None);
        assert_eq!(repo.find_api_item(DocVersion::V3, "a-button", "type").await.unwrap(), None);

        let like: Vec<_> = repo
            .find_api_items_like(v4, "a-button", "ype", 5)
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(like, vec!["htmlType", "type"]);
        assert_eq!(repo.find_api_items_like(v4, "a-button", "e", 1).await.unwrap().len(), 1);
        // Wildcards are literal.
        assert_eq!(repo.find_api_items_like(v4, "a-button", "%", 5).await.unwrap().len(), 1);
        assert!(repo.find_api_items_like(v4, "a-button", "_x", 5).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_filters_by_version() {
        let repo = repository().await;
        repo.upsert_page(&page("https://3x.antdv.com/components/button-cn", DocVersion::V3, "按钮 loading", "a"))
            .await
            .unwrap();
        repo.upsert_page(&page("https://antdv.com/components/button-cn", DocVersion::V4, "按钮 loading", "b"))
            .await
            .unwrap();
        repo.replace_api_items(
            DocVersion::V4,
            "a-button",
            &[item(DocVersion::V4, "a-button", ApiKind::Props, "loading", Some("设置按钮载入状态"))],
        )
        .await
        .unwrap();

        assert_eq!(repo.search_pages("loading", VersionFilter::All, 10).await.unwrap().len(), 2);
        let v3 = repo.search_pages("loading", DocVersion::V3.into(), 10).await.unwrap();
        assert_eq!(v3.len(), 1);
        assert_eq!(v3[0].version, DocVersion::V3);
        assert!(v3[0].snippet.contains("<mark>loading</mark>"));
        assert_eq!(repo.search_pages("loading", VersionFilter::All, 1).await.unwrap().len(), 1);

        let hits = repo.search_api_items("loading", VersionFilter::All, 10).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].component_tag, "a-button");
        assert_eq!(hits[0].kind, ApiKind::Props);
        assert!(repo.search_api_items("loading", DocVersion::V3.into(), 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_tolerates_fts_syntax() {
        let repo = repository().await;
        repo.upsert_page(&page("https://antdv.com/components/button-cn", DocVersion::V4, "text", "a"))
            .await
            .unwrap();
        for query in ["", "AND", "\"unbalanced", "NEAR(", "a-button*"] {
            assert!(repo.search_pages(query, VersionFilter::All, 10).await.is_ok(), "{query}");
            assert!(repo.search_api_items(query, VersionFilter::All, 10).await.is_ok(), "{query}");
        }
    }

    #[tokio::test]
    async fn test_dry_run_skips_writes() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = Repository::new(db.pool().clone(), true);
        let url = "https://antdv.com/components/button-cn";
        repo.upsert_page(&page(url, DocVersion::V4, "text", "a")).await.unwrap();
        repo.upsert_component(&Component::new(DocVersion::V4, "a-button", "Button", url)).await.unwrap();
        let items = [item(DocVersion::V4, "a-button", ApiKind::Props, "size", None)];
        assert_eq!(repo.replace_api_items(DocVersion::V4, "a-button", &items).await.unwrap(), 1);

        assert_eq!(repo.page_hash(url).await.unwrap(), None);
        assert!(repo.list_components(DocVersion::V4).await.unwrap().is_empty());
        assert!(repo.api_items_for(DocVersion::V4, "a-button").await.unwrap().is_empty());
    }
}
