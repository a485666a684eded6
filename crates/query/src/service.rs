use antdv_cache::Repository;
use antdv_extract::models::{Component, DocVersion, VersionFilter};
use antdv_extract::normalize::normalize_tag;
use exn::ResultExt;
use tracing::{debug, instrument};

use crate::error::{ErrorKind, Result};
use crate::models::{ComponentApi, PropLookup, SearchResult};

/// Result count used by `search` when the caller doesn't pick one.
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;
/// Maximum number of near misses offered by `find_prop`.
pub const MAX_SUGGESTIONS: u32 = 5;

/// Read-only operations over the indexed documentation.
#[derive(Debug, Clone)]
pub struct QueryService {
    repo: Repository,
}
impl QueryService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Full-text search over pages and API items.
    ///
    /// Both sources are queried for up to `limit` hits each, merged by score
    /// (best first; pages win ties) and cut down to `limit`.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str, filter: VersionFilter, limit: u32) -> Result<Vec<SearchResult>> {
        let pages = self.repo.search_pages(query, filter, limit).await.or_raise(|| ErrorKind::Cache)?;
        let items = self.repo.search_api_items(query, filter, limit).await.or_raise(|| ErrorKind::Cache)?;
        debug!(pages = pages.len(), items = items.len(), "search hits");
        let mut scored: Vec<(f64, SearchResult)> = pages
            .into_iter()
            .map(|hit| (hit.score, hit.into()))
            .chain(items.into_iter().map(|hit| (hit.score, hit.into())))
            .collect();
        scored.sort_by(|(a, _), (b, _)| a.total_cmp(b));
        scored.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(scored.into_iter().map(|(_, result)| result).collect())
    }

    /// Every component of a version, ordered by tag.
    pub async fn list_components(&self, version: DocVersion) -> Result<Vec<Component>> {
        self.repo.list_components(version).await.or_raise(|| ErrorKind::Cache)
    }

    /// The full API of a component, looked up by tag, bare name or alias.
    #[instrument(skip(self))]
    pub async fn get_component_api(&self, name: &str, version: DocVersion) -> Result<ComponentApi> {
        let Some(component) = self.resolve_component(name, version).await? else {
            exn::bail!(ErrorKind::ComponentNotFound {
                name: name.to_string(),
                version,
            });
        };
        let items = self
            .repo
            .api_items_for(version, &component.tag)
            .await
            .or_raise(|| ErrorKind::Cache)?;
        Ok(ComponentApi::new(component, items))
    }

    /// Looks up one API item of a component by exact name, suggesting
    /// similarly named items when there's no exact match.
    ///
    /// An unknown component isn't an error here, it just has nothing to
    /// suggest.
    #[instrument(skip(self))]
    pub async fn find_prop(&self, component: &str, prop: &str, version: DocVersion) -> Result<PropLookup> {
        let tag = match self.resolve_component(component, version).await? {
            Some(component) => component.tag,
            None => normalize_tag(component),
        };
        if let Some(item) = self
            .repo
            .find_api_item(version, &tag, prop)
            .await
            .or_raise(|| ErrorKind::Cache)?
        {
            return Ok(PropLookup::Found { item });
        }
        let suggestions = self
            .repo
            .find_api_items_like(version, &tag, prop, MAX_SUGGESTIONS)
            .await
            .or_raise(|| ErrorKind::Cache)?;
        Ok(PropLookup::NotFound { suggestions })
    }

    /// Direct lookup by normalized tag, then a case-insensitive scan of every
    /// component's aliases.
    async fn resolve_component(&self, name: &str, version: DocVersion) -> Result<Option<Component>> {
        let tag = normalize_tag(name);
        if let Some(component) = self.repo.get_component(version, &tag).await.or_raise(|| ErrorKind::Cache)? {
            return Ok(Some(component));
        }
        let components = self.repo.list_components(version).await.or_raise(|| ErrorKind::Cache)?;
        let found = components.into_iter().find(|component| component.has_alias(name));
        debug!(%tag, found = found.is_some(), "alias lookup");
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResultType;
    use antdv_cache::Database;
    use antdv_extract::models::{ApiItem, ApiKind, Page};
    use rstest::rstest;
    use time::UtcDateTime;

    fn item(version: DocVersion, tag: &str, kind: ApiKind, name: &str, description: &str) -> ApiItem {
        ApiItem {
            version,
            component_tag: tag.to_string(),
            kind,
            name: name.to_string(),
            type_name: None,
            required: false,
            default_value: None,
            description: Some(description.to_string()),
            enum_values: None,
            since: None,
            deprecated: None,
            source_url: format!("https://antdv.com/components/{}-cn", tag.trim_start_matches("a-")),
        }
    }

    async fn service() -> QueryService {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = Repository::from(&db);
        let v4 = DocVersion::V4;

        let mut button = Component::new(v4, "a-button", "Button 按钮", "https://antdv.com/components/button-cn");
        button.aliases.push("Button".to_string());
        repo.upsert_component(&button).await.unwrap();
        // As indexed from `/components/affix-cn`; normalize_tag("affix") misses it.
        let affix = Component::new(v4, "a-affix", "Affix 固钉", "https://antdv.com/components/affix-cn");
        repo.upsert_component(&affix).await.unwrap();
        let v3 = Component::new(DocVersion::V3, "a-table", "Table 表格", "https://3x.antdv.com/components/table-cn");
        repo.upsert_component(&v3).await.unwrap();

        repo.replace_api_items(
            v4,
            "a-button",
            &[
                item(v4, "a-button", ApiKind::Props, "size", "设置按钮大小"),
                item(v4, "a-button", ApiKind::Props, "htmlType", "设置 button 原生的 type 值"),
                item(v4, "a-button", ApiKind::Props, "type", "设置按钮类型"),
                item(v4, "a-button", ApiKind::Events, "click", "点击按钮时的回调"),
                item(v4, "a-button", ApiKind::Methods, "focus()", "获取焦点"),
            ],
        )
        .await
        .unwrap();
        repo.replace_api_items(v4, "a-affix", &[item(v4, "a-affix", ApiKind::Props, "offsetTop", "距离窗口顶部")])
            .await
            .unwrap();
        repo.upsert_page(&Page {
            url: "https://antdv.com/components/button-cn".to_string(),
            version: v4,
            title: "Button 按钮".to_string(),
            html: String::new(),
            text: "Button 按钮 按钮用于开始一个即时操作 size type".to_string(),
            fetched_at: UtcDateTime::from_unix_timestamp(1_700_000_000).unwrap(),
            content_hash: "hash".to_string(),
        })
        .await
        .unwrap();
        QueryService::new(repo)
    }

    #[rstest]
    #[case("a-button")]
    #[case("button")]
    #[case("Button")]
    #[case("BUTTON")]
    #[case("Button 按钮")]
    #[tokio::test]
    async fn test_get_component_api_resolves_names(#[case] name: &str) {
        let api = service().await.get_component_api(name, DocVersion::V4).await.unwrap();
        assert_eq!(api.component.tag, "a-button");
        let props: Vec<_> = api.props.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(props, vec!["htmlType", "size", "type"]);
        assert_eq!(api.events.len(), 1);
        assert!(api.slots.is_empty());
        assert_eq!(api.methods[0].name, "focus()");
    }

    #[tokio::test]
    async fn test_alias_fallback_after_direct_miss() {
        let service = service().await;
        // normalize_tag("affix") is "a-ffix", so only the alias scan finds it.
        let api = service.get_component_api("affix", DocVersion::V4).await.unwrap();
        assert_eq!(api.component.tag, "a-affix");
        assert_eq!(api.props[0].name, "offsetTop");
    }

    #[rstest]
    #[case("modal", DocVersion::V4)]
    #[case("table", DocVersion::V4)]
    #[case("button", DocVersion::V3)]
    #[tokio::test]
    async fn test_component_not_found(#[case] name: &str, #[case] version: DocVersion) {
        let err = service().await.get_component_api(name, version).await.unwrap_err();
        assert_eq!(*err, ErrorKind::ComponentNotFound { name: name.to_string(), version });
        assert_eq!((*err).to_string(), format!("Component not found: {name} ({version})"));
    }

    #[tokio::test]
    async fn test_list_components() {
        let service = service().await;
        let tags: Vec<_> = service
            .list_components(DocVersion::V4)
            .await
            .unwrap()
            .into_iter()
            .map(|component| component.tag)
            .collect();
        assert_eq!(tags, vec!["a-affix", "a-button"]);
        assert_eq!(service.list_components(DocVersion::V3).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_prop_exact() {
        let lookup = service().await.find_prop("Button", "type", DocVersion::V4).await.unwrap();
        let PropLookup::Found { item } = lookup else {
            panic!("expected an exact match, got {lookup:?}");
        };
        assert_eq!(item.name, "type");
        assert_eq!(item.description.as_deref(), Some("设置按钮类型"));
    }

    #[tokio::test]
    async fn test_find_prop_suggestions() {
        let service = service().await;
        let lookup = service.find_prop("a-button", "Typ", DocVersion::V4).await.unwrap();
        let PropLookup::NotFound { suggestions } = lookup else {
            panic!("expected suggestions, got {lookup:?}");
        };
        let names: Vec<_> = suggestions.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["htmlType", "type"]);

        // Resolved through the alias, like get_component_api.
        let lookup = service.find_prop("affix", "offset", DocVersion::V4).await.unwrap();
        assert!(matches!(lookup, PropLookup::NotFound { suggestions } if suggestions.len() == 1));
    }

    #[tokio::test]
    async fn test_find_prop_unknown_component() {
        let lookup = service().await.find_prop("modal", "open", DocVersion::V4).await.unwrap();
        assert_eq!(lookup, PropLookup::NotFound { suggestions: vec![] });
    }

    #[tokio::test]
    async fn test_search_merges_pages_and_items() {
        let service = service().await;
        let results = service.search("size", VersionFilter::All, DEFAULT_SEARCH_LIMIT).await.unwrap();
        let types: Vec<_> = results.iter().map(|result| result.result_type).collect();
        assert!(types.contains(&ResultType::Page));
        assert!(types.contains(&ResultType::Api));
        let api = results.iter().find(|result| result.result_type == ResultType::Api).unwrap();
        assert_eq!(api.title, "a-button.size (props)");
        assert_eq!(api.url, "https://antdv.com/components/button-cn");

        let limited = service.search("size", VersionFilter::All, 1).await.unwrap();
        assert_eq!(limited.len(), 1);
        assert!(service.search("size", DocVersion::V3.into(), 10).await.unwrap().is_empty());
        assert!(service.search("   ", VersionFilter::All, 10).await.unwrap().is_empty());
    }
}
