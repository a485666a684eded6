use serde::{Deserialize, Serialize};

use super::DocVersion;
use crate::consts::TAG_PREFIX;

/// A documented component, unique per `(version, tag)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub version: DocVersion,
    /// Canonical tag (e.g. `a-button`).
    pub tag: String,
    /// Display title taken from the page.
    pub title: String,
    pub doc_url: String,
    /// Alternative names accepted by lookups.
    pub aliases: Vec<String>,
}
impl Component {
    /// Builds a component with the default alias set: the page title and the
    /// tag without its namespace prefix.
    pub fn new(version: DocVersion, tag: impl Into<String>, title: impl Into<String>, doc_url: impl Into<String>) -> Self {
        let tag = tag.into();
        let title = title.into();
        let bare = tag.strip_prefix(TAG_PREFIX).unwrap_or(&tag).to_string();
        Self {
            version,
            aliases: vec![title.clone(), bare],
            tag,
            title,
            doc_url: doc_url.into(),
        }
    }

    /// Case-insensitive alias match.
    pub fn has_alias(&self, name: &str) -> bool {
        let name = name.trim().to_lowercase();
        self.aliases.iter().any(|alias| alias.to_lowercase() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_aliases() {
        let component = Component::new(DocVersion::V4, "a-button", "Button 按钮", "https://antdv.com/components/button-cn");
        assert_eq!(component.aliases, vec!["Button 按钮".to_string(), "button".to_string()]);
    }

    #[test]
    fn test_alias_match_ignores_case() {
        let mut component = Component::new(DocVersion::V3, "a-button", "Button", "https://3x.antdv.com/components/button-cn");
        component.aliases = vec!["Button".to_string()];
        assert!(component.has_alias("button"));
        assert!(component.has_alias("BUTTON"));
        assert!(!component.has_alias("buttons"));
    }
}
