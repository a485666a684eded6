use regex::Regex;
use scraper::Selector;
use std::sync::LazyLock;

macro_rules! selector {
    ($name:ident, $css:expr) => {
        pub(crate) static $name: LazyLock<Selector> = LazyLock::new(|| Selector::parse($css).unwrap());
    };
}

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

/// Namespace prefix shared by every component tag (`a-button`, `a-table`, ...).
pub const TAG_PREFIX: &str = "a-";

// Section headings that may introduce an API table.
selector!(HEADING_SELECTOR, "h2, h3");
selector!(H1_SELECTOR, "h1");
selector!(TITLE_SELECTOR, "title");
selector!(BODY_SELECTOR, "body");
selector!(CODE_SELECTOR, "code");
selector!(ROW_SELECTOR, "tr");

// Component pages live at `/components/<name>-cn` (the Chinese locale).
regex!(COMPONENT_URL_REGEX, r"/components/([^/]+)-cn");
regex!(CODE_TAG_REGEX, r"<(a-[a-z-]+)");
regex!(QUOTED_LITERAL_REGEX, r#"'([^']+)'|"([^"]+)""#);

/// Delimiters accepted inside an explicit "values" column.
pub(crate) const VALUE_DELIMITERS: &[char] = &[',', '，', '、', '|'];
/// Placeholder documentation tables use for "no name".
pub(crate) const EMPTY_PLACEHOLDER: &str = "-";
/// Elements whose text never counts as page content.
pub(crate) const NON_CONTENT_ELEMENTS: &[&str] = &["script", "style", "noscript"];
