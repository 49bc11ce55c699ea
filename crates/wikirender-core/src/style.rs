//! Inline style serialization.
//!
//! Styles are an insertion-ordered mapping from CSS property name to value.
//! Property names may be written camelCase (`fontWeight`) or already
//! kebab-cased (`font-weight`); serialization kebab-cases them either way.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

static CAMEL_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new("([a-z0-9])([A-Z])").expect("camel boundary regex"));

/// An ordered CSS property-name to value mapping.
///
/// Declaration order is preserved in the serialized output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssProperties {
    properties: IndexMap<String, String>,
}

impl CssProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property, consuming and returning the mapping
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Add a property in place
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Serialize to `name: value;` declarations, one per line
    fn declarations(&self) -> String {
        let lines: Vec<String> = self
            .properties
            .iter()
            .map(|(name, value)| format!("{}: {};", kebab_case(name), value))
            .collect();
        lines.join("\n")
    }

    /// Serialize to a single-line declaration list, for `style="..."`
    /// attribute values
    pub fn to_inline(&self) -> String {
        self.declarations().replace('\n', "")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CssProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

fn kebab_case(name: &str) -> String {
    CAMEL_BOUNDARY
        .replace_all(name, "$1-$2")
        .to_ascii_lowercase()
}

/// Serialize styles to a `(% style="..." %)` markup annotation.
///
/// Absent or empty styles yield the empty string. The annotation is inlined
/// into markup and must not span lines, so any line breaks in the
/// declaration list are stripped.
pub fn style_attribute(styles: Option<&CssProperties>) -> String {
    match styles {
        Some(styles) if !styles.is_empty() => {
            format!("(% style=\"{}\" %)", styles.to_inline())
        }
        _ => String::new(),
    }
}
