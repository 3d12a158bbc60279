//! External search destinations and their URL templates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder substituted with the encoded query in a URL template.
pub const QUERY_PLACEHOLDER: &str = "{q}";

/// The destinations offered by the reference catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Google,
    Pinterest,
    Youtube,
    Behance,
    Freepik,
    Shutterstock,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::Google,
        Platform::Pinterest,
        Platform::Youtube,
        Platform::Behance,
        Platform::Freepik,
        Platform::Shutterstock,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Google => "google",
            Platform::Pinterest => "pinterest",
            Platform::Youtube => "youtube",
            Platform::Behance => "behance",
            Platform::Freepik => "freepik",
            Platform::Shutterstock => "shutterstock",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Google => "Google",
            Platform::Pinterest => "Pinterest",
            Platform::Youtube => "YouTube",
            Platform::Behance => "Behance",
            Platform::Freepik => "Freepik",
            Platform::Shutterstock => "Shutterstock",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog row for one destination.
///
/// `url_template` must contain [`QUERY_PLACEHOLDER`] exactly where the
/// encoded query goes. `query_suffix` is appended to the query, separated by
/// a single space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformEntry {
    pub id: String,
    pub name: String,
    pub url_template: String,
    pub query_suffix: String,
}

impl PlatformEntry {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        url_template: impl Into<String>,
        query_suffix: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url_template: url_template.into(),
            query_suffix: query_suffix.into(),
        }
    }

    /// Substitutes an already-encoded query into the template.
    pub fn render_url(&self, encoded_query: &str) -> String {
        self.url_template.replace(QUERY_PLACEHOLDER, encoded_query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_url_substitutes_placeholder() {
        let entry = PlatformEntry::new(
            "youtube",
            "YouTube",
            "https://www.youtube.com/results?search_query={q}+tutorial",
            "dieline template packaging design",
        );
        assert_eq!(
            entry.render_url("cube%20box"),
            "https://www.youtube.com/results?search_query=cube%20box+tutorial"
        );
    }

    #[test]
    fn test_platform_ids_are_lowercase() {
        for platform in Platform::ALL {
            assert_eq!(platform.as_str(), platform.as_str().to_ascii_lowercase());
            assert_eq!(
                serde_json::to_string(&platform).unwrap(),
                format!("\"{}\"", platform.as_str())
            );
        }
    }
}
