//! Search query construction for external reference platforms.

use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::domain::Catalog;
use crate::domain::entities::{SelectedCriteria, ShapeKind};
use crate::utils::query_encoding::encode_component;

/// Result of building a query for one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    pub platform: String,
    /// Query text before encoding, suffix included.
    pub query: String,
    /// `query` after percent-encoding.
    pub encoded: String,
    /// Destination URL; `None` when the platform is not in the catalog.
    /// Callers must not navigate in that case.
    pub url: Option<String>,
}

/// A ready-to-open link for one catalog platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceLink {
    pub platform: String,
    pub name: String,
    pub query: String,
    pub url: String,
}

/// Builds search queries and destination URLs from the injected catalog.
pub struct QueryService {
    catalog: Arc<Catalog>,
}

impl QueryService {
    /// Creates a new query service.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Builds the query text and destination URL for `platform`.
    ///
    /// # Algorithm
    ///
    /// 1. Shape keyword from the catalog (fallback: `"gift box"`)
    /// 2. Keywords of the selected criteria, in selection order, joined by a
    ///    space; ids missing from the catalog contribute an empty keyword, so
    ///    their slot still takes a separator
    /// 3. Both joined by a space and trimmed
    /// 4. Platform suffix appended after a space (fallback suffix for
    ///    platforms without an entry)
    /// 5. Percent-encoded and substituted into the platform's URL template
    ///
    /// Never fails: an unknown platform yields `url: None`.
    pub fn build_query(
        &self,
        shape: ShapeKind,
        selected: &SelectedCriteria,
        platform: &str,
    ) -> SearchQuery {
        let shape_keyword = self.catalog.shape_keyword(shape);

        let criteria_keywords = selected
            .iter()
            .map(|id| {
                self.catalog
                    .criterion(id)
                    .map_or("", |c| c.search_keyword.as_str())
            })
            .collect::<Vec<_>>()
            .join(" ");

        let mut query = format!("{shape_keyword} {criteria_keywords}").trim().to_string();

        let suffix = self.catalog.query_suffix(platform).trim();
        if !suffix.is_empty() {
            query.push(' ');
            query.push_str(suffix);
        }

        let encoded = encode_component(&query);

        let url = self.catalog.platform(platform).map(|entry| entry.render_url(&encoded));

        if url.is_none() {
            debug!(platform, "No URL template for platform; skipping navigation target");
        }

        SearchQuery {
            platform: platform.to_string(),
            query,
            encoded,
            url,
        }
    }

    /// Builds one [`ReferenceLink`] per catalog platform, in catalog order.
    pub fn build_all(&self, shape: ShapeKind, selected: &SelectedCriteria) -> Vec<ReferenceLink> {
        self.catalog
            .platforms
            .iter()
            .filter_map(|entry| {
                let search = self.build_query(shape, selected, &entry.id);
                search.url.map(|url| ReferenceLink {
                    platform: entry.id.clone(),
                    name: entry.name.clone(),
                    query: search.query,
                    url,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Criterion;
    use crate::utils::query_encoding::decode_component;
    use url::Url;

    fn service() -> QueryService {
        QueryService::new(Arc::new(Catalog::reference()))
    }

    fn selected(ids: &[&str]) -> SelectedCriteria {
        ids.iter().copied().collect()
    }

    #[test]
    fn test_google_rectangular_without_criteria() {
        let result = service().build_query(ShapeKind::Rectangular, &SelectedCriteria::new(), "google");

        assert_eq!(result.query, "rectangular box dieline vector");
        assert_eq!(
            result.url.as_deref(),
            Some("https://www.google.com/search?q=rectangular%20box%20dieline%20vector&tbm=isch")
        );
    }

    #[test]
    fn test_empty_criteria_has_no_double_spaces() {
        let service = service();
        for platform in ["google", "pinterest", "youtube", "behance", "freepik", "shutterstock"] {
            let result = service.build_query(ShapeKind::Cube, &SelectedCriteria::new(), platform);
            assert!(!result.query.contains("  "), "{platform}: {}", result.query);
            assert_eq!(result.query, result.query.trim());
            assert!(result.query.starts_with("cube box "));
        }
    }

    #[test]
    fn test_suffix_per_platform() {
        let service = service();
        let none = SelectedCriteria::new();

        let cases = [
            ("google", " dieline vector"),
            ("pinterest", " DIY handmade"),
            ("youtube", " dieline template packaging design"),
            ("behance", " dieline template packaging design"),
            ("freepik", " dieline template packaging design"),
            ("shutterstock", " dieline template packaging design"),
        ];

        for (platform, suffix) in cases {
            let result = service.build_query(ShapeKind::Rectangular, &none, platform);
            assert!(result.query.ends_with(suffix), "{platform}: {}", result.query);
            assert!(decode_component(&result.encoded).ends_with(suffix));
        }
    }

    #[test]
    fn test_criteria_keywords_follow_selection_order() {
        let result = service().build_query(
            ShapeKind::Cube,
            &selected(&["lid_base", "eco"]),
            "pinterest",
        );

        assert_eq!(
            result.query,
            "cube box two piece rigid box lid and base template \
             kraft paper origami box no glue template DIY handmade"
        );
    }

    #[test]
    fn test_unknown_criterion_keeps_empty_slot() {
        let service = service();

        let result = service.build_query(
            ShapeKind::Rectangular,
            &selected(&["eco", "glitter", "gable"]),
            "google",
        );
        assert_eq!(
            result.query,
            "rectangular box kraft paper origami box no glue template  \
             gable box handle template dieline vector"
        );
    }

    #[test]
    fn test_leading_unknown_criterion_keeps_separator() {
        let result = service().build_query(
            ShapeKind::Cube,
            &selected(&["glitter", "eco"]),
            "pinterest",
        );

        assert_eq!(
            result.query,
            "cube box  kraft paper origami box no glue template DIY handmade"
        );
        assert_eq!(decode_component(&result.encoded), result.query);
    }

    #[test]
    fn test_only_unknown_criteria_are_trimmed() {
        let result = service().build_query(ShapeKind::Cube, &selected(&["glitter"]), "google");

        assert_eq!(result.query, "cube box dieline vector");
    }

    #[test]
    fn test_unknown_platform_has_no_url() {
        let result = service().build_query(ShapeKind::Cube, &SelectedCriteria::new(), "myspace");

        assert!(result.url.is_none());
        assert_eq!(result.query, "cube box dieline template packaging design");
    }

    #[test]
    fn test_platform_ids_are_case_sensitive() {
        let result = service().build_query(ShapeKind::Cube, &SelectedCriteria::new(), "Google");
        assert!(result.url.is_none());
    }

    #[test]
    fn test_fallback_shape_keyword() {
        let mut catalog = Catalog::reference();
        catalog.shapes.clear();
        let service = QueryService::new(Arc::new(catalog));

        let result = service.build_query(ShapeKind::TriangularPrism, &SelectedCriteria::new(), "google");
        assert_eq!(result.query, "gift box dieline vector");
    }

    #[test]
    fn test_url_templates() {
        let service = service();
        let none = SelectedCriteria::new();
        let q = |platform: &str| service.build_query(ShapeKind::Cube, &none, platform);

        let encoded = "cube%20box%20dieline%20template%20packaging%20design";
        assert_eq!(
            q("pinterest").url.unwrap(),
            "https://www.pinterest.com/search/pins/?q=cube%20box%20DIY%20handmade"
        );
        assert_eq!(
            q("youtube").url.unwrap(),
            format!("https://www.youtube.com/results?search_query={encoded}+tutorial")
        );
        assert_eq!(
            q("behance").url.unwrap(),
            format!("https://www.behance.net/search/projects?search={encoded}")
        );
        assert_eq!(
            q("freepik").url.unwrap(),
            format!("https://www.freepik.com/search?format=search&query={encoded}")
        );
        assert_eq!(
            q("shutterstock").url.unwrap(),
            format!("https://www.shutterstock.com/search/{encoded}")
        );
    }

    #[test]
    fn test_decoded_url_query_matches_input() {
        let result = service().build_query(
            ShapeKind::QuadrangularPrism,
            &selected(&["window", "rigid"]),
            "freepik",
        );
        let url = Url::parse(result.url.as_deref().unwrap()).unwrap();
        let query = url
            .query_pairs()
            .find(|(k, _)| k == "query")
            .map(|(_, v)| v.into_owned())
            .unwrap();

        assert_eq!(query, result.query);
    }

    #[test]
    fn test_non_ascii_keywords_are_encoded() {
        let mut catalog = Catalog::reference();
        catalog.criteria.push(Criterion::new("tet", "Tết", "hộp quà Tết"));
        let service = QueryService::new(Arc::new(catalog));

        let result = service.build_query(ShapeKind::Cube, &selected(&["tet"]), "google");

        assert!(result.encoded.is_ascii());
        assert!(result.encoded.contains("h%E1%BB%99p"));
        assert_eq!(decode_component(&result.encoded), result.query);
    }

    #[test]
    fn test_build_all_covers_catalog_platforms() {
        let links = service().build_all(ShapeKind::Rectangular, &selected(&["gable"]));

        let ids: Vec<_> = links.iter().map(|l| l.platform.as_str()).collect();
        assert_eq!(
            ids,
            vec!["google", "pinterest", "youtube", "behance", "freepik", "shutterstock"]
        );
        assert_eq!(links[2].name, "YouTube");
        assert!(links.iter().all(|l| l.url.starts_with("https://")));
    }
}
