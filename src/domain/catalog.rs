//! Immutable configuration tables consumed by the application services.
//!
//! A [`Catalog`] is built once (from [`Catalog::reference`] or a JSON file)
//! and injected into the services, which never reach for global state. This
//! keeps the geometry and query logic independent of any particular label set.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::entities::{
    Criterion, GiftForm, Material, Platform, PlatformEntry, QUERY_PLACEHOLDER, ShapeCatalogEntry,
    ShapeKind,
};

/// Keyword used when a shape has no catalog entry.
pub const FALLBACK_SHAPE_KEYWORD: &str = "gift box";

/// Query suffix used for platforms without a dedicated suffix, including
/// unknown platforms.
pub const FALLBACK_QUERY_SUFFIX: &str = "dieline template packaging design";

/// Criterion id that switches on the separate-lid cut list.
pub const LID_CRITERION_ID: &str = "lid_base";

/// Errors raised while loading or checking a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate {kind} id in catalog: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("URL template for platform '{0}' has no {{q}} placeholder")]
    MissingPlaceholder(String),
}

/// Static tables describing shapes, criteria, platforms and form choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub shapes: Vec<ShapeCatalogEntry>,
    pub criteria: Vec<Criterion>,
    pub platforms: Vec<PlatformEntry>,

    #[serde(default = "default_fallback_shape_keyword")]
    pub fallback_shape_keyword: String,

    #[serde(default = "default_fallback_query_suffix")]
    pub fallback_query_suffix: String,

    #[serde(default = "default_lid_criterion")]
    pub lid_criterion: String,

    #[serde(default)]
    pub presets: Vec<String>,

    #[serde(default)]
    pub occasions: Vec<String>,

    #[serde(default)]
    pub materials: Vec<Material>,
}

fn default_fallback_shape_keyword() -> String {
    FALLBACK_SHAPE_KEYWORD.to_string()
}

fn default_fallback_query_suffix() -> String {
    FALLBACK_QUERY_SUFFIX.to_string()
}

fn default_lid_criterion() -> String {
    LID_CRITERION_ID.to_string()
}

impl Default for Catalog {
    fn default() -> Self {
        Self::reference()
    }
}

impl Catalog {
    /// The reference tables: 4 shapes, 6 criteria, 6 platforms.
    pub fn reference() -> Self {
        let criteria = vec![
            Criterion::new(
                "collapsible",
                "Hộp xếp gọn sau khi dùng",
                "collapsible magnetic rigid box template",
            ),
            Criterion::new(
                "rigid",
                "Hộp giấy bìa cứng",
                "rigid setup box packaging dieline",
            ),
            Criterion::new("gable", "Hộp có quai xách", "gable box handle template"),
            Criterion::new(
                "window",
                "Hộp có chỗ nhìn vào bên trong",
                "box with acetate window patching template",
            ),
            Criterion::new(
                "eco",
                "Thân thiện môi trường",
                "kraft paper origami box no glue template",
            ),
            Criterion::new(
                LID_CRITERION_ID,
                "Hộp nắp rời",
                "two piece rigid box lid and base template",
            ),
        ];

        let shapes = vec![
            ShapeCatalogEntry::new(
                ShapeKind::Rectangular,
                "Hộp Chữ Nhật (Rectangular)",
                "rectangular box",
            ),
            ShapeCatalogEntry::new(ShapeKind::Cube, "Hộp Lập Phương (Cube)", "cube box"),
            ShapeCatalogEntry::new(
                ShapeKind::TriangularPrism,
                "Lăng trụ đứng tam giác",
                "triangular prism packaging",
            ),
            ShapeCatalogEntry::new(
                ShapeKind::QuadrangularPrism,
                "Lăng trụ đứng tứ giác",
                "quadrangular prism box template",
            ),
        ];

        let platforms = Platform::ALL
            .iter()
            .map(|platform| {
                let (template, suffix) = match platform {
                    Platform::Google => (
                        "https://www.google.com/search?q={q}&tbm=isch",
                        "dieline vector",
                    ),
                    Platform::Pinterest => (
                        "https://www.pinterest.com/search/pins/?q={q}",
                        "DIY handmade",
                    ),
                    Platform::Youtube => (
                        "https://www.youtube.com/results?search_query={q}+tutorial",
                        FALLBACK_QUERY_SUFFIX,
                    ),
                    Platform::Behance => (
                        "https://www.behance.net/search/projects?search={q}",
                        FALLBACK_QUERY_SUFFIX,
                    ),
                    Platform::Freepik => (
                        "https://www.freepik.com/search?format=search&query={q}",
                        FALLBACK_QUERY_SUFFIX,
                    ),
                    Platform::Shutterstock => (
                        "https://www.shutterstock.com/search/{q}",
                        FALLBACK_QUERY_SUFFIX,
                    ),
                };
                PlatformEntry::new(platform.as_str(), platform.display_name(), template, suffix)
            })
            .collect();

        let presets = [
            "Rubik",
            "Sổ tay",
            "Bình giữ nhiệt",
            "Gấu bông",
            "Ly trà sữa",
            "Truyện tranh",
            "Móc khóa",
            "Bánh tráng",
            "Tai nghe",
            "Vòng tay",
        ]
        .map(String::from)
        .to_vec();

        let occasions = [
            "Sinh nhật",
            "20/11",
            "8/3",
            "Giáng sinh",
            "Valentine",
            "Tết",
            "Kỷ niệm",
        ]
        .map(String::from)
        .to_vec();

        let materials = vec![
            Material::new(
                "Loại giấy/bìa cứng",
                "Carton lạnh (2mm), Giấy Ivory (350gsm), hoặc Giấy Kraft Nhật. \
                 Kích thước: Khổ A2 hoặc A1 tùy theo bản vẽ trải phẳng.",
            ),
            Material::new(
                "Dụng cụ & Phụ kiện",
                "Dao rọc giấy, Thước thép, Keo sữa/Băng keo 2 mặt, Bút chì, Bàn cắt (Cutting mat).",
            ),
        ];

        Self {
            shapes,
            criteria,
            platforms,
            fallback_shape_keyword: default_fallback_shape_keyword(),
            fallback_query_suffix: default_fallback_query_suffix(),
            lid_criterion: default_lid_criterion(),
            presets,
            occasions,
            materials,
        }
    }

    /// Parses a catalog from JSON and checks it with [`Catalog::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Checks id uniqueness and URL template placeholders.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for criterion in &self.criteria {
            if !seen.insert(criterion.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    kind: "criterion",
                    id: criterion.id.clone(),
                });
            }
        }

        let mut seen = HashSet::new();
        for entry in &self.shapes {
            if !seen.insert(entry.shape) {
                return Err(CatalogError::DuplicateId {
                    kind: "shape",
                    id: entry.shape.to_string(),
                });
            }
        }

        let mut seen = HashSet::new();
        for platform in &self.platforms {
            if !seen.insert(platform.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    kind: "platform",
                    id: platform.id.clone(),
                });
            }
            if !platform.url_template.contains(QUERY_PLACEHOLDER) {
                return Err(CatalogError::MissingPlaceholder(platform.id.clone()));
            }
        }

        Ok(())
    }

    pub fn criterion(&self, id: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.id == id)
    }

    pub fn shape(&self, shape: ShapeKind) -> Option<&ShapeCatalogEntry> {
        self.shapes.iter().find(|s| s.shape == shape)
    }

    /// Base search keyword for `shape`, or the fallback keyword.
    pub fn shape_keyword(&self, shape: ShapeKind) -> &str {
        self.shape(shape)
            .map(|s| s.keyword.as_str())
            .unwrap_or(&self.fallback_shape_keyword)
    }

    /// Display name for `shape`, or its wire id.
    pub fn shape_name(&self, shape: ShapeKind) -> &str {
        self.shape(shape)
            .map(|s| s.name.as_str())
            .unwrap_or(shape.as_str())
    }

    pub fn platform(&self, id: &str) -> Option<&PlatformEntry> {
        self.platforms.iter().find(|p| p.id == id)
    }

    /// Query suffix for a platform id; unknown ids get the fallback suffix.
    pub fn query_suffix(&self, platform_id: &str) -> &str {
        self.platform(platform_id)
            .map(|p| p.query_suffix.as_str())
            .unwrap_or(&self.fallback_query_suffix)
    }

    /// The form as it first appears: reference dimensions, rectangular
    /// shape, first preset and first occasion.
    pub fn default_form(&self) -> GiftForm {
        GiftForm {
            preset: self.presets.first().cloned().unwrap_or_default(),
            occasion: self.occasions.first().cloned().unwrap_or_default(),
            ..GiftForm::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_catalog_sizes() {
        let catalog = Catalog::reference();
        assert_eq!(catalog.shapes.len(), 4);
        assert_eq!(catalog.criteria.len(), 6);
        assert_eq!(catalog.platforms.len(), 6);
        assert_eq!(catalog.presets.len(), 10);
        assert_eq!(catalog.occasions.len(), 7);
        assert_eq!(catalog.materials.len(), 2);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_reference_suffixes() {
        let catalog = Catalog::reference();
        assert_eq!(catalog.query_suffix("google"), "dieline vector");
        assert_eq!(catalog.query_suffix("pinterest"), "DIY handmade");
        assert_eq!(catalog.query_suffix("behance"), FALLBACK_QUERY_SUFFIX);
        assert_eq!(catalog.query_suffix("myspace"), FALLBACK_QUERY_SUFFIX);
    }

    #[test]
    fn test_shape_keyword_fallback() {
        let mut catalog = Catalog::reference();
        assert_eq!(catalog.shape_keyword(ShapeKind::Cube), "cube box");

        catalog.shapes.retain(|s| s.shape != ShapeKind::Cube);
        assert_eq!(catalog.shape_keyword(ShapeKind::Cube), "gift box");
        assert_eq!(catalog.shape_name(ShapeKind::Cube), "cube");
    }

    #[test]
    fn test_default_form_uses_first_choices() {
        let form = Catalog::reference().default_form();
        assert_eq!(form.preset, "Rubik");
        assert_eq!(form.occasion, "Sinh nhật");
        assert_eq!(form.shape, ShapeKind::Rectangular);
    }

    #[test]
    fn test_json_roundtrip_of_reference() {
        let json = serde_json::to_string(&Catalog::reference()).unwrap();
        let parsed = Catalog::from_json_str(&json).unwrap();
        assert_eq!(parsed, Catalog::reference());
    }

    #[test]
    fn test_from_json_applies_defaults() {
        let catalog = Catalog::from_json_str(
            r#"{
                "shapes": [{"shape": "cube", "name": "Cube", "keyword": "cube box"}],
                "criteria": [],
                "platforms": [{
                    "id": "ddg",
                    "name": "DuckDuckGo",
                    "url_template": "https://duckduckgo.com/?q={q}",
                    "query_suffix": "template"
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(catalog.fallback_shape_keyword, "gift box");
        assert_eq!(catalog.lid_criterion, "lid_base");
        assert!(catalog.presets.is_empty());
        assert_eq!(catalog.query_suffix("ddg"), "template");
    }

    #[test]
    fn test_validate_rejects_duplicate_criterion() {
        let mut catalog = Catalog::reference();
        catalog.criteria.push(Criterion::new("eco", "dup", "dup"));

        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { kind: "criterion", .. }));
    }

    #[test]
    fn test_validate_rejects_template_without_placeholder() {
        let mut catalog = Catalog::reference();
        catalog.platforms[0].url_template = "https://www.google.com/".to_string();

        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, CatalogError::MissingPlaceholder(ref id) if id == "google"));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = Catalog::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
