//! The gift form snapshot and the supporting catalog records.

use serde::{Deserialize, Serialize};

use super::{DimensionSet, ShapeKind};

/// A snapshot of the planner form.
///
/// `name`, `preset` and `occasion` are descriptive only and never enter a
/// search query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GiftForm {
    pub name: String,
    pub preset: String,
    pub occasion: String,
    pub shape: ShapeKind,
    pub dimensions: DimensionSet,
}

/// Maps a shape to its display name and base search keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeCatalogEntry {
    pub shape: ShapeKind,
    pub name: String,
    pub keyword: String,
}

impl ShapeCatalogEntry {
    pub fn new(shape: ShapeKind, name: impl Into<String>, keyword: impl Into<String>) -> Self {
        Self {
            shape,
            name: name.into(),
            keyword: keyword.into(),
        }
    }
}

/// An item on the materials checklist shown with every plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub title: String,
    pub description: String,
}

impl Material {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gift_form_default() {
        let form = GiftForm::default();
        assert!(form.name.is_empty());
        assert_eq!(form.shape, ShapeKind::Rectangular);
        assert_eq!(form.dimensions, DimensionSet::default());
    }

    #[test]
    fn test_gift_form_deserialize_partial() {
        let form: GiftForm = serde_json::from_str(
            r#"{"name": "Quà sinh nhật Lan", "shape": "cube", "dimensions": {"side": 90}}"#,
        )
        .unwrap();

        assert_eq!(form.name, "Quà sinh nhật Lan");
        assert_eq!(form.shape, ShapeKind::Cube);
        assert_eq!(form.dimensions.side, 90.0);
        assert!(form.preset.is_empty());
    }
}
