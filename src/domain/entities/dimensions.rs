//! Dimension fields of a gift box and the derived cut-list entries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named measurement field on the form.
///
/// Which fields are meaningful depends on the [`ShapeKind`](super::ShapeKind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DimensionField {
    Length,
    Width,
    Height,
    Side,
    BaseEdge1,
    BaseEdge2,
    BaseEdge3,
    BaseEdge4,
}

impl DimensionField {
    pub const ALL: [DimensionField; 8] = [
        DimensionField::Length,
        DimensionField::Width,
        DimensionField::Height,
        DimensionField::Side,
        DimensionField::BaseEdge1,
        DimensionField::BaseEdge2,
        DimensionField::BaseEdge3,
        DimensionField::BaseEdge4,
    ];

    /// Looks up a field by its wire label.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }

    /// Stable wire label (`length`, `baseEdge1`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            DimensionField::Length => "length",
            DimensionField::Width => "width",
            DimensionField::Height => "height",
            DimensionField::Side => "side",
            DimensionField::BaseEdge1 => "baseEdge1",
            DimensionField::BaseEdge2 => "baseEdge2",
            DimensionField::BaseEdge3 => "baseEdge3",
            DimensionField::BaseEdge4 => "baseEdge4",
        }
    }

    /// Fixed display label shown next to the value.
    pub fn display_label(&self) -> &'static str {
        match self {
            DimensionField::Length => "Chiều dài",
            DimensionField::Width => "Chiều rộng",
            DimensionField::Height => "Chiều cao",
            DimensionField::Side => "Cạnh",
            DimensionField::BaseEdge1 => "Cạnh đáy 1",
            DimensionField::BaseEdge2 => "Cạnh đáy 2",
            DimensionField::BaseEdge3 => "Cạnh đáy 3",
            DimensionField::BaseEdge4 => "Cạnh đáy 4",
        }
    }
}

impl fmt::Display for DimensionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Measurements in millimeters for every field the form offers.
///
/// Values are taken as entered: zero and negative numbers are kept.
/// Missing fields deserialize to the form defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DimensionSet {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub side: f64,
    pub base_edge1: f64,
    pub base_edge2: f64,
    pub base_edge3: f64,
    pub base_edge4: f64,
}

impl Default for DimensionSet {
    fn default() -> Self {
        Self {
            length: 100.0,
            width: 80.0,
            height: 50.0,
            side: 80.0,
            base_edge1: 60.0,
            base_edge2: 60.0,
            base_edge3: 60.0,
            base_edge4: 60.0,
        }
    }
}

impl DimensionSet {
    /// Returns the value of a single field.
    pub fn get(&self, field: DimensionField) -> f64 {
        match field {
            DimensionField::Length => self.length,
            DimensionField::Width => self.width,
            DimensionField::Height => self.height,
            DimensionField::Side => self.side,
            DimensionField::BaseEdge1 => self.base_edge1,
            DimensionField::BaseEdge2 => self.base_edge2,
            DimensionField::BaseEdge3 => self.base_edge3,
            DimensionField::BaseEdge4 => self.base_edge4,
        }
    }

    /// Overwrites a single field.
    pub fn set(&mut self, field: DimensionField, millimeters: f64) {
        let slot = match field {
            DimensionField::Length => &mut self.length,
            DimensionField::Width => &mut self.width,
            DimensionField::Height => &mut self.height,
            DimensionField::Side => &mut self.side,
            DimensionField::BaseEdge1 => &mut self.base_edge1,
            DimensionField::BaseEdge2 => &mut self.base_edge2,
            DimensionField::BaseEdge3 => &mut self.base_edge3,
            DimensionField::BaseEdge4 => &mut self.base_edge4,
        };
        *slot = millimeters;
    }
}

/// One entry of a cut list: a field and its measurement in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CutDimension {
    pub field: DimensionField,
    pub millimeters: f64,
}

impl CutDimension {
    pub fn new(field: DimensionField, millimeters: f64) -> Self {
        Self { field, millimeters }
    }
}

impl fmt::Display for CutDimension {
    /// Formats as `"<label>: <value> mm"`; whole numbers print without a
    /// fractional part (`100 mm`, `82.5 mm`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} mm",
            self.field.display_label(),
            self.millimeters
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions_match_form_defaults() {
        let dims = DimensionSet::default();
        assert_eq!(dims.length, 100.0);
        assert_eq!(dims.width, 80.0);
        assert_eq!(dims.height, 50.0);
        assert_eq!(dims.side, 80.0);
        assert_eq!(dims.base_edge4, 60.0);
    }

    #[test]
    fn test_deserialize_partial_uses_defaults() {
        let dims: DimensionSet = serde_json::from_str(r#"{"side": 120, "baseEdge2": 45.5}"#).unwrap();
        assert_eq!(dims.side, 120.0);
        assert_eq!(dims.base_edge2, 45.5);
        assert_eq!(dims.length, 100.0);
    }

    #[test]
    fn test_get_and_set_roundtrip_per_field() {
        let mut dims = DimensionSet::default();
        dims.set(DimensionField::BaseEdge3, -7.0);
        assert_eq!(dims.get(DimensionField::BaseEdge3), -7.0);
        assert_eq!(dims.get(DimensionField::BaseEdge1), 60.0);
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(DimensionField::BaseEdge1.as_str(), "baseEdge1");
        assert_eq!(
            serde_json::to_string(&DimensionField::BaseEdge4).unwrap(),
            "\"baseEdge4\""
        );
        assert_eq!(DimensionField::Side.display_label(), "Cạnh");
    }

    #[test]
    fn test_from_name() {
        for field in DimensionField::ALL {
            assert_eq!(DimensionField::from_name(field.as_str()), Some(field));
        }
        assert_eq!(DimensionField::from_name("depth"), None);
        assert_eq!(DimensionField::from_name("BASEEDGE1"), None);
    }

    #[test]
    fn test_cut_dimension_display() {
        assert_eq!(
            CutDimension::new(DimensionField::Length, 102.0).to_string(),
            "Chiều dài: 102 mm"
        );
        assert_eq!(
            CutDimension::new(DimensionField::Side, 82.5).to_string(),
            "Cạnh: 82.5 mm"
        );
    }
}
