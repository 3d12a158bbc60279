//! DTOs for the cut-list endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{CutDimension, DimensionField, DimensionSet, ShapeKind};

/// Request for the body and lid cut lists of one shape.
///
/// Omitted dimensions take the form defaults. The lid list is produced when
/// `criteria` contains the catalog's lid criterion.
#[derive(Debug, Deserialize, Validate)]
pub struct CutListRequest {
    pub shape: ShapeKind,

    #[serde(default)]
    pub dimensions: DimensionSet,

    #[serde(default)]
    #[validate(length(max = 32))]
    pub criteria: Vec<String>,
}

/// Body and lid cut lists.
#[derive(Debug, Serialize)]
pub struct CutListResponse {
    pub shape: ShapeKind,
    pub cut_list: Vec<CutDimensionItem>,
    pub lid_list: Option<Vec<CutDimensionItem>>,
    pub lid_clearance_mm: f64,
}

/// One cut-list line, with a preformatted `display` string.
#[derive(Debug, Clone, Serialize)]
pub struct CutDimensionItem {
    pub field: DimensionField,
    pub label: &'static str,
    pub millimeters: f64,
    pub display: String,
}

impl From<&CutDimension> for CutDimensionItem {
    fn from(cut: &CutDimension) -> Self {
        Self {
            field: cut.field,
            label: cut.field.display_label(),
            millimeters: cut.millimeters,
            display: cut.to_string(),
        }
    }
}

/// Converts a cut list into response items.
pub fn to_items(list: &[CutDimension]) -> Vec<CutDimensionItem> {
    list.iter().map(CutDimensionItem::from).collect()
}
