//! Cut-list derivation for each box shape.

use crate::domain::entities::{CutDimension, DimensionField, DimensionSet, ShapeKind};

/// Extra margin added to every linear lid dimension so the lid slides over
/// the base.
pub const LID_CLEARANCE_MM: f64 = 2.0;

/// Derives the measurements to cut for a shape.
///
/// Values are echoed as given: zero, negative and non-geometric inputs
/// (e.g. triangle edges violating the triangle inequality) are not rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometryService;

impl GeometryService {
    pub fn new() -> Self {
        Self
    }

    /// Returns the ordered cut list for the body of the box.
    ///
    /// | Shape | Fields |
    /// |---|---|
    /// | Rectangular | length, width, height |
    /// | Cube | side |
    /// | Triangular prism | baseEdge1..3, height |
    /// | Quadrangular prism | baseEdge1..4, height |
    pub fn resolve_cut_list(&self, shape: ShapeKind, dims: &DimensionSet) -> Vec<CutDimension> {
        body_fields(shape)
            .iter()
            .map(|&field| CutDimension::new(field, dims.get(field)))
            .collect()
    }

    /// Returns the lid cut list, each dimension enlarged by
    /// [`LID_CLEARANCE_MM`].
    ///
    /// `None` unless `lid_enabled` is set and the shape has a lid rule
    /// (rectangular: length and width; cube: side). Prisms have no lid rule.
    pub fn resolve_lid_list(
        &self,
        shape: ShapeKind,
        dims: &DimensionSet,
        lid_enabled: bool,
    ) -> Option<Vec<CutDimension>> {
        if !lid_enabled {
            return None;
        }

        let fields = lid_fields(shape)?;

        Some(
            fields
                .iter()
                .map(|&field| CutDimension::new(field, dims.get(field) + LID_CLEARANCE_MM))
                .collect(),
        )
    }
}

fn body_fields(shape: ShapeKind) -> &'static [DimensionField] {
    use DimensionField::*;

    match shape {
        ShapeKind::Rectangular => &[Length, Width, Height],
        ShapeKind::Cube => &[Side],
        ShapeKind::TriangularPrism => &[BaseEdge1, BaseEdge2, BaseEdge3, Height],
        ShapeKind::QuadrangularPrism => &[BaseEdge1, BaseEdge2, BaseEdge3, BaseEdge4, Height],
    }
}

fn lid_fields(shape: ShapeKind) -> Option<&'static [DimensionField]> {
    use DimensionField::*;

    match shape {
        ShapeKind::Rectangular => Some(&[Length, Width]),
        ShapeKind::Cube => Some(&[Side]),
        ShapeKind::TriangularPrism | ShapeKind::QuadrangularPrism => None,
    }
}
