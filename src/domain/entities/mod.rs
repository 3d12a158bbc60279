//! Core domain entities representing the gift-box data model.
//!
//! Entities are plain value records without identity. They are rebuilt from
//! the caller's current form state on every computation and never persisted.
//!
//! # Entity Types
//!
//! - [`ShapeKind`] - The box shape being designed
//! - [`DimensionSet`] / [`DimensionField`] - Measurements in millimeters
//! - [`CutDimension`] - One line of a derived cut list
//! - [`Criterion`] / [`SelectedCriteria`] - Design criteria and the user's selection
//! - [`Platform`] / [`PlatformEntry`] - External search destinations
//! - [`GiftForm`] - Full form snapshot (descriptive fields + shape + dimensions)
//! - [`ShapeCatalogEntry`] / [`Material`] - Static catalog records

pub mod criterion;
pub mod dimensions;
pub mod gift;
pub mod platform;
pub mod shape;

pub use criterion::{Criterion, SelectedCriteria};
pub use dimensions::{CutDimension, DimensionField, DimensionSet};
pub use gift::{GiftForm, Material, ShapeCatalogEntry};
pub use platform::{Platform, PlatformEntry, QUERY_PLACEHOLDER};
pub use shape::{ParseShapeError, ShapeKind};
