//! DTOs for the catalog endpoint.

use serde::Serialize;

use crate::domain::Catalog;
use crate::domain::entities::{Criterion, Material, ShapeKind};

/// Everything a client needs to render the planner form.
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub shapes: Vec<ShapeItem>,
    pub criteria: Vec<Criterion>,
    pub platforms: Vec<PlatformItem>,
    pub presets: Vec<String>,
    pub occasions: Vec<String>,
    pub materials: Vec<Material>,
    pub lid_criterion: String,
    pub lid_clearance_mm: f64,
}

#[derive(Debug, Serialize)]
pub struct ShapeItem {
    pub id: ShapeKind,
    pub name: String,
    pub keyword: String,
}

/// Platform summary; URL templates stay server-side.
#[derive(Debug, Serialize)]
pub struct PlatformItem {
    pub id: String,
    pub name: String,
}

impl CatalogResponse {
    pub fn from_catalog(catalog: &Catalog, lid_clearance_mm: f64) -> Self {
        Self {
            shapes: catalog
                .shapes
                .iter()
                .map(|s| ShapeItem {
                    id: s.shape,
                    name: s.name.clone(),
                    keyword: s.keyword.clone(),
                })
                .collect(),
            criteria: catalog.criteria.clone(),
            platforms: catalog
                .platforms
                .iter()
                .map(|p| PlatformItem {
                    id: p.id.clone(),
                    name: p.name.clone(),
                })
                .collect(),
            presets: catalog.presets.clone(),
            occasions: catalog.occasions.clone(),
            materials: catalog.materials.clone(),
            lid_criterion: catalog.lid_criterion.clone(),
            lid_clearance_mm,
        }
    }
}
