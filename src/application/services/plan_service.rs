//! Composes geometry and search links into a full plan for one form snapshot.

use serde::Serialize;
use std::sync::Arc;

use crate::application::services::geometry_service::GeometryService;
use crate::application::services::query_service::{QueryService, ReferenceLink};
use crate::domain::Catalog;
use crate::domain::entities::{CutDimension, GiftForm, Material, SelectedCriteria, ShapeKind};

/// Everything the planner shows for one form snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxPlan {
    pub name: String,
    pub preset: String,
    pub occasion: String,
    pub shape: ShapeKind,
    pub shape_name: String,
    pub cut_list: Vec<CutDimension>,
    pub lid_list: Option<Vec<CutDimension>>,
    pub references: Vec<ReferenceLink>,
    pub materials: Vec<Material>,
}

/// Service producing [`BoxPlan`]s.
///
/// The lid list is enabled by selecting the catalog's lid criterion.
pub struct PlanService {
    catalog: Arc<Catalog>,
    geometry_service: Arc<GeometryService>,
    query_service: Arc<QueryService>,
}

impl PlanService {
    pub fn new(
        catalog: Arc<Catalog>,
        geometry_service: Arc<GeometryService>,
        query_service: Arc<QueryService>,
    ) -> Self {
        Self {
            catalog,
            geometry_service,
            query_service,
        }
    }

    /// Whether `selected` switches on the lid cut list.
    pub fn lid_enabled(&self, selected: &SelectedCriteria) -> bool {
        selected.contains(&self.catalog.lid_criterion)
    }

    pub fn plan(&self, form: &GiftForm, selected: &SelectedCriteria) -> BoxPlan {
        let shape = form.shape;
        let cut_list = self
            .geometry_service
            .resolve_cut_list(shape, &form.dimensions);
        let lid_list = self.geometry_service.resolve_lid_list(
            shape,
            &form.dimensions,
            self.lid_enabled(selected),
        );

        BoxPlan {
            name: form.name.clone(),
            preset: form.preset.clone(),
            occasion: form.occasion.clone(),
            shape,
            shape_name: self.catalog.shape_name(shape).to_string(),
            cut_list,
            lid_list,
            references: self.query_service.build_all(shape, selected),
            materials: self.catalog.materials.clone(),
        }
    }
}
