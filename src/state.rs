use std::sync::Arc;

use crate::application::services::{GeometryService, PlanService, QueryService};
use crate::domain::Catalog;

/// Shared, read-only state injected into every handler.
///
/// Built once at startup; each request computes from its own form snapshot.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub geometry_service: Arc<GeometryService>,
    pub query_service: Arc<QueryService>,
    pub plan_service: Arc<PlanService>,
}

impl AppState {
    /// Wires the services around `catalog`.
    pub fn new(catalog: Catalog) -> Self {
        let catalog = Arc::new(catalog);
        let geometry_service = Arc::new(GeometryService::new());
        let query_service = Arc::new(QueryService::new(catalog.clone()));
        let plan_service = Arc::new(PlanService::new(
            catalog.clone(),
            geometry_service.clone(),
            query_service.clone(),
        ));

        Self {
            catalog,
            geometry_service,
            query_service,
            plan_service,
        }
    }
}
