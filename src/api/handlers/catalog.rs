//! Handler for the catalog endpoint.

use axum::{Json, extract::State};

use crate::api::dto::catalog::CatalogResponse;
use crate::application::services::LID_CLEARANCE_MM;
use crate::state::AppState;

/// Returns the shapes, criteria, platforms and form choices.
///
/// # Endpoint
///
/// `GET /api/catalog`
pub async fn catalog_handler(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(CatalogResponse::from_catalog(&state.catalog, LID_CLEARANCE_MM))
}
