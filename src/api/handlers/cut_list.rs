//! Handler for the cut-list endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::cut_list::{CutListRequest, CutListResponse, to_items};
use crate::application::services::LID_CLEARANCE_MM;
use crate::domain::entities::SelectedCriteria;
use crate::error::AppError;
use crate::state::AppState;

/// Computes the body cut list and, if applicable, the lid cut list.
///
/// # Endpoint
///
/// `POST /api/cut-list`
///
/// # Request Body
///
/// ```json
/// {
///   "shape": "cube",
///   "dimensions": { "side": 80 },
///   "criteria": ["lid_base"]
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "shape": "cube",
///   "cut_list": [{ "field": "side", "label": "Cạnh", "millimeters": 80.0, "display": "Cạnh: 80 mm" }],
///   "lid_list": [{ "field": "side", "label": "Cạnh", "millimeters": 82.0, "display": "Cạnh: 82 mm" }],
///   "lid_clearance_mm": 2.0
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if too many criteria are sent.
pub async fn cut_list_handler(
    State(state): State<AppState>,
    Json(payload): Json<CutListRequest>,
) -> Result<Json<CutListResponse>, AppError> {
    payload.validate()?;

    let selected: SelectedCriteria = payload.criteria.into_iter().collect();
    let lid_enabled = state.plan_service.lid_enabled(&selected);

    let cut_list = state
        .geometry_service
        .resolve_cut_list(payload.shape, &payload.dimensions);
    let lid_list =
        state
            .geometry_service
            .resolve_lid_list(payload.shape, &payload.dimensions, lid_enabled);

    Ok(Json(CutListResponse {
        shape: payload.shape,
        cut_list: to_items(&cut_list),
        lid_list: lid_list.as_deref().map(to_items),
        lid_clearance_mm: LID_CLEARANCE_MM,
    }))
}
