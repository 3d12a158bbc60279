//! Handler for the full plan endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::plan::{PlanRequest, PlanResponse};
use crate::domain::entities::{GiftForm, SelectedCriteria};
use crate::error::AppError;
use crate::state::AppState;

/// Computes cut lists, reference links and materials for a form snapshot.
///
/// # Endpoint
///
/// `POST /api/plan`
///
/// # Request Body
///
/// ```json
/// {
///   "form": {
///     "name": "Quà sinh nhật Lan",
///     "preset": "Gấu bông",
///     "occasion": "Sinh nhật",
///     "shape": "rectangular",
///     "dimensions": { "length": 100, "width": 80, "height": 50 }
///   },
///   "criteria": ["lid_base", "eco"]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if text fields or the criteria list exceed their
/// size limits.
pub async fn plan_handler(
    State(state): State<AppState>,
    Json(payload): Json<PlanRequest>,
) -> Result<Json<PlanResponse>, AppError> {
    payload.validate()?;

    let form: GiftForm = payload.form.into();
    let selected: SelectedCriteria = payload.criteria.into_iter().collect();

    let plan = state.plan_service.plan(&form, &selected);

    tracing::debug!(
        shape = %plan.shape,
        criteria = selected.len(),
        lid = plan.lid_list.is_some(),
        "Plan computed"
    );

    Ok(Json(plan.into()))
}
