//! Handler for reference-platform redirects.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect},
};
use serde_json::json;
use tracing::info;
use validator::Validate;

use crate::api::dto::search::ReferenceParams;
use crate::domain::entities::SelectedCriteria;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects the browser to a platform search for the given shape and criteria.
///
/// # Endpoint
///
/// `GET /go/{platform}?shape=cube&criteria=lid_base,eco`
///
/// # Request Flow
///
/// 1. Build the query for `platform` from `shape` and `criteria`
/// 2. Return 307 Temporary Redirect to the destination URL
///
/// `shape` defaults to `rectangular`; unknown criteria are ignored.
///
/// # Errors
///
/// Returns 404 Not Found if the platform has no URL template. No redirect is
/// issued in that case.
pub async fn reference_redirect_handler(
    Path(platform): Path<String>,
    Query(params): Query<ReferenceParams>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    params.validate()?;

    let selected: SelectedCriteria = params.criteria.into_iter().collect();
    let search = state
        .query_service
        .build_query(params.shape, &selected, &platform);

    let Some(url) = search.url else {
        return Err(AppError::not_found(
            "Unknown platform",
            json!({ "platform": platform }),
        ));
    };

    info!(platform = %platform, shape = %params.shape, "Redirecting to reference search");

    Ok(Redirect::temporary(&url))
}
