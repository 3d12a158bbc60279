//! Handler for single-platform search queries.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::search::{SearchRequest, SearchResponse};
use crate::domain::entities::SelectedCriteria;
use crate::error::AppError;
use crate::state::AppState;

/// Builds the search query and destination URL for one platform.
///
/// # Endpoint
///
/// `POST /api/search`
///
/// # Request Body
///
/// ```json
/// { "shape": "rectangular", "criteria": [], "platform": "google" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "platform": "google",
///   "query": "rectangular box dieline vector",
///   "url": "https://www.google.com/search?q=rectangular%20box%20dieline%20vector&tbm=isch"
/// }
/// ```
///
/// An unknown platform is not an error: the response carries `"url": null`.
///
/// # Errors
///
/// Returns 400 Bad Request if the platform id is empty or too many criteria
/// are sent.
pub async fn search_handler(
    State(state): State<AppState>,
    Json(payload): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    payload.validate()?;

    let selected: SelectedCriteria = payload.criteria.into_iter().collect();
    let search = state
        .query_service
        .build_query(payload.shape, &selected, &payload.platform);

    Ok(Json(SearchResponse {
        platform: search.platform,
        query: search.query,
        url: search.url,
    }))
}
