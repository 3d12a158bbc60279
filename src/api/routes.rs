//! API route configuration.

use crate::api::handlers::{catalog_handler, cut_list_handler, plan_handler, search_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET  /catalog`  - Shapes, criteria, platforms and form choices
/// - `POST /cut-list` - Body and lid cut lists for a shape
/// - `POST /search`   - Query text and destination URL for one platform
/// - `POST /plan`     - Full plan for a form snapshot
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(catalog_handler))
        .route("/cut-list", post(cut_list_handler))
        .route("/search", post(search_handler))
        .route("/plan", post(plan_handler))
}
