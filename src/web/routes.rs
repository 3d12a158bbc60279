//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::planner_handler;
use axum::{Router, routing::get};

/// Public web routes.
///
/// # Endpoints
///
/// - `GET /` - Planner page; form state travels in the query string
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/", get(planner_handler))
}
