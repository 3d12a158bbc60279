//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Catalog loaded and usable
/// - **503 Service Unavailable**: Catalog has no shapes or no platforms
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "catalog": {
///       "status": "ok",
///       "message": "4 shapes, 6 criteria, 6 platforms"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let catalog_check = check_catalog(&state);
    let healthy = catalog_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            catalog: catalog_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

fn check_catalog(state: &AppState) -> CheckStatus {
    let catalog = &state.catalog;
    let summary = format!(
        "{} shapes, {} criteria, {} platforms",
        catalog.shapes.len(),
        catalog.criteria.len(),
        catalog.platforms.len()
    );

    if catalog.shapes.is_empty() || catalog.platforms.is_empty() {
        CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Catalog incomplete: {summary}")),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(summary),
        }
    }
}
