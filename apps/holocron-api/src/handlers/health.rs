//! Health check handler

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use holocron_domain::ports::{PlanetLookup, PlanetRepository};
use tracing::warn;

use crate::{dto::health::HealthResponse, AppState};

/// Report connectivity of the planet store
#[utoipa::path(
    get,
    path = "/health-check",
    responses(
        (status = 200, description = "Service and dependencies are healthy", body = HealthResponse),
        (status = 500, description = "A dependency is unreachable", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check<R, L>(State(state): State<AppState<R, L>>) -> impl IntoResponse
where
    R: PlanetRepository + 'static,
    L: PlanetLookup + 'static,
{
    let report = HealthResponse::from_store(state.planet_service.health().await);

    if report.is_healthy() {
        (StatusCode::OK, Json(report))
    } else {
        warn!(mongo_db = %report.dependencies.mongo_db, "Health check failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(report))
    }
}
