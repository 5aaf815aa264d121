use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::{DbHealthDto, HealthDto},
    server::model::app::AppState,
};

pub static HEALTH_TAG: &str = "health";

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is up", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    Json(HealthDto { ok: true })
}

/// Database reachability probe
#[utoipa::path(
    get,
    path = "/health/db",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Database is reachable", body = DbHealthDto),
        (status = 500, description = "Database is unreachable", body = DbHealthDto)
    ),
)]
pub async fn health_db(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.ping().await {
        Ok(()) => (StatusCode::OK, Json(DbHealthDto { db: true })).into_response(),
        Err(err) => {
            tracing::error!("database health check failed: {err}");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DbHealthDto { db: false }),
            )
                .into_response()
        }
    }
}
