//! # API Handlers
//!
//! This module contains all the HTTP endpoint handlers for the VetNest API.

use axum::{extract::State, response::Json};

use crate::db;
use crate::error::{ApiError, ErrorType};
use crate::models::ServiceInfo;
use crate::server::AppState;

pub mod applications;
pub mod listings;
pub mod resources;
pub mod types;

pub use types::HealthStatus;

/// Root handler that returns basic service information
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service information", body = ServiceInfo)
    ),
    tag = "root"
)]
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo::default())
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Process is alive", body = HealthStatus)
    ),
    tag = "operations"
)]
pub async fn healthz() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
    })
}

/// Readiness probe; checks that the database answers
#[utoipa::path(
    get,
    path = "/readyz",
    responses(
        (status = 200, description = "Database reachable", body = HealthStatus),
        (status = 503, description = "Database unavailable", body = ApiError)
    ),
    tag = "operations"
)]
pub async fn readyz(State(state): State<AppState>) -> Result<Json<HealthStatus>, ApiError> {
    if let Err(err) = db::health_check(&state.db).await {
        tracing::warn!(error = %err, "Readiness check failed");
        return Err(ErrorType::ServiceUnavailable.into());
    }

    Ok(Json(HealthStatus {
        status: "ready".to_string(),
    }))
}

#[cfg(test)]
mod tests;
