//! Health and readiness endpoints

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,

    /// Response timestamp
    pub timestamp: DateTime<Utc>,
}

/// Readiness check response
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// Overall readiness
    pub ready: bool,

    /// Database connectivity
    pub database: bool,

    /// Response timestamp
    pub timestamp: DateTime<Utc>,
}

/// Liveness probe: the process is up and serving requests
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

/// Readiness probe: the service can reach its database
///
/// # Errors
///
/// Returns `SERVICE_UNAVAILABLE` with the probe body when the database ping
/// fails.
pub async fn readiness_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReadinessResponse>, (StatusCode, Json<ReadinessResponse>)> {
    let database = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => true,
        Err(e) => {
            error!("Readiness database ping failed: {}", e);
            false
        }
    };

    let response = ReadinessResponse {
        ready: database,
        database,
        timestamp: Utc::now(),
    };

    if response.ready {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
