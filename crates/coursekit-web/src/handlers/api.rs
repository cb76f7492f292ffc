//! Data handlers backing the dashboard pages
//!
//! Thin calls through the API client with JSON fallbacks, so a backend
//! outage degrades to empty lists instead of broken pages.

use crate::{shell, state::AppState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use coursekit_core::{ContentRecord, Role};
use serde::Deserialize;
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

/// Query parameters for the shell endpoint
#[derive(Debug, Deserialize)]
pub struct ShellQuery {
    /// Operator role; defaults to manager for the manager dashboard
    #[serde(default)]
    pub role: Role,

    /// Path of the page being rendered
    #[serde(default = "default_shell_path")]
    pub path: String,
}

fn default_shell_path() -> String {
    "/".to_string()
}

/// Pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    /// Number of records to return
    pub limit: Option<i64>,

    /// Offset for pagination
    pub offset: Option<i64>,
}

/// Shell model for the requesting page
pub async fn api_shell(Query(query): Query<ShellQuery>) -> Json<shell::ShellModel> {
    Json(shell::shell_for(query.role, &query.path))
}

/// Course list, proxied to the content service
pub async fn api_courses(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Json<serde_json::Value> {
    match state.api_client.list_courses(query.limit, query.offset).await {
        Ok(courses) => Json(courses),
        Err(e) => {
            error!("Failed to fetch courses from API: {}", e);
            Json(serde_json::json!({
                "error": "Failed to fetch courses",
                "message": e.to_string(),
                "courses": [],
                "total": 0,
                "count": 0,
                "offset": 0
            }))
        }
    }
}

/// Single course details
pub async fn api_course(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    match state.api_client.get_course(course_id).await {
        Ok(course) => Ok(Json(serde_json::json!(course))),
        Err(coursekit_core::Error::NotFound { .. }) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            error!("Failed to fetch course {}: {}", course_id, e);
            Err(StatusCode::BAD_GATEWAY)
        }
    }
}

/// Contents of a course
pub async fn api_course_contents(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<Uuid>,
    Query(query): Query<PageQuery>,
) -> Json<serde_json::Value> {
    match state
        .api_client
        .list_course_contents(course_id, query.limit, query.offset)
        .await
    {
        Ok(contents) => Json(contents),
        Err(e) => {
            error!("Failed to fetch contents for course {}: {}", course_id, e);
            Json(serde_json::json!({
                "error": "Failed to fetch contents",
                "message": e.to_string(),
                "contents": [],
                "total": 0,
                "count": 0,
                "offset": 0
            }))
        }
    }
}

/// Single content record, used to prefill the edit form
pub async fn api_content(
    State(state): State<Arc<AppState>>,
    Path(content_id): Path<Uuid>,
) -> Result<Json<ContentRecord>, StatusCode> {
    match state.api_client.get_content(content_id).await {
        Ok(record) => Ok(Json(record)),
        Err(coursekit_core::Error::NotFound { .. }) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            error!("Failed to fetch content {}: {}", content_id, e);
            Err(StatusCode::BAD_GATEWAY)
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}
