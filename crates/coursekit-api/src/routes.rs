//! API route definitions

use crate::{handlers, state::AppState};
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;

/// Build the content and course routes
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Content endpoints
        .route("/api/contents", post(handlers::contents::create_content))
        .route("/api/contents/:id", get(handlers::contents::get_content))
        .route("/api/contents/:id", put(handlers::contents::update_content))
        .route(
            "/api/contents/:id",
            delete(handlers::contents::delete_content),
        )
        .route(
            "/api/courses/:course_id/contents",
            get(handlers::contents::list_contents),
        )
        // Course endpoints
        .route("/api/courses", post(handlers::courses::create_course))
        .route("/api/courses", get(handlers::courses::list_courses))
        .route("/api/courses/:id", get(handlers::courses::get_course))
        .route("/api/courses/:id", delete(handlers::courses::delete_course))
        // Service info
        .route("/api", get(api_info))
        .route("/", get(root_endpoint))
        .layer(CompressionLayer::new())
}

/// Build health check routes
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
}

/// Combine all routes into a single router
pub fn build_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(api_routes())
        .merge(health_routes())
        .fallback(not_found_handler)
}

/// Handle 404 Not Found errors
async fn not_found_handler() -> (axum::http::StatusCode, axum::Json<serde_json::Value>) {
    (
        axum::http::StatusCode::NOT_FOUND,
        axum::Json(serde_json::json!({
            "error": "Not Found",
            "code": "ROUTE_NOT_FOUND",
            "message": "The requested endpoint does not exist"
        })),
    )
}

/// Root endpoint for basic connectivity
async fn root_endpoint() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "service": "coursekit content service",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "ok"
    }))
}

/// API info endpoint
async fn api_info() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "api": "coursekit content service",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "contents": "/api/contents",
            "course_contents": "/api/courses/:course_id/contents",
            "courses": "/api/courses",
            "health": "/health"
        }
    }))
}
