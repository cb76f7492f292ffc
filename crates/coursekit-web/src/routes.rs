//! Route definitions for the dashboard web server

use crate::{
    handlers::{api, forms, pages},
    state::AppState,
};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Build the complete dashboard router
pub fn build_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Page routes
        .route("/", get(pages::dashboard))
        .route("/manager/courses", get(pages::courses_page))
        .route("/manager/courses/:id", get(pages::course_page))
        .route(
            "/manager/courses/:id/contents/new",
            get(pages::content_form_page),
        )
        .route(
            "/manager/courses/:id/contents/:content_id/edit",
            get(pages::content_form_page),
        )
        // Form submission routes
        .route(
            "/manager/courses/:id/contents",
            post(forms::submit_new_content),
        )
        .route(
            "/manager/courses/:id/contents/:content_id",
            post(forms::submit_existing_content),
        )
        // Data routes backing the pages
        .route("/api/shell", get(api::api_shell))
        .route("/api/courses", get(api::api_courses))
        .route("/api/courses/:id", get(api::api_course))
        .route("/api/courses/:id/contents", get(api::api_course_contents))
        .route("/api/contents/:id", get(api::api_content))
        // Health check
        .route("/health", get(api::health_check))
}
