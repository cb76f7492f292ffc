//! Course management endpoints

use crate::{extractors::ValidatedJson, state::AppState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use coursekit_core::types::PaginationInfo;
use coursekit_core::{Course, Error, NewCourse};
use coursekit_database::CourseQueries;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;
use validator::Validate;

/// Query parameters for listing courses
#[derive(Debug, Deserialize, Validate)]
pub struct ListCoursesQuery {
    /// Number of courses to return
    #[validate(range(min = 1, max = 500))]
    pub limit: Option<i64>,

    /// Offset for pagination
    #[validate(range(min = 0))]
    pub offset: Option<i64>,
}

/// Response for listing courses
#[derive(Debug, Serialize)]
pub struct ListCoursesResponse {
    /// Courses, newest first
    pub courses: Vec<Course>,

    /// Total number of courses
    pub total: i64,

    /// Number of courses returned
    pub count: i64,

    /// Current offset
    pub offset: i64,

    /// Pagination info
    pub pagination: PaginationInfo,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Additional details
    pub details: Option<serde_json::Value>,
}

type HandlerError = (StatusCode, Json<ErrorBody>);

fn database_error(e: &Error) -> HandlerError {
    error!("Database operation failed: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: "Database operation failed".to_string(),
            code: "DATABASE_ERROR".to_string(),
            details: None,
        }),
    )
}

/// Create a course
///
/// # Errors
///
/// * `UNPROCESSABLE_ENTITY` - payload violates validation rules
/// * `INTERNAL_SERVER_ERROR` - database failure
pub async fn create_course(
    State(state): State<Arc<AppState>>,
    ValidatedJson(course): ValidatedJson<NewCourse>,
) -> Result<(StatusCode, Json<Course>), HandlerError> {
    info!("Creating course '{}'", course.name);

    let row = CourseQueries::insert(&state.pool, &course)
        .await
        .map_err(|e| database_error(&e))?;

    Ok((StatusCode::CREATED, Json(Course::from(row))))
}

/// List courses with pagination
///
/// # Errors
///
/// * `BAD_REQUEST` - invalid query parameters
/// * `INTERNAL_SERVER_ERROR` - database failure
pub async fn list_courses(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListCoursesQuery>,
) -> Result<Json<ListCoursesResponse>, HandlerError> {
    if let Err(validation_errors) = query.validate() {
        warn!("Invalid query parameters: {:?}", validation_errors);
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: "Invalid query parameters".to_string(),
                code: "INVALID_PARAMETERS".to_string(),
                details: Some(serde_json::json!(validation_errors)),
            }),
        ));
    }

    let limit = state.clamp_page_size(query.limit);
    let offset = query.offset.unwrap_or(0);

    let rows = CourseQueries::list(&state.pool, limit, offset)
        .await
        .map_err(|e| database_error(&e))?;

    let total = match CourseQueries::count(&state.pool).await {
        Ok(count) => count,
        Err(e) => {
            warn!("Failed to count courses: {}", e);
            rows.len() as i64
        }
    };

    let courses: Vec<Course> = rows.into_iter().map(Course::from).collect();
    let count = courses.len() as i64;

    let pagination = PaginationInfo {
        has_next: offset + limit < total,
        has_prev: offset > 0,
        next_offset: (offset + limit < total).then_some(offset + limit),
        prev_offset: (offset > 0).then(|| (offset - limit).max(0)),
    };

    Ok(Json(ListCoursesResponse {
        courses,
        total,
        count,
        offset,
        pagination,
    }))
}

/// Get a single course
///
/// # Errors
///
/// * `NOT_FOUND` - course does not exist
/// * `INTERNAL_SERVER_ERROR` - database failure
pub async fn get_course(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<Uuid>,
) -> Result<Json<Course>, HandlerError> {
    let row = match CourseQueries::find_by_id(&state.pool, course_id).await {
        Ok(row) => row,
        Err(Error::NotFound { resource }) => {
            info!("Course not found: {}", course_id);
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: resource,
                    code: "COURSE_NOT_FOUND".to_string(),
                    details: None,
                }),
            ));
        }
        Err(e) => return Err(database_error(&e)),
    };

    Ok(Json(Course::from(row)))
}

/// Delete a course and its contents
///
/// # Errors
///
/// * `NOT_FOUND` - course does not exist
/// * `INTERNAL_SERVER_ERROR` - database failure
pub async fn delete_course(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<Uuid>,
) -> Result<StatusCode, HandlerError> {
    info!("Deleting course {}", course_id);

    match CourseQueries::delete(&state.pool, course_id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(Error::NotFound { resource }) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorBody {
                error: resource,
                code: "COURSE_NOT_FOUND".to_string(),
                details: None,
            }),
        )),
        Err(e) => Err(database_error(&e)),
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_list_query_validation() {
        let valid = ListCoursesQuery {
            limit: Some(50),
            offset: Some(0),
        };
        assert!(valid.validate().is_ok());

        let invalid = ListCoursesQuery {
            limit: Some(0),
            offset: None,
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_new_course_validation() {
        let valid = NewCourse {
            name: "Rust for Managers".to_string(),
            category: Some("Programming".to_string()),
            tagline: None,
            thumbnail: None,
        };
        assert!(valid.validate().is_ok());

        let empty_name = NewCourse {
            name: String::new(),
            category: None,
            tagline: None,
            thumbnail: None,
        };
        let errors = empty_name.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_pagination_window() {
        let total = 95_i64;
        let (limit, offset) = (50_i64, 50_i64);

        let pagination = PaginationInfo {
            has_next: offset + limit < total,
            has_prev: offset > 0,
            next_offset: (offset + limit < total).then_some(offset + limit),
            prev_offset: (offset > 0).then(|| (offset - limit).max(0)),
        };

        assert!(!pagination.has_next);
        assert!(pagination.has_prev);
        assert_eq!(pagination.prev_offset, Some(0));
    }
}
