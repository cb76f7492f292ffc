//! Content record endpoints: the persistence side of content authoring

use crate::{extractors::ValidatedJson, state::AppState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use coursekit_core::types::PaginationInfo;
use coursekit_core::{
    ContentDraft, ContentRecord, ContentType, Error, NewContent, validate_draft,
};
use coursekit_database::{ContentFilter, ContentQueries};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;
use validator::Validate;

/// Payload for creating or updating a content record
///
/// Mirrors the authoring form: both secondary fields may arrive, but only the
/// one selected by `type` is validated and persisted. Either field may be
/// absent or null; the dashboard omits the one its draft left inactive. The
/// owning course id is part of the payload because the dashboard merges it in
/// from route context.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct MutateContentRequest {
    /// Content title
    #[validate(length(max = 255))]
    pub title: String,

    /// Content type discriminant
    #[serde(rename = "type")]
    pub content_type: Option<ContentType>,

    /// YouTube video id field value
    #[serde(default)]
    #[validate(length(max = 100))]
    pub youtube_id: Option<String>,

    /// Rich-text body field value
    #[serde(default)]
    pub text: Option<String>,

    /// Owning course
    pub course_id: Uuid,
}

impl MutateContentRequest {
    /// Re-run the draft schema server-side and produce the persistable payload.
    ///
    /// Validation errors never reach the database layer.
    ///
    /// # Errors
    ///
    /// Returns the ready-to-send error response when the payload violates the
    /// content schema.
    pub fn to_payload(&self) -> Result<NewContent, (StatusCode, Json<ErrorBody>)> {
        let draft = ContentDraft {
            title: self.title.clone(),
            content_type: self.content_type,
            youtube_id: self.youtube_id.clone().unwrap_or_default(),
            text: self.text.clone().unwrap_or_default(),
        };

        if let Err(field_errors) = validate_draft(&draft) {
            warn!("Content payload failed validation: {:?}", field_errors);
            return Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorBody {
                    error: "Validation failed".to_string(),
                    code: "VALIDATION_ERROR".to_string(),
                    details: Some(serde_json::json!(field_errors)),
                }),
            ));
        }

        // validate_draft guarantees the content type is set
        draft.payload(self.course_id).ok_or_else(|| {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorBody {
                    error: "Content type is required".to_string(),
                    code: "VALIDATION_ERROR".to_string(),
                    details: None,
                }),
            )
        })
    }
}

/// Query parameters for listing contents
#[derive(Debug, Deserialize, Validate)]
pub struct ListContentsQuery {
    /// Number of records to return
    #[validate(range(min = 1, max = 500))]
    pub limit: Option<i64>,

    /// Offset for pagination
    #[validate(range(min = 0))]
    pub offset: Option<i64>,
}

/// Response for listing contents of a course
#[derive(Debug, Serialize)]
pub struct ListContentsResponse {
    /// Content records, newest first
    pub contents: Vec<ContentRecord>,

    /// Total number of records in the course
    pub total: i64,

    /// Number of records returned
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

fn not_found(resource: &str, code: &str) -> HandlerError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: resource.to_string(),
            code: code.to_string(),
            details: None,
        }),
    )
}

/// Create a content record
///
/// Exactly one row is written per successful call; a validation failure never
/// reaches the database.
///
/// # Errors
///
/// * `UNPROCESSABLE_ENTITY` - payload violates the content schema
/// * `NOT_FOUND` - owning course does not exist
/// * `INTERNAL_SERVER_ERROR` - database failure
pub async fn create_content(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<MutateContentRequest>,
) -> Result<(StatusCode, Json<ContentRecord>), HandlerError> {
    let payload = request.to_payload()?;

    info!(
        "Creating {} content '{}' in course {}",
        payload.content_type, payload.title, payload.course_id
    );

    let row = match ContentQueries::insert(&state.pool, &payload).await {
        Ok(row) => row,
        Err(Error::NotFound { resource }) => {
            return Err(not_found(&resource, "COURSE_NOT_FOUND"));
        }
        Err(e) => return Err(database_error(&e)),
    };

    let record = ContentRecord::try_from(row).map_err(|e| database_error(&e))?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Update an existing content record
///
/// The owning course of a record is immutable; the `course_id` in the payload
/// is only used to rebuild the persistable field set.
///
/// # Errors
///
/// * `UNPROCESSABLE_ENTITY` - payload violates the content schema
/// * `NOT_FOUND` - record does not exist
/// * `INTERNAL_SERVER_ERROR` - database failure
pub async fn update_content(
    State(state): State<Arc<AppState>>,
    Path(content_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<MutateContentRequest>,
) -> Result<Json<ContentRecord>, HandlerError> {
    let payload = request.to_payload()?;

    info!("Updating content {}", content_id);

    let row = match ContentQueries::update(&state.pool, content_id, &payload).await {
        Ok(row) => row,
        Err(Error::NotFound { resource }) => {
            info!("Content not found: {}", content_id);
            return Err(not_found(&resource, "CONTENT_NOT_FOUND"));
        }
        Err(e) => return Err(database_error(&e)),
    };

    let record = ContentRecord::try_from(row).map_err(|e| database_error(&e))?;
    Ok(Json(record))
}

/// Get a single content record
///
/// # Errors
///
/// * `NOT_FOUND` - record does not exist
/// * `INTERNAL_SERVER_ERROR` - database failure
pub async fn get_content(
    State(state): State<Arc<AppState>>,
    Path(content_id): Path<Uuid>,
) -> Result<Json<ContentRecord>, HandlerError> {
    let row = match ContentQueries::find_by_id(&state.pool, content_id).await {
        Ok(row) => row,
        Err(Error::NotFound { resource }) => {
            return Err(not_found(&resource, "CONTENT_NOT_FOUND"));
        }
        Err(e) => return Err(database_error(&e)),
    };

    let record = ContentRecord::try_from(row).map_err(|e| database_error(&e))?;
    Ok(Json(record))
}

/// List contents of a course with pagination
///
/// # Errors
///
/// * `BAD_REQUEST` - invalid query parameters
/// * `INTERNAL_SERVER_ERROR` - database failure
pub async fn list_contents(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<Uuid>,
    Query(query): Query<ListContentsQuery>,
) -> Result<Json<ListContentsResponse>, HandlerError> {
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

    let filter = ContentFilter {
        course_id,
        limit,
        offset,
    };
    let rows = ContentQueries::list_by_course(&state.pool, filter)
        .await
        .map_err(|e| database_error(&e))?;

    let total = match ContentQueries::count_by_course(&state.pool, course_id).await {
        Ok(count) => count,
        Err(e) => {
            warn!("Failed to count contents: {}", e);
            rows.len() as i64
        }
    };

    let contents = rows
        .into_iter()
        .map(ContentRecord::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| database_error(&e))?;

    let count = contents.len() as i64;
    let pagination = PaginationInfo {
        has_next: offset + limit < total,
        has_prev: offset > 0,
        next_offset: (offset + limit < total).then_some(offset + limit),
        prev_offset: (offset > 0).then(|| (offset - limit).max(0)),
    };

    Ok(Json(ListContentsResponse {
        contents,
        total,
        count,
        offset,
        pagination,
    }))
}

/// Delete a content record
///
/// # Errors
///
/// * `NOT_FOUND` - record does not exist
/// * `INTERNAL_SERVER_ERROR` - database failure
pub async fn delete_content(
    State(state): State<Arc<AppState>>,
    Path(content_id): Path<Uuid>,
) -> Result<StatusCode, HandlerError> {
    info!("Deleting content {}", content_id);

    match ContentQueries::delete(&state.pool, content_id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(Error::NotFound { resource }) => Err(not_found(&resource, "CONTENT_NOT_FOUND")),
        Err(e) => Err(database_error(&e)),
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn video_request() -> MutateContentRequest {
        MutateContentRequest {
            title: "Intro".to_string(),
            content_type: Some(ContentType::Video),
            youtube_id: Some("abc123".to_string()),
            text: None,
            course_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn test_payload_from_valid_request() {
        let request = video_request();
        let payload = request.to_payload().unwrap();

        assert_eq!(payload.course_id, request.course_id);
        assert_eq!(payload.youtube_id.as_deref(), Some("abc123"));
        assert!(payload.text.is_none());
    }

    #[test]
    fn test_payload_rejects_missing_type() {
        let mut request = video_request();
        request.content_type = None;

        let (status, body) = request.to_payload().unwrap_err();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.0.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_payload_rejects_missing_youtube_id() {
        let mut request = video_request();
        request.youtube_id = None;

        let (status, body) = request.to_payload().unwrap_err();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let details = body.0.details.unwrap();
        assert!(details.get("youtubeId").is_some());
    }

    #[test]
    fn test_payload_rejects_empty_youtube_id() {
        let mut request = video_request();
        request.youtube_id = Some(String::new());

        let (status, _body) = request.to_payload().unwrap_err();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_request_accepts_null_inactive_field() {
        // A client serializing both options without omission sends nulls
        let json = serde_json::json!({
            "title": "Intro",
            "type": "video",
            "youtube_id": "abc123",
            "text": null,
            "course_id": "7c9e6679-7425-40de-944b-e07fc1f90ae7"
        });

        let request: MutateContentRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.youtube_id.as_deref(), Some("abc123"));
        assert!(request.text.is_none());
        assert!(request.to_payload().is_ok());
    }

    #[test]
    fn test_request_wire_shape() {
        let json = serde_json::json!({
            "title": "Intro",
            "type": "video",
            "youtubeId": "abc123",
            "courseId": "7c9e6679-7425-40de-944b-e07fc1f90ae7"
        });

        // Wire casing comes from the dashboard client
        let request: MutateContentRequest =
            serde_json::from_value(rename_keys(json)).unwrap();
        assert_eq!(request.content_type, Some(ContentType::Video));
        assert_eq!(request.youtube_id.as_deref(), Some("abc123"));
    }

    // The dashboard sends snake_case; this mirrors its serializer.
    fn rename_keys(value: serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "title": value["title"],
            "type": value["type"],
            "youtube_id": value["youtubeId"],
            "course_id": value["courseId"],
        })
    }
}
