//! Content form submission handlers
//!
//! Each request drives one [`ContentForm`] session: seed it (from the
//! existing record in edit mode), apply the operator's field values, submit
//! through the content service and translate the outcome for the page
//! script. Validation failures come back as per-field messages; remote
//! failures echo the draft so nothing the operator typed is lost.

use crate::{
    form::{ContentForm, FormError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use coursekit_core::ContentType;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

/// Field values posted by the authoring form
#[derive(Debug, Clone, Deserialize)]
pub struct ContentFormPayload {
    /// Content title
    #[serde(default)]
    pub title: String,

    /// Selected content type; the select control posts an empty string
    /// before a choice is made
    #[serde(default, rename = "type")]
    pub content_type: Option<String>,

    /// YouTube video id field value
    #[serde(default)]
    pub youtube_id: String,

    /// Rich-text body field value
    #[serde(default)]
    pub text: String,
}

/// Body returned on successful submission
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    /// Always true
    pub success: bool,
    /// Where the page should navigate
    pub redirect: String,
}

type HandlerError = (StatusCode, Json<serde_json::Value>);

/// Create content for a course
pub async fn submit_new_content(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<Uuid>,
    Json(payload): Json<ContentFormPayload>,
) -> Result<Json<SubmitResponse>, HandlerError> {
    let mut form = ContentForm::new(course_id, None);
    apply_payload(&mut form, &payload)?;

    submit(form, &state).await
}

/// Update existing content of a course
///
/// The routing layer loads the existing record so the form session starts
/// from what is persisted, then the posted values are applied on top.
pub async fn submit_existing_content(
    State(state): State<Arc<AppState>>,
    Path((course_id, content_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<ContentFormPayload>,
) -> Result<Json<SubmitResponse>, HandlerError> {
    let existing = match state.api_client.get_content(content_id).await {
        Ok(record) => record,
        Err(coursekit_core::Error::NotFound { resource }) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({
                    "error": resource,
                    "code": "CONTENT_NOT_FOUND"
                })),
            ));
        }
        Err(e) => {
            error!("Failed to load content {} for editing: {}", content_id, e);
            return Err((
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({
                    "error": "Failed to load existing content",
                    "code": "REMOTE_FAILURE"
                })),
            ));
        }
    };

    let mut form = ContentForm::new(course_id, Some(&existing));
    apply_payload(&mut form, &payload)?;

    submit(form, &state).await
}

/// Apply posted field values onto a form session
fn apply_payload(form: &mut ContentForm, payload: &ContentFormPayload) -> Result<(), HandlerError> {
    let content_type = parse_content_type(payload.content_type.as_deref())?;

    form.set_title(payload.title.clone());
    form.set_content_type(content_type);
    form.set_youtube_id(payload.youtube_id.clone());
    form.set_text(payload.text.clone());

    Ok(())
}

/// Parse the posted type value; empty means "not chosen yet"
fn parse_content_type(raw: Option<&str>) -> Result<Option<ContentType>, HandlerError> {
    match raw {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(serde_json::json!({
                    "error": "Validation failed",
                    "code": "VALIDATION_ERROR",
                    "details": { "type": format!("Unknown content type: {value}") }
                })),
            )
        }),
    }
}

/// Drive a form session through the content service and shape the response
async fn submit(
    mut form: ContentForm,
    state: &Arc<AppState>,
) -> Result<Json<SubmitResponse>, HandlerError> {
    match form.submit(&state.api_client).await {
        Ok(outcome) => {
            info!(
                "Content {} saved, redirecting to {}",
                outcome.record.id, outcome.redirect
            );
            Ok(Json(SubmitResponse {
                success: true,
                redirect: outcome.redirect,
            }))
        }
        Err(FormError::Invalid(errors)) => Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({
                "error": "Validation failed",
                "code": "VALIDATION_ERROR",
                "details": errors,
                "active_field": form.active_field(),
            })),
        )),
        Err(FormError::Remote(e)) => Err((
            StatusCode::BAD_GATEWAY,
            Json(serde_json::json!({
                "error": e.to_string(),
                "code": "REMOTE_FAILURE",
                "draft": form.draft(),
            })),
        )),
        Err(FormError::SubmissionInFlight | FormError::AlreadySucceeded) => Err((
            StatusCode::CONFLICT,
            Json(serde_json::json!({
                "error": "A submission is already in progress",
                "code": "SUBMISSION_IN_FLIGHT"
            })),
        )),
    }
}
