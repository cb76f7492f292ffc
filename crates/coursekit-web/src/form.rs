//! Content authoring form controller
//!
//! Owns the editable draft of a content record for one form session: seeds
//! it from an existing record or empty defaults, applies field edits,
//! validates against the shared schema and submits exactly one create or
//! update call to the content service.
//!
//! Submission lifecycle:
//!
//! ```text
//! Idle -> Validating -> Invalid     (back to Idle, field errors returned)
//!                    -> Submitting  -> Succeeded (terminal, redirect yielded)
//!                                   -> Failed    (back to Idle, draft retained)
//! ```
//!
//! Validation is synchronous, so `Validating` is transient; the stored
//! phases are `Idle`, `Submitting` and `Succeeded`. While a submission is in
//! flight further submit attempts are rejected, never queued.

use crate::service::ContentService;
use coursekit_core::{
    ContentDraft, ContentId, ContentRecord, ContentType, CourseId, Error, FieldErrors, NewContent,
    validate_draft,
};
use serde::Serialize;
use std::fmt;
use tracing::{error, info};

/// Whether the form creates a new record or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// No pre-existing record; submit dispatches a create
    Create,
    /// Editing the record with this id; submit dispatches an update
    Edit(ContentId),
}

/// Stored submission phase of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Editable, no submission outstanding
    Idle,
    /// A remote call is outstanding
    Submitting,
    /// The record was persisted; the form session is over
    Succeeded,
}

/// The secondary field activated by the current content type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveField {
    /// YouTube video id input
    YoutubeId,
    /// Rich-text body editor
    Text,
}

/// Errors surfaced by the form controller
#[derive(Debug)]
pub enum FormError {
    /// The draft violates the schema; per-field messages attached
    Invalid(FieldErrors),
    /// A submission is already outstanding; the attempt was ignored
    SubmissionInFlight,
    /// The record was already persisted by this form session
    AlreadySucceeded,
    /// The remote create/update call failed; the draft is retained
    Remote(Error),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(errors) => write!(f, "Draft failed validation ({} fields)", errors.len()),
            Self::SubmissionInFlight => write!(f, "A submission is already in flight"),
            Self::AlreadySucceeded => write!(f, "The form was already submitted"),
            Self::Remote(e) => write!(f, "Submission failed: {e}"),
        }
    }
}

impl std::error::Error for FormError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Remote(e) => Some(e),
            _ => None,
        }
    }
}

/// Result of a successful submission
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    /// The persisted record returned by the service
    pub record: ContentRecord,
    /// Where the caller should navigate next
    pub redirect: String,
}

/// Controller owning the draft of one content form session
#[derive(Debug, Clone)]
pub struct ContentForm {
    course_id: CourseId,
    mode: FormMode,
    draft: ContentDraft,
    phase: FormPhase,
}

impl ContentForm {
    /// Initialize a form session.
    ///
    /// Seeds the draft from `existing` when editing, empty defaults
    /// otherwise. The owning course id comes from route context.
    #[must_use]
    pub fn new(course_id: CourseId, existing: Option<&ContentRecord>) -> Self {
        let (mode, draft) = match existing {
            Some(record) => (FormMode::Edit(record.id), ContentDraft::from(record)),
            None => (FormMode::Create, ContentDraft::default()),
        };

        Self {
            course_id,
            mode,
            draft,
            phase: FormPhase::Idle,
        }
    }

    /// Owning course id
    #[must_use]
    pub const fn course_id(&self) -> CourseId {
        self.course_id
    }

    /// Form mode
    #[must_use]
    pub const fn mode(&self) -> FormMode {
        self.mode
    }

    /// Current submission phase
    #[must_use]
    pub const fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Current draft state
    #[must_use]
    pub const fn draft(&self) -> &ContentDraft {
        &self.draft
    }

    /// Set the title field
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    /// Select the content type.
    ///
    /// Only switches which secondary field is active; the now-hidden field
    /// keeps its value so the operator can flip back without losing input.
    pub fn set_content_type(&mut self, content_type: Option<ContentType>) {
        self.draft.content_type = content_type;
    }

    /// Set the YouTube video id field
    pub fn set_youtube_id(&mut self, youtube_id: impl Into<String>) {
        self.draft.youtube_id = youtube_id.into();
    }

    /// Set the rich-text body field
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.draft.text = text.into();
    }

    /// The secondary field activated by the current content type.
    ///
    /// Pure function of the type selection; `None` until a type is chosen.
    #[must_use]
    pub const fn active_field(&self) -> Option<ActiveField> {
        match self.draft.content_type {
            Some(ContentType::Video) => Some(ActiveField::YoutubeId),
            Some(ContentType::Text) => Some(ActiveField::Text),
            None => None,
        }
    }

    /// Validate the draft against the schema.
    ///
    /// Synchronous and side-effect free.
    ///
    /// # Errors
    ///
    /// Returns the per-field error map when the draft violates the schema.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        validate_draft(&self.draft)
    }

    /// Validate and transition into `Submitting`, yielding the payload for
    /// the remote call.
    ///
    /// This is the synchronous half of [`submit`](Self::submit); it exists
    /// separately so the in-flight guard is observable around the remote
    /// call's suspension point.
    ///
    /// # Errors
    ///
    /// Rejects re-entrant attempts while `Submitting`, attempts after
    /// success, and drafts that fail validation.
    pub fn begin_submit(&mut self) -> Result<NewContent, FormError> {
        match self.phase {
            FormPhase::Submitting => return Err(FormError::SubmissionInFlight),
            FormPhase::Succeeded => return Err(FormError::AlreadySucceeded),
            FormPhase::Idle => {}
        }

        self.validate().map_err(FormError::Invalid)?;

        // A valid draft always has a content type
        let Some(payload) = self.draft.payload(self.course_id) else {
            let mut errors = FieldErrors::new();
            errors.insert("type".to_string(), "Content type is required".to_string());
            return Err(FormError::Invalid(errors));
        };

        self.phase = FormPhase::Submitting;
        Ok(payload)
    }

    /// Resolve an outstanding submission with the remote call's result.
    ///
    /// On success the form becomes `Succeeded` and yields the redirect
    /// target. On failure the form returns to `Idle` with the draft exactly
    /// as it was, so the operator can retry without re-entering anything.
    ///
    /// # Errors
    ///
    /// Returns the remote failure wrapped in [`FormError::Remote`].
    pub fn finish_submit(
        &mut self,
        result: coursekit_core::Result<ContentRecord>,
    ) -> Result<SubmitOutcome, FormError> {
        match result {
            Ok(record) => {
                self.phase = FormPhase::Succeeded;
                info!(
                    "Content {} persisted for course {}",
                    record.id, self.course_id
                );
                Ok(SubmitOutcome {
                    redirect: format!("/manager/courses/{}", self.course_id),
                    record,
                })
            }
            Err(e) => {
                self.phase = FormPhase::Idle;
                error!("Content submission failed: {}", e);
                Err(FormError::Remote(e))
            }
        }
    }

    /// Submit the draft to the content service.
    ///
    /// Dispatches exactly one remote call per successful validation pass:
    /// create in create mode, update with the existing id in edit mode, with
    /// the owning course id merged into the payload.
    ///
    /// # Errors
    ///
    /// See [`begin_submit`](Self::begin_submit) and
    /// [`finish_submit`](Self::finish_submit).
    pub async fn submit(
        &mut self,
        service: &dyn ContentService,
    ) -> Result<SubmitOutcome, FormError> {
        let payload = self.begin_submit()?;

        let result = match self.mode {
            FormMode::Create => service.create(&payload).await,
            FormMode::Edit(id) => service.update(&payload, id).await,
        };

        self.finish_submit(result)
    }
}
