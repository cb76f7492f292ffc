//! Core data types for the coursekit platform

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Course identifier type
pub type CourseId = Uuid;

/// Content identifier type
pub type ContentId = Uuid;

/// Maximum length accepted for titles and names
pub const MAX_TITLE_LEN: u64 = 255;

/// Content type discriminant
///
/// Selects which secondary payload field is active on a content record:
/// `Video` activates the YouTube video id, `Text` activates the rich-text
/// body. Exactly one payload field is meaningful at a time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// Lesson backed by a YouTube video
    Video,
    /// Lesson backed by a rich-text body
    Text,
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Video => write!(f, "video"),
            Self::Text => write!(f, "text"),
        }
    }
}

impl std::str::FromStr for ContentType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "video" => Ok(Self::Video),
            "text" => Ok(Self::Text),
            other => Err(crate::Error::Validation {
                field: "type".to_string(),
                message: format!("Unknown content type: {other}"),
            }),
        }
    }
}

/// A persisted course content record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentRecord {
    /// Unique identifier
    pub id: ContentId,

    /// Owning course
    pub course_id: CourseId,

    /// Content title
    pub title: String,

    /// Content type discriminant
    #[serde(rename = "type")]
    pub content_type: ContentType,

    /// YouTube video id; populated when `content_type` is `Video`
    pub youtube_id: Option<String>,

    /// Rich-text body; populated when `content_type` is `Text`
    pub text: Option<String>,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last updated
    pub updated_at: DateTime<Utc>,
}

/// The editable, not-yet-persisted draft of a content record
///
/// Both secondary fields are kept at all times so the operator can flip the
/// content type back and forth without losing entered values. Only the field
/// matching the current type is validated and carried into the persisted
/// payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct ContentDraft {
    /// Content title
    #[validate(length(max = 255))]
    pub title: String,

    /// Selected content type; `None` until the operator picks one
    #[serde(rename = "type")]
    pub content_type: Option<ContentType>,

    /// YouTube video id field value
    #[validate(length(max = 100))]
    pub youtube_id: String,

    /// Rich-text body field value
    pub text: String,
}

impl ContentDraft {
    /// Build the persistable payload for this draft.
    ///
    /// The owning course id is merged in here; it is supplied by the route
    /// context and never edited through the form. Only the field selected by
    /// the content type is carried; the inactive field is dropped. Returns
    /// `None` while no content type has been chosen.
    #[must_use]
    pub fn payload(&self, course_id: CourseId) -> Option<NewContent> {
        let content_type = self.content_type?;
        let (youtube_id, text) = match content_type {
            ContentType::Video => (Some(self.youtube_id.clone()), None),
            ContentType::Text => (None, Some(self.text.clone())),
        };

        Some(NewContent {
            course_id,
            title: self.title.clone(),
            content_type,
            youtube_id,
            text,
        })
    }
}

impl From<&ContentRecord> for ContentDraft {
    fn from(record: &ContentRecord) -> Self {
        Self {
            title: record.title.clone(),
            content_type: Some(record.content_type),
            youtube_id: record.youtube_id.clone().unwrap_or_default(),
            text: record.text.clone().unwrap_or_default(),
        }
    }
}

/// Payload for creating or updating a content record
///
/// The field not selected by the content type is omitted from the wire shape
/// entirely rather than sent as an explicit null.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewContent {
    /// Owning course
    pub course_id: CourseId,

    /// Content title
    pub title: String,

    /// Content type discriminant
    #[serde(rename = "type")]
    pub content_type: ContentType,

    /// YouTube video id; only when `content_type` is `Video`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_id: Option<String>,

    /// Rich-text body; only when `content_type` is `Text`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A course owning content records
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Course {
    /// Unique identifier
    pub id: CourseId,

    /// Course name
    pub name: String,

    /// Category label
    pub category: Option<String>,

    /// Short marketing tagline
    pub tagline: Option<String>,

    /// Thumbnail image path or URL
    pub thumbnail: Option<String>,

    /// When the course was created
    pub created_at: DateTime<Utc>,

    /// When the course was last updated
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a course
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewCourse {
    /// Course name
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Category label
    #[validate(length(max = 255))]
    pub category: Option<String>,

    /// Short marketing tagline
    #[validate(length(max = 255))]
    pub tagline: Option<String>,

    /// Thumbnail image path or URL
    #[validate(length(max = 1024))]
    pub thumbnail: Option<String>,
}

/// Dashboard operator role
///
/// Drives which sidebar and header the layout shell renders. Always passed
/// explicitly into shell functions rather than read from ambient state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Course manager / administrator
    Manager,
    /// Enrolled student
    Student,
}

impl Default for Role {
    fn default() -> Self {
        Self::Manager
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Manager => write!(f, "manager"),
            Self::Student => write!(f, "student"),
        }
    }
}

/// Pagination information for list responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationInfo {
    /// Whether there are more results
    pub has_next: bool,

    /// Whether there are previous results
    pub has_prev: bool,

    /// Next page offset
    pub next_offset: Option<i64>,

    /// Previous page offset
    pub prev_offset: Option<i64>,
}

/// API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,

    /// Success status
    pub success: bool,

    /// Optional message
    pub message: Option<String>,

    /// Response timestamp
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            data,
            success: true,
            message: None,
            timestamp: Utc::now(),
        }
    }

    /// Create a successful response with message
    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            success: true,
            message: Some(message.into()),
            timestamp: Utc::now(),
        }
    }
}

/// Error response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Error code
    pub code: String,

    /// Success status (always false for errors)
    pub success: bool,

    /// Error timestamp
    pub timestamp: DateTime<Utc>,

    /// Optional additional details
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            success: false,
            timestamp: Utc::now(),
            details: None,
        }
    }

    /// Create an error response with details
    pub fn with_details(
        error: impl Into<String>,
        code: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            success: false,
            timestamp: Utc::now(),
            details: Some(details),
        }
    }
}
