//! Database models for coursekit

use chrono::{DateTime, Utc};
use coursekit_core::{ContentRecord, ContentType, Course, Error, Result};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for courses
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CourseDb {
    /// Unique identifier
    pub id: Uuid,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,

    /// Course name
    pub name: String,

    /// Category label
    pub category: Option<String>,

    /// Short marketing tagline
    pub tagline: Option<String>,

    /// Thumbnail image path or URL
    pub thumbnail: Option<String>,
}

impl From<CourseDb> for Course {
    fn from(row: CourseDb) -> Self {
        Self {
            id: row.id,
            name: row.name,
            category: row.category,
            tagline: row.tagline,
            thumbnail: row.thumbnail,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Database model for course contents
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContentDb {
    /// Unique identifier
    pub id: Uuid,

    /// Owning course
    pub course_id: Uuid,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,

    /// Content title
    pub title: String,

    /// Content type discriminant as stored ("video" or "text")
    pub content_type: String,

    /// YouTube video id
    pub youtube_id: Option<String>,

    /// Rich-text body
    pub text: Option<String>,
}

impl TryFrom<ContentDb> for ContentRecord {
    type Error = Error;

    fn try_from(row: ContentDb) -> Result<Self> {
        let content_type: ContentType = row.content_type.parse()?;

        Ok(Self {
            id: row.id,
            course_id: row.course_id,
            title: row.title,
            content_type,
            youtube_id: row.youtube_id,
            text: row.text,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn content_row(content_type: &str) -> ContentDb {
        let now = Utc::now();
        ContentDb {
            id: Uuid::new_v4(),
            course_id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            title: "Getting Started".to_string(),
            content_type: content_type.to_string(),
            youtube_id: Some("dQw4w9WgXcQ".to_string()),
            text: None,
        }
    }

    #[test]
    fn test_course_row_conversion() {
        let now = Utc::now();
        let row = CourseDb {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            name: "Rust for Managers".to_string(),
            category: Some("Programming".to_string()),
            tagline: None,
            thumbnail: Some("/assets/th-1.png".to_string()),
        };

        let course = Course::from(row.clone());
        assert_eq!(course.id, row.id);
        assert_eq!(course.name, "Rust for Managers");
        assert_eq!(course.category.as_deref(), Some("Programming"));
        assert!(course.tagline.is_none());
    }

    #[test]
    fn test_content_row_conversion() {
        let row = content_row("video");
        let record = ContentRecord::try_from(row.clone()).unwrap();

        assert_eq!(record.id, row.id);
        assert_eq!(record.content_type, ContentType::Video);
        assert_eq!(record.youtube_id.as_deref(), Some("dQw4w9WgXcQ"));
    }

    #[test]
    fn test_content_row_rejects_unknown_type() {
        let row = content_row("audio");
        assert!(ContentRecord::try_from(row).is_err());
    }
}
