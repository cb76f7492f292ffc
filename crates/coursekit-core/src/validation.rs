//! Validation schema for content drafts
//!
//! A pure, synchronous pass over a [`ContentDraft`]: no side effects, no
//! reflection, one explicit check per rule. Errors come back as a map from
//! field name to a human-readable message so callers can render them next to
//! the offending field.

use crate::types::{ContentDraft, ContentType, MAX_TITLE_LEN};
use std::collections::BTreeMap;

/// Per-field validation messages, keyed by field name
pub type FieldErrors = BTreeMap<String, String>;

/// Validate a content draft against the schema.
///
/// Rules:
/// - `title` must be non-empty and at most [`MAX_TITLE_LEN`] characters
/// - `type` must be selected
/// - when the type is `video`, `youtube_id` must be non-empty
/// - when the type is `text`, `text` must be non-empty
///
/// The field not selected by the type is ignored entirely, whatever it holds.
///
/// # Errors
///
/// Returns the full error map when one or more fields violate the schema.
pub fn validate_draft(draft: &ContentDraft) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if draft.title.trim().is_empty() {
        errors.insert("title".to_string(), "Title is required".to_string());
    } else if draft.title.chars().count() as u64 > MAX_TITLE_LEN {
        errors.insert(
            "title".to_string(),
            format!("Title must be at most {MAX_TITLE_LEN} characters"),
        );
    }

    match draft.content_type {
        None => {
            errors.insert("type".to_string(), "Content type is required".to_string());
        }
        Some(ContentType::Video) => {
            if draft.youtube_id.trim().is_empty() {
                errors.insert(
                    "youtubeId".to_string(),
                    "YouTube video ID is required for video content".to_string(),
                );
            }
        }
        Some(ContentType::Text) => {
            if draft.text.trim().is_empty() {
                errors.insert(
                    "text".to_string(),
                    "Content text is required for text content".to_string(),
                );
            }
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn video_draft() -> ContentDraft {
        ContentDraft {
            title: "Intro".to_string(),
            content_type: Some(ContentType::Video),
            youtube_id: "abc123".to_string(),
            text: String::new(),
        }
    }

    fn text_draft() -> ContentDraft {
        ContentDraft {
            title: "Reading".to_string(),
            content_type: Some(ContentType::Text),
            youtube_id: String::new(),
            text: "<p>Body</p>".to_string(),
        }
    }

    #[test]
    fn test_valid_video_draft() {
        assert!(validate_draft(&video_draft()).is_ok());
    }

    #[test]
    fn test_valid_text_draft() {
        assert!(validate_draft(&text_draft()).is_ok());
    }

    #[test]
    fn test_video_requires_youtube_id_regardless_of_text() {
        let mut draft = video_draft();
        draft.youtube_id = String::new();
        draft.text = "<p>plenty of body text</p>".to_string();

        let errors = validate_draft(&draft).unwrap_err();
        assert!(errors.contains_key("youtubeId"));
        assert!(!errors.contains_key("text"));
    }

    #[test]
    fn test_text_requires_body_regardless_of_youtube_id() {
        let mut draft = text_draft();
        draft.text = String::new();
        draft.youtube_id = "dQw4w9WgXcQ".to_string();

        let errors = validate_draft(&draft).unwrap_err();
        assert!(errors.contains_key("text"));
        assert!(!errors.contains_key("youtubeId"));
    }

    #[test]
    fn test_empty_title_fails_independent_of_other_fields() {
        let mut draft = video_draft();
        draft.title = String::new();

        let errors = validate_draft(&draft).unwrap_err();
        assert_eq!(errors.get("title").map(String::as_str), Some("Title is required"));
    }

    #[test]
    fn test_whitespace_title_fails() {
        let mut draft = video_draft();
        draft.title = "   ".to_string();

        assert!(validate_draft(&draft).is_err());
    }

    #[test]
    fn test_unset_type_fails_independent_of_other_fields() {
        let draft = ContentDraft {
            title: "Intro".to_string(),
            content_type: None,
            youtube_id: "abc123".to_string(),
            text: "<p>Body</p>".to_string(),
        };

        let errors = validate_draft(&draft).unwrap_err();
        assert!(errors.contains_key("type"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_title_length_cap() {
        let mut draft = video_draft();
        draft.title = "a".repeat(256);

        let errors = validate_draft(&draft).unwrap_err();
        assert!(errors.contains_key("title"));

        draft.title = "a".repeat(255);
        assert!(validate_draft(&draft).is_ok());
    }

    #[test]
    fn test_all_errors_reported_at_once() {
        let draft = ContentDraft::default();
        let errors = validate_draft(&draft).unwrap_err();

        assert!(errors.contains_key("title"));
        assert!(errors.contains_key("type"));
        assert_eq!(errors.len(), 2);
    }

    proptest! {
        #[test]
        fn test_populated_video_drafts_validate(
            title in "\\PC{1,100}",
            youtube_id in "[A-Za-z0-9_-]{1,20}",
        ) {
            prop_assume!(!title.trim().is_empty());
            let draft = ContentDraft {
                title,
                content_type: Some(ContentType::Video),
                youtube_id,
                text: String::new(),
            };
            prop_assert!(validate_draft(&draft).is_ok());
        }

        #[test]
        fn test_empty_youtube_id_never_validates_as_video(text in "\\PC{0,100}") {
            let draft = ContentDraft {
                title: "Intro".to_string(),
                content_type: Some(ContentType::Video),
                youtube_id: String::new(),
                text,
            };
            prop_assert!(validate_draft(&draft).is_err());
        }
    }
}
