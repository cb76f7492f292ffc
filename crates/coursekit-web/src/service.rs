//! Content service boundary
//!
//! The form controller only needs two operations from the system of record:
//! create and update. This trait keeps the controller independent of the
//! transport so tests can drive it against an in-memory double.

use crate::api_client::ApiClient;
use async_trait::async_trait;
use chrono::Utc;
use coursekit_core::{ContentId, ContentRecord, Error, NewContent, Result};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Remote persistence boundary for content records
#[async_trait]
pub trait ContentService: Send + Sync {
    /// Persist a new content record
    async fn create(&self, content: &NewContent) -> Result<ContentRecord>;

    /// Update an existing content record
    async fn update(&self, content: &NewContent, id: ContentId) -> Result<ContentRecord>;
}

#[async_trait]
impl ContentService for ApiClient {
    async fn create(&self, content: &NewContent) -> Result<ContentRecord> {
        self.create_content(content).await
    }

    async fn update(&self, content: &NewContent, id: ContentId) -> Result<ContentRecord> {
        self.update_content(content, id).await
    }
}

/// In-memory content service double for tests
///
/// Records every call so tests can assert exactly how many network mutations
/// a flow produced, and can be configured to fail to exercise the
/// remote-failure path.
#[derive(Debug, Default)]
pub struct MockContentService {
    /// Should calls fail
    should_fail: bool,

    /// Failure message
    failure_message: String,

    /// Recorded create payloads
    created: Arc<Mutex<Vec<NewContent>>>,

    /// Recorded update payloads with their target ids
    updated: Arc<Mutex<Vec<(ContentId, NewContent)>>>,
}

impl MockContentService {
    /// Create a new mock service
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the mock to fail every call
    #[must_use]
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.should_fail = true;
        self.failure_message = message.into();
        self
    }

    /// Number of create calls seen
    #[must_use]
    pub fn create_calls(&self) -> usize {
        self.created.lock().unwrap().len()
    }

    /// Number of update calls seen
    #[must_use]
    pub fn update_calls(&self) -> usize {
        self.updated.lock().unwrap().len()
    }

    /// The most recent create payload, if any
    #[must_use]
    pub fn last_created(&self) -> Option<NewContent> {
        self.created.lock().unwrap().last().cloned()
    }

    /// The most recent update call, if any
    #[must_use]
    pub fn last_updated(&self) -> Option<(ContentId, NewContent)> {
        self.updated.lock().unwrap().last().cloned()
    }

    fn record_from(content: &NewContent, id: ContentId) -> ContentRecord {
        let now = Utc::now();
        ContentRecord {
            id,
            course_id: content.course_id,
            title: content.title.clone(),
            content_type: content.content_type,
            youtube_id: content.youtube_id.clone(),
            text: content.text.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[async_trait]
impl ContentService for MockContentService {
    async fn create(&self, content: &NewContent) -> Result<ContentRecord> {
        if self.should_fail {
            return Err(Error::RemoteService {
                message: self.failure_message.clone(),
            });
        }

        self.created.lock().unwrap().push(content.clone());
        Ok(Self::record_from(content, Uuid::new_v4()))
    }

    async fn update(&self, content: &NewContent, id: ContentId) -> Result<ContentRecord> {
        if self.should_fail {
            return Err(Error::RemoteService {
                message: self.failure_message.clone(),
            });
        }

        self.updated.lock().unwrap().push((id, content.clone()));
        Ok(Self::record_from(content, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursekit_core::ContentType;
    use pretty_assertions::assert_eq;

    fn payload() -> NewContent {
        NewContent {
            course_id: Uuid::new_v4(),
            title: "Intro".to_string(),
            content_type: ContentType::Video,
            youtube_id: Some("abc123".to_string()),
            text: None,
        }
    }

    #[tokio::test]
    async fn test_mock_records_create_calls() {
        let service = MockContentService::new();
        let content = payload();

        let record = service.create(&content).await.unwrap();

        assert_eq!(service.create_calls(), 1);
        assert_eq!(service.update_calls(), 0);
        assert_eq!(record.course_id, content.course_id);
        assert_eq!(service.last_created().unwrap(), content);
    }

    #[tokio::test]
    async fn test_mock_update_echoes_id() {
        let service = MockContentService::new();
        let content = payload();
        let id = Uuid::new_v4();

        let record = service.update(&content, id).await.unwrap();

        assert_eq!(record.id, id);
        assert_eq!(service.update_calls(), 1);
        assert_eq!(service.last_updated().unwrap().0, id);
    }

    #[tokio::test]
    async fn test_mock_failure_records_nothing() {
        let service = MockContentService::new().with_failure("backend down");

        let result = service.create(&payload()).await;

        assert!(matches!(result, Err(Error::RemoteService { .. })));
        assert_eq!(service.create_calls(), 0);
    }
}
