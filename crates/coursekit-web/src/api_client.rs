//! HTTP client for communicating with the coursekit content service

use coursekit_core::{ContentId, ContentRecord, Course, CourseId, Error, NewContent, Result};
use reqwest::Client;

/// API client for making HTTP requests to the content service
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Base URL this client targets
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a content record
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the service rejects it.
    pub async fn create_content(&self, content: &NewContent) -> Result<ContentRecord> {
        let url = format!("{}/api/contents", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(content)
            .send()
            .await
            .map_err(|e| Error::RemoteService {
                message: format!("Failed to create content: {e}"),
            })?;

        Self::parse_record(response, "create content").await
    }

    /// Update a content record
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the service rejects it.
    pub async fn update_content(
        &self,
        content: &NewContent,
        id: ContentId,
    ) -> Result<ContentRecord> {
        let url = format!("{}/api/contents/{id}", self.base_url);

        let response = self
            .client
            .put(&url)
            .json(content)
            .send()
            .await
            .map_err(|e| Error::RemoteService {
                message: format!("Failed to update content: {e}"),
            })?;

        Self::parse_record(response, "update content").await
    }

    /// Get a single content record
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails; a missing record surfaces
    /// as a not-found error.
    pub async fn get_content(&self, id: ContentId) -> Result<ContentRecord> {
        let url = format!("{}/api/contents/{id}", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::RemoteService {
                message: format!("Failed to fetch content: {e}"),
            })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::NotFound {
                resource: format!("Content with ID {id}"),
            });
        }

        Self::parse_record(response, "fetch content").await
    }

    /// Get a single course
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails; a missing course surfaces
    /// as a not-found error.
    pub async fn get_course(&self, id: CourseId) -> Result<Course> {
        let url = format!("{}/api/courses/{id}", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::RemoteService {
                message: format!("Failed to fetch course: {e}"),
            })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::NotFound {
                resource: format!("Course with ID {id}"),
            });
        }

        if !response.status().is_success() {
            return Err(Error::RemoteService {
                message: format!("API returned error: {}", response.status()),
            });
        }

        response.json().await.map_err(|e| Error::RemoteService {
            message: format!("Failed to parse course: {e}"),
        })
    }

    /// List courses
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be
    /// parsed.
    pub async fn list_courses(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<serde_json::Value> {
        let url = format!(
            "{}/api/courses{}",
            self.base_url,
            Self::page_query(limit, offset)
        );

        self.fetch_json(&url, "list courses").await
    }

    /// List contents of a course
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be
    /// parsed.
    pub async fn list_course_contents(
        &self,
        course_id: CourseId,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<serde_json::Value> {
        let url = format!(
            "{}/api/courses/{course_id}/contents{}",
            self.base_url,
            Self::page_query(limit, offset)
        );

        self.fetch_json(&url, "list course contents").await
    }

    fn page_query(limit: Option<i64>, offset: Option<i64>) -> String {
        let mut query_params = Vec::new();

        if let Some(limit) = limit {
            query_params.push(format!("limit={}", urlencoding::encode(&limit.to_string())));
        }
        if let Some(offset) = offset {
            query_params.push(format!(
                "offset={}",
                urlencoding::encode(&offset.to_string())
            ));
        }

        if query_params.is_empty() {
            String::new()
        } else {
            format!("?{}", query_params.join("&"))
        }
    }

    async fn fetch_json(&self, url: &str, action: &str) -> Result<serde_json::Value> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::RemoteService {
                message: format!("Failed to {action}: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(Error::RemoteService {
                message: format!("API returned error: {}", response.status()),
            });
        }

        response.json().await.map_err(|e| Error::RemoteService {
            message: format!("Failed to parse response: {e}"),
        })
    }

    async fn parse_record(response: reqwest::Response, action: &str) -> Result<ContentRecord> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::RemoteService {
                message: format!("Failed to {action}: {status} {body}"),
            });
        }

        response.json().await.map_err(|e| Error::RemoteService {
            message: format!("Failed to parse response: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_page_query_building() {
        assert_eq!(ApiClient::page_query(None, None), "");
        assert_eq!(ApiClient::page_query(Some(50), None), "?limit=50");
        assert_eq!(
            ApiClient::page_query(Some(50), Some(100)),
            "?limit=50&offset=100"
        );
    }

    #[test]
    fn test_base_url_is_kept_verbatim() {
        let client = ApiClient::new("http://localhost:8080");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
