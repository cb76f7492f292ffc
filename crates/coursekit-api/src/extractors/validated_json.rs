//! Validated JSON extractor

use crate::extractors::ExtractorError;
use axum::{
    Json, async_trait,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor that runs structural validation after deserialization
///
/// Payload-shape rules (lengths, ranges) live on the payload structs as
/// `validator` derives; the type-conditional content rules are applied by the
/// handlers through the shared draft schema.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ExtractorError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|err| ExtractorError::bad_request(format!("Invalid JSON: {err}")))?;

        data.validate().map_err(|validation_errors| {
            ExtractorError::validation(
                "Validation failed",
                serde_json::json!(validation_errors),
            )
        })?;

        Ok(Self(data))
    }
}

impl<T> std::ops::Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> std::ops::DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use serde::{Deserialize, Serialize};
    use validator::Validate;

    #[derive(Debug, Serialize, Deserialize, Validate)]
    struct TestPayload {
        #[validate(length(min = 1, max = 10))]
        name: String,

        #[validate(range(min = 1, max = 100))]
        position: u32,
    }

    #[test]
    fn test_validation_rules() {
        let valid = TestPayload {
            name: "Intro".to_string(),
            position: 1,
        };
        assert!(valid.validate().is_ok());

        let empty_name = TestPayload {
            name: String::new(),
            position: 1,
        };
        assert!(empty_name.validate().is_err());

        let out_of_range = TestPayload {
            name: "Intro".to_string(),
            position: 500,
        };
        assert!(out_of_range.validate().is_err());
    }
}
