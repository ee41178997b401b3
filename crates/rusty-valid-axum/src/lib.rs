// rusty-valid-axum - turn collected validation errors into HTTP responses
//
// Handlers returning `Result<_, ValidationRejection>` can write
// `valid.respond()?` (or `valid.handle()?`) after checking their input.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rusty_valid::{ErrorStore, Valid, ValidationError};

/// 400 response carrying the collected errors as JSON.
///
/// Body shape: `{"errors": {"field": ["message"]}, "nested": {"key": {...}}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRejection {
    store: ErrorStore,
}

impl ValidationRejection {
    pub fn new(store: ErrorStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ErrorStore {
        &self.store
    }
}

impl IntoResponse for ValidationRejection {
    fn into_response(self) -> Response {
        tracing::debug!(messages = self.store.len(), "rejecting request with validation errors");
        (StatusCode::BAD_REQUEST, Json(self.store)).into_response()
    }
}

impl From<ValidationError> for ValidationRejection {
    fn from(err: ValidationError) -> Self {
        Self::new(err.into_store())
    }
}

impl From<Valid> for ValidationRejection {
    fn from(valid: Valid) -> Self {
        Self::new(valid.into_store())
    }
}

/// Response side of a validation context.
pub trait RespondExt {
    /// `Ok(())` on a clean context (nothing is written), otherwise the
    /// rejection to return from the handler.
    fn respond(&self) -> Result<(), ValidationRejection>;
}

impl RespondExt for Valid {
    fn respond(&self) -> Result<(), ValidationRejection> {
        if self.has_errors() {
            return Err(ValidationRejection::new(self.store().clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::header::CONTENT_TYPE;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clean_context_responds_ok() {
        let mut valid = Valid::new();
        valid.text("Ada", "name").required();
        assert!(valid.respond().is_ok());
    }

    #[test]
    fn test_rejection_status_and_type() {
        let mut valid = Valid::new();
        valid.text("", "name").required();

        let resp = valid.respond().unwrap_err().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(resp.headers()[CONTENT_TYPE], "application/json");
    }

    #[tokio::test]
    async fn test_rejection_body() {
        let mut valid = Valid::new();
        valid.number(0, "age").required();

        let resp = ValidationRejection::from(valid).into_response();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"errors": {"age": ["is required"]}, "nested": {}})
        );
    }

    #[test]
    fn test_from_validation_error() {
        let mut valid = Valid::new();
        valid.text("nope", "email").email();

        let rejection = ValidationRejection::from(valid.handle().unwrap_err());
        assert_eq!(rejection.store(), valid.store());
    }
}
