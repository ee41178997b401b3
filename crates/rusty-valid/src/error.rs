// File: src/error.rs
// Purpose: Single error value for callers that only need pass/fail

use thiserror::Error;

use crate::context::Valid;
use crate::store::ErrorStore;

#[derive(Debug, Error)]
pub enum ValidationError {
    /// Display is the JSON of the field errors, or of the nested errors
    /// when only embedded entities failed.
    #[error("{message}")]
    Invalid { message: String, store: ErrorStore },
}

impl ValidationError {
    pub fn store(&self) -> &ErrorStore {
        match self {
            ValidationError::Invalid { store, .. } => store,
        }
    }

    pub fn into_store(self) -> ErrorStore {
        match self {
            ValidationError::Invalid { store, .. } => store,
        }
    }
}

impl From<ErrorStore> for ValidationError {
    fn from(store: ErrorStore) -> Self {
        let encoded = if store.errors().is_empty() {
            serde_json::to_string(store.nested())
        } else {
            serde_json::to_string(store.errors())
        };
        // String-keyed maps of strings always encode
        let message = encoded.unwrap_or_else(|err| {
            tracing::error!("failed to encode validation errors: {}", err);
            "validation error".to_string()
        });
        ValidationError::Invalid { message, store }
    }
}

impl Valid {
    /// `Ok(())` when nothing was recorded, otherwise one error carrying the
    /// collected messages.
    pub fn handle(&self) -> Result<(), ValidationError> {
        if self.has_errors() {
            return Err(ValidationError::from(self.store().clone()));
        }
        Ok(())
    }
}
