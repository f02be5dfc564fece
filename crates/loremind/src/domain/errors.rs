//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} named {name}")]
    NotFound { entity_type: String, name: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>, N: AsRef<str>>(entity_type: T, name: N) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            name: name.as_ref().to_string(),
        }
    }
}
