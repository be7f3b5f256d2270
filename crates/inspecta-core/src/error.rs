//! Error types for the inspection catalog.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Child {child} not found in group {group_id}")]
    ChildNotFound { group_id: String, child: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Operation timed out: {operation}")]
    Timeout { operation: String },

    #[error("Preference storage error: {0}")]
    Preferences(String),

    #[error("{0}")]
    Internal(String),
}

impl CatalogError {
    /// Shorthand for a missing group.
    pub fn group_not_found(id: impl ToString) -> Self {
        CatalogError::NotFound {
            entity: "group".into(),
            id: id.to_string(),
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
