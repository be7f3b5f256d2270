//! Form validation errors.

use inspecta_core::error::CatalogError;
use thiserror::Error;

use crate::forms::FieldError;

/// A form submission that failed validation. Never reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid form fields: {}", describe(.0))]
pub struct ValidationError(pub Vec<FieldError>);

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{} ({})", e.field, e.key))
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<ValidationError> for CatalogError {
    fn from(err: ValidationError) -> Self {
        CatalogError::Validation {
            message: err.to_string(),
        }
    }
}
