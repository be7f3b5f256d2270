//! Store-specific error types and conversions.

use inspecta_core::error::CatalogError;
use inspecta_core::models::{ChildId, ChildRef, GroupId};

/// Store-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Group with ID {0} not found")]
    GroupNotFound(GroupId),

    #[error("Child {child} not found in group {group_id}")]
    ChildNotFound { group_id: GroupId, child: ChildRef },

    #[error("Child {child} appears more than once in group {group_id}")]
    DuplicateChild { group_id: GroupId, child: ChildId },

    #[error("Seed catalog is invalid: {0}")]
    Seed(#[from] serde_json::Error),
}

impl From<StoreError> for CatalogError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::GroupNotFound(id) => CatalogError::group_not_found(id),
            StoreError::ChildNotFound { group_id, child } => CatalogError::ChildNotFound {
                group_id: group_id.to_string(),
                child: child.to_string(),
            },
            StoreError::DuplicateChild { .. } => CatalogError::Validation {
                message: err.to_string(),
            },
            other => CatalogError::Internal(other.to_string()),
        }
    }
}
