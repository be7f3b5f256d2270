//! Child inspection domain model.

use serde::{Deserialize, Serialize};

use super::ids::ChildId;
use super::name::LocalizedName;

/// Qualification metrics tracked per inspection domain.
///
/// These are reported figures, not structural counts; nothing in the
/// catalog derives them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualificationMetrics {
    pub valid_qualified_entities: u32,
    pub valid_qualified_inspectors: u32,
    pub pending_qualification_requests: u32,
}

/// An inspection domain stored under a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Child {
    pub id: ChildId,
    pub name: LocalizedName,
    /// Copy of the parent group's name taken when the child was created.
    /// Renaming the group does not touch it.
    pub group_name: LocalizedName,
    pub is_active: bool,
    pub metrics: QualificationMetrics,
}

/// Fields supplied when adding or replacing a child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewChild {
    pub name: LocalizedName,
    pub is_active: bool,
    #[serde(default)]
    pub metrics: QualificationMetrics,
}

impl NewChild {
    /// Materialize a stored child under a parent named `parent_name`.
    pub fn into_child(self, parent_name: &LocalizedName) -> Child {
        Child {
            id: ChildId::new(),
            name: self.name,
            group_name: parent_name.clone(),
            is_active: self.is_active,
            metrics: self.metrics,
        }
    }
}

impl Child {
    /// Overwrite the editable fields, keeping identity and the parent
    /// name copy.
    pub fn replace_with(&mut self, update: NewChild) {
        self.name = update.name;
        self.is_active = update.is_active;
        self.metrics = update.metrics;
    }
}
