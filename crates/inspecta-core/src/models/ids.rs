//! Strongly-typed identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Group identifier of the form `group-N`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub String);

impl GroupId {
    /// Builds the identifier for the `n`th group issued by a store.
    pub fn from_sequence(n: u64) -> Self {
        GroupId(format!("group-{n}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupId {
    fn from(value: &str) -> Self {
        GroupId(value.to_owned())
    }
}

/// Stable child identifier, assigned when the child is first stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChildId(pub Uuid);

impl ChildId {
    /// A fresh random id. Never equal to any id already issued.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        ChildId(Uuid::new_v4())
    }
}

impl fmt::Display for ChildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Addresses a child inside its group.
///
/// `Id` survives concurrent inserts and removals. `Position` is the
/// index into the group's child list at the time of the call and goes
/// stale as soon as that list changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChildRef {
    Id(ChildId),
    Position(usize),
}

impl fmt::Display for ChildRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildRef::Id(id) => write!(f, "{id}"),
            ChildRef::Position(index) => write!(f, "at index {index}"),
        }
    }
}

impl From<ChildId> for ChildRef {
    fn from(id: ChildId) -> Self {
        ChildRef::Id(id)
    }
}

impl From<usize> for ChildRef {
    fn from(index: usize) -> Self {
        ChildRef::Position(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_ids_are_unique() {
        assert_ne!(ChildId::new(), ChildId::new());
    }

    #[test]
    fn child_ref_display() {
        assert_eq!(ChildRef::Position(3).to_string(), "at index 3");
        assert_eq!(GroupId::from_sequence(4).to_string(), "group-4");
    }
}
