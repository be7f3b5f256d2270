//! Group domain model.

use serde::{Deserialize, Serialize};

use super::child::{Child, NewChild};
use super::ids::{ChildRef, GroupId};
use super::name::LocalizedName;

/// Child counts derived from a group's child list.
///
/// `suspended` has no backing activation state and is always zero, so
/// `total == active + inactive + suspended` holds for every derived value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildCounters {
    pub total: u32,
    pub active: u32,
    pub inactive: u32,
    pub suspended: u32,
}

impl ChildCounters {
    pub fn from_children(children: &[Child]) -> Self {
        let active = children.iter().filter(|c| c.is_active).count() as u32;
        let total = children.len() as u32;
        Self {
            total,
            active,
            inactive: total - active,
            suspended: 0,
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.total == self.active + self.inactive + self.suspended
    }
}

/// A catalog group of inspection domains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: LocalizedName,
    pub is_active: bool,
    pub counters: ChildCounters,
    pub children: Vec<Child>,
}

/// Fields required to create a new group. The store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGroup {
    pub name: LocalizedName,
    pub is_active: bool,
    #[serde(default)]
    pub children: Vec<NewChild>,
}

impl CreateGroup {
    pub fn new(name: LocalizedName, is_active: bool) -> Self {
        Self {
            name,
            is_active,
            children: Vec::new(),
        }
    }

    /// Build the stored group under `id`, deriving its counters.
    pub fn into_group(self, id: GroupId) -> Group {
        let children = self
            .children
            .into_iter()
            .map(|child| child.into_child(&self.name))
            .collect();
        let mut group = Group {
            id,
            name: self.name,
            is_active: self.is_active,
            counters: ChildCounters::default(),
            children,
        };
        group.recount();
        group
    }
}

impl Group {
    /// Re-derive `counters` from the current child list.
    pub fn recount(&mut self) {
        self.counters = ChildCounters::from_children(&self.children);
    }

    /// Resolve a child reference to its current index.
    pub fn child_position(&self, child: ChildRef) -> Option<usize> {
        match child {
            ChildRef::Position(index) if index < self.children.len() => Some(index),
            ChildRef::Position(_) => None,
            ChildRef::Id(id) => self.children.iter().position(|c| c.id == id),
        }
    }
}
