//! Repository trait definitions for catalog access.
//!
//! All repository operations are async. Implementations hand out owned
//! copies; no caller ever holds a reference into repository state.

use crate::error::CatalogResult;
use crate::models::{ChildRef, CreateGroup, Group, GroupId, NewChild};

/// Pagination window over a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub offset: u64,
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 5,
        }
    }
}

impl Pagination {
    pub fn first_page(limit: u64) -> Self {
        Self { offset: 0, limit }
    }

    /// Slice `items` down to this window. Out-of-range windows are empty.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let len = items.len();
        let start = usize::try_from(self.offset).unwrap_or(usize::MAX).min(len);
        let end = start
            .saturating_add(usize::try_from(self.limit).unwrap_or(usize::MAX))
            .min(len);
        &items[start..end]
    }
}

/// A paginated result set.
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

/// The authoritative store of catalog groups.
///
/// Every child-mutating operation re-derives the group's counters from
/// its child list before storing it; counters supplied by the caller are
/// never trusted.
pub trait CatalogRepository: Send + Sync {
    /// Snapshot of every group, in insertion order.
    fn list(&self) -> impl Future<Output = CatalogResult<Vec<Group>>> + Send;

    fn get_by_id(&self, id: &GroupId) -> impl Future<Output = CatalogResult<Group>> + Send;

    /// Store a new group under a freshly issued id. Never fails.
    fn create(&self, input: CreateGroup) -> impl Future<Output = CatalogResult<Group>> + Send;

    /// Replace the stored group with the same id.
    fn update(&self, group: Group) -> impl Future<Output = CatalogResult<Group>> + Send;

    fn delete(&self, id: &GroupId) -> impl Future<Output = CatalogResult<()>> + Send;

    /// Append a child to a group.
    fn add_child(
        &self,
        group_id: &GroupId,
        child: NewChild,
    ) -> impl Future<Output = CatalogResult<Group>> + Send;

    /// Replace the editable fields of one child.
    fn update_child(
        &self,
        group_id: &GroupId,
        child: ChildRef,
        update: NewChild,
    ) -> impl Future<Output = CatalogResult<Group>> + Send;

    fn remove_child(
        &self,
        group_id: &GroupId,
        child: ChildRef,
    ) -> impl Future<Output = CatalogResult<Group>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_clamps_to_bounds() {
        let items: Vec<u32> = (0..12).collect();

        assert_eq!(Pagination::default().slice(&items), &[0, 1, 2, 3, 4]);
        assert_eq!(
            Pagination {
                offset: 10,
                limit: 5
            }
            .slice(&items),
            &[10, 11]
        );
        assert!(
            Pagination {
                offset: 40,
                limit: 5
            }
            .slice(&items)
            .is_empty()
        );
    }
}
