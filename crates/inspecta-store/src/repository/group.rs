//! In-memory implementation of [`CatalogRepository`].

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use inspecta_core::error::CatalogResult;
use inspecta_core::models::{ChildRef, CreateGroup, Group, GroupId, NewChild};
use inspecta_core::repository::CatalogRepository;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::seed::seed_groups;

/// Authoritative group list plus the id sequence.
#[derive(Debug)]
struct Catalog {
    groups: Vec<Group>,
    /// Next `group-N` suffix. Never reused, even after deletes.
    next_id: u64,
}

impl Catalog {
    fn position(&self, id: &GroupId) -> Result<usize, StoreError> {
        self.groups
            .iter()
            .position(|g| &g.id == id)
            .ok_or_else(|| StoreError::GroupNotFound(id.clone()))
    }

    fn group_mut(&mut self, id: &GroupId) -> Result<&mut Group, StoreError> {
        let index = self.position(id)?;
        Ok(&mut self.groups[index])
    }
}

fn check_unique_children(group: &Group) -> Result<(), StoreError> {
    let mut seen = HashSet::with_capacity(group.children.len());
    match group.children.iter().find(|c| !seen.insert(c.id)) {
        Some(dup) => Err(StoreError::DuplicateChild {
            group_id: group.id.clone(),
            child: dup.id,
        }),
        None => Ok(()),
    }
}

/// Process-local catalog store.
///
/// Cloning yields another handle onto the same catalog. Each operation
/// waits out its configured latency first and then applies its change
/// under a single lock acquisition, so mutations are atomic per call.
#[derive(Clone)]
pub struct MemoryCatalogRepository {
    catalog: Arc<Mutex<Catalog>>,
    config: StoreConfig,
}

impl MemoryCatalogRepository {
    /// An empty store; the first group created is `group-1`.
    pub fn new(config: StoreConfig) -> Self {
        Self::with_groups(Vec::new(), config)
    }

    /// A store preloaded with the embedded seed catalog.
    pub fn seeded(config: StoreConfig) -> Result<Self, StoreError> {
        Ok(Self::with_groups(seed_groups()?, config))
    }

    fn with_groups(groups: Vec<Group>, config: StoreConfig) -> Self {
        let next_id = groups.len() as u64 + 1;
        Self {
            catalog: Arc::new(Mutex::new(Catalog { groups, next_id })),
            config,
        }
    }

    async fn latency(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    async fn mutate_children<F>(&self, group_id: &GroupId, apply: F) -> CatalogResult<Group>
    where
        F: FnOnce(&mut Group) -> Result<(), StoreError> + Send,
    {
        self.latency(self.config.write_latency).await;
        let mut catalog = self.catalog.lock().await;

        let group = catalog
            .group_mut(group_id)
            .inspect_err(|e| warn!(error = %e, "Child mutation rejected"))?;
        apply(group).inspect_err(|e| warn!(error = %e, "Child mutation rejected"))?;
        group.recount();

        debug!(
            group_id = %group.id,
            total = group.counters.total,
            active = group.counters.active,
            "Recounted group children"
        );
        Ok(group.clone())
    }
}

impl CatalogRepository for MemoryCatalogRepository {
    async fn list(&self) -> CatalogResult<Vec<Group>> {
        self.latency(self.config.read_latency).await;
        let catalog = self.catalog.lock().await;
        Ok(catalog.groups.clone())
    }

    async fn get_by_id(&self, id: &GroupId) -> CatalogResult<Group> {
        self.latency(self.config.read_latency).await;
        let catalog = self.catalog.lock().await;
        let index = catalog.position(id)?;
        Ok(catalog.groups[index].clone())
    }

    async fn create(&self, input: CreateGroup) -> CatalogResult<Group> {
        self.latency(self.config.write_latency).await;
        let mut catalog = self.catalog.lock().await;

        let id = GroupId::from_sequence(catalog.next_id);
        catalog.next_id += 1;

        let group = input.into_group(id);
        debug!(group_id = %group.id, children = group.children.len(), "Created group");
        catalog.groups.push(group.clone());
        Ok(group)
    }

    /// The child list is taken as supplied, parent-name copies included;
    /// only the counters are re-derived. Duplicate child ids are rejected.
    async fn update(&self, mut group: Group) -> CatalogResult<Group> {
        self.latency(self.config.write_latency).await;
        let mut catalog = self.catalog.lock().await;

        let index = catalog
            .position(&group.id)
            .inspect_err(|e| warn!(error = %e, "Update rejected"))?;
        check_unique_children(&group).inspect_err(|e| warn!(error = %e, "Update rejected"))?;
        group.recount();
        debug!(group_id = %group.id, "Updated group");
        catalog.groups[index] = group.clone();
        Ok(group)
    }

    async fn delete(&self, id: &GroupId) -> CatalogResult<()> {
        self.latency(self.config.write_latency).await;
        let mut catalog = self.catalog.lock().await;

        let index = catalog
            .position(id)
            .inspect_err(|e| warn!(error = %e, "Delete rejected"))?;
        catalog.groups.remove(index);
        debug!(group_id = %id, "Deleted group");
        Ok(())
    }

    async fn add_child(&self, group_id: &GroupId, child: NewChild) -> CatalogResult<Group> {
        self.mutate_children(group_id, |group| {
            let child = child.into_child(&group.name);
            group.children.push(child);
            Ok(())
        })
        .await
    }

    async fn update_child(
        &self,
        group_id: &GroupId,
        child: ChildRef,
        update: NewChild,
    ) -> CatalogResult<Group> {
        self.mutate_children(group_id, |group| {
            let index = group
                .child_position(child)
                .ok_or_else(|| StoreError::ChildNotFound {
                    group_id: group.id.clone(),
                    child,
                })?;
            group.children[index].replace_with(update);
            Ok(())
        })
        .await
    }

    async fn remove_child(&self, group_id: &GroupId, child: ChildRef) -> CatalogResult<Group> {
        self.mutate_children(group_id, |group| {
            let index = group
                .child_position(child)
                .ok_or_else(|| StoreError::ChildNotFound {
                    group_id: group.id.clone(),
                    child,
                })?;
            group.children.remove(index);
            Ok(())
        })
        .await
    }
}
