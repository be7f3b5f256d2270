//! Catalog state service: the published group collection, its status
//! record and the derived views over both.
//!
//! Every mutator follows the same protocol: mark loading, make one store
//! round trip, then either merge the result into the published
//! collection or record `"Failed to <verb>: <cause>"`, and finally clear
//! loading. There is no rollback; a failed call leaves the collection as
//! it was.

use chrono::{DateTime, Utc};
use inspecta_core::error::{CatalogError, CatalogResult};
use inspecta_core::models::{Child, ChildRef, CreateGroup, Group, GroupId, NewChild};
use inspecta_core::repository::CatalogRepository;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::config::StateConfig;
use crate::events::{EventBus, EventStream, StateEvent};
use crate::forms::{ChildForm, GroupForm};

/// Loading/error status plus the current group selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupState {
    pub is_loading: bool,
    pub error: Option<String>,
    pub selected_group_id: Option<GroupId>,
    pub last_updated: DateTime<Utc>,
}

impl Default for GroupState {
    fn default() -> Self {
        Self {
            is_loading: false,
            error: None,
            selected_group_id: None,
            last_updated: Utc::now(),
        }
    }
}

/// Visibility and target of the child editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChildFormState {
    pub is_visible: bool,
    pub is_edit_mode: bool,
    pub selected_child: Option<Child>,
    pub parent_group: Option<Group>,
}

#[derive(Debug, Default)]
struct Snapshot {
    groups: Vec<Group>,
    status: GroupState,
    child_form: ChildFormState,
}

fn replace_group(groups: &mut [Group], updated: &Group) {
    match groups.iter_mut().find(|g| g.id == updated.id) {
        Some(slot) => *slot = updated.clone(),
        None => debug!(group_id = %updated.id, "Updated group is not in the published collection"),
    }
}

/// State service over a [`CatalogRepository`].
///
/// Generic over the repository so that this layer has no dependency on
/// any particular store. Share it behind an `Arc` when several tasks
/// need it.
pub struct CatalogState<R: CatalogRepository> {
    repo: R,
    config: StateConfig,
    snapshot: RwLock<Snapshot>,
    events: EventBus,
}

impl<R: CatalogRepository> CatalogState<R> {
    /// An empty state; call [`Self::load`] to populate it.
    pub fn new(repo: R, config: StateConfig) -> Self {
        Self {
            repo,
            config,
            snapshot: RwLock::new(Snapshot::default()),
            events: EventBus::new(),
        }
    }

    /// Construct and load the initial collection.
    pub async fn initialize(repo: R, config: StateConfig) -> Self {
        let state = Self::new(repo, config);
        state.load().await;
        state
    }

    pub fn config(&self) -> &StateConfig {
        &self.config
    }

    /// Stream of state changes from this point on.
    pub fn subscribe(&self) -> EventStream {
        self.events.subscribe()
    }

    // -----------------------------------------------------------------------
    // Read path
    // -----------------------------------------------------------------------

    /// Replace the published collection with the store's.
    ///
    /// Failures are recorded in the status record and not returned.
    pub async fn load(&self) {
        self.set_loading(true).await;
        match self.round_trip("load groups", self.repo.list()).await {
            Ok(groups) => {
                info!(groups = groups.len(), "Loaded catalog");
                self.publish_groups(|current| *current = groups).await;
            }
            Err(e) => {
                warn!(error = %e, "Catalog load failed");
                self.set_error(format!("Failed to load groups: {e}")).await;
            }
        }
        self.set_loading(false).await;
    }

    pub async fn refresh(&self) {
        self.load().await;
    }

    // -----------------------------------------------------------------------
    // Write path
    // -----------------------------------------------------------------------

    pub async fn add_group(&self, input: CreateGroup) -> CatalogResult<Group> {
        self.write("add group", self.repo.create(input), |groups, group| {
            groups.push(group.clone())
        })
        .await
    }

    pub async fn update_group(&self, group: Group) -> CatalogResult<Group> {
        self.write("update group", self.repo.update(group), |groups, group| {
            replace_group(groups, group)
        })
        .await
    }

    pub async fn delete_group(&self, id: &GroupId) -> CatalogResult<()> {
        self.write("delete group", self.repo.delete(id), |groups, _| {
            groups.retain(|g| &g.id != id)
        })
        .await
    }

    pub async fn add_child_to_group(
        &self,
        group_id: &GroupId,
        child: NewChild,
    ) -> CatalogResult<Group> {
        self.write("add child", self.repo.add_child(group_id, child), |groups, group| {
            replace_group(groups, group)
        })
        .await
    }

    pub async fn update_child_in_group(
        &self,
        group_id: &GroupId,
        child: ChildRef,
        update: NewChild,
    ) -> CatalogResult<Group> {
        self.write(
            "update child",
            self.repo.update_child(group_id, child, update),
            |groups, group| replace_group(groups, group),
        )
        .await
    }

    pub async fn delete_child_from_group(
        &self,
        group_id: &GroupId,
        child: ChildRef,
    ) -> CatalogResult<Group> {
        self.write(
            "delete child",
            self.repo.remove_child(group_id, child),
            |groups, group| replace_group(groups, group),
        )
        .await
    }

    /// Validate `form` and create a group (`target = None`) or patch the
    /// published group `target`.
    ///
    /// An invalid form fails with [`CatalogError::Validation`] before any
    /// store call and leaves the status record alone.
    pub async fn submit_group_form(
        &self,
        target: Option<&GroupId>,
        form: GroupForm,
    ) -> CatalogResult<Group> {
        match target {
            None => {
                let input = form.into_create()?;
                self.add_group(input).await
            }
            Some(id) => {
                let current = self
                    .find(id)
                    .await
                    .ok_or_else(|| CatalogError::group_not_found(id))?;
                let patched = form.apply_to(&current)?;
                self.update_group(patched).await
            }
        }
    }

    /// Validate `form` and apply it to the group the child editor is open
    /// on, then close the editor.
    pub async fn submit_child_form(&self, form: ChildForm) -> CatalogResult<Group> {
        let editor = self.child_form().await;
        let parent = editor.parent_group.ok_or_else(|| CatalogError::Validation {
            message: "child editor is not open".into(),
        })?;
        let child = form.into_new_child()?;

        let group = match (editor.is_edit_mode, editor.selected_child) {
            (true, Some(existing)) => {
                self.update_child_in_group(&parent.id, ChildRef::Id(existing.id), child)
                    .await?
            }
            _ => self.add_child_to_group(&parent.id, child).await?,
        };
        self.hide_child_form().await;
        Ok(group)
    }

    // -----------------------------------------------------------------------
    // View state
    // -----------------------------------------------------------------------

    /// Open the child editor on `parent`; editing `child` if given.
    pub async fn show_child_form(&self, parent: &Group, child: Option<&Child>) {
        self.set_child_form(ChildFormState {
            is_visible: true,
            is_edit_mode: child.is_some(),
            selected_child: child.cloned(),
            parent_group: Some(parent.clone()),
        })
        .await;
    }

    pub async fn hide_child_form(&self) {
        self.set_child_form(ChildFormState::default()).await;
    }

    pub async fn set_selected_group(&self, id: Option<GroupId>) {
        self.update_status(|status| status.selected_group_id = id).await;
    }

    // -----------------------------------------------------------------------
    // Projections
    // -----------------------------------------------------------------------

    pub async fn groups(&self) -> Vec<Group> {
        self.snapshot.read().await.groups.clone()
    }

    pub async fn active_groups(&self) -> Vec<Group> {
        let snapshot = self.snapshot.read().await;
        snapshot
            .groups
            .iter()
            .filter(|g| g.is_active)
            .cloned()
            .collect()
    }

    /// The selected group, if one is selected and still published.
    pub async fn selected_group(&self) -> Option<Group> {
        let snapshot = self.snapshot.read().await;
        let id = snapshot.status.selected_group_id.as_ref()?;
        snapshot.groups.iter().find(|g| &g.id == id).cloned()
    }

    pub async fn status(&self) -> GroupState {
        self.snapshot.read().await.status.clone()
    }

    pub async fn child_form(&self) -> ChildFormState {
        self.snapshot.read().await.child_form.clone()
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    async fn find(&self, id: &GroupId) -> Option<Group> {
        let snapshot = self.snapshot.read().await;
        snapshot.groups.iter().find(|g| &g.id == id).cloned()
    }

    async fn round_trip<T>(
        &self,
        operation: &str,
        op: impl Future<Output = CatalogResult<T>>,
    ) -> CatalogResult<T> {
        match self.config.operation_timeout {
            Some(limit) => tokio::time::timeout(limit, op)
                .await
                .map_err(|_| CatalogError::Timeout {
                    operation: operation.to_owned(),
                })?,
            None => op.await,
        }
    }

    async fn write<T>(
        &self,
        verb: &'static str,
        op: impl Future<Output = CatalogResult<T>>,
        merge: impl FnOnce(&mut Vec<Group>, &T),
    ) -> CatalogResult<T> {
        self.set_loading(true).await;
        let result = self.round_trip(verb, op).await;
        match &result {
            Ok(value) => self.publish_groups(|groups| merge(groups, value)).await,
            Err(e) => {
                warn!(operation = verb, error = %e, "Catalog operation failed");
                self.set_error(format!("Failed to {verb}: {e}")).await;
            }
        }
        self.set_loading(false).await;
        result
    }

    /// Swap in a new collection built from the current one.
    ///
    /// Events are sent before the write guard drops, so subscribers see
    /// snapshots in the order they were installed.
    async fn publish_groups(&self, build: impl FnOnce(&mut Vec<Group>)) {
        let mut snapshot = self.snapshot.write().await;
        let mut next = snapshot.groups.clone();
        build(&mut next);
        snapshot.groups = next.clone();
        snapshot.status.error = None;
        snapshot.status.last_updated = Utc::now();
        self.events.publish(StateEvent::GroupsChanged(next));
        self.events
            .publish(StateEvent::StatusChanged(snapshot.status.clone()));
    }

    async fn update_status(&self, apply: impl FnOnce(&mut GroupState)) {
        let mut snapshot = self.snapshot.write().await;
        apply(&mut snapshot.status);
        self.events
            .publish(StateEvent::StatusChanged(snapshot.status.clone()));
    }

    async fn set_loading(&self, is_loading: bool) {
        self.update_status(|status| {
            status.is_loading = is_loading;
            if is_loading {
                status.error = None;
            }
        })
        .await;
    }

    async fn set_error(&self, message: String) {
        self.update_status(|status| {
            status.error = Some(message);
            status.is_loading = false;
        })
        .await;
    }

    async fn set_child_form(&self, form: ChildFormState) {
        let mut snapshot = self.snapshot.write().await;
        snapshot.child_form = form.clone();
        self.events.publish(StateEvent::ChildFormChanged(form));
    }
}
