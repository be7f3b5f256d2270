//! Integration tests for the in-memory catalog store.

use std::time::Duration;

use inspecta_core::error::CatalogError;
use inspecta_core::models::{
    ChildRef, CreateGroup, GroupId, LocalizedName, NewChild, QualificationMetrics,
};
use inspecta_core::repository::CatalogRepository;
use inspecta_store::{MemoryCatalogRepository, StoreConfig};

fn child(en: &str, is_active: bool) -> NewChild {
    NewChild {
        name: LocalizedName::new(en, format!("{en} (ar)")),
        is_active,
        metrics: QualificationMetrics {
            valid_qualified_entities: 1,
            valid_qualified_inspectors: 2,
            pending_qualification_requests: 3,
        },
    }
}

fn group_input(en: &str, is_active: bool) -> CreateGroup {
    CreateGroup::new(LocalizedName::new(en, format!("{en} (ar)")), is_active)
}

/// Helper: empty store with a single group holding one active child.
async fn setup() -> (MemoryCatalogRepository, GroupId) {
    let repo = MemoryCatalogRepository::new(StoreConfig::instant());
    let mut input = group_input("Food Health", true);
    input.children = vec![child("Kitchens", true)];
    let group = repo.create(input).await.unwrap();
    (repo, group.id)
}

#[tokio::test]
async fn create_assigns_sequential_ids() {
    let repo = MemoryCatalogRepository::new(StoreConfig::instant());

    let first = repo.create(group_input("One", true)).await.unwrap();
    let second = repo.create(group_input("Two", true)).await.unwrap();

    assert_eq!(first.id.as_str(), "group-1");
    assert_eq!(second.id.as_str(), "group-2");
}

#[tokio::test]
async fn ids_are_never_reused_after_delete() {
    let repo = MemoryCatalogRepository::new(StoreConfig::instant());

    let first = repo.create(group_input("One", true)).await.unwrap();
    let second = repo.create(group_input("Two", true)).await.unwrap();
    repo.delete(&second.id).await.unwrap();
    repo.delete(&first.id).await.unwrap();

    let third = repo.create(group_input("Three", true)).await.unwrap();
    assert_eq!(third.id.as_str(), "group-3");
}

#[tokio::test]
async fn seeded_store_continues_sequence() {
    let repo = MemoryCatalogRepository::seeded(StoreConfig::instant()).unwrap();
    let seeded = repo.list().await.unwrap();

    let created = repo.create(group_input("New", true)).await.unwrap();
    assert_eq!(created.id, GroupId::from_sequence(seeded.len() as u64 + 1));
}

#[tokio::test]
async fn list_returns_a_detached_snapshot() {
    let (repo, group_id) = setup().await;

    let mut snapshot = repo.list().await.unwrap();
    snapshot[0].children.clear();
    snapshot[0].name.en = "Mutated".into();
    snapshot.clear();

    let fresh = repo.list().await.unwrap();
    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh[0].id, group_id);
    assert_eq!(fresh[0].children.len(), 1);
    assert_eq!(fresh[0].name.en, "Food Health");
}

#[tokio::test]
async fn update_recomputes_counters_from_children() {
    let (repo, group_id) = setup().await;

    let mut group = repo.get_by_id(&group_id).await.unwrap();
    group.name.en = "Renamed".into();
    group.counters.total = 42;
    group.counters.active = 40;
    group.counters.suspended = 2;

    let updated = repo.update(group).await.unwrap();
    assert_eq!(updated.name.en, "Renamed");
    assert_eq!(updated.counters.total, 1);
    assert_eq!(updated.counters.active, 1);
    assert_eq!(updated.counters.inactive, 0);
    assert_eq!(updated.counters.suspended, 0);
}

#[tokio::test]
async fn update_unknown_group_leaves_store_unchanged() {
    let (repo, group_id) = setup().await;
    let before = repo.list().await.unwrap();

    let mut ghost = repo.get_by_id(&group_id).await.unwrap();
    ghost.id = GroupId::from("group-99");
    ghost.name.en = "Ghost".into();

    let err = repo.update(ghost).await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { .. }));

    let after = repo.list().await.unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn update_with_duplicate_child_ids_is_rejected() {
    let (repo, group_id) = setup().await;
    let before = repo.list().await.unwrap();

    let mut group = repo.get_by_id(&group_id).await.unwrap();
    let copy = group.children[0].clone();
    group.children.push(copy);

    let err = repo.update(group).await.unwrap_err();
    assert!(matches!(err, CatalogError::Validation { .. }));
    assert_eq!(repo.list().await.unwrap(), before);
}

#[tokio::test]
async fn update_keeps_supplied_parent_name_copies() {
    let (repo, group_id) = setup().await;

    let mut group = repo.get_by_id(&group_id).await.unwrap();
    group.children[0].group_name = LocalizedName::new("Elsewhere", "مكان آخر");

    let updated = repo.update(group).await.unwrap();
    assert_eq!(updated.children[0].group_name.en, "Elsewhere");
    assert_eq!(updated.counters.total, 1);
}

#[tokio::test]
async fn delete_unknown_group_fails() {
    let (repo, _) = setup().await;

    let err = repo.delete(&GroupId::from("group-404")).await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { .. }));
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn add_child_appends_and_recounts() {
    let (repo, group_id) = setup().await;

    let updated = repo
        .add_child(&group_id, child("Restaurants", false))
        .await
        .unwrap();

    assert_eq!(updated.children.len(), 2);
    assert_eq!(updated.children[1].name.en, "Restaurants");
    assert_eq!(updated.counters.total, 2);
    assert_eq!(updated.counters.active, 1);
    assert_eq!(updated.counters.inactive, 1);
    assert_eq!(updated.children[1].group_name, updated.name);
}

#[tokio::test]
async fn add_child_to_missing_group_mutates_nothing() {
    let (repo, _) = setup().await;
    let before = repo.list().await.unwrap();

    let err = repo
        .add_child(&GroupId::from("group-77"), child("Orphan", true))
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { .. }));
    assert_eq!(repo.list().await.unwrap(), before);
}

#[tokio::test]
async fn child_keeps_parent_name_copy_after_rename() {
    let (repo, group_id) = setup().await;

    let mut group = repo.get_by_id(&group_id).await.unwrap();
    group.name = LocalizedName::new("Renamed", "معدل");
    let renamed = repo.update(group).await.unwrap();

    assert_eq!(renamed.children[0].group_name.en, "Food Health");
}

#[tokio::test]
async fn update_only_child_by_position() {
    let (repo, group_id) = setup().await;
    let original = repo.get_by_id(&group_id).await.unwrap();

    let updated = repo
        .update_child(&group_id, ChildRef::Position(0), child("Closed Kitchens", false))
        .await
        .unwrap();

    assert_eq!(updated.children.len(), 1);
    assert_eq!(updated.children[0].name.en, "Closed Kitchens");
    assert_eq!(updated.children[0].id, original.children[0].id);
    assert_eq!(updated.counters.active, 0);
    assert_eq!(updated.counters.inactive, 1);
}

#[tokio::test]
async fn update_child_by_id_survives_reordering() {
    let (repo, group_id) = setup().await;
    let group = repo
        .add_child(&group_id, child("Restaurants", true))
        .await
        .unwrap();
    let restaurants = group.children[1].id;

    repo.remove_child(&group_id, ChildRef::Position(0))
        .await
        .unwrap();
    let updated = repo
        .update_child(&group_id, restaurants.into(), child("Cafes", true))
        .await
        .unwrap();

    assert_eq!(updated.children.len(), 1);
    assert_eq!(updated.children[0].id, restaurants);
    assert_eq!(updated.children[0].name.en, "Cafes");
}

#[tokio::test]
async fn update_child_out_of_range_fails() {
    let (repo, group_id) = setup().await;
    let before = repo.list().await.unwrap();

    let err = repo
        .update_child(&group_id, ChildRef::Position(1), child("Nope", true))
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::ChildNotFound { .. }));
    assert_eq!(
        err.to_string(),
        format!("Child at index 1 not found in group {group_id}")
    );
    assert_eq!(repo.list().await.unwrap(), before);
}

#[tokio::test]
async fn remove_child_recounts() {
    let (repo, group_id) = setup().await;
    repo.add_child(&group_id, child("Restaurants", false))
        .await
        .unwrap();

    let updated = repo
        .remove_child(&group_id, ChildRef::Position(0))
        .await
        .unwrap();

    assert_eq!(updated.counters.total, 1);
    assert_eq!(updated.counters.active, 0);
    assert_eq!(updated.counters.inactive, 1);
}

#[tokio::test]
async fn counters_stay_consistent_across_mutations() {
    let repo = MemoryCatalogRepository::seeded(StoreConfig::instant()).unwrap();
    let groups = repo.list().await.unwrap();

    for group in &groups {
        repo.add_child(&group.id, child("Extra", group.is_active))
            .await
            .unwrap();
        if !group.children.is_empty() {
            repo.update_child(&group.id, ChildRef::Position(0), child("Swap", false))
                .await
                .unwrap();
        }
    }

    for group in repo.list().await.unwrap() {
        assert_eq!(group.counters.total as usize, group.children.len());
        assert_eq!(
            (group.counters.active + group.counters.inactive) as usize,
            group.children.len()
        );
        assert!(group.counters.is_consistent());
    }
}

#[tokio::test(start_paused = true)]
async fn operations_wait_for_configured_latency() {
    let repo = MemoryCatalogRepository::new(StoreConfig::default());

    let start = tokio::time::Instant::now();
    repo.create(group_input("Slow", true)).await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(300));

    let start = tokio::time::Instant::now();
    repo.list().await.unwrap();
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(200));
    assert!(elapsed < Duration::from_millis(300));
}

#[tokio::test]
async fn concurrent_add_child_calls_are_not_lost() {
    let (repo, group_id) = setup().await;

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let repo = repo.clone();
            let group_id = group_id.clone();
            tokio::spawn(async move {
                repo.add_child(&group_id, child(&format!("child-{i}"), i % 2 == 0))
                    .await
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let group = repo.get_by_id(&group_id).await.unwrap();
    assert_eq!(group.children.len(), 9);
    assert_eq!(group.counters.active, 5);
    assert_eq!(group.counters.inactive, 4);
}
