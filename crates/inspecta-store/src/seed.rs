//! Embedded seed catalog.

use inspecta_core::models::{CreateGroup, Group, GroupId};
use tracing::info;

use crate::error::StoreError;

const SEED_CATALOG: &str = include_str!("../seed/catalog.json");

/// Parse the embedded seed catalog into stored groups.
///
/// Groups are numbered `group-1..group-N` in file order. Counters are
/// derived from each child list, so any figures a seed author had in mind
/// are irrelevant.
pub fn seed_groups() -> Result<Vec<Group>, StoreError> {
    let inputs: Vec<CreateGroup> = serde_json::from_str(SEED_CATALOG)?;
    let groups: Vec<Group> = inputs
        .into_iter()
        .enumerate()
        .map(|(i, input)| input.into_group(GroupId::from_sequence(i as u64 + 1)))
        .collect();

    info!(groups = groups.len(), "Loaded seed catalog");
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_numbered_and_consistent() {
        let groups = seed_groups().unwrap();
        assert!(!groups.is_empty());
        for (i, group) in groups.iter().enumerate() {
            assert_eq!(group.id, GroupId::from_sequence(i as u64 + 1));
            assert!(group.counters.is_consistent());
            assert_eq!(group.counters.total as usize, group.children.len());
            assert!(group.children.iter().all(|c| c.group_name == group.name));
        }
    }
}
