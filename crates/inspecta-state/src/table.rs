//! Group-level filtering, pagination and the display tree.
//!
//! Filtering only ever decides which groups are shown. A group that
//! passes carries its complete child list into its row.

use inspecta_core::i18n::Language;
use inspecta_core::models::{
    ChildCounters, ChildId, Group, GroupId, LocalizedName, QualificationMetrics,
};
use inspecta_core::repository::{PaginatedResult, Pagination};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::events::StateEvent;

const ACTIVE_PHRASE: &str = "نشط active";
const INACTIVE_PHRASE: &str = "غير نشط inactive";

pub const STATUS_ACTIVE_KEY: &str = "status.active";
pub const STATUS_INACTIVE_KEY: &str = "status.inactive";

fn status_key(is_active: bool) -> &'static str {
    if is_active {
        STATUS_ACTIVE_KEY
    } else {
        STATUS_INACTIVE_KEY
    }
}

/// The status radio filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn admits(self, is_active: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => is_active,
            StatusFilter::Inactive => !is_active,
        }
    }

    /// Radio options with labels for `language`.
    pub fn options(language: Language) -> [(StatusFilter, &'static str); 3] {
        match language {
            Language::Ar => [
                (StatusFilter::All, "الكل"),
                (StatusFilter::Active, "نشط"),
                (StatusFilter::Inactive, "غير نشط"),
            ],
            Language::En => [
                (StatusFilter::All, "All"),
                (StatusFilter::Active, "Active"),
                (StatusFilter::Inactive, "Inactive"),
            ],
        }
    }
}

/// Column a text search is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchField {
    GroupName,
    Status,
    TotalChildren,
    ActiveChildren,
    InactiveChildren,
    SuspendedChildren,
}

/// Current search text, column and status filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupQuery {
    /// Lower-cased search text.
    search: String,
    field: Option<SearchField>,
    status: StatusFilter,
}

impl GroupQuery {
    pub fn new(search: &str, field: Option<SearchField>, status: StatusFilter) -> Self {
        Self {
            search: search.to_lowercase(),
            field,
            status,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn field(&self) -> Option<SearchField> {
        self.field
    }

    pub fn status(&self) -> StatusFilter {
        self.status
    }

    /// True when every group passes.
    pub fn is_pass_through(&self) -> bool {
        self.search.is_empty() && self.status == StatusFilter::All
    }

    fn matches_text(&self, group: &Group) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.as_str();
        let counter = |value: u32| value.to_string().contains(needle);
        match self.field.unwrap_or(SearchField::GroupName) {
            SearchField::GroupName => group.name.contains(needle),
            SearchField::Status => {
                let phrase = if group.is_active {
                    ACTIVE_PHRASE
                } else {
                    INACTIVE_PHRASE
                };
                phrase.contains(needle)
            }
            SearchField::TotalChildren => counter(group.counters.total),
            SearchField::ActiveChildren => counter(group.counters.active),
            SearchField::InactiveChildren => counter(group.counters.inactive),
            SearchField::SuspendedChildren => counter(group.counters.suspended),
        }
    }

    pub fn matches(&self, group: &Group) -> bool {
        self.matches_text(group) && self.status.admits(group.is_active)
    }
}

/// Groups passing `query`, in their original order.
pub fn filter_groups<'a>(groups: &'a [Group], query: &GroupQuery) -> Vec<&'a Group> {
    if query.is_pass_through() {
        return groups.iter().collect();
    }
    groups.iter().filter(|g| query.matches(g)).collect()
}

/// Display row for one child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildRow {
    pub id: ChildId,
    pub display_name: String,
    pub name: LocalizedName,
    pub status_key: &'static str,
    pub is_active: bool,
    pub metrics: QualificationMetrics,
}

/// Display row for one group, with all of its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupRow {
    pub id: GroupId,
    pub display_name: String,
    pub name: LocalizedName,
    pub status_key: &'static str,
    pub is_active: bool,
    pub counters: ChildCounters,
    pub children: Vec<ChildRow>,
}

impl GroupRow {
    pub fn from_group(group: &Group, language: Language) -> Self {
        Self {
            id: group.id.clone(),
            display_name: group.name.get(language).to_owned(),
            name: group.name.clone(),
            status_key: status_key(group.is_active),
            is_active: group.is_active,
            counters: group.counters,
            children: group
                .children
                .iter()
                .map(|child| ChildRow {
                    id: child.id,
                    display_name: child.name.get(language).to_owned(),
                    name: child.name.clone(),
                    status_key: status_key(child.is_active),
                    is_active: child.is_active,
                    metrics: child.metrics,
                })
                .collect(),
        }
    }
}

/// Filtered, paginated view over a group list.
#[derive(Debug, Clone)]
pub struct GroupTable {
    query: GroupQuery,
    language: Language,
    rows: Vec<GroupRow>,
    pagination: Pagination,
    total_records: u64,
}

impl GroupTable {
    pub fn new(page_size: u64, language: Language) -> Self {
        Self {
            query: GroupQuery::default(),
            language,
            rows: Vec::new(),
            pagination: Pagination::first_page(page_size),
            total_records: 0,
        }
    }

    /// Re-run the current query over `groups` and go back to page one.
    pub fn apply(&mut self, groups: &[Group]) {
        self.rows = filter_groups(groups, &self.query)
            .into_iter()
            .map(|g| GroupRow::from_group(g, self.language))
            .collect();
        self.total_records = self.rows.len() as u64;
        self.pagination.offset = 0;
        debug!(
            search = %self.query.search,
            status = ?self.query.status,
            matched = self.total_records,
            "Applied group filter"
        );
    }

    /// Global search (`field = None`) or a column search.
    pub fn search(&mut self, groups: &[Group], search: &str, field: Option<SearchField>) {
        self.query = GroupQuery::new(search, field, self.query.status);
        self.apply(groups);
    }

    /// Change the radio filter. The current search text stays in effect.
    pub fn set_status_filter(&mut self, groups: &[Group], status: StatusFilter) {
        self.query.status = status;
        self.apply(groups);
    }

    /// Rebuild rows with names in `language`.
    pub fn set_language(&mut self, groups: &[Group], language: Language) {
        self.language = language;
        self.apply(groups);
    }

    /// Re-apply on collection changes; other events are ignored.
    pub fn sync(&mut self, event: &StateEvent) {
        if let StateEvent::GroupsChanged(groups) = event {
            self.apply(groups);
        }
    }

    pub fn change_page(&mut self, offset: u64, limit: u64) {
        self.pagination = Pagination { offset, limit };
    }

    /// Rows inside the current pagination window.
    pub fn page(&self) -> PaginatedResult<GroupRow> {
        PaginatedResult {
            items: self.pagination.slice(&self.rows).to_vec(),
            total: self.total_records,
            offset: self.pagination.offset,
            limit: self.pagination.limit,
        }
    }

    pub fn rows(&self) -> &[GroupRow] {
        &self.rows
    }

    pub fn query(&self) -> &GroupQuery {
        &self.query
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn total_records(&self) -> u64 {
        self.total_records
    }
}
