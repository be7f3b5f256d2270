//! Domain models for the inspection catalog.
//!
//! A [`group::Group`] owns an ordered list of [`child::Child`] domain
//! entries. Derived child counters live on the group and are always
//! recomputed from that list.

pub mod child;
pub mod group;
pub mod ids;
pub mod name;

pub use child::{Child, NewChild, QualificationMetrics};
pub use group::{ChildCounters, CreateGroup, Group};
pub use ids::{ChildId, ChildRef, GroupId};
pub use name::LocalizedName;
