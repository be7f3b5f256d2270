//! Inspecta State: the projection layer over the catalog store.
//!
//! - [`CatalogState`] publishes the group collection, the status record
//!   and the child-editor state, and runs every mutation through the
//!   store.
//! - [`GroupTable`] filters and paginates the collection for display.
//! - [`GroupForm`] / [`ChildForm`] validate user input before it can
//!   reach the store.

pub mod config;
pub mod error;
pub mod events;
pub mod forms;
pub mod service;
pub mod table;

pub use config::StateConfig;
pub use error::ValidationError;
pub use events::{EventStream, StateEvent};
pub use forms::{ChildForm, FieldError, GroupForm};
pub use service::{CatalogState, ChildFormState, GroupState};
pub use table::{GroupQuery, GroupRow, GroupTable, SearchField, StatusFilter};
