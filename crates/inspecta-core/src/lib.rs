//! Inspecta Core: shared error type, catalog models, repository traits
//! and the localization collaborator.

pub mod error;
pub mod i18n;
pub mod models;
pub mod repository;

pub use error::{CatalogError, CatalogResult};
pub use i18n::{Language, LanguagePreference, Translator};
