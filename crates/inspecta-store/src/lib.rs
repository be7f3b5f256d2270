//! Inspecta Store: the in-memory catalog store.
//!
//! This crate provides:
//! - The store itself ([`MemoryCatalogRepository`]), an implementation of
//!   [`inspecta_core::repository::CatalogRepository`]
//! - Latency configuration ([`StoreConfig`])
//! - The embedded seed catalog ([`seed_groups`])
//! - Error types ([`StoreError`])

mod config;
mod error;
pub mod repository;
mod seed;

pub use config::StoreConfig;
pub use error::StoreError;
pub use repository::MemoryCatalogRepository;
pub use seed::seed_groups;
