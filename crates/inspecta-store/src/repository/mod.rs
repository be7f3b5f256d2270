//! In-memory repository implementations.

mod group;

pub use group::MemoryCatalogRepository;
