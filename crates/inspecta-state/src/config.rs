//! Projection layer configuration.

use std::time::Duration;

/// Configuration for [`crate::CatalogState`] and [`crate::GroupTable`].
#[derive(Debug, Clone)]
pub struct StateConfig {
    /// Rows per page in the group table (default: 5).
    pub page_size: u64,
    /// Upper bound on a single store round trip. `None` waits forever.
    pub operation_timeout: Option<Duration>,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            page_size: 5,
            operation_timeout: None,
        }
    }
}
