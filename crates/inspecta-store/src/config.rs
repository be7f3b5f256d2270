//! Store configuration.

use std::time::Duration;

/// Simulated round-trip latency for store operations.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Delay applied to `list` and `get_by_id` (default: 200 ms).
    pub read_latency: Duration,
    /// Delay applied to every mutation (default: 300 ms).
    pub write_latency: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            read_latency: Duration::from_millis(200),
            write_latency: Duration::from_millis(300),
        }
    }
}

impl StoreConfig {
    /// No artificial latency at all.
    pub fn instant() -> Self {
        Self {
            read_latency: Duration::ZERO,
            write_latency: Duration::ZERO,
        }
    }
}
