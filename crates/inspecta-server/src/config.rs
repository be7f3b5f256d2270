//! Binary configuration.

use std::path::PathBuf;

use inspecta_state::StateConfig;
use inspecta_store::StoreConfig;

/// Top-level configuration for the `inspecta` binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub state: StateConfig,
    /// Where the selected display language is remembered between runs.
    pub preferences_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            state: StateConfig::default(),
            preferences_path: PathBuf::from(".inspecta/preferences.json"),
        }
    }
}
