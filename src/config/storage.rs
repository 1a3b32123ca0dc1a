//! Storage backend selection

use serde::Deserialize;

/// Which repository implementation backs the four entity tables
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    Postgres,
}

/// Storage configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
}

impl StorageConfig {
    pub fn is_postgres(&self) -> bool {
        self.backend == StorageBackend::Postgres
    }
}
