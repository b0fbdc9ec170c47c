//! Document store configuration.

use serde::{Deserialize, Serialize};

use super::database::DatabaseConfig;

/// Which document store backs the views, and how to reach it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store provider: `"postgres"` or `"memory"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Collection the file records live in.
    #[serde(default = "default_collection")]
    pub collection: String,
    /// PostgreSQL settings, used when `provider = "postgres"`.
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            collection: default_collection(),
            database: DatabaseConfig::default(),
        }
    }
}

fn default_provider() -> String {
    "postgres".to_string()
}

fn default_collection() -> String {
    "files".to_string()
}
