//! Database configuration from TOML (`[database]` section)

use serde::{Deserialize, Serialize};

/// Raw database configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDatabaseConfig {
    /// SQLite connection URL (`sqlite://polls.db`, `sqlite::memory:`)
    pub url: String,
    /// Upper bound of pooled connections
    pub max_connections: u32,
}

impl Default for FileDatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://polls.db".to_string(),
            max_connections: 5,
        }
    }
}
