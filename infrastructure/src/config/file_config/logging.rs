//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// `EnvFilter` directives; overrides the `-v` derived level
    pub filter: Option<String>,
    /// Directory for daily rolling log files (stderr only when unset)
    pub directory: Option<PathBuf>,
}
