//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod database;
mod logging;
mod output;
mod polls;
mod server;

pub use database::FileDatabaseConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use polls::FilePollsConfig;
pub use server::FileServerConfig;

use serde::{Deserialize, Serialize};

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted path of the offending key (e.g. `database.url`)
    pub field: &'static str,
    pub message: String,
}

impl ConfigIssue {
    fn error(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field,
            message: message.into(),
        }
    }

    fn warning(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Database settings
    pub database: FileDatabaseConfig,
    /// Poll behaviour
    pub polls: FilePollsConfig,
    /// Logging settings
    pub logging: FileLoggingConfig,
    /// Console output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if !self.server.has_valid_bind() {
            issues.push(ConfigIssue::error(
                "server.bind",
                format!(
                    "'{}' is not a bind address (expected host:port)",
                    self.server.bind
                ),
            ));
        }

        if self.database.url.trim().is_empty() {
            issues.push(ConfigIssue::error("database.url", "cannot be empty"));
        }

        if self.database.max_connections == 0 {
            issues.push(ConfigIssue::error(
                "database.max_connections",
                "must be at least 1",
            ));
        }

        if self.polls.latest_limit == 0 {
            issues.push(ConfigIssue::warning(
                "polls.latest_limit",
                "is 0, the index will always be empty",
            ));
        }

        issues
    }
}
