//! Configuration file loading for polls
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `POLLS_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./polls.toml` or `./.polls.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/polls/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileDatabaseConfig, FileLoggingConfig, FileOutputConfig,
    FilePollsConfig, FileServerConfig, Severity,
};
pub use loader::ConfigLoader;
