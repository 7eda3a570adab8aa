//! Infrastructure layer for polls
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the SQLite poll repository and
//! configuration file loading.

pub mod config;
pub mod persistence;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileDatabaseConfig, FileLoggingConfig,
    FileOutputConfig, FilePollsConfig, FileServerConfig, Severity,
};
pub use persistence::{DatabaseError, SqlitePollRepository};
