//! SQLite persistence
//!
//! Pool setup, embedded migrations and the [`SqlitePollRepository`] adapter.

pub mod database;
pub mod sqlite;

pub use database::{DatabaseError, MIGRATOR, connect, migrate, open};
pub use sqlite::SqlitePollRepository;
