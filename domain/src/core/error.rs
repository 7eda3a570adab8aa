//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{field} cannot be empty")]
    EmptyText { field: &'static str },

    #[error("{field} is {len} characters long (maximum is {max})")]
    TextTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("Invalid identifier: {0}")]
    InvalidId(String),
}
