//! Core domain concepts shared across subdomains.
//!
//! - [`text::BoundedText`]: validated question/choice text
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod text;
