//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod cast_vote;
pub mod list_questions;
pub mod manage_polls;
pub mod view_question;

#[cfg(test)]
pub(crate) mod test_support;
