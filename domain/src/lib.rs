//! Domain layer for polls
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Questions and Choices
//!
//! A [`Question`] owns zero or more [`Choice`]s. Deleting a question deletes
//! its choices. A choice's tally only ever grows.
//!
//! ## Visibility
//!
//! - **Published**: `pub_date <= now`. Unpublished questions are hidden from
//!   the index and detail views.
//! - **Recently published**: `now - 1 day <= pub_date <= now`.

pub mod config;
pub mod core;
pub mod poll;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{
    error::DomainError,
    text::{BoundedText, MAX_TEXT_LEN},
};
pub use poll::{
    choice::{Choice, ChoiceId, NewChoice},
    question::{NewQuestion, Question, QuestionId},
    visibility::{RECENT_WINDOW_DAYS, is_published, was_published_recently},
    vote::{NO_CHOICE_MESSAGE, QuestionResults, VoteRejection},
};
