//! Application layer for polls
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::PollParams;
pub use ports::{
    clock::{Clock, FixedClock, SystemClock},
    poll_repository::{PollRepository, RepositoryError},
};
pub use use_cases::cast_vote::{
    CastVoteError, CastVoteInput, CastVoteUseCase, Selection, VoteReceipt,
};
pub use use_cases::list_questions::{ListQuestionsUseCase, QuestionList};
pub use use_cases::manage_polls::{ManagePollsError, ManagePollsUseCase};
pub use use_cases::view_question::{QuestionDetail, ViewQuestionError, ViewQuestionUseCase};
