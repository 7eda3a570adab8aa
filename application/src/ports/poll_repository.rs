//! Poll repository port
//!
//! Defines how use cases read and mutate questions and choices.
//! Implementations (adapters) live in the infrastructure layer.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use polls_domain::{Choice, ChoiceId, NewChoice, NewQuestion, Question, QuestionId};
use thiserror::Error;

/// Errors that can occur during repository operations
///
/// These are infrastructure failures. "Not found" is never an error at
/// this level: lookups return `Option` and mutations report whether a row
/// was touched.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Constraint violated: {0}")]
    ConstraintViolation(String),

    #[error("Corrupt record: {0}")]
    CorruptRecord(String),
}

/// Persistence access for questions and choices
#[async_trait]
pub trait PollRepository: Send + Sync {
    /// Look up a question regardless of its publication date
    async fn find_question(&self, id: QuestionId) -> Result<Option<Question>, RepositoryError>;

    /// Questions with `pub_date <= published_by`, newest first, at most `limit`.
    ///
    /// Questions sharing a `pub_date` are returned highest id first.
    async fn list_questions(
        &self,
        published_by: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<Question>, RepositoryError>;

    /// Choices owned by a question, in id order
    async fn list_choices(&self, question_id: QuestionId) -> Result<Vec<Choice>, RepositoryError>;

    /// Add one vote to a choice of the given question.
    ///
    /// Must be a single relative update applied by the store
    /// (`votes = votes + 1`), never a read followed by a write-back.
    /// Returns `false` when no choice with that id belongs to the question.
    async fn increment_choice_votes(
        &self,
        question_id: QuestionId,
        choice_id: ChoiceId,
    ) -> Result<bool, RepositoryError>;

    /// Store a new question and return it with its assigned id
    async fn create_question(&self, question: NewQuestion) -> Result<Question, RepositoryError>;

    /// Store a new choice under an existing question
    async fn create_choice(
        &self,
        question_id: QuestionId,
        choice: NewChoice,
    ) -> Result<Choice, RepositoryError>;

    /// Delete a question and, by cascade, its choices.
    /// Returns `false` when the question did not exist.
    async fn delete_question(&self, id: QuestionId) -> Result<bool, RepositoryError>;

    /// Delete one choice of a question.
    /// Returns `false` when no such choice belongs to the question.
    async fn delete_choice(
        &self,
        question_id: QuestionId,
        choice_id: ChoiceId,
    ) -> Result<bool, RepositoryError>;
}
