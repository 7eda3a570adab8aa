//! View Question use case.
//!
//! Backs the detail and results views. Detail hides questions that are
//! not yet published; results resolve any existing question.

use crate::ports::clock::{Clock, SystemClock};
use crate::ports::poll_repository::{PollRepository, RepositoryError};
use chrono::{DateTime, Utc};
use polls_domain::{Choice, Question, QuestionId, QuestionResults};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while viewing a question.
#[derive(Error, Debug)]
pub enum ViewQuestionError {
    /// Absent, or (for detail) not yet published. Callers cannot tell
    /// the two apart.
    #[error("Question {0} not found")]
    NotFound(QuestionId),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl ViewQuestionError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ViewQuestionError::NotFound(_))
    }
}

/// A question with the choices a voter can pick from.
///
/// `as_of` is the instant the question was checked against, so callers
/// compute "recently published" without reading the clock again.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionDetail {
    pub question: Question,
    pub choices: Vec<Choice>,
    pub as_of: DateTime<Utc>,
}

/// Use case for the per-question read views.
#[derive(Clone)]
pub struct ViewQuestionUseCase {
    repository: Arc<dyn PollRepository>,
    clock: Arc<dyn Clock>,
}

impl ViewQuestionUseCase {
    pub fn new(repository: Arc<dyn PollRepository>) -> Self {
        Self {
            repository,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock (tests pin `now` with this).
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Published question and its choices.
    pub async fn detail(&self, id: QuestionId) -> Result<QuestionDetail, ViewQuestionError> {
        let now = self.clock.now();
        let question = self
            .repository
            .find_question(id)
            .await?
            .filter(|q| q.is_published(now))
            .ok_or_else(|| {
                debug!("Question {} is absent or unpublished at {}", id, now);
                ViewQuestionError::NotFound(id)
            })?;

        let choices = self.repository.list_choices(id).await?;
        Ok(QuestionDetail {
            question,
            choices,
            as_of: now,
        })
    }

    /// Tallies for any existing question.
    pub async fn results(&self, id: QuestionId) -> Result<QuestionResults, ViewQuestionError> {
        let as_of = self.clock.now();
        let question = self
            .repository
            .find_question(id)
            .await?
            .ok_or(ViewQuestionError::NotFound(id))?;

        let choices = self.repository.list_choices(id).await?;
        Ok(QuestionResults::new(question, choices, as_of))
    }
}
