//! Manage Polls use case.
//!
//! Creates and removes questions and choices. Vote counts are not
//! editable here; they only move through [`CastVoteUseCase`].
//!
//! [`CastVoteUseCase`]: super::cast_vote::CastVoteUseCase

use crate::ports::poll_repository::{PollRepository, RepositoryError};
use chrono::{DateTime, Utc};
use polls_domain::{Choice, ChoiceId, DomainError, NewChoice, NewQuestion, Question, QuestionId};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while managing polls.
#[derive(Error, Debug)]
pub enum ManagePollsError {
    #[error("Invalid input: {0}")]
    Invalid(#[from] DomainError),

    #[error("Question {0} not found")]
    QuestionNotFound(QuestionId),

    #[error("Choice {choice_id} not found for question {question_id}")]
    ChoiceNotFound {
        question_id: QuestionId,
        choice_id: ChoiceId,
    },

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case for creating and deleting questions and choices.
#[derive(Clone)]
pub struct ManagePollsUseCase {
    repository: Arc<dyn PollRepository>,
}

impl ManagePollsUseCase {
    pub fn new(repository: Arc<dyn PollRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_question(
        &self,
        question_text: &str,
        pub_date: DateTime<Utc>,
    ) -> Result<Question, ManagePollsError> {
        let new_question = NewQuestion::new(question_text, pub_date)?;
        let question = self.repository.create_question(new_question).await?;
        info!("Created question {} published at {}", question.id(), pub_date);
        Ok(question)
    }

    pub async fn add_choice(
        &self,
        question_id: QuestionId,
        choice_text: &str,
    ) -> Result<Choice, ManagePollsError> {
        let new_choice = NewChoice::new(choice_text)?;
        if self.repository.find_question(question_id).await?.is_none() {
            return Err(ManagePollsError::QuestionNotFound(question_id));
        }
        let choice = self.repository.create_choice(question_id, new_choice).await?;
        info!("Added choice {} to question {}", choice.id(), question_id);
        Ok(choice)
    }

    /// Delete a question together with its choices.
    pub async fn delete_question(&self, question_id: QuestionId) -> Result<(), ManagePollsError> {
        if !self.repository.delete_question(question_id).await? {
            return Err(ManagePollsError::QuestionNotFound(question_id));
        }
        info!("Deleted question {}", question_id);
        Ok(())
    }

    pub async fn delete_choice(
        &self,
        question_id: QuestionId,
        choice_id: ChoiceId,
    ) -> Result<(), ManagePollsError> {
        if !self.repository.delete_choice(question_id, choice_id).await? {
            return Err(ManagePollsError::ChoiceNotFound {
                question_id,
                choice_id,
            });
        }
        info!("Deleted choice {} of question {}", choice_id, question_id);
        Ok(())
    }
}
