//! Cast Vote use case.
//!
//! Records one ballot for a choice of a question. The tally is bumped by
//! the store in a single relative update scoped to the question, so
//! concurrent voters never overwrite each other's increments and a choice
//! of another question can never be counted.

use crate::config::PollParams;
use crate::ports::clock::{Clock, SystemClock};
use crate::ports::poll_repository::{PollRepository, RepositoryError};
use crate::use_cases::view_question::QuestionDetail;
use polls_domain::{ChoiceId, Question, QuestionId, VoteRejection};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// The submitted choice, as received from the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// No choice field, or an empty one
    Missing,
    /// A value that is not a choice identifier
    Malformed(String),
    /// A well-formed choice identifier (not yet checked for ownership)
    Choice(ChoiceId),
}

impl Selection {
    /// Interpret a raw form value.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Selection::Missing,
            Some(value) => value
                .parse::<ChoiceId>()
                .map(Selection::Choice)
                .unwrap_or_else(|_| Selection::Malformed(value.to_string())),
        }
    }
}

impl From<Option<ChoiceId>> for Selection {
    fn from(choice: Option<ChoiceId>) -> Self {
        choice.map_or(Selection::Missing, Selection::Choice)
    }
}

/// Input for the [`CastVoteUseCase`].
#[derive(Debug, Clone)]
pub struct CastVoteInput {
    pub question_id: QuestionId,
    pub selection: Selection,
}

impl CastVoteInput {
    pub fn new(question_id: QuestionId, selection: impl Into<Selection>) -> Self {
        Self {
            question_id,
            selection: selection.into(),
        }
    }
}

/// Proof that a vote was counted. Callers route to the results view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteReceipt {
    pub question_id: QuestionId,
    pub choice_id: ChoiceId,
}

/// Errors that can occur while casting a vote.
#[derive(Error, Debug)]
pub enum CastVoteError {
    #[error("Question {0} not found")]
    NotFound(QuestionId),

    /// The ballot was refused; `detail` holds what is needed to show the
    /// question again alongside [`VoteRejection::message`].
    #[error("Vote rejected: {rejection}")]
    Rejected {
        rejection: VoteRejection,
        detail: Box<QuestionDetail>,
    },

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl CastVoteError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CastVoteError::NotFound(_))
    }

    pub fn rejection(&self) -> Option<VoteRejection> {
        match self {
            CastVoteError::Rejected { rejection, .. } => Some(*rejection),
            _ => None,
        }
    }
}

/// Use case for casting a vote.
#[derive(Clone)]
pub struct CastVoteUseCase {
    repository: Arc<dyn PollRepository>,
    clock: Arc<dyn Clock>,
    params: PollParams,
}

impl CastVoteUseCase {
    pub fn new(repository: Arc<dyn PollRepository>) -> Self {
        Self {
            repository,
            clock: Arc::new(SystemClock),
            params: PollParams::default(),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_params(mut self, params: PollParams) -> Self {
        self.params = params;
        self
    }

    /// Count one vote.
    ///
    /// 1. Resolve the question (`NotFound` if absent, or unpublished when
    ///    [`PollParams::vote_requires_published`] is set)
    /// 2. Refuse missing or malformed selections
    /// 3. Let the store increment the choice, scoped to the question; no
    ///    row touched means the choice is not one of the question's
    pub async fn execute(&self, input: CastVoteInput) -> Result<VoteReceipt, CastVoteError> {
        let question_id = input.question_id;
        let question = self
            .repository
            .find_question(question_id)
            .await?
            .ok_or(CastVoteError::NotFound(question_id))?;

        if self.params.vote_requires_published && !question.is_published(self.clock.now()) {
            debug!("Refusing vote on unpublished question {}", question_id);
            return Err(CastVoteError::NotFound(question_id));
        }

        let choice_id = match input.selection {
            Selection::Choice(choice_id) => choice_id,
            Selection::Missing => {
                return Err(self.reject(question, VoteRejection::NoSelection).await);
            }
            Selection::Malformed(raw) => {
                debug!("Malformed choice '{}' for question {}", raw, question_id);
                return Err(self
                    .reject(question, VoteRejection::InvalidChoice { choice_id: None })
                    .await);
            }
        };

        let counted = self
            .repository
            .increment_choice_votes(question_id, choice_id)
            .await?;

        if !counted {
            return Err(self
                .reject(
                    question,
                    VoteRejection::InvalidChoice {
                        choice_id: Some(choice_id),
                    },
                )
                .await);
        }

        info!("Vote counted for choice {} of question {}", choice_id, question_id);
        Ok(VoteReceipt {
            question_id,
            choice_id,
        })
    }

    /// Build the rejection, reloading the choices for re-display.
    async fn reject(&self, question: Question, rejection: VoteRejection) -> CastVoteError {
        debug!("Vote on question {} rejected: {}", question.id(), rejection);
        match self.repository.list_choices(question.id()).await {
            Ok(choices) => CastVoteError::Rejected {
                rejection,
                detail: Box::new(QuestionDetail {
                    question,
                    choices,
                    as_of: self.clock.now(),
                }),
            },
            Err(e) => CastVoteError::Repository(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::clock::FixedClock;
    use crate::use_cases::test_support::{MockRepository, UnavailableRepository, days_from_now, now};

    fn use_case(repository: Arc<MockRepository>) -> CastVoteUseCase {
        CastVoteUseCase::new(repository).with_clock(Arc::new(FixedClock(now())))
    }

    #[test]
    fn test_selection_from_raw() {
        assert_eq!(Selection::from_raw(None), Selection::Missing);
        assert_eq!(Selection::from_raw(Some("  ")), Selection::Missing);
        assert_eq!(
            Selection::from_raw(Some("12")),
            Selection::Choice(ChoiceId(12))
        );
        assert_eq!(
            Selection::from_raw(Some("twelve")),
            Selection::Malformed("twelve".to_string())
        );
    }

    #[tokio::test]
    async fn test_vote_increments_by_one() {
        let repository = Arc::new(MockRepository::new());
        let q = repository.add_question("What's up?", days_from_now(-1));
        let choice = repository.add_choice(q.id(), "Not much", 4);

        let receipt = use_case(repository.clone())
            .execute(CastVoteInput::new(q.id(), Some(choice.id())))
            .await
            .unwrap();

        assert_eq!(receipt.question_id, q.id());
        assert_eq!(receipt.choice_id, choice.id());
        assert_eq!(repository.votes(choice.id()), Some(5));
    }

    #[tokio::test]
    async fn test_missing_choice_is_no_selection() {
        let repository = Arc::new(MockRepository::new());
        let q = repository.add_question("What's up?", days_from_now(-1));
        let choice = repository.add_choice(q.id(), "Not much", 0);

        let err = use_case(repository.clone())
            .execute(CastVoteInput::new(q.id(), Selection::Missing))
            .await
            .unwrap_err();

        assert_eq!(err.rejection(), Some(VoteRejection::NoSelection));
        let CastVoteError::Rejected { detail, .. } = err else {
            panic!("expected rejection");
        };
        assert_eq!(detail.question.id(), q.id());
        assert_eq!(detail.choices.len(), 1);
        assert_eq!(detail.as_of, now());
        assert_eq!(repository.votes(choice.id()), Some(0));
    }

    #[tokio::test]
    async fn test_choice_of_other_question_is_invalid() {
        let repository = Arc::new(MockRepository::new());
        let q1 = repository.add_question("First?", days_from_now(-1));
        let q2 = repository.add_question("Second?", days_from_now(-1));
        repository.add_choice(q1.id(), "Mine", 0);
        let foreign = repository.add_choice(q2.id(), "Theirs", 0);

        let err = use_case(repository.clone())
            .execute(CastVoteInput::new(q1.id(), Some(foreign.id())))
            .await
            .unwrap_err();

        assert_eq!(
            err.rejection(),
            Some(VoteRejection::InvalidChoice {
                choice_id: Some(foreign.id())
            })
        );
        assert_eq!(repository.votes(foreign.id()), Some(0));
    }

    #[tokio::test]
    async fn test_malformed_choice_is_invalid() {
        let repository = Arc::new(MockRepository::new());
        let q = repository.add_question("What's up?", days_from_now(-1));

        let err = use_case(repository)
            .execute(CastVoteInput {
                question_id: q.id(),
                selection: Selection::from_raw(Some("abc")),
            })
            .await
            .unwrap_err();

        assert_eq!(
            err.rejection(),
            Some(VoteRejection::InvalidChoice { choice_id: None })
        );
    }

    #[tokio::test]
    async fn test_unknown_question_is_not_found() {
        let err = use_case(Arc::new(MockRepository::new()))
            .execute(CastVoteInput::new(QuestionId(3), Some(ChoiceId(1))))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_unpublished_question_accepts_votes_by_default() {
        let repository = Arc::new(MockRepository::new());
        let q = repository.add_question("Future?", days_from_now(5));
        let choice = repository.add_choice(q.id(), "Yes", 0);

        use_case(repository.clone())
            .execute(CastVoteInput::new(q.id(), Some(choice.id())))
            .await
            .unwrap();
        assert_eq!(repository.votes(choice.id()), Some(1));
    }

    #[tokio::test]
    async fn test_unpublished_question_refused_when_required() {
        let repository = Arc::new(MockRepository::new());
        let q = repository.add_question("Future?", days_from_now(5));
        let choice = repository.add_choice(q.id(), "Yes", 0);

        let err = use_case(repository.clone())
            .with_params(PollParams::default().with_vote_requires_published(true))
            .execute(CastVoteInput::new(q.id(), Some(choice.id())))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(repository.votes(choice.id()), Some(0));
    }

    #[tokio::test]
    async fn test_repository_failure_propagates() {
        let err = CastVoteUseCase::new(Arc::new(UnavailableRepository))
            .execute(CastVoteInput::new(QuestionId(1), Some(ChoiceId(1))))
            .await
            .unwrap_err();
        assert!(matches!(err, CastVoteError::Repository(_)));
    }
}
