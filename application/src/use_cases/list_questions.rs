//! List Questions use case.
//!
//! Backs the index view: the latest published questions, newest first.

use crate::ports::clock::{Clock, SystemClock};
use crate::ports::poll_repository::{PollRepository, RepositoryError};
use chrono::{DateTime, Utc};
use polls_domain::Question;
use std::sync::Arc;
use tracing::debug;

/// Output of [`ListQuestionsUseCase`].
///
/// Carries the instant the listing was evaluated at so callers compute
/// "recently published" against the same `now` that filtered the list.
#[derive(Debug, Clone)]
pub struct QuestionList {
    pub as_of: DateTime<Utc>,
    pub questions: Vec<Question>,
}

impl QuestionList {
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Use case for listing recently published questions.
#[derive(Clone)]
pub struct ListQuestionsUseCase {
    repository: Arc<dyn PollRepository>,
    clock: Arc<dyn Clock>,
}

impl ListQuestionsUseCase {
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

    /// Up to `limit` questions with `pub_date <= now`, newest first.
    pub async fn execute(&self, limit: usize) -> Result<QuestionList, RepositoryError> {
        let as_of = self.clock.now();

        if limit == 0 {
            return Ok(QuestionList {
                as_of,
                questions: Vec::new(),
            });
        }

        let questions = self.repository.list_questions(as_of, limit).await?;
        debug!("Listed {} published questions (limit {})", questions.len(), limit);

        Ok(QuestionList { as_of, questions })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::clock::FixedClock;
    use crate::use_cases::test_support::{MockRepository, UnavailableRepository, days_from_now, now};

    fn use_case(repository: Arc<MockRepository>) -> ListQuestionsUseCase {
        ListQuestionsUseCase::new(repository).with_clock(Arc::new(FixedClock(now())))
    }

    fn texts(list: &QuestionList) -> Vec<&str> {
        list.questions.iter().map(|q| q.question_text()).collect()
    }

    #[tokio::test]
    async fn test_no_questions() {
        let list = use_case(Arc::new(MockRepository::new()))
            .execute(5)
            .await
            .unwrap();
        assert!(list.is_empty());
        assert_eq!(list.as_of, now());
    }

    #[tokio::test]
    async fn test_past_question() {
        let repository = Arc::new(MockRepository::new());
        repository.add_question("Past question.", days_from_now(-30));

        let list = use_case(repository).execute(5).await.unwrap();
        assert_eq!(texts(&list), vec!["Past question."]);
    }

    #[tokio::test]
    async fn test_future_question() {
        let repository = Arc::new(MockRepository::new());
        repository.add_question("Future question.", days_from_now(30));

        let list = use_case(repository).execute(5).await.unwrap();
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn test_future_question_and_past_question() {
        let repository = Arc::new(MockRepository::new());
        repository.add_question("Past question.", days_from_now(-30));
        repository.add_question("Future question.", days_from_now(30));

        let list = use_case(repository).execute(5).await.unwrap();
        assert_eq!(texts(&list), vec!["Past question."]);
    }

    #[tokio::test]
    async fn test_two_past_questions() {
        let repository = Arc::new(MockRepository::new());
        repository.add_question("Past question 1.", days_from_now(-30));
        repository.add_question("Past question 2.", days_from_now(-5));

        let list = use_case(repository).execute(5).await.unwrap();
        assert_eq!(texts(&list), vec!["Past question 2.", "Past question 1."]);
    }

    #[tokio::test]
    async fn test_limit_truncates() {
        let repository = Arc::new(MockRepository::new());
        for day in 1..=7 {
            repository.add_question(&format!("Question {}.", day), days_from_now(-day));
        }

        let list = use_case(repository.clone()).execute(5).await.unwrap();
        assert_eq!(list.questions.len(), 5);
        assert_eq!(list.questions[0].question_text(), "Question 1.");

        let none = use_case(repository).execute(0).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_repository_failure_propagates() {
        let result = ListQuestionsUseCase::new(Arc::new(UnavailableRepository))
            .execute(5)
            .await;
        assert!(matches!(result, Err(RepositoryError::ConnectionError(_))));
    }
}
