//! In-memory port doubles shared by the use case tests.

use crate::ports::poll_repository::{PollRepository, RepositoryError};
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use polls_domain::{
    BoundedText, Choice, ChoiceId, NewChoice, NewQuestion, Question, QuestionId,
};
use std::sync::Mutex;

/// Fixed "now" used across use case tests
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap()
}

/// `now()` shifted by `days` (negative = past)
pub fn days_from_now(days: i64) -> DateTime<Utc> {
    now() + Duration::days(days)
}

#[derive(Default)]
struct State {
    questions: Vec<Question>,
    choices: Vec<Choice>,
    next_id: i64,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Mutex-backed repository. Increments happen under the lock.
#[derive(Default)]
pub struct MockRepository {
    state: Mutex<State>,
}

impl MockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_question(&self, text: &str, pub_date: DateTime<Utc>) -> Question {
        let mut state = self.state.lock().unwrap();
        let id = QuestionId(state.next_id());
        let question = Question::new(
            id,
            BoundedText::parse("question_text", text).unwrap(),
            pub_date,
        );
        state.questions.push(question.clone());
        question
    }

    pub fn add_choice(&self, question_id: QuestionId, text: &str, votes: u64) -> Choice {
        let mut state = self.state.lock().unwrap();
        let id = ChoiceId(state.next_id());
        let choice = Choice::new(
            id,
            question_id,
            BoundedText::parse("choice_text", text).unwrap(),
            votes,
        );
        state.choices.push(choice.clone());
        choice
    }

    pub fn votes(&self, choice_id: ChoiceId) -> Option<u64> {
        let state = self.state.lock().unwrap();
        state
            .choices
            .iter()
            .find(|c| c.id() == choice_id)
            .map(Choice::votes)
    }
}

#[async_trait]
impl PollRepository for MockRepository {
    async fn find_question(&self, id: QuestionId) -> Result<Option<Question>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state.questions.iter().find(|q| q.id() == id).cloned())
    }

    async fn list_questions(
        &self,
        published_by: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<Question>, RepositoryError> {
        let state = self.state.lock().unwrap();
        let mut questions: Vec<Question> = state
            .questions
            .iter()
            .filter(|q| q.pub_date() <= published_by)
            .cloned()
            .collect();
        questions.sort_by(|a, b| {
            b.pub_date()
                .cmp(&a.pub_date())
                .then_with(|| b.id().cmp(&a.id()))
        });
        questions.truncate(limit);
        Ok(questions)
    }

    async fn list_choices(&self, question_id: QuestionId) -> Result<Vec<Choice>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .choices
            .iter()
            .filter(|c| c.question_id() == question_id)
            .cloned()
            .collect())
    }

    async fn increment_choice_votes(
        &self,
        question_id: QuestionId,
        choice_id: ChoiceId,
    ) -> Result<bool, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let Some(slot) = state
            .choices
            .iter_mut()
            .find(|c| c.id() == choice_id && c.question_id() == question_id)
        else {
            return Ok(false);
        };
        *slot = Choice::new(
            slot.id(),
            slot.question_id(),
            BoundedText::parse("choice_text", slot.choice_text()).unwrap(),
            slot.votes() + 1,
        );
        Ok(true)
    }

    async fn create_question(&self, question: NewQuestion) -> Result<Question, RepositoryError> {
        Ok(self.add_question(question.question_text.as_str(), question.pub_date))
    }

    async fn create_choice(
        &self,
        question_id: QuestionId,
        choice: NewChoice,
    ) -> Result<Choice, RepositoryError> {
        Ok(self.add_choice(question_id, choice.choice_text.as_str(), 0))
    }

    async fn delete_question(&self, id: QuestionId) -> Result<bool, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let before = state.questions.len();
        state.questions.retain(|q| q.id() != id);
        state.choices.retain(|c| c.question_id() != id);
        Ok(state.questions.len() < before)
    }

    async fn delete_choice(
        &self,
        question_id: QuestionId,
        choice_id: ChoiceId,
    ) -> Result<bool, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let before = state.choices.len();
        state
            .choices
            .retain(|c| !(c.id() == choice_id && c.question_id() == question_id));
        Ok(state.choices.len() < before)
    }
}

/// Repository whose every call fails as if the store were down
pub struct UnavailableRepository;

fn unavailable<T>() -> Result<T, RepositoryError> {
    Err(RepositoryError::ConnectionError(
        "database is unavailable".to_string(),
    ))
}

#[async_trait]
impl PollRepository for UnavailableRepository {
    async fn find_question(&self, _id: QuestionId) -> Result<Option<Question>, RepositoryError> {
        unavailable()
    }

    async fn list_questions(
        &self,
        _published_by: DateTime<Utc>,
        _limit: usize,
    ) -> Result<Vec<Question>, RepositoryError> {
        unavailable()
    }

    async fn list_choices(&self, _question_id: QuestionId) -> Result<Vec<Choice>, RepositoryError> {
        unavailable()
    }

    async fn increment_choice_votes(
        &self,
        _question_id: QuestionId,
        _choice_id: ChoiceId,
    ) -> Result<bool, RepositoryError> {
        unavailable()
    }

    async fn create_question(&self, _question: NewQuestion) -> Result<Question, RepositoryError> {
        unavailable()
    }

    async fn create_choice(
        &self,
        _question_id: QuestionId,
        _choice: NewChoice,
    ) -> Result<Choice, RepositoryError> {
        unavailable()
    }

    async fn delete_question(&self, _id: QuestionId) -> Result<bool, RepositoryError> {
        unavailable()
    }

    async fn delete_choice(
        &self,
        _question_id: QuestionId,
        _choice_id: ChoiceId,
    ) -> Result<bool, RepositoryError> {
        unavailable()
    }
}
