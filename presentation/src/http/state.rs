use polls_application::{
    CastVoteUseCase, Clock, ListQuestionsUseCase, PollParams, PollRepository, ViewQuestionUseCase,
};
use std::sync::Arc;

/// Shared handler state. Cloned per request; everything inside is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub list_questions: ListQuestionsUseCase,
    pub view_question: ViewQuestionUseCase,
    pub cast_vote: CastVoteUseCase,
    pub params: PollParams,
}

impl AppState {
    pub fn new(repository: Arc<dyn PollRepository>, params: PollParams) -> Self {
        Self {
            list_questions: ListQuestionsUseCase::new(repository.clone()),
            view_question: ViewQuestionUseCase::new(repository.clone()),
            cast_vote: CastVoteUseCase::new(repository).with_params(params.clone()),
            params,
        }
    }

    /// Pin every use case to the same clock.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.list_questions = self.list_questions.with_clock(clock.clone());
        self.view_question = self.view_question.with_clock(clock.clone());
        self.cast_vote = self.cast_vote.with_clock(clock);
        self
    }
}
