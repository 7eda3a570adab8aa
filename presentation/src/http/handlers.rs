use super::error::ApiError;
use super::state::AppState;
use crate::views::{DetailView, IndexView, ResultsView, VoteErrorView};
use axum::{
    Form, Json,
    extract::{Path, State},
    response::Redirect,
};
use polls_application::{CastVoteError, CastVoteInput, Selection};
use polls_domain::QuestionId;

/// Path of the results view for a question.
pub fn results_path(id: QuestionId) -> String {
    format!("/polls/{}/results/", id)
}

/// Non-numeric ids match no question.
fn question_id(raw: &str) -> Result<QuestionId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::NotFound(format!("Question '{}' not found", raw)))
}

#[tracing::instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<IndexView>, ApiError> {
    let list = state
        .list_questions
        .execute(state.params.latest_limit)
        .await?;
    Ok(Json(IndexView::from(&list)))
}

#[tracing::instrument(skip(state))]
pub async fn detail(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<DetailView>, ApiError> {
    let id = question_id(&raw)?;
    let detail = state.view_question.detail(id).await?;
    Ok(Json(DetailView::from(&detail)))
}

#[tracing::instrument(skip(state))]
pub async fn results(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<ResultsView>, ApiError> {
    let id = question_id(&raw)?;
    let results = state.view_question.results(id).await?;
    Ok(Json(ResultsView::from(&results)))
}

/// The submitted `choice`. A repeated key resolves to its last value.
fn submitted_choice(fields: &[(String, String)]) -> Option<&str> {
    fields
        .iter()
        .rev()
        .find(|(name, _)| name == "choice")
        .map(|(_, value)| value.as_str())
}

/// Count a ballot, then redirect (303) to the results so a reload
/// cannot submit it twice.
#[tracing::instrument(skip(state))]
pub async fn vote(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Redirect, ApiError> {
    let id = question_id(&raw)?;
    let input = CastVoteInput::new(id, Selection::from_raw(submitted_choice(&fields)));

    match state.cast_vote.execute(input).await {
        Ok(receipt) => Ok(Redirect::to(&results_path(receipt.question_id))),
        Err(err @ CastVoteError::NotFound(_)) => Err(ApiError::NotFound(err.to_string())),
        Err(CastVoteError::Rejected { rejection, detail }) => Err(ApiError::VoteRejected(
            Box::new(VoteErrorView::new(&detail, rejection)),
        )),
        Err(CastVoteError::Repository(e)) => Err(ApiError::Internal(e)),
    }
}

pub async fn health() -> &'static str {
    "ok"
}
