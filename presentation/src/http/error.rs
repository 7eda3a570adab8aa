use crate::views::VoteErrorView;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use polls_application::{RepositoryError, ViewQuestionError};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    /// The ballot was refused; the body re-presents the question.
    #[error("{}", .0.error_message)]
    VoteRejected(Box<VoteErrorView>),

    #[error("Internal error: {0}")]
    Internal(#[from] RepositoryError),
}

impl From<ViewQuestionError> for ApiError {
    fn from(err: ViewQuestionError) -> Self {
        match err {
            ViewQuestionError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ViewQuestionError::Repository(e) => ApiError::Internal(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
            }
            ApiError::VoteRejected(view) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(*view)).into_response()
            }
            ApiError::Internal(e) => {
                error!(error = %e, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
