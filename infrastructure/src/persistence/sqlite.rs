//! SQLite adapter for [`PollRepository`].

use super::database::repository_error;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use polls_application::{PollRepository, RepositoryError};
use polls_domain::{
    BoundedText, Choice, ChoiceId, NewChoice, NewQuestion, Question, QuestionId,
};
use sqlx::FromRow;
use sqlx::sqlite::SqlitePool;
use tracing::{debug, instrument};

#[derive(Debug, FromRow)]
struct QuestionRow {
    id: i64,
    question_text: String,
    pub_date: DateTime<Utc>,
}

impl TryFrom<QuestionRow> for Question {
    type Error = RepositoryError;

    fn try_from(row: QuestionRow) -> Result<Self, Self::Error> {
        let text = BoundedText::parse("question_text", row.question_text)
            .map_err(|e| RepositoryError::CorruptRecord(format!("question {}: {}", row.id, e)))?;
        Ok(Question::new(QuestionId(row.id), text, row.pub_date))
    }
}

#[derive(Debug, FromRow)]
struct ChoiceRow {
    id: i64,
    question_id: i64,
    choice_text: String,
    votes: i64,
}

impl TryFrom<ChoiceRow> for Choice {
    type Error = RepositoryError;

    fn try_from(row: ChoiceRow) -> Result<Self, Self::Error> {
        let text = BoundedText::parse("choice_text", row.choice_text)
            .map_err(|e| RepositoryError::CorruptRecord(format!("choice {}: {}", row.id, e)))?;
        let votes = u64::try_from(row.votes).map_err(|_| {
            RepositoryError::CorruptRecord(format!("choice {} has {} votes", row.id, row.votes))
        })?;
        Ok(Choice::new(
            ChoiceId(row.id),
            QuestionId(row.question_id),
            text,
            votes,
        ))
    }
}

/// [`PollRepository`] backed by a SQLite connection pool.
///
/// Vote increments are a single `UPDATE ... SET votes = votes + 1`, so
/// concurrent voters serialize inside SQLite instead of racing in Rust.
#[derive(Debug, Clone)]
pub struct SqlitePollRepository {
    pool: SqlitePool,
}

impl SqlitePollRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PollRepository for SqlitePollRepository {
    #[instrument(skip(self))]
    async fn find_question(&self, id: QuestionId) -> Result<Option<Question>, RepositoryError> {
        let row: Option<QuestionRow> =
            sqlx::query_as("SELECT id, question_text, pub_date FROM question WHERE id = ?")
                .bind(id.0)
                .fetch_optional(&self.pool)
                .await
                .map_err(repository_error)?;

        row.map(Question::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list_questions(
        &self,
        published_by: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<Question>, RepositoryError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows: Vec<QuestionRow> = sqlx::query_as(
            "SELECT id, question_text, pub_date FROM question \
             WHERE pub_date <= ? \
             ORDER BY pub_date DESC, id DESC \
             LIMIT ?",
        )
        .bind(published_by)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        rows.into_iter().map(Question::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn list_choices(&self, question_id: QuestionId) -> Result<Vec<Choice>, RepositoryError> {
        let rows: Vec<ChoiceRow> = sqlx::query_as(
            "SELECT id, question_id, choice_text, votes FROM choice \
             WHERE question_id = ? ORDER BY id",
        )
        .bind(question_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        rows.into_iter().map(Choice::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn increment_choice_votes(
        &self,
        question_id: QuestionId,
        choice_id: ChoiceId,
    ) -> Result<bool, RepositoryError> {
        let result =
            sqlx::query("UPDATE choice SET votes = votes + 1 WHERE id = ? AND question_id = ?")
                .bind(choice_id.0)
                .bind(question_id.0)
                .execute(&self.pool)
                .await
                .map_err(repository_error)?;

        let counted = result.rows_affected() == 1;
        if !counted {
            debug!("No choice {} under question {}", choice_id, question_id);
        }
        Ok(counted)
    }

    #[instrument(skip(self), fields(text = %question.question_text))]
    async fn create_question(&self, question: NewQuestion) -> Result<Question, RepositoryError> {
        let row: QuestionRow = sqlx::query_as(
            "INSERT INTO question (question_text, pub_date) VALUES (?, ?) \
             RETURNING id, question_text, pub_date",
        )
        .bind(question.question_text.as_str())
        .bind(question.pub_date)
        .fetch_one(&self.pool)
        .await
        .map_err(repository_error)?;

        Question::try_from(row)
    }

    #[instrument(skip(self), fields(text = %choice.choice_text))]
    async fn create_choice(
        &self,
        question_id: QuestionId,
        choice: NewChoice,
    ) -> Result<Choice, RepositoryError> {
        let row: ChoiceRow = sqlx::query_as(
            "INSERT INTO choice (question_id, choice_text, votes) VALUES (?, ?, 0) \
             RETURNING id, question_id, choice_text, votes",
        )
        .bind(question_id.0)
        .bind(choice.choice_text.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(repository_error)?;

        Choice::try_from(row)
    }

    #[instrument(skip(self))]
    async fn delete_question(&self, id: QuestionId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM question WHERE id = ?")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;
        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete_choice(
        &self,
        question_id: QuestionId,
        choice_id: ChoiceId,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM choice WHERE id = ? AND question_id = ?")
            .bind(choice_id.0)
            .bind(question_id.0)
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;
        Ok(result.rows_affected() > 0)
    }
}
