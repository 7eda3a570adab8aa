//! Question entity

use super::visibility;
use crate::core::error::DomainError;
use crate::core::text::BoundedText;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Store-assigned question identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub i64);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuestionId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(QuestionId)
            .map_err(|_| DomainError::InvalidId(s.to_string()))
    }
}

/// A poll prompt with a publication timestamp (Entity)
///
/// Questions are never mutated after creation; the identifier is
/// assigned by the store and stays fixed for the question's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    question_text: BoundedText,
    pub_date: DateTime<Utc>,
}

impl Question {
    /// Rehydrate a stored question
    pub fn new(id: QuestionId, question_text: BoundedText, pub_date: DateTime<Utc>) -> Self {
        Self {
            id,
            question_text,
            pub_date,
        }
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn question_text(&self) -> &str {
        self.question_text.as_str()
    }

    pub fn pub_date(&self) -> DateTime<Utc> {
        self.pub_date
    }

    /// Whether the question is visible at `now`
    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        visibility::is_published(now, self.pub_date)
    }

    /// Whether the question went live within the last day
    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        visibility::was_published_recently(now, self.pub_date)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.question_text)
    }
}

/// A question that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question_text: BoundedText,
    pub pub_date: DateTime<Utc>,
}

impl NewQuestion {
    pub fn new(
        question_text: impl Into<String>,
        pub_date: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            question_text: BoundedText::parse("question_text", question_text)?,
            pub_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn question(pub_date: DateTime<Utc>) -> Question {
        Question::new(
            QuestionId(1),
            BoundedText::parse("question_text", "What's new?").unwrap(),
            pub_date,
        )
    }

    #[test]
    fn test_was_published_recently_with_future_question() {
        let now = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
        let q = question(now + Duration::days(30));
        assert!(!q.was_published_recently(now));
        assert!(!q.is_published(now));
    }

    #[test]
    fn test_was_published_recently_with_old_question() {
        let now = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
        let q = question(now - Duration::days(1) - Duration::seconds(1));
        assert!(!q.was_published_recently(now));
        assert!(q.is_published(now));
    }

    #[test]
    fn test_display_is_question_text() {
        let q = question(Utc::now());
        assert_eq!(q.to_string(), "What's new?");
    }

    #[test]
    fn test_question_id_from_str() {
        assert_eq!("42".parse::<QuestionId>(), Ok(QuestionId(42)));
        assert!("forty-two".parse::<QuestionId>().is_err());
    }

    #[test]
    fn test_new_question_rejects_empty_text() {
        assert!(NewQuestion::new("", Utc::now()).is_err());
    }
}
