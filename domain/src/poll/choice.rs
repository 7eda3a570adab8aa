//! Choice entity

use super::question::QuestionId;
use crate::core::error::DomainError;
use crate::core::text::BoundedText;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Store-assigned choice identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceId(pub i64);

impl fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChoiceId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(ChoiceId)
            .map_err(|_| DomainError::InvalidId(s.to_string()))
    }
}

/// One selectable answer to a question, carrying its vote tally (Entity)
///
/// A choice belongs to exactly one question. Its vote count only ever
/// grows, and only through the store's atomic increment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    id: ChoiceId,
    question_id: QuestionId,
    choice_text: BoundedText,
    votes: u64,
}

impl Choice {
    /// Rehydrate a stored choice
    pub fn new(id: ChoiceId, question_id: QuestionId, choice_text: BoundedText, votes: u64) -> Self {
        Self {
            id,
            question_id,
            choice_text,
            votes,
        }
    }

    pub fn id(&self) -> ChoiceId {
        self.id
    }

    pub fn question_id(&self) -> QuestionId {
        self.question_id
    }

    pub fn choice_text(&self) -> &str {
        self.choice_text.as_str()
    }

    pub fn votes(&self) -> u64 {
        self.votes
    }

    /// "1 vote", "3 votes"
    pub fn votes_label(&self) -> String {
        if self.votes == 1 {
            "1 vote".to_string()
        } else {
            format!("{} votes", self.votes)
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.choice_text)
    }
}

/// A choice that has not been stored yet. Votes start at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChoice {
    pub choice_text: BoundedText,
}

impl NewChoice {
    pub fn new(choice_text: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self {
            choice_text: BoundedText::parse("choice_text", choice_text)?,
        })
    }
}
