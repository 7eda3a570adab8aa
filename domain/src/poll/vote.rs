//! Vote primitives: why a ballot was refused, and the tallied results.

use super::choice::{Choice, ChoiceId};
use super::question::Question;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message shown when a ballot cannot be counted.
pub const NO_CHOICE_MESSAGE: &str = "You didn't select a choice.";

/// Reason a ballot was refused before reaching the store
///
/// Both variants are recoverable: the caller re-presents the question with
/// [`VoteRejection::message`] and lets the voter try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VoteRejection {
    /// No choice identifier was submitted
    NoSelection,
    /// The identifier is not one of the question's choices
    InvalidChoice { choice_id: Option<ChoiceId> },
}

impl VoteRejection {
    /// Voter-facing message. Both kinds read the same, as in the form.
    pub fn message(&self) -> &'static str {
        NO_CHOICE_MESSAGE
    }
}

impl std::fmt::Display for VoteRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VoteRejection::NoSelection => write!(f, "no choice selected"),
            VoteRejection::InvalidChoice {
                choice_id: Some(id),
            } => write!(f, "choice {} does not belong to this question", id),
            VoteRejection::InvalidChoice { choice_id: None } => {
                write!(f, "choice is not a valid identifier")
            }
        }
    }
}

/// A question with its choices and their tallies as read at `as_of`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResults {
    pub question: Question,
    pub choices: Vec<Choice>,
    pub as_of: DateTime<Utc>,
}

impl QuestionResults {
    pub fn new(question: Question, choices: Vec<Choice>, as_of: DateTime<Utc>) -> Self {
        Self {
            question,
            choices,
            as_of,
        }
    }

    /// Sum of all choice tallies
    pub fn total_votes(&self) -> u64 {
        self.choices.iter().map(Choice::votes).sum()
    }

    /// Share of the total held by `choice` (0.0 to 1.0)
    pub fn vote_share(&self, choice: &Choice) -> f64 {
        let total = self.total_votes();
        if total == 0 {
            0.0
        } else {
            choice.votes() as f64 / total as f64
        }
    }
}
