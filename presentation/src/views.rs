//! Serializable payloads shared by the HTTP API and `--output json`.
//!
//! Domain entities keep their invariants behind getters; these views are
//! flat records computed against a single `now`.

use chrono::{DateTime, Utc};
use polls_application::{QuestionDetail, QuestionList};
use polls_domain::{Choice, ChoiceId, Question, QuestionId, QuestionResults, VoteRejection};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionView {
    pub id: QuestionId,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
    pub was_published_recently: bool,
}

impl QuestionView {
    pub fn new(question: &Question, now: DateTime<Utc>) -> Self {
        Self {
            id: question.id(),
            question_text: question.question_text().to_string(),
            pub_date: question.pub_date(),
            was_published_recently: question.was_published_recently(now),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoiceView {
    pub id: ChoiceId,
    pub choice_text: String,
    pub votes: u64,
}

impl From<&Choice> for ChoiceView {
    fn from(choice: &Choice) -> Self {
        Self {
            id: choice.id(),
            choice_text: choice.choice_text().to_string(),
            votes: choice.votes(),
        }
    }
}

fn choice_views(choices: &[Choice]) -> Vec<ChoiceView> {
    choices.iter().map(ChoiceView::from).collect()
}

/// The index page: latest published questions, newest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexView {
    pub latest_question_list: Vec<QuestionView>,
}

impl From<&QuestionList> for IndexView {
    fn from(list: &QuestionList) -> Self {
        Self {
            latest_question_list: list
                .questions
                .iter()
                .map(|q| QuestionView::new(q, list.as_of))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub question: QuestionView,
    pub choices: Vec<ChoiceView>,
}

impl From<&QuestionDetail> for DetailView {
    fn from(detail: &QuestionDetail) -> Self {
        Self {
            question: QuestionView::new(&detail.question, detail.as_of),
            choices: choice_views(&detail.choices),
        }
    }
}

/// One line of the results: a choice with its tally and share of the total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TallyView {
    pub id: ChoiceId,
    pub choice_text: String,
    pub votes: u64,
    pub votes_label: String,
    /// 0.0 to 1.0; 0.0 when nobody has voted
    pub vote_share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsView {
    pub question: QuestionView,
    pub choices: Vec<TallyView>,
    pub total_votes: u64,
}

impl From<&QuestionResults> for ResultsView {
    fn from(results: &QuestionResults) -> Self {
        let choices = results
            .choices
            .iter()
            .map(|choice| TallyView {
                id: choice.id(),
                choice_text: choice.choice_text().to_string(),
                votes: choice.votes(),
                votes_label: choice.votes_label(),
                vote_share: results.vote_share(choice),
            })
            .collect();

        Self {
            question: QuestionView::new(&results.question, results.as_of),
            choices,
            total_votes: results.total_votes(),
        }
    }
}

/// The voting form shown again with an error message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoteErrorView {
    pub question: QuestionView,
    pub choices: Vec<ChoiceView>,
    pub error_message: String,
}

impl VoteErrorView {
    pub fn new(detail: &QuestionDetail, rejection: VoteRejection) -> Self {
        Self {
            question: QuestionView::new(&detail.question, detail.as_of),
            choices: choice_views(&detail.choices),
            error_message: rejection.message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use polls_domain::{BoundedText, NO_CHOICE_MESSAGE};
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap()
    }

    fn question(id: i64, pub_date: DateTime<Utc>) -> Question {
        Question::new(
            QuestionId(id),
            BoundedText::parse("question_text", "What's up?").unwrap(),
            pub_date,
        )
    }

    fn choice(id: i64, text: &str, votes: u64) -> Choice {
        Choice::new(
            ChoiceId(id),
            QuestionId(1),
            BoundedText::parse("choice_text", text).unwrap(),
            votes,
        )
    }

    #[test]
    fn test_index_uses_listing_instant() {
        let list = QuestionList {
            as_of: now(),
            questions: vec![
                question(2, now() - Duration::hours(2)),
                question(1, now() - Duration::days(3)),
            ],
        };

        let view = IndexView::from(&list);
        let recent: Vec<_> = view
            .latest_question_list
            .iter()
            .map(|q| q.was_published_recently)
            .collect();
        assert_eq!(recent, vec![true, false]);
    }

    #[test]
    fn test_results_json_shape() {
        let results = QuestionResults::new(
            question(1, now() - Duration::days(2)),
            vec![choice(1, "Not much", 3), choice(2, "The sky", 1)],
            now(),
        );

        let value = serde_json::to_value(ResultsView::from(&results)).unwrap();
        assert_eq!(value["total_votes"], json!(4));
        assert_eq!(value["question"]["id"], json!(1));
        assert_eq!(value["question"]["was_published_recently"], json!(false));
        assert_eq!(
            value["choices"][1],
            json!({
                "id": 2,
                "choice_text": "The sky",
                "votes": 1,
                "votes_label": "1 vote",
                "vote_share": 0.25
            })
        );
    }

    #[test]
    fn test_detail_uses_lookup_instant() {
        let detail = QuestionDetail {
            question: question(1, now() - Duration::hours(30)),
            choices: Vec::new(),
            as_of: now() - Duration::hours(10),
        };

        assert!(DetailView::from(&detail).question.was_published_recently);
    }

    #[test]
    fn test_vote_error_carries_message() {
        let detail = QuestionDetail {
            question: question(1, now() - Duration::hours(3)),
            choices: vec![choice(1, "Not much", 0)],
            as_of: now(),
        };

        let view = VoteErrorView::new(&detail, VoteRejection::NoSelection);
        assert_eq!(view.error_message, NO_CHOICE_MESSAGE);
        assert_eq!(view.choices.len(), 1);
        assert!(view.question.was_published_recently);
    }
}
