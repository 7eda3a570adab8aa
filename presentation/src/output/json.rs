//! JSON output, the same payloads the HTTP API returns

use super::formatter::OutputFormatter;
use crate::views::{ChoiceView, DetailView, IndexView, QuestionView, ResultsView, VoteErrorView};
use serde::Serialize;

pub struct JsonFormatter;

impl JsonFormatter {
    pub fn format<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_index(&self, view: &IndexView) -> String {
        Self::format(view)
    }

    fn format_detail(&self, view: &DetailView) -> String {
        Self::format(view)
    }

    fn format_results(&self, view: &ResultsView) -> String {
        Self::format(view)
    }

    fn format_vote_error(&self, view: &VoteErrorView) -> String {
        Self::format(view)
    }

    fn format_question(&self, view: &QuestionView) -> String {
        Self::format(view)
    }

    fn format_choice(&self, view: &ChoiceView) -> String {
        Self::format(view)
    }
}
