//! Output formatter trait

use super::console::ConsoleFormatter;
use super::json::JsonFormatter;
use crate::views::{ChoiceView, DetailView, IndexView, QuestionView, ResultsView, VoteErrorView};
use polls_domain::OutputFormat;

/// Renders poll views for the terminal
pub trait OutputFormatter {
    fn format_index(&self, view: &IndexView) -> String;

    fn format_detail(&self, view: &DetailView) -> String;

    fn format_results(&self, view: &ResultsView) -> String;

    /// A refused ballot, shown with the question it was cast on
    fn format_vote_error(&self, view: &VoteErrorView) -> String;

    /// A newly created question
    fn format_question(&self, view: &QuestionView) -> String;

    /// A newly created choice
    fn format_choice(&self, view: &ChoiceView) -> String;
}

/// Pick the formatter for a format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
