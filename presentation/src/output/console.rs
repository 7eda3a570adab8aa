//! Console output formatter for polls

use super::formatter::OutputFormatter;
use crate::views::{ChoiceView, DetailView, IndexView, QuestionView, ResultsView, VoteErrorView};
use colored::Colorize;

const WIDTH: usize = 60;
const BAR_WIDTH: usize = 20;

/// Formats poll views for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn format_index(view: &IndexView) -> String {
        let mut output = Self::header("Latest Polls");
        output.push('\n');

        if view.latest_question_list.is_empty() {
            output.push_str(&format!("{}\n", "No polls are available.".dimmed()));
            return output;
        }

        for question in &view.latest_question_list {
            output.push_str(&Self::question_line(question));
            output.push('\n');
        }
        output
    }

    pub fn format_detail(view: &DetailView) -> String {
        let mut output = Self::question_title(&view.question);
        output.push_str(&Self::choice_list(&view.choices));
        output
    }

    pub fn format_results(view: &ResultsView) -> String {
        let mut output = Self::question_title(&view.question);

        if view.choices.is_empty() {
            output.push_str(&format!("{}\n", "No choices yet.".dimmed()));
            return output;
        }

        let name_width = view
            .choices
            .iter()
            .map(|c| c.choice_text.chars().count())
            .max()
            .unwrap_or(0);

        for choice in &view.choices {
            output.push_str(&format!(
                "  {:<width$}  {}  {}\n",
                choice.choice_text,
                Self::bar(choice.vote_share).green(),
                choice.votes_label,
                width = name_width
            ));
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Total votes:".cyan().bold(),
            view.total_votes
        ));
        output
    }

    pub fn format_vote_error(view: &VoteErrorView) -> String {
        let mut output = format!("{}\n\n", view.error_message.red().bold());
        output.push_str(&Self::question_title(&view.question));
        output.push_str(&Self::choice_list(&view.choices));
        output
    }

    pub fn format_question(view: &QuestionView) -> String {
        format!(
            "{} {}\n",
            "Created question".green().bold(),
            Self::question_line(view)
        )
    }

    pub fn format_choice(view: &ChoiceView) -> String {
        format!(
            "{} [{}] {}\n",
            "Added choice".green().bold(),
            view.id,
            view.choice_text
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(WIDTH);
        format!("{}\n{:^WIDTH$}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn question_title(question: &QuestionView) -> String {
        format!(
            "{} {}\n{}\n\n",
            format!("#{}", question.id).yellow().bold(),
            question.question_text.bold(),
            format!("Published {}", question.pub_date.format("%Y-%m-%d %H:%M UTC")).dimmed()
        )
    }

    fn question_line(question: &QuestionView) -> String {
        let marker = if question.was_published_recently {
            " new".green().to_string()
        } else {
            String::new()
        };
        format!(
            "{:>4}  {}  {}{}",
            question.id.to_string().yellow(),
            question.question_text,
            question.pub_date.format("%Y-%m-%d").to_string().dimmed(),
            marker
        )
    }

    fn choice_list(choices: &[ChoiceView]) -> String {
        if choices.is_empty() {
            return format!("{}\n", "No choices yet.".dimmed());
        }
        choices
            .iter()
            .map(|c| format!("  [{}] {}\n", c.id.to_string().yellow(), c.choice_text))
            .collect()
    }

    /// `share` is clamped to 0.0..=1.0
    fn bar(share: f64) -> String {
        let filled = ((share.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
        format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_index(&self, view: &IndexView) -> String {
        Self::format_index(view)
    }

    fn format_detail(&self, view: &DetailView) -> String {
        Self::format_detail(view)
    }

    fn format_results(&self, view: &ResultsView) -> String {
        Self::format_results(view)
    }

    fn format_vote_error(&self, view: &VoteErrorView) -> String {
        Self::format_vote_error(view)
    }

    fn format_question(&self, view: &QuestionView) -> String {
        Self::format_question(view)
    }

    fn format_choice(&self, view: &ChoiceView) -> String {
        Self::format_choice(view)
    }
}
