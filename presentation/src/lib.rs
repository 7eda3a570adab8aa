//! Presentation layer for polls
//!
//! This crate contains the HTTP routes, CLI definitions and
//! output formatters. Views in [`views`] are shared by the HTTP
//! API and `--output json`.

pub mod cli;
pub mod http;
pub mod output;
pub mod views;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputArg};
pub use http::{ApiError, AppState, router, serve, shutdown_signal};
pub use output::{ConsoleFormatter, JsonFormatter, OutputFormatter, formatter_for};
pub use views::{
    ChoiceView, DetailView, IndexView, QuestionView, ResultsView, TallyView, VoteErrorView,
};
