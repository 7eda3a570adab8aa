//! CLI command definitions

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use polls_domain::{ChoiceId, OutputFormat, QuestionId};
use std::path::PathBuf;

/// Output format for read commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Human-readable, colored when the terminal allows
    Text,
    /// Pretty-printed JSON, same shape as the HTTP API
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Text => OutputFormat::Text,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for polls
#[derive(Parser, Debug)]
#[command(name = "polls")]
#[command(author, version, about = "Publish questions, collect votes, show results")]
#[command(long_about = r#"
Polls keeps questions with a set of choices, accepts one vote at a time,
and tallies the results. Questions become visible once their publication
date has passed.

Configuration files are loaded from (in priority order):
1. POLLS_* environment variables (POLLS_DATABASE__URL, ...)
2. --config <path>                     Explicit config file
3. ./polls.toml or ./.polls.toml       Project-level config
4. $XDG_CONFIG_HOME/polls/config.toml  Global config
5. Built-in defaults

Example:
  polls add-question "What's up?" --days -1
  polls add-choice 1 "Not much"
  polls vote 1 1
  polls results 1
  polls serve
"#)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (defaults to [output] format, then text)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputArg>,

    /// Database URL, overriding [database] url
    #[arg(long, value_name = "URL", global = true)]
    pub database: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration sources and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        /// Listen address, overriding [server] bind
        #[arg(long, value_name = "HOST:PORT")]
        bind: Option<String>,
    },

    /// List the latest published questions
    List {
        /// How many questions to show, overriding [polls] latest_limit
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show a published question and its choices
    Show { question_id: QuestionId },

    /// Show the vote tallies of a question
    Results { question_id: QuestionId },

    /// Vote for a choice of a question
    Vote {
        question_id: QuestionId,
        /// Choice id; omitting it is reported as "no choice selected"
        choice: Option<String>,
    },

    /// Create a question
    AddQuestion {
        text: String,

        /// Publish this many days from now (negative for the past)
        #[arg(long, allow_hyphen_values = true, conflicts_with = "pub_date")]
        days: Option<i64>,

        /// Exact publication instant (RFC 3339)
        #[arg(long, value_name = "RFC3339")]
        pub_date: Option<DateTime<Utc>>,
    },

    /// Add a choice to a question
    AddChoice { question_id: QuestionId, text: String },

    /// Delete a question and its choices
    DeleteQuestion { question_id: QuestionId },

    /// Delete one choice of a question
    DeleteChoice {
        question_id: QuestionId,
        choice_id: ChoiceId,
    },

    /// Create or upgrade the database schema
    Migrate,
}
