//! CLI entrypoint for polls
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Duration, Utc};
use clap::Parser;
use polls_application::{
    CastVoteError, CastVoteInput, CastVoteUseCase, ListQuestionsUseCase, ManagePollsUseCase,
    PollRepository, Selection, ViewQuestionUseCase,
};
use polls_domain::OutputFormat;
use polls_infrastructure::{ConfigLoader, FileConfig, SqlitePollRepository, persistence};
use polls_presentation::{
    AppState, ChoiceView, Cli, Command, DetailView, IndexView, OutputFormatter, QuestionView,
    ResultsView, VoteErrorView, formatter_for, router, serve, shutdown_signal,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    if let Some(url) = &cli.database {
        config.database.url = url.clone();
    }

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        println!();
        print!("{}", ConfigLoader::render(&config)?);
        return Ok(());
    }

    let _guard = init_logging(&cli, &config)?;

    let issues = config.validate();
    for issue in issues.iter().filter(|i| !i.is_error()) {
        warn!("Config: {}", issue);
    }
    let errors: Vec<String> = issues
        .iter()
        .filter(|i| i.is_error())
        .map(ToString::to_string)
        .collect();
    if !errors.is_empty() {
        bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }

    let Some(command) = cli.command.clone() else {
        bail!("No command given. Run `polls --help` for usage.");
    };

    if !config.output.color {
        colored::control::set_override(false);
    }
    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    let pool = persistence::open(&config.database)
        .await
        .context("Failed to open database")?;
    let repository: Arc<dyn PollRepository> = Arc::new(SqlitePollRepository::new(pool.clone()));

    let result = run(
        command,
        &config,
        repository,
        formatter_for(format).as_ref(),
        cli.quiet,
    )
    .await;

    pool.close().await;
    info!("Database closed");
    result
}

async fn run(
    command: Command,
    config: &FileConfig,
    repository: Arc<dyn PollRepository>,
    formatter: &dyn OutputFormatter,
    quiet: bool,
) -> Result<()> {
    let params = config.polls.to_params();

    match command {
        Command::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            let listener = TcpListener::bind(&bind)
                .await
                .with_context(|| format!("Failed to bind {}", bind))?;
            let app = router(AppState::new(repository, params));
            serve(listener, app, shutdown_signal()).await?;
        }

        Command::List { limit } => {
            let list = ListQuestionsUseCase::new(repository)
                .execute(limit.unwrap_or(params.latest_limit))
                .await?;
            print!("{}", formatter.format_index(&IndexView::from(&list)));
        }

        Command::Show { question_id } => {
            let detail = ViewQuestionUseCase::new(repository)
                .detail(question_id)
                .await?;
            print!("{}", formatter.format_detail(&DetailView::from(&detail)));
        }

        Command::Results { question_id } => {
            let results = ViewQuestionUseCase::new(repository)
                .results(question_id)
                .await?;
            print!("{}", formatter.format_results(&ResultsView::from(&results)));
        }

        Command::Vote {
            question_id,
            choice,
        } => {
            let input = CastVoteInput::new(question_id, Selection::from_raw(choice.as_deref()));
            let outcome = CastVoteUseCase::new(repository.clone())
                .with_params(params)
                .execute(input)
                .await;

            match outcome {
                Ok(receipt) => {
                    let results = ViewQuestionUseCase::new(repository)
                        .results(receipt.question_id)
                        .await?;
                    print!("{}", formatter.format_results(&ResultsView::from(&results)));
                }
                Err(CastVoteError::Rejected { rejection, detail }) => {
                    let view = VoteErrorView::new(&detail, rejection);
                    eprint!("{}", formatter.format_vote_error(&view));
                    bail!("Vote not counted: {}", rejection);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Command::AddQuestion {
            text,
            days,
            pub_date,
        } => {
            let pub_date = publication_date(days, pub_date)?;
            let question = ManagePollsUseCase::new(repository)
                .create_question(&text, pub_date)
                .await?;
            print!(
                "{}",
                formatter.format_question(&QuestionView::new(&question, Utc::now()))
            );
        }

        Command::AddChoice { question_id, text } => {
            let choice = ManagePollsUseCase::new(repository)
                .add_choice(question_id, &text)
                .await?;
            print!("{}", formatter.format_choice(&ChoiceView::from(&choice)));
        }

        Command::DeleteQuestion { question_id } => {
            ManagePollsUseCase::new(repository)
                .delete_question(question_id)
                .await?;
            if !quiet {
                println!("Deleted question {} and its choices", question_id);
            }
        }

        Command::DeleteChoice {
            question_id,
            choice_id,
        } => {
            ManagePollsUseCase::new(repository)
                .delete_choice(question_id, choice_id)
                .await?;
            if !quiet {
                println!("Deleted choice {} of question {}", choice_id, question_id);
            }
        }

        // The pool was migrated when it was opened.
        Command::Migrate => {
            if !quiet {
                println!("Database schema is up to date ({})", config.database.url);
            }
        }
    }

    Ok(())
}

/// `--pub-date` wins; otherwise now shifted by `--days` (default 0).
fn publication_date(days: Option<i64>, pub_date: Option<DateTime<Utc>>) -> Result<DateTime<Utc>> {
    if let Some(pub_date) = pub_date {
        return Ok(pub_date);
    }
    let offset = Duration::try_days(days.unwrap_or(0)).context("--days is out of range")?;
    Utc::now()
        .checked_add_signed(offset)
        .context("--days is out of range")
}

/// Initialize logging based on verbosity level and `[logging]`.
///
/// `-v` flags win over `RUST_LOG`, which wins over `[logging] filter`.
/// The returned guard flushes the log file on drop.
fn init_logging(cli: &Cli, config: &FileConfig) -> Result<Option<WorkerGuard>> {
    let serving = matches!(cli.command, Some(Command::Serve { .. }));

    let filter = if cli.quiet {
        EnvFilter::new("error")
    } else {
        match cli.verbose {
            0 => match EnvFilter::try_from_default_env() {
                Ok(filter) => filter,
                Err(_) => match config.logging.filter.as_deref() {
                    Some(directives) => EnvFilter::try_new(directives)
                        .with_context(|| format!("Invalid [logging] filter '{}'", directives))?,
                    None if serving => EnvFilter::new("info"),
                    None => EnvFilter::new("warn"),
                },
            },
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"), // -vvv or more
        }
    };

    let (file_layer, guard) = match &config.logging.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "polls.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_explicit_pub_date_wins() {
        let exact = Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap();
        assert_eq!(publication_date(Some(3), Some(exact)).unwrap(), exact);
    }

    #[test]
    fn test_days_shift_from_now() {
        let before = Utc::now();
        let shifted = publication_date(Some(-2), None).unwrap();
        assert!(shifted <= before - Duration::days(2) + Duration::seconds(5));
        assert!(shifted >= before - Duration::days(2));
    }

    #[test]
    fn test_days_out_of_range() {
        assert!(publication_date(Some(i64::MAX), None).is_err());
    }
}
