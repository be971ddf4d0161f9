//! `md-flashcards` command-line application.

pub mod cli;
pub mod terminal;

use std::process::ExitCode;

use clap::Parser;
use md_flashcards_core::{convert, ConvertRequest, Presenter, ReportKind};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};
use crate::terminal::TerminalPresenter;

/// Exit status of a successful run.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit status of any fatal error, including a declined overwrite.
pub const EXIT_FAILURE: u8 = 1;

/// Run the dispatched command against `presenter` and map the outcome to an exit status.
pub fn execute(command: Commands, presenter: &mut dyn Presenter) -> u8 {
    match command {
        Commands::Create(args) => {
            let request = ConvertRequest::from(args);
            tracing::info!(
                "creating flashcards from {} into {}",
                request.input_path.display(),
                request.output_path.display()
            );

            match convert(&request, presenter) {
                Ok(result) => {
                    if result.is_complete() {
                        tracing::info!("wrote {} cards", result.written_count);
                    } else {
                        tracing::warn!(
                            "wrote {} of {} cards",
                            result.written_count,
                            result.expected_count
                        );
                    }
                    EXIT_SUCCESS
                }
                Err(err) => {
                    tracing::error!("create failed: {:?}", err);
                    presenter.report(ReportKind::Error, &err.to_string());
                    EXIT_FAILURE
                }
            }
        }
    }
}

pub fn run() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let verbose = match &cli.command {
        Commands::Create(args) => args.verbose,
    };

    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    let mut presenter = TerminalPresenter::stdio();
    let code = execute(cli.command, &mut presenter);
    if shows_banner(code, cli.no_banner) {
        presenter.banner();
    }

    Ok(ExitCode::from(code))
}

/// The banner closes successful runs only.
fn shows_banner(code: u8, no_banner: bool) -> bool {
    code == EXIT_SUCCESS && !no_banner
}
