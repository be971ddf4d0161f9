//! Common test utilities for `create` integration tests.
//!
//! Provides a scripted presenter standing in for the terminal and helpers
//! for building command lines against uniquely named temporary files.

pub mod fixtures;

use std::path::{Path, PathBuf};

use clap::Parser;
use md_flashcards::cli::{Cli, Commands};
use md_flashcards_core::{Presenter, ReportKind};

/// Presenter that answers every prompt with a fixed value and records output.
#[derive(Debug, Default)]
pub struct ScriptedPresenter {
    pub answer: bool,
    pub prompts: Vec<String>,
    pub reports: Vec<(ReportKind, String)>,
}

impl ScriptedPresenter {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            ..Self::default()
        }
    }

    /// Messages of the given kind, in order.
    pub fn messages(&self, kind: ReportKind) -> Vec<&str> {
        self.reports
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, message)| message.as_str())
            .collect()
    }
}

impl Presenter for ScriptedPresenter {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.answer
    }

    fn report(&mut self, kind: ReportKind, message: &str) {
        self.reports.push((kind, message.to_string()));
    }
}

/// Temporary files removed when the workspace is dropped.
pub struct Workspace {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Workspace {
    /// Create an input file with `content` and reserve an output path.
    pub fn with_input(content: &str) -> Self {
        let input = fixtures::unique_temp_path("input.md");
        std::fs::write(&input, content).expect("Failed to write test input");
        Self {
            input,
            output: fixtures::unique_temp_path("output.txt"),
        }
    }

    pub fn output_content(&self) -> String {
        std::fs::read_to_string(&self.output).expect("Failed to read test output")
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        std::fs::remove_file(&self.input).ok();
        std::fs::remove_file(&self.output).ok();
    }
}

/// Parse `md-flashcards create <input> <output> <extra...>` into a command.
pub fn create_command(input: &Path, output: &Path, extra: &[&str]) -> Commands {
    let mut argv = vec![
        "md-flashcards".to_string(),
        "create".to_string(),
        input.display().to_string(),
        output.display().to_string(),
    ];
    argv.extend(extra.iter().map(|arg| arg.to_string()));

    Cli::try_parse_from(argv)
        .expect("Failed to parse test command line")
        .command
}
