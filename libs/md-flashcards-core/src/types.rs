//! Core types for flashcard conversion.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Field delimiter used in the output file when none is given.
pub const DEFAULT_SEPARATOR: &str = ";";

/// A flashcard extracted from markdown.
///
/// Only the parser builds cards, so every card carries exactly the three
/// fields found between its `++` separators, already trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    front: String,
    back: String,
    other: String,
}

impl Card {
    pub(crate) fn from_fields(front: &str, back: &str, other: &str) -> Self {
        Self {
            front: front.trim().to_string(),
            back: back.trim().to_string(),
            other: other.trim().to_string(),
        }
    }

    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn back(&self) -> &str {
        &self.back
    }

    pub fn other(&self) -> &str {
        &self.other
    }
}

/// Outcome of writing a batch of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteReport {
    /// Lines that reached the destination.
    pub written_count: usize,
    /// Cards handed to the writer.
    pub expected_count: usize,
}

impl WriteReport {
    /// Whether every card was written.
    pub fn is_complete(&self) -> bool {
        self.written_count == self.expected_count
    }
}

/// Everything a single `create` run needs.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub delimiter: String,
    pub verbose: bool,
    /// Replace an existing output file without asking.
    pub overwrite: bool,
}

impl ConvertRequest {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            delimiter: DEFAULT_SEPARATOR.to_string(),
            verbose: false,
            overwrite: false,
        }
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

/// Result of a successful `create` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertResult {
    pub written_count: usize,
    pub expected_count: usize,
}

impl ConvertResult {
    pub fn is_complete(&self) -> bool {
        self.written_count == self.expected_count
    }
}

impl From<WriteReport> for ConvertResult {
    fn from(report: WriteReport) -> Self {
        Self {
            written_count: report.written_count,
            expected_count: report.expected_count,
        }
    }
}
