//! User interaction boundary for a conversion run.

use serde::{Deserialize, Serialize};

/// Kind of message handed to a [`Presenter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Error,
    Warning,
    Success,
    /// Only emitted for verbose runs.
    Info,
}

/// Confirmation prompts and status reports for the person running the tool.
pub trait Presenter {
    /// Ask a yes/no question. Returning `false` declines.
    fn confirm(&mut self, prompt: &str) -> bool;

    fn report(&mut self, kind: ReportKind, message: &str);
}
