//! Error types for md-flashcards-core.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while extracting cards from a document.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("No flashcards could be found, please check if you used the correct syntax and saved the file!")]
    NoCardsFound,

    /// `index` is 1-based, `fields` is the number of `++` segments found.
    #[error("Wrong number of fields in card #{index}: expected 3, found {fields}")]
    MalformedCard { index: usize, fields: usize },
}

/// Errors that abort writing before any card reaches the destination.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("could not create {}: {source}", .path.display())]
    SinkUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Fatal errors of a whole `create` run.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("{} does not exist, please choose an existing file.", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("could not read {}: {source}", .path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("This file does not contain anything!")]
    EmptyInput { path: PathBuf },

    #[error("{} already exists and was not overwritten.", .path.display())]
    OverwriteDeclined { path: PathBuf },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Write(#[from] WriteError),
}
