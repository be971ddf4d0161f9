//! Core library for converting markdown flashcards into delimited import files.
//!
//! Provides:
//! - Parser for the `!--! front ++ back ++ other !--!` card syntax
//! - Writer producing one delimited line per card
//! - `convert`, the whole read-parse-write operation behind a [`Presenter`]
//! - Shared types (Card, WriteReport, ConvertRequest, ConvertResult)

pub mod convert;
pub mod error;
pub mod parser;
pub mod presenter;
pub mod types;
pub mod writer;

pub use convert::convert;
pub use error::{ConvertError, ParseError, Result, WriteError};
pub use parser::{extract, CARD_MARKER, FIELD_SEPARATOR};
pub use presenter::{Presenter, ReportKind};
pub use types::{Card, ConvertRequest, ConvertResult, WriteReport, DEFAULT_SEPARATOR};
pub use writer::{format_line, write, write_to_path, LineEvent};
