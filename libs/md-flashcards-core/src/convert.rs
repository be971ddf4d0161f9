//! The `create` operation: check files, parse the input, write the output.

use std::fs;
use std::io;

use crate::error::ConvertError;
use crate::parser::{self, extract};
use crate::presenter::{Presenter, ReportKind};
use crate::types::{ConvertRequest, ConvertResult, WriteReport};
use crate::writer::{write_to_path, LineEvent};

/// Convert the request's input document into a delimited card file.
///
/// Every fatal error is returned before the output file is opened, so an
/// existing output file is only touched once parsing has succeeded. Cards
/// whose line could not be written are reported as a warning, not an error.
pub fn convert(
    request: &ConvertRequest,
    presenter: &mut dyn Presenter,
) -> Result<ConvertResult, ConvertError> {
    check_files(request, presenter)?;

    let content = read_input(request)?;
    if content.is_empty() {
        return Err(ConvertError::EmptyInput {
            path: request.input_path.clone(),
        });
    }

    if request.verbose {
        let possible = parser::candidates(&content).len();
        presenter.report(ReportKind::Info, &format!("Found: {} possible cards", possible));
    }

    let cards = extract(&content)?;
    tracing::info!(
        "parsed {} cards from {}",
        cards.len(),
        request.input_path.display()
    );

    if request.verbose {
        presenter.report(
            ReportKind::Info,
            &format!("Found {} flashcards!", cards.len()),
        );
        presenter.report(
            ReportKind::Info,
            &format!("Opening: {}", request.output_path.display()),
        );
    }

    let report = write_to_path(&cards, &request.delimiter, &request.output_path, |event| {
        report_line(request, &mut *presenter, event)
    })?;
    report_summary(request, presenter, &report);

    Ok(report.into())
}

/// Verbose per-line messages for the observer of `write`.
fn report_line(request: &ConvertRequest, presenter: &mut dyn Presenter, event: LineEvent<'_>) {
    if !request.verbose {
        return;
    }

    let message = match event {
        LineEvent::Written { line, card } => format!(
            "Writing card #{}: {}{d}{}{d}{}",
            line,
            card.front(),
            card.back(),
            card.other(),
            d = request.delimiter
        ),
        LineEvent::Failed { error, .. } => format!("An error occurred: {}", error),
    };
    presenter.report(ReportKind::Info, &message);
}

/// Warning for an incomplete batch, then the success summary.
fn report_summary(request: &ConvertRequest, presenter: &mut dyn Presenter, report: &WriteReport) {
    if !report.is_complete() {
        presenter.report(ReportKind::Warning, "Could not write all flashcards...");
    }
    presenter.report(
        ReportKind::Success,
        &format!(
            "Wrote {} flashcards to: {}. The fields are `{}` separated.",
            report.written_count,
            request.output_path.display(),
            request.delimiter
        ),
    );
}

fn check_files(request: &ConvertRequest, presenter: &mut dyn Presenter) -> Result<(), ConvertError> {
    if !request.input_path.exists() {
        return Err(ConvertError::InputNotFound {
            path: request.input_path.clone(),
        });
    }

    if request.output_path.exists() && !request.overwrite {
        let prompt = format!(
            "{} already exists, do you want to overwrite?",
            request.output_path.display()
        );
        if !presenter.confirm(&prompt) {
            return Err(ConvertError::OverwriteDeclined {
                path: request.output_path.clone(),
            });
        }
    }

    Ok(())
}

fn read_input(request: &ConvertRequest) -> Result<String, ConvertError> {
    fs::read_to_string(&request.input_path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ConvertError::InputNotFound {
            path: request.input_path.clone(),
        },
        _ => ConvertError::InputUnreadable {
            path: request.input_path.clone(),
            source,
        },
    })
}
