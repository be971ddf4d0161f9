//! Delimited output for parsed cards.
//!
//! One line per card, `front<d>back<d>other\n`, no header and no quoting of
//! delimiters that occur inside a field.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::error::WriteError;
use crate::types::{Card, WriteReport};

/// Format a card as a single output line, including the trailing newline.
pub fn format_line(card: &Card, delimiter: &str) -> String {
    format!(
        "{}{d}{}{d}{}\n",
        card.front(),
        card.back(),
        card.other(),
        d = delimiter
    )
}

/// Progress of a single card line, handed to the `write` observer.
#[derive(Debug)]
pub enum LineEvent<'a> {
    /// `line` is the 1-based number of the line in the output.
    Written { line: usize, card: &'a Card },
    /// `index` is the 1-based position of the card in the input.
    Failed { index: usize, error: &'a io::Error },
}

/// Write every card to `sink`, skipping cards whose line fails.
///
/// A line the sink rejected partway through is closed with a newline so the
/// fragment never runs into the next record; it is not counted as written.
pub fn write<W, F>(cards: &[Card], delimiter: &str, sink: &mut W, mut on_event: F) -> WriteReport
where
    W: Write,
    F: FnMut(LineEvent<'_>),
{
    let mut written_count = 0;

    for (idx, card) in cards.iter().enumerate() {
        let line = format_line(card, delimiter);
        match write_line(sink, line.as_bytes()) {
            Ok(()) => {
                written_count += 1;
                on_event(LineEvent::Written {
                    line: written_count,
                    card,
                });
            }
            Err((accepted, err)) => {
                tracing::warn!("could not write card #{}: {}", idx + 1, err);
                if accepted > 0 {
                    if let Err(err) = sink.write_all(b"\n") {
                        tracing::warn!("could not terminate partial line: {}", err);
                    }
                }
                on_event(LineEvent::Failed {
                    index: idx + 1,
                    error: &err,
                });
            }
        }
    }

    if let Err(err) = sink.flush() {
        tracing::warn!("could not flush output: {}", err);
    }

    WriteReport {
        written_count,
        expected_count: cards.len(),
    }
}

/// Like `write_all`, but reports how many bytes the sink accepted before failing.
fn write_line<W: Write>(sink: &mut W, mut buf: &[u8]) -> Result<(), (usize, io::Error)> {
    let mut accepted = 0;
    while !buf.is_empty() {
        match sink.write(buf) {
            Ok(0) => {
                return Err((
                    accepted,
                    io::Error::new(io::ErrorKind::WriteZero, "failed to write whole line"),
                ))
            }
            Ok(n) => {
                accepted += n;
                buf = &buf[n..];
            }
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err((accepted, err)),
        }
    }
    Ok(())
}

/// Create (or truncate) `path` and write every card to it.
pub fn write_to_path<F>(
    cards: &[Card],
    delimiter: &str,
    path: &Path,
    on_event: F,
) -> Result<WriteReport, WriteError>
where
    F: FnMut(LineEvent<'_>),
{
    let mut file = File::create(path).map_err(|source| WriteError::SinkUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("opened {} for writing", path.display());

    Ok(write(cards, delimiter, &mut file, on_event))
}
