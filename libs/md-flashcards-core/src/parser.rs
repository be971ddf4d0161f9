//! Markdown parser for flashcard blocks.
//!
//! # Format
//! ```markdown
//! Some notes that are not part of a card.
//!
//! !--!
//! What is Rust?
//! ++
//! A systems programming language.
//! ++
//! chapter 1
//! !--!
//! ```
//!
//! Text is split on `!--!` and every odd segment is a card body, so an
//! unmatched trailing marker still starts a card that runs to the end of the
//! document. Each body must split on `++` into exactly three fields.

use crate::error::{ParseError, Result};
use crate::types::Card;

/// Marks the start and end of a card block.
pub const CARD_MARKER: &str = "!--!";

/// Separates front, back and other inside a card block.
pub const FIELD_SEPARATOR: &str = "++";

const FIELDS_PER_CARD: usize = 3;

/// Candidate card bodies in document order, untrimmed.
pub fn candidates(text: &str) -> Vec<&str> {
    text.split(CARD_MARKER)
        .enumerate()
        .filter(|(idx, _)| idx % 2 == 1)
        .map(|(_, segment)| segment)
        .collect()
}

/// Parse a whole document into cards.
pub fn extract(text: &str) -> Result<Vec<Card>> {
    let bodies = candidates(text);
    tracing::debug!("found {} possible cards", bodies.len());

    if bodies.is_empty() {
        return Err(ParseError::NoCardsFound);
    }

    let cards = bodies
        .into_iter()
        .enumerate()
        .map(|(idx, body)| parse_card(body, idx + 1))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!("found {} flashcards", cards.len());
    Ok(cards)
}

fn parse_card(body: &str, index: usize) -> Result<Card> {
    let fields: Vec<&str> = body.split(FIELD_SEPARATOR).collect();

    match fields.as_slice() {
        [front, back, other] => Ok(Card::from_fields(front, back, other)),
        _ => Err(ParseError::MalformedCard {
            index,
            fields: fields.len(),
        }),
    }
}
