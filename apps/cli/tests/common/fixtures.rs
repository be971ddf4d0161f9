//! Test fixtures and factory functions for markdown input.

use std::path::PathBuf;

use uuid::Uuid;

/// Generate markdown with `num_cards` well-formed card blocks.
///
/// # Arguments
/// * `num_cards` - Number of cards to generate
/// * `inline` - Whether to put each card on a single line
pub fn sample_md_content(num_cards: usize, inline: bool) -> String {
    (0..num_cards)
        .map(|i| {
            let n = i + 1;
            if inline {
                format!("Some notes about topic {n}.\n!--! Question {n}? ++ Answer {n}. ++ topic {n} !--!\n")
            } else {
                format!("## Topic {n}\n\n!--!\nQuestion {n}?\n++\nAnswer {n}.\n++\ntopic {n}\n!--!\n")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Expected output lines for `sample_md_content` with the given delimiter.
pub fn sample_output(num_cards: usize, delimiter: &str) -> String {
    (0..num_cards)
        .map(|i| {
            let n = i + 1;
            format!("Question {n}?{delimiter}Answer {n}.{delimiter}topic {n}\n")
        })
        .collect()
}

/// Generate a unique path in the system temp directory.
pub fn unique_temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "md-flashcards-{}-{}",
        &Uuid::new_v4().to_string()[..8],
        name
    ))
}
