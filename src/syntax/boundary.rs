//! Presentation boundary helpers
//!
//! The tokenizer and segmenter never fail on string input, but the boundary
//! to a presentation layer still needs two things: the composed pipeline in
//! one call, and a degraded path that preserves the output shape when the
//! engine is unavailable or an advisory grammar check complains.
//!
//! Grammar validation is advisory, never load-bearing: a failing check is
//! logged as a non-fatal warning and tokenization proceeds regardless.

use tracing::warn;

use super::segmenter::to_lines;
use super::token::{Category, Token};
use super::tokenizer::tokenize;

/// Advisory grammar check run before tokenization. Purely informational.
pub type GrammarCheck = fn(&str) -> Result<(), String>;

/// Tokenize and segment in one call: `to_lines(tokenize(text), text)`.
pub fn highlight_lines(text: &str) -> Vec<Vec<Token>> {
    to_lines(&tokenize(text), text)
}

/// [`highlight_lines`] with an advisory grammar check in front. A check
/// failure is logged and otherwise ignored.
pub fn highlight_lines_checked(text: &str, check: GrammarCheck) -> Vec<Vec<Token>> {
    if let Err(message) = check(text) {
        warn!(%message, "grammar check failed (non-fatal), tokenizing anyway");
    }
    highlight_lines(text)
}

/// Degraded rendering path: each raw source line wrapped as one
/// variable-category token, matching the shape of [`highlight_lines`] output
/// so renderers need no second code path.
pub fn fallback_lines(text: &str) -> Vec<Vec<Token>> {
    text.split('\n')
        .enumerate()
        .map(|(index, line)| {
            vec![Token {
                value: line.to_string(),
                category: Category::Variable,
                start: 0,
                end: line.len(),
                line: index + 1,
            }]
        })
        .collect()
}
