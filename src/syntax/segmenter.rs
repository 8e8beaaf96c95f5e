//! Line segmenter
//!
//! Rendering is line-oriented, but tokens may span or abut line boundaries.
//! This module re-partitions the flat, position-ordered token stream into one
//! group per source line, splitting multi-line tokens along the way.
//!
//! Post-conditions, required by every renderer:
//! - the outer vector has exactly `text.split('\n').count()` groups (a
//!   trailing newline yields a trailing empty line, ordinary split semantics);
//! - every group holds at least one token, so a fully blank line still gets a
//!   zero-width whitespace placeholder;
//! - each group is sorted by `start`.

use super::token::{Category, Token};

/// Re-partition a token stream into per-line groups.
///
/// `tokens` is expected to come from `tokenize(text)` in start order; tokens
/// whose line falls outside the text are dropped defensively rather than
/// panicking.
pub fn to_lines(tokens: &[Token], text: &str) -> Vec<Vec<Token>> {
    let total_lines = text.split('\n').count();
    let mut groups: Vec<Vec<Token>> = (0..total_lines).map(|_| Vec::new()).collect();

    for token in tokens {
        if token.is_multiline() {
            for piece in split_multiline(token) {
                let line = piece.line;
                if let Some(group) = groups.get_mut(line - 1) {
                    group.push(piece);
                }
            }
        } else if token.line >= 1 && token.line <= groups.len() {
            groups[token.line - 1].push(token.clone());
        }
    }

    for (index, group) in groups.iter_mut().enumerate() {
        if group.is_empty() {
            group.push(Token::blank_line_placeholder(index + 1));
        }
        // Extractor tokens can interleave with gap-filled ones inside a line.
        group.sort_by_key(|t| t.start);
    }

    groups
}

/// Split a token whose `value` crosses line boundaries into one token per
/// line, recomputing offsets and line numbers.
///
/// Each non-final piece keeps the consumed newline in its `value` (offsets
/// advance by piece length + 1); an empty piece before a consumed newline
/// becomes a one-character whitespace token for that newline, so the line
/// still receives a placeholder. A trailing empty piece emits nothing — the
/// post-pass in [`to_lines`] fills that line if nothing else lands on it.
pub fn split_multiline(token: &Token) -> Vec<Token> {
    let pieces: Vec<&str> = token.value.split('\n').collect();
    let last = pieces.len() - 1;
    let mut line = token.line;
    let mut pos = token.start;
    let mut out = Vec::new();

    for (i, piece) in pieces.iter().enumerate() {
        if !piece.is_empty() {
            let keeps_newline = i < last;
            out.push(Token {
                value: if keeps_newline {
                    format!("{}\n", piece)
                } else {
                    (*piece).to_string()
                },
                category: token.category,
                start: pos,
                end: pos + piece.len() + usize::from(keeps_newline),
                line,
            });
        } else if i < last {
            out.push(Token {
                value: "\n".to_string(),
                category: Category::Whitespace,
                start: pos,
                end: pos + 1,
                line,
            });
        }

        if i < last {
            pos += piece.len() + 1;
            line += 1;
        }
    }

    out
}
