//! Core token types for the highlighting engine
//!
//! A token is a classified, position-tagged substring of source text. The
//! tokenizer guarantees that the tokens produced for one input, sorted by
//! `start`, partition the whole text with no gaps and no overlaps. Tokens
//! synthesized by the line segmenter (newline placeholders, blank-line
//! fillers) are the only ones whose `value` is not a direct slice of the
//! source.

use std::fmt;

/// Lexical classification of a token.
///
/// The set is closed from the engine's point of view but marked
/// `#[non_exhaustive]` so downstream consumers (style mappers, renderers)
/// must keep a default arm and stay compatible when a category is added.
///
/// Declaration order encodes nothing; matching priority lives in the pattern
/// registry, not here.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Category {
    /// Line or block comment
    Comment,
    /// Quoted literal, delimiters included
    String,
    /// Name introduced by a `type`/`interface` declaration
    TypeName,
    /// Type in a `: Type` annotation position
    TypeAnnotation,
    /// Numeric literal
    Number,
    /// Markup-style tag open/close (`<Name`, `</Name>`)
    Tag,
    /// Reserved keyword
    Keyword,
    /// Single structural character
    Punctuation,
    /// Run of symbol characters
    Operator,
    /// Identifier immediately followed by a call
    Function,
    /// Generic identifier
    Variable,
    /// Whitespace and any residual text no rule claimed
    Whitespace,
}

impl Category {
    /// Stable lowercase name, used for display and the style-class table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Comment => "comment",
            Category::String => "string",
            Category::TypeName => "type-name",
            Category::TypeAnnotation => "type-annotation",
            Category::Number => "number",
            Category::Tag => "tag",
            Category::Keyword => "keyword",
            Category::Punctuation => "punctuation",
            Category::Operator => "operator",
            Category::Function => "function",
            Category::Variable => "variable",
            Category::Whitespace => "whitespace",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified substring of source text.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Token {
    /// The text of the token
    pub value: String,
    /// Lexical classification
    pub category: Category,
    /// Byte offset of the first character in the source
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    /// 1-based line number of `start`
    pub line: usize,
}

impl Token {
    /// Build a token covering `start..end` of `text`, computing `value`
    /// and `line` from the source. `start..end` must lie on char boundaries
    /// (regex match offsets always do).
    pub fn spanning(text: &str, start: usize, end: usize, category: Category) -> Token {
        Token {
            value: text[start..end].to_string(),
            category,
            start,
            end,
            line: line_of(text, start),
        }
    }

    /// Zero-width whitespace placeholder for an otherwise empty line.
    pub fn blank_line_placeholder(line: usize) -> Token {
        Token {
            value: String::new(),
            category: Category::Whitespace,
            start: 0,
            end: 0,
            line,
        }
    }

    /// Whether the token's text crosses a line boundary.
    pub fn is_multiline(&self) -> bool {
        self.value.contains('\n')
    }

    pub fn is_whitespace(&self) -> bool {
        self.category == Category::Whitespace
    }
}

/// 1-based line number of byte offset `start` in `text`.
pub fn line_of(text: &str, start: usize) -> usize {
    1 + text.as_bytes()[..start].iter().filter(|&&b| b == b'\n').count()
}
