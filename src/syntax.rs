//! Syntax highlighting engine
//!
//! This module orchestrates the complete highlighting pipeline:
//! 1. The pattern registry supplies an ordered list of lexical rules.
//! 2. The tokenizer applies them with first-claim-wins conflict resolution
//!    and gap-fills anything left over, so every byte of input ends up in
//!    exactly one token.
//! 3. The line segmenter re-partitions the flat token stream into per-line
//!    groups for line-oriented rendering.
//!
//! The tab/selection state machine is orthogonal: it only gates which
//! document's line groups a multi-document viewer exposes.
//!
//! Tokenizer and segmenter are pure functions, cheap enough to re-run on
//! every input change; there is no caching and no shared state between
//! calls.

pub mod boundary;
pub mod registry;
pub mod segmenter;
pub mod style;
pub mod tabs;
pub mod token;
pub mod tokenizer;

pub use boundary::{fallback_lines, highlight_lines, highlight_lines_checked};
pub use registry::{registry, Extractor, PatternError, PatternRule, KEYWORDS};
pub use segmenter::{split_multiline, to_lines};
pub use style::style_class;
pub use tabs::{TabDescriptor, TabSelection};
pub use token::{Category, Token};
pub use tokenizer::{tokenize, tokenize_with};
