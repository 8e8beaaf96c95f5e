//! # synlight
//!
//! A source-code tokenizer and line segmentation engine for syntax
//! highlighting viewers.
//!
//! The engine scans arbitrary source text against an ordered set of pattern
//! rules, assigns every character to exactly one token, and regroups the
//! token stream per line for rendering. A small selection state machine
//! supports tabbed multi-document viewers. Rendering itself (colors, layout,
//! scrolling) is left to the consumer.

pub mod syntax;

pub use syntax::{
    fallback_lines, highlight_lines, to_lines, tokenize, Category, TabSelection, Token,
};
