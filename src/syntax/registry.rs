//! Pattern registry for the tokenizer
//!
//! The registry is a fixed, ordered list of lexical rules. Order is the
//! conflict-resolution mechanism: rules run in sequence and a span claimed by
//! an earlier rule is immutable for every later rule. Comments and string
//! literals therefore come first, so nothing inside them is reinterpreted as
//! code, and the generic identifier rule comes last as the catch-all.
//!
//! A rule either emits one token per regex match (the standard case) or
//! carries an [`Extractor`] that decomposes a single match into several
//! adjacent tokens (e.g. `interface Foo` becoming keyword + whitespace +
//! type name). Extractors return their own token list; they never touch
//! engine state. The engine derives claimed ranges from the returned tokens,
//! which is also how the function-call rule works without lookahead: its
//! regex consumes the trailing `(` but the extractor only returns the
//! identifier, leaving the parenthesis for the punctuation rule.
//!
//! All built-in patterns are compiled once into a `Lazy` static.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::fmt;

use super::token::{line_of, Category, Token};

/// Multi-token decomposition hook for a single regex match.
///
/// Receives the match captures and the full source text (for offset and line
/// computation) and returns the tokens it produced, in source order. An empty
/// return means the extractor declined the match and the engine falls back to
/// default single-token emission.
pub type Extractor = fn(&Captures<'_>, &str) -> Vec<Token>;

/// Error type for pattern registry operations
#[derive(Debug, Clone, PartialEq)]
pub enum PatternError {
    /// Invalid regex pattern
    InvalidPattern(String),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::InvalidPattern(msg) => write!(f, "Invalid pattern: {}", msg),
        }
    }
}

impl std::error::Error for PatternError {}

/// One lexical rule: a matcher, the category it emits, and an optional
/// multi-token extractor. Priority is positional (registry order).
pub struct PatternRule {
    pub regex: Regex,
    pub category: Category,
    pub extractor: Option<Extractor>,
}

impl PatternRule {
    /// Create a plain single-token rule.
    pub fn new(pattern: &str, category: Category) -> Result<Self, PatternError> {
        let regex =
            Regex::new(pattern).map_err(|e| PatternError::InvalidPattern(e.to_string()))?;
        Ok(Self {
            regex,
            category,
            extractor: None,
        })
    }

    /// Create a rule that delegates each match to `extractor`.
    pub fn with_extractor(
        pattern: &str,
        category: Category,
        extractor: Extractor,
    ) -> Result<Self, PatternError> {
        let mut rule = Self::new(pattern, category)?;
        rule.extractor = Some(extractor);
        Ok(rule)
    }
}

/// Reserved keywords, matched as whole words.
pub const KEYWORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "import", "in", "instanceof", "new", "null", "return", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield", "let", "static",
    "interface", "package", "private", "protected", "public", "implements", "as", "async", "from",
];

/// Extractor for `type NAME` / `interface NAME` declarations.
///
/// Emits the keyword, the separating whitespace, and the declared name as a
/// [`Category::TypeName`] token, so the name is not swallowed by the generic
/// identifier rule.
fn extract_type_declaration(caps: &Captures<'_>, text: &str) -> Vec<Token> {
    let keyword = match caps.get(1) {
        Some(m) => m,
        None => return Vec::new(),
    };
    let name = match caps.get(2) {
        Some(m) => m,
        None => return Vec::new(),
    };

    let mut tokens = vec![Token::spanning(
        text,
        keyword.start(),
        keyword.end(),
        Category::Keyword,
    )];
    if name.start() > keyword.end() {
        tokens.push(Token::spanning(
            text,
            keyword.end(),
            name.start(),
            Category::Whitespace,
        ));
    }
    tokens.push(Token::spanning(
        text,
        name.start(),
        name.end(),
        Category::TypeName,
    ));
    tokens
}

/// Extractor for `: TYPE` annotation spans.
///
/// Emits the colon as punctuation, any separating whitespace, and the type
/// expression as a [`Category::TypeAnnotation`] token.
fn extract_type_annotation(caps: &Captures<'_>, text: &str) -> Vec<Token> {
    let full = match caps.get(0) {
        Some(m) => m,
        None => return Vec::new(),
    };
    let ty = match caps.get(1) {
        Some(m) => m,
        None => return Vec::new(),
    };

    let colon = full.start();
    let mut tokens = vec![Token {
        value: ":".to_string(),
        category: Category::Punctuation,
        start: colon,
        end: colon + 1,
        line: line_of(text, colon),
    }];
    if ty.start() > colon + 1 {
        tokens.push(Token::spanning(
            text,
            colon + 1,
            ty.start(),
            Category::Whitespace,
        ));
    }
    tokens.push(Token::spanning(
        text,
        ty.start(),
        ty.end(),
        Category::TypeAnnotation,
    ));
    tokens
}

/// Extractor for function-call names.
///
/// The rule's regex consumes `name(` so that no lookahead is needed, but only
/// the identifier is emitted (and therefore claimed); the parenthesis stays
/// free for the punctuation rule — which has already run and usually owns it.
fn extract_function_name(caps: &Captures<'_>, text: &str) -> Vec<Token> {
    match caps.get(1) {
        Some(name) => vec![Token::spanning(
            text,
            name.start(),
            name.end(),
            Category::Function,
        )],
        None => Vec::new(),
    }
}

static REGISTRY: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    let keyword_pattern = format!(r"\b(?:{})\b", KEYWORDS.join("|"));
    vec![
        // Comments first so nothing inside them is reinterpreted as code
        PatternRule::new(r"//.*?(?:\n|$)|/\*(?s:.)*?\*/", Category::Comment).unwrap(),
        // Quoted literals next, for the same reason. One alternation per
        // quote character; the regex crate has no backreferences.
        PatternRule::new(
            r#""(?:\\(?:\r\n|(?s:.))|[^"\\\r\n])*"|'(?:\\(?:\r\n|(?s:.))|[^'\\\r\n])*'|`(?:\\(?:\r\n|(?s:.))|[^`\\\r\n])*`"#,
            Category::String,
        )
        .unwrap(),
        PatternRule::with_extractor(
            r"\b(interface|type)\s+([A-Za-z_][A-Za-z0-9_]*)",
            Category::TypeName,
            extract_type_declaration,
        )
        .unwrap(),
        PatternRule::with_extractor(
            r":\s*([A-Za-z_][A-Za-z0-9_<>\[\]{}|&,\s]*)\b",
            Category::TypeAnnotation,
            extract_type_annotation,
        )
        .unwrap(),
        PatternRule::new(r"\b\d+(?:\.\d+)?(?:[eE][+-]?\d+)?\b", Category::Number).unwrap(),
        PatternRule::new(r"</?[A-Za-z][a-zA-Z0-9]*(?:\s|/?>|$)", Category::Tag).unwrap(),
        PatternRule::new(&keyword_pattern, Category::Keyword).unwrap(),
        PatternRule::new(r"[{}\[\]();,.:]", Category::Punctuation).unwrap(),
        PatternRule::new(r"[+\-*/%=&|^~<>!?]+", Category::Operator).unwrap(),
        PatternRule::with_extractor(
            r"\b([A-Za-z_][A-Za-z0-9_]*)\s*\(",
            Category::Function,
            extract_function_name,
        )
        .unwrap(),
        // Catch-all identifier rule, lowest priority
        PatternRule::new(r"\b[a-zA-Z_][a-zA-Z0-9_]*\b", Category::Variable).unwrap(),
    ]
});

/// The built-in rule list, in priority order (highest first).
pub fn registry() -> &'static [PatternRule] {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_extractor(rule_pattern: &str, extractor: Extractor, text: &str) -> Vec<Token> {
        let regex = Regex::new(rule_pattern).unwrap();
        let caps = regex.captures(text).expect("pattern should match");
        extractor(&caps, text)
    }

    #[test]
    fn test_registry_order_starts_with_comments_and_strings() {
        let rules = registry();
        assert_eq!(rules[0].category, Category::Comment);
        assert_eq!(rules[1].category, Category::String);
        assert_eq!(rules.last().unwrap().category, Category::Variable);
    }

    #[test]
    fn test_type_declaration_extractor_shape() {
        let tokens = run_extractor(
            r"\b(interface|type)\s+([A-Za-z_][A-Za-z0-9_]*)",
            extract_type_declaration,
            "type Foo = string",
        );
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].value, "type");
        assert_eq!(tokens[0].category, Category::Keyword);
        assert_eq!(tokens[1].category, Category::Whitespace);
        assert_eq!(tokens[2].value, "Foo");
        assert_eq!(tokens[2].category, Category::TypeName);
        // adjacency: the three tokens cover the match without gaps
        assert_eq!(tokens[0].end, tokens[1].start);
        assert_eq!(tokens[1].end, tokens[2].start);
    }

    #[test]
    fn test_type_annotation_extractor_shape() {
        let tokens = run_extractor(
            r":\s*([A-Za-z_][A-Za-z0-9_<>\[\]{}|&,\s]*)\b",
            extract_type_annotation,
            "name: string",
        );
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].value, ":");
        assert_eq!(tokens[0].category, Category::Punctuation);
        assert_eq!(tokens[1].value, " ");
        assert_eq!(tokens[2].value, "string");
        assert_eq!(tokens[2].category, Category::TypeAnnotation);
    }

    #[test]
    fn test_type_annotation_without_space_skips_whitespace_token() {
        let tokens = run_extractor(
            r":\s*([A-Za-z_][A-Za-z0-9_<>\[\]{}|&,\s]*)\b",
            extract_type_annotation,
            "name:string",
        );
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].value, ":");
        assert_eq!(tokens[1].value, "string");
    }

    #[test]
    fn test_function_extractor_claims_only_the_name() {
        let tokens = run_extractor(
            r"\b([A-Za-z_][A-Za-z0-9_]*)\s*\(",
            extract_function_name,
            "doWork (x)",
        );
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].value, "doWork");
        assert_eq!(tokens[0].category, Category::Function);
        assert_eq!(tokens[0].end, 6);
    }

    #[test]
    fn test_keyword_pattern_is_word_bounded() {
        let rules = registry();
        let keyword_rule = rules
            .iter()
            .find(|r| r.category == Category::Keyword)
            .unwrap();
        assert!(keyword_rule.regex.is_match("return"));
        // "returned" must not match as the keyword "return"
        let m = keyword_rule.regex.find("returned");
        assert!(m.is_none());
    }

    #[test]
    fn test_invalid_custom_pattern() {
        let result = PatternRule::new("(unclosed", Category::Variable);
        assert!(matches!(result, Err(PatternError::InvalidPattern(_))));
    }
}
