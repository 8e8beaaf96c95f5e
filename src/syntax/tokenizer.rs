//! Claim-based tokenizer engine
//!
//! Applies the pattern registry to raw text and produces a flat token list
//! that partitions the input: every byte belongs to exactly one token, with
//! no gaps and no overlaps. The engine never fails — unrecognized text simply
//! falls through to the residual whitespace category in the gap-filling pass.
//!
//! Conflict resolution is "first claim wins": each rule scans the whole text
//! and a match is committed only if its span does not intersect any range
//! claimed by an earlier rule (or an earlier match of the same rule). Claims
//! are never split or merged. For extractor rules the claims are derived from
//! the returned tokens, committed atomically, which keeps the ordering
//! invariant auditable and lets a rule claim less than its full regex match.
//!
//! The claimed-range set is local to one `tokenize` call; nothing leaks
//! across calls or documents.

use super::registry::{registry, PatternRule};
use super::token::{Category, Token};

/// Sorted set of disjoint half-open byte ranges claimed during one call.
///
/// Insertion is checked against the invariant rather than merging: a claim
/// that would overlap an existing range is rejected by `is_free` before
/// `claim` is ever called.
#[derive(Debug, Default)]
struct ClaimedRanges {
    /// Disjoint ranges, sorted by start
    ranges: Vec<(usize, usize)>,
}

impl ClaimedRanges {
    fn new() -> Self {
        Self::default()
    }

    /// Whether `start..end` intersects no claimed range.
    fn is_free(&self, start: usize, end: usize) -> bool {
        // First range whose end is past `start`; only that one can collide.
        let idx = self.ranges.partition_point(|&(_, e)| e <= start);
        match self.ranges.get(idx) {
            Some(&(s, _)) => end <= s,
            None => true,
        }
    }

    /// Record `start..end` as claimed. Caller must have checked `is_free`.
    fn claim(&mut self, start: usize, end: usize) {
        let idx = self.ranges.partition_point(|&(s, _)| s < start);
        self.ranges.insert(idx, (start, end));
    }

    /// Uncovered intervals between claims, left to right, including the
    /// stretches before the first and after the last claim. With zero claims
    /// the whole text is one gap.
    fn gaps(&self, len: usize) -> Vec<(usize, usize)> {
        let mut gaps = Vec::new();
        let mut last_end = 0;
        for &(start, end) in &self.ranges {
            if start > last_end {
                gaps.push((last_end, start));
            }
            last_end = last_end.max(end);
        }
        if last_end < len {
            gaps.push((last_end, len));
        }
        gaps
    }
}

/// Tokenize source text into a position-ordered token list.
///
/// Accepts arbitrary text of any length; malformed syntax never causes an
/// error (worst case everything degrades to residual tokens). The returned
/// tokens, concatenated in order, reconstruct the input exactly. Repeated
/// calls on identical input yield structurally identical output.
///
/// Empty input yields an empty token list; the line segmenter still produces
/// one placeholder line group for it.
pub fn tokenize(text: &str) -> Vec<Token> {
    tokenize_with(text, registry())
}

/// `tokenize` against a caller-supplied rule list instead of the built-in
/// registry. Rule order is matching priority, highest first.
pub fn tokenize_with(text: &str, rules: &[PatternRule]) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut claimed = ClaimedRanges::new();

    for rule in rules {
        for caps in rule.regex.captures_iter(text) {
            let m = match caps.get(0) {
                Some(m) => m,
                None => continue,
            };

            if let Some(extractor) = rule.extractor {
                let emitted = extractor(&caps, text);
                if !emitted.is_empty() {
                    commit_extracted(&mut tokens, &mut claimed, emitted);
                    continue;
                }
                // Extractor declined; fall through to default emission.
            }

            if claimed.is_free(m.start(), m.end()) {
                claimed.claim(m.start(), m.end());
                tokens.push(Token::spanning(text, m.start(), m.end(), rule.category));
            }
        }
    }

    for (start, end) in claimed.gaps(text.len()) {
        tokens.push(Token::spanning(text, start, end, Category::Whitespace));
    }

    // Ranges are disjoint by construction, so start is a total order.
    tokens.sort_by_key(|t| t.start);
    tokens
}

/// Commit an extractor's tokens atomically: either every returned span is
/// free and all of them are claimed, or the whole match is skipped.
fn commit_extracted(tokens: &mut Vec<Token>, claimed: &mut ClaimedRanges, emitted: Vec<Token>) {
    if emitted.iter().all(|t| claimed.is_free(t.start, t.end)) {
        for token in &emitted {
            claimed.claim(token.start, token.end);
        }
        tokens.extend(emitted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reconstruct(tokens: &[Token]) -> String {
        tokens.iter().map(|t| t.value.as_str()).collect()
    }

    #[test]
    fn test_empty_input_yields_no_tokens() {
        assert_eq!(tokenize(""), vec![]);
    }

    #[test]
    fn test_partition_of_simple_statement() {
        let text = "const x = 42;";
        let tokens = tokenize(text);
        assert_eq!(reconstruct(&tokens), text);
        for pair in tokens.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert_eq!(tokens.first().unwrap().start, 0);
        assert_eq!(tokens.last().unwrap().end, text.len());
    }

    #[test]
    fn test_keyword_inside_string_stays_one_string_token() {
        let text = r#"const s = "return true";"#;
        let tokens = tokenize(text);
        let string_token = tokens
            .iter()
            .find(|t| t.category == Category::String)
            .unwrap();
        assert_eq!(string_token.value, r#""return true""#);
        // Nothing inside the quotes was re-tokenized as a keyword.
        let keywords: Vec<_> = tokens
            .iter()
            .filter(|t| t.category == Category::Keyword)
            .collect();
        assert_eq!(keywords.len(), 1);
        assert_eq!(keywords[0].value, "const");
    }

    #[test]
    fn test_keyword_inside_comment_is_protected() {
        let text = "// return something\nlet a;";
        let tokens = tokenize(text);
        assert_eq!(tokens[0].category, Category::Comment);
        assert_eq!(tokens[0].value, "// return something\n");
        let keywords: Vec<_> = tokens
            .iter()
            .filter(|t| t.category == Category::Keyword)
            .map(|t| t.value.as_str())
            .collect();
        assert_eq!(keywords, vec!["let"]);
    }

    #[test]
    fn test_type_declaration_decomposition() {
        let tokens = tokenize("type Foo = string");
        assert_eq!(tokens[0].value, "type");
        assert_eq!(tokens[0].category, Category::Keyword);
        assert_eq!(tokens[1].category, Category::Whitespace);
        assert_eq!(tokens[2].value, "Foo");
        assert_eq!(tokens[2].category, Category::TypeName);
    }

    #[test]
    fn test_function_call_name() {
        let tokens = tokenize("render(state)");
        assert_eq!(tokens[0].value, "render");
        assert_eq!(tokens[0].category, Category::Function);
        assert_eq!(tokens[1].value, "(");
        assert_eq!(tokens[1].category, Category::Punctuation);
    }

    #[test]
    fn test_number_literals() {
        let tokens = tokenize("1 2.5 3e10");
        let numbers: Vec<_> = tokens
            .iter()
            .filter(|t| t.category == Category::Number)
            .map(|t| t.value.as_str())
            .collect();
        assert_eq!(numbers, vec!["1", "2.5", "3e10"]);
    }

    #[test]
    fn test_markup_tag() {
        let tokens = tokenize("<Button />");
        assert_eq!(tokens[0].category, Category::Tag);
        assert!(tokens[0].value.starts_with("<Button"));
    }

    #[test]
    fn test_line_numbers_follow_newlines() {
        let text = "let a;\nlet b;";
        let tokens = tokenize(text);
        let first = tokens.iter().find(|t| t.value == "a").unwrap();
        let second = tokens.iter().find(|t| t.value == "b").unwrap();
        assert_eq!(first.line, 1);
        assert_eq!(second.line, 2);
    }

    #[test]
    fn test_blank_lines_fold_into_one_residual_token() {
        // Gap filling emits one token per gap, so a run of blank lines stays
        // a single multi-line whitespace token until the segmenter splits it.
        let text = "a\n\n\nb";
        let tokens = tokenize(text);
        let ws: Vec<_> = tokens.iter().filter(|t| t.is_whitespace()).collect();
        assert_eq!(ws.len(), 1);
        assert_eq!(ws[0].value, "\n\n\n");
    }

    #[test]
    fn test_unrecognized_text_degrades_to_residual() {
        let text = "@#$ §§";
        let tokens = tokenize(text);
        assert_eq!(reconstruct(&tokens), text);
        assert!(tokens.iter().any(|t| t.is_whitespace()));
    }

    #[test]
    fn test_idempotence() {
        let text = "const f = (x: number) => x * 2; // double\n";
        assert_eq!(tokenize(text), tokenize(text));
    }

    mod claimed_ranges {
        use super::super::ClaimedRanges;

        #[test]
        fn test_overlap_detection() {
            let mut claimed = ClaimedRanges::new();
            claimed.claim(5, 10);
            assert!(claimed.is_free(0, 5));
            assert!(claimed.is_free(10, 12));
            assert!(!claimed.is_free(4, 6));
            assert!(!claimed.is_free(6, 8));
            assert!(!claimed.is_free(9, 11));
            assert!(!claimed.is_free(0, 20));
        }

        #[test]
        fn test_insertion_keeps_sort_order() {
            let mut claimed = ClaimedRanges::new();
            claimed.claim(10, 12);
            claimed.claim(0, 2);
            claimed.claim(5, 7);
            assert_eq!(claimed.ranges, vec![(0, 2), (5, 7), (10, 12)]);
        }

        #[test]
        fn test_gaps_cover_ends_and_middles() {
            let mut claimed = ClaimedRanges::new();
            claimed.claim(2, 4);
            claimed.claim(6, 8);
            assert_eq!(claimed.gaps(10), vec![(0, 2), (4, 6), (8, 10)]);
        }

        #[test]
        fn test_gaps_with_no_claims_is_whole_text() {
            let claimed = ClaimedRanges::new();
            assert_eq!(claimed.gaps(5), vec![(0, 5)]);
            assert_eq!(claimed.gaps(0), vec![]);
        }
    }
}
