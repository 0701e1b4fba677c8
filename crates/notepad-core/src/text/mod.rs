//! Stateless text utilities.
//!
//! - **stats**: character/word/sentence/paragraph/line counts, reading time
//! - **patterns**: URL, email, phone, hashtag, mention and date extraction
//! - **search**: search with line/context reporting, and replace
//! - **format**: case conversion, whitespace cleanup, line sorting/dedup, reversal
//!
//! Positions and lengths are counted in chars (Unicode scalar values).

pub mod format;
pub mod patterns;
pub mod search;
pub mod stats;

pub use format::{format_text, FormattingOptions, FormattingResult};
pub use patterns::{detect_patterns, TextDetection};
pub use search::{
    replace, search, ReplaceOptions, ReplaceResult, SearchMatch, SearchOptions, SearchResult,
};
pub use stats::{text_stats, TextStats};

use regex::Regex;

/// Split `text` on `pattern`, dropping trailing empty pieces.
///
/// Text without any match comes back whole, so `""` yields `[""]` while
/// `"\n"` split on newlines yields nothing.
pub(crate) fn split_trimmed<'a>(pattern: &Regex, text: &'a str) -> Vec<&'a str> {
    if !pattern.is_match(text) {
        return vec![text];
    }
    let mut pieces: Vec<&str> = pattern.split(text).collect();
    while pieces.last().is_some_and(|piece| piece.is_empty()) {
        pieces.pop();
    }
    pieces
}

/// Lines of `text`, split on `\n` with trailing empty lines dropped.
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    if !text.contains('\n') {
        return vec![text];
    }
    let mut lines: Vec<&str> = text.split('\n').collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_edge_cases() {
        assert_eq!(split_lines(""), vec![""]);
        assert_eq!(split_lines("a"), vec!["a"]);
        assert_eq!(split_lines("a\n"), vec!["a"]);
        assert_eq!(split_lines("a\n\nb\n\n"), vec!["a", "", "b"]);
        assert!(split_lines("\n").is_empty());
        assert!(split_lines("\n\n\n").is_empty());
    }

    #[test]
    fn test_split_trimmed_keeps_unmatched_text_whole() {
        let pattern = Regex::new(r"[.!?]+").unwrap();
        assert_eq!(split_trimmed(&pattern, "no punctuation"), vec!["no punctuation"]);
        assert_eq!(split_trimmed(&pattern, "One. Two!"), vec!["One", " Two"]);
        assert!(split_trimmed(&pattern, "...").is_empty());
    }
}
