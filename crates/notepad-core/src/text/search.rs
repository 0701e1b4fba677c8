//! Search and replace over text.
//!
//! Terms are literal unless `is_regex` is set. Match offsets are char
//! indices, so they stay meaningful for multi-byte text.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::split_lines;
use crate::error::{NotepadError, Result};

/// Chars of context shown on each side of a match by default.
pub const DEFAULT_CONTEXT_CHARS: usize = 30;

/// Options for [`search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    pub case_sensitive: bool,
    pub is_regex: bool,
    pub context_chars: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            is_regex: false,
            context_chars: DEFAULT_CONTEXT_CHARS,
        }
    }
}

/// Options for [`replace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReplaceOptions {
    pub replace_all: bool,
    pub case_sensitive: bool,
    pub is_regex: bool,
}

/// One match found by [`search`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMatch {
    pub start: usize,
    pub end: usize,
    pub line_number: usize,
    pub matched_text: String,
    pub context: String,
}

/// Result of [`search`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub matches: Vec<SearchMatch>,
    pub match_count: usize,
    pub search_term: String,
    pub case_sensitive: bool,
    pub is_regex: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of [`replace`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceResult {
    pub result_text: String,
    pub replacement_count: usize,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Find every match of `term` in `text`.
///
/// An invalid regex yields an empty match list with `error` set.
pub fn search(text: &str, term: &str, options: &SearchOptions) -> SearchResult {
    let (matches, error) = match find_matches(text, term, options) {
        Ok(matches) => (matches, None),
        Err(err) => (Vec::new(), Some(err.to_string())),
    };
    debug!(matches = matches.len(), is_regex = options.is_regex, "search");

    SearchResult {
        match_count: matches.len(),
        matches,
        search_term: term.to_string(),
        case_sensitive: options.case_sensitive,
        is_regex: options.is_regex,
        error,
    }
}

/// Replace the first match, or all matches, of `term` in `text`.
///
/// `replacement` uses the same grammar in literal and regex mode: `$n` and
/// `${name}` insert a capture group, `\c` inserts `c` literally. A reference
/// to a missing group fails once a match needs it. On failure the original
/// text comes back with `success: false`.
pub fn replace(text: &str, term: &str, replacement: &str, options: &ReplaceOptions) -> ReplaceResult {
    match try_replace(text, term, replacement, options) {
        Ok((result_text, replacement_count)) => ReplaceResult {
            result_text,
            replacement_count,
            success: true,
            error: None,
        },
        Err(err) => ReplaceResult {
            result_text: text.to_string(),
            replacement_count: 0,
            success: false,
            error: Some(err.to_string()),
        },
    }
}

/// Compile `term`. Literal terms fold ASCII letters only; regex terms use
/// the regex engine's case folding.
fn build_pattern(term: &str, case_sensitive: bool, is_regex: bool) -> Result<Regex> {
    if is_regex {
        return Ok(RegexBuilder::new(term)
            .case_insensitive(!case_sensitive)
            .build()?);
    }
    let source = if case_sensitive {
        regex::escape(term)
    } else {
        ascii_fold(term)
    };
    Ok(Regex::new(&source)?)
}

/// Escaped pattern for `term` where each ASCII letter matches either case.
fn ascii_fold(term: &str) -> String {
    let mut source = String::with_capacity(term.len() * 4);
    let mut buf = [0u8; 4];
    for c in term.chars() {
        if c.is_ascii_alphabetic() {
            source.push('[');
            source.push(c.to_ascii_lowercase());
            source.push(c.to_ascii_uppercase());
            source.push(']');
        } else {
            source.push_str(&regex::escape(c.encode_utf8(&mut buf)));
        }
    }
    source
}

fn find_matches(text: &str, term: &str, options: &SearchOptions) -> Result<Vec<SearchMatch>> {
    let pattern = build_pattern(term, options.case_sensitive, options.is_regex)?;
    let index = CharIndex::new(text);
    let line_lengths: Vec<usize> = split_lines(text)
        .into_iter()
        .map(|line| line.chars().count())
        .collect();

    let matches = pattern
        .find_iter(text)
        .map(|m| {
            let start = index.char_at(m.start());
            let end = index.char_at(m.end());
            let context_start = start.saturating_sub(options.context_chars);
            let context_end = (end + options.context_chars).min(index.len());
            SearchMatch {
                start,
                end,
                line_number: line_number(&line_lengths, start),
                matched_text: m.as_str().to_string(),
                context: index.slice(text, context_start, context_end).to_string(),
            }
        })
        .collect();
    Ok(matches)
}

fn try_replace(
    text: &str,
    term: &str,
    replacement: &str,
    options: &ReplaceOptions,
) -> Result<(String, usize)> {
    let pattern = build_pattern(term, options.case_sensitive, options.is_regex)?;

    let count = if options.replace_all {
        pattern.find_iter(text).count()
    } else {
        usize::from(pattern.is_match(text))
    };

    if count == 0 {
        return Ok((text.to_string(), 0));
    }

    let expansion = translate_replacement(replacement, &pattern)?;
    let result = if options.replace_all {
        pattern.replace_all(text, expansion.as_str())
    } else {
        pattern.replace(text, expansion.as_str())
    };
    Ok((result.into_owned(), count))
}

/// Rewrite a `$n` / `${name}` / `\c` replacement into the regex crate's
/// `${n}` / `$$` syntax.
///
/// After `$`, digits are taken greedily while they still name an existing
/// group, so with one group `$1x` and `$12` are group 1 followed by text.
fn translate_replacement(replacement: &str, pattern: &Regex) -> Result<String> {
    let group_count = pattern.captures_len() - 1;
    let mut out = String::with_capacity(replacement.len() + 8);
    let mut chars = replacement.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('$') => out.push_str("$$"),
                Some(escaped) => out.push(escaped),
                None => {
                    return Err(invalid_replacement("character to be escaped is missing"));
                }
            },
            '$' => match chars.next() {
                Some('{') => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(n) if n.is_ascii_alphanumeric() => name.push(n),
                            _ => {
                                return Err(invalid_replacement(
                                    "named capturing group is missing trailing '}'",
                                ));
                            }
                        }
                    }
                    let valid = name.starts_with(|n: char| n.is_ascii_alphabetic())
                        && pattern.capture_names().flatten().any(|g| g == name);
                    if !valid {
                        let problem = format!("no group with name {{{}}}", name);
                        return Err(invalid_replacement(&problem));
                    }
                    out.push_str(&format!("${{{}}}", name));
                }
                Some(d) if d.is_ascii_digit() => {
                    let mut group = d.to_digit(10).unwrap_or_default() as usize;
                    if group > group_count {
                        return Err(invalid_replacement(&format!("no group {}", group)));
                    }
                    while let Some(next) = chars.peek().and_then(|n| n.to_digit(10)) {
                        let longer = group * 10 + next as usize;
                        if longer > group_count {
                            break;
                        }
                        group = longer;
                        chars.next();
                    }
                    out.push_str(&format!("${{{}}}", group));
                }
                _ => return Err(invalid_replacement("illegal group reference")),
            },
            other => out.push(other),
        }
    }
    Ok(out)
}

fn invalid_replacement(problem: &str) -> NotepadError {
    NotepadError::Replacement(problem.to_string())
}

/// 1-based line containing char offset `start`; 1 if it falls past the last line.
fn line_number(line_lengths: &[usize], start: usize) -> usize {
    let mut consumed = 0;
    for (i, len) in line_lengths.iter().enumerate() {
        consumed += len + 1;
        if consumed > start {
            return i + 1;
        }
    }
    1
}

/// Byte offset of every char boundary, for char <-> byte conversion.
struct CharIndex {
    offsets: Vec<usize>,
}

impl CharIndex {
    fn new(text: &str) -> Self {
        let offsets = text
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(text.len()))
            .collect();
        Self { offsets }
    }

    /// Number of chars in the text.
    fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Char index of a byte offset that sits on a char boundary.
    fn char_at(&self, byte: usize) -> usize {
        self.offsets.partition_point(|&offset| offset < byte)
    }

    fn slice<'a>(&self, text: &'a str, start: usize, end: usize) -> &'a str {
        &text[self.offsets[start]..self.offsets[end]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_search_case_insensitive_by_default() {
        let result = search("Cat cat CAT", "cat", &SearchOptions::default());
        assert_eq!(result.match_count, 3);
        assert_eq!(result.matches[0].matched_text, "Cat");
        assert_eq!(result.matches[2].start, 8);
        assert_eq!(result.matches[2].end, 11);
        assert!(result.error.is_none());
    }

    #[test]
    fn test_case_sensitive_search() {
        let options = SearchOptions {
            case_sensitive: true,
            ..Default::default()
        };
        let result = search("Cat cat CAT", "cat", &options);
        assert_eq!(result.match_count, 1);
        assert_eq!(result.matches[0].start, 4);
    }

    #[test]
    fn test_literal_terms_are_escaped() {
        let result = search("a.b axb", "a.b", &SearchOptions::default());
        assert_eq!(result.match_count, 1);
        assert_eq!(result.matches[0].matched_text, "a.b");
    }

    #[test]
    fn test_regex_search() {
        let options = SearchOptions {
            is_regex: true,
            ..Default::default()
        };
        let result = search("id 12, id 345", r"\d+", &options);
        let found: Vec<&str> = result
            .matches
            .iter()
            .map(|m| m.matched_text.as_str())
            .collect();
        assert_eq!(found, vec!["12", "345"]);
        assert!(result.is_regex);
    }

    #[test]
    fn test_invalid_regex_reports_error() {
        let options = SearchOptions {
            is_regex: true,
            ..Default::default()
        };
        let result = search("text", "(unclosed", &options);
        assert_eq!(result.match_count, 0);
        assert!(result.matches.is_empty());
        assert!(result.error.unwrap().contains("Invalid pattern"));
    }

    #[test]
    fn test_line_numbers() {
        let text = "first line\nsecond needle\n\nfourth needle";
        let result = search(text, "needle", &SearchOptions::default());
        assert_eq!(result.matches[0].line_number, 2);
        assert_eq!(result.matches[1].line_number, 4);
    }

    #[test]
    fn test_context_is_clamped() {
        let options = SearchOptions {
            context_chars: 3,
            ..Default::default()
        };
        let result = search("abcdefXghij", "X", &options);
        assert_eq!(result.matches[0].context, "defXghi");

        let result = search("Xy", "X", &options);
        assert_eq!(result.matches[0].context, "Xy");
    }

    #[test]
    fn test_offsets_count_chars_not_bytes() {
        let result = search("héllo wörld", "wörld", &SearchOptions::default());
        assert_eq!(result.matches[0].start, 6);
        assert_eq!(result.matches[0].end, 11);
        assert_eq!(result.matches[0].context, "héllo wörld");
    }

    #[test]
    fn test_replace_all_counts_matches() {
        let options = ReplaceOptions {
            replace_all: true,
            ..Default::default()
        };
        let result = replace("one fish two fish", "FISH", "cat", &options);
        assert!(result.success);
        assert_eq!(result.result_text, "one cat two cat");
        assert_eq!(result.replacement_count, 2);
    }

    #[test]
    fn test_replace_first_only() {
        let result = replace("aaa", "a", "b", &ReplaceOptions::default());
        assert_eq!(result.result_text, "baa");
        assert_eq!(result.replacement_count, 1);

        let result = replace("aaa", "z", "b", &ReplaceOptions::default());
        assert_eq!(result.result_text, "aaa");
        assert_eq!(result.replacement_count, 0);
        assert!(result.success);
    }

    #[test]
    fn test_regex_replace_expands_groups() {
        let options = ReplaceOptions {
            replace_all: true,
            is_regex: true,
            ..Default::default()
        };
        let result = replace("2024-01-15", r"(\d+)-(\d+)-(\d+)", "$3/$2/$1", &options);
        assert_eq!(result.result_text, "15/01/2024");
    }

    #[test]
    fn test_group_digits_stop_at_last_existing_group() {
        let options = ReplaceOptions {
            replace_all: true,
            is_regex: true,
            ..Default::default()
        };
        assert_eq!(replace("ab", "(a)", "$1x", &options).result_text, "axb");
        assert_eq!(replace("ab", "(a)", "$12", &options).result_text, "a2b");
        assert_eq!(replace("ab", "(a)", "[$0]", &options).result_text, "[a]b");
    }

    #[test]
    fn test_backslash_escapes_in_replacement() {
        let options = ReplaceOptions {
            is_regex: true,
            ..Default::default()
        };
        assert_eq!(replace("ab", "(a)", r"\$", &options).result_text, "$b");
        assert_eq!(replace("ab", "(a)", r"\\", &options).result_text, r"\b");
        assert_eq!(replace("ab", "(a)", r"\x$1", &options).result_text, "xab");
    }

    #[test]
    fn test_named_group_reference() {
        let options = ReplaceOptions {
            is_regex: true,
            ..Default::default()
        };
        let result = replace("key=val", r"(?P<k>\w+)=(?P<v>\w+)", "${v}=${k}", &options);
        assert_eq!(result.result_text, "val=key");

        let result = replace("key=val", r"(?P<k>\w+)", "${nope}", &options);
        assert!(!result.success);
        assert!(result.error.unwrap().contains("no group with name {nope}"));
    }

    #[test]
    fn test_missing_group_fails_only_when_matched() {
        let options = ReplaceOptions {
            replace_all: true,
            ..Default::default()
        };
        let result = replace("price: X", "X", "$5", &options);
        assert!(!result.success);
        assert_eq!(result.result_text, "price: X");
        assert!(result.error.unwrap().contains("no group 5"));

        let result = replace("nothing here", "X", "$5", &options);
        assert!(result.success);
        assert_eq!(result.result_text, "nothing here");
    }

    #[test]
    fn test_literal_mode_uses_replacement_grammar() {
        let options = ReplaceOptions {
            replace_all: true,
            ..Default::default()
        };
        assert_eq!(replace("price: X", "X", r"\$5", &options).result_text, "price: $5");
        assert_eq!(replace("a.b", ".", "<$0>", &options).result_text, "a<.>b");
    }

    #[test]
    fn test_bad_dollar_and_trailing_backslash_fail() {
        let options = ReplaceOptions::default();
        assert!(!replace("a", "a", "$", &options).success);
        assert!(!replace("a", "a", "$x", &options).success);
        assert!(!replace("a", "a", "\\", &options).success);
    }

    #[test]
    fn test_literal_case_folding_is_ascii_only() {
        let result = search("Ä ä A a", "ä", &SearchOptions::default());
        assert_eq!(result.match_count, 1);
        assert_eq!(result.matches[0].start, 2);

        let result = search("Ä ä A a", "A", &SearchOptions::default());
        assert_eq!(result.match_count, 2);
    }

    #[test]
    fn test_replace_invalid_regex_returns_original() {
        let options = ReplaceOptions {
            is_regex: true,
            ..Default::default()
        };
        let result = replace("keep me", "[", "x", &options);
        assert!(!result.success);
        assert_eq!(result.result_text, "keep me");
        assert_eq!(result.replacement_count, 0);
        assert!(result.error.is_some());
    }
}
