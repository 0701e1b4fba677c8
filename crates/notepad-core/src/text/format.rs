//! Text formatting transforms.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::split_lines;

static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").expect("valid regex"));
static LINE_BREAK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\r\n]+").expect("valid regex"));

/// Which transforms to apply. All default to off.
///
/// At most one case conversion runs; upper wins over lower, lower over
/// title, title over sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormattingOptions {
    pub trim: bool,
    pub remove_extra_spaces: bool,
    pub remove_line_breaks: bool,
    pub to_upper_case: bool,
    pub to_lower_case: bool,
    pub to_title_case: bool,
    pub to_sentence_case: bool,
    pub sort_lines: bool,
    pub remove_duplicate_lines: bool,
    pub reverse: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingResult {
    pub formatted_text: String,
    pub success: bool,
    /// One message per transform applied, in order.
    pub changes_made: Vec<String>,
}

/// Apply the selected transforms to `text` in a fixed order.
pub fn format_text(text: &str, options: &FormattingOptions) -> FormattingResult {
    let mut out = text.to_string();
    let mut changes = Vec::new();

    if options.trim {
        out = out.trim().to_string();
        changes.push("Trimmed whitespace");
    }
    if options.remove_extra_spaces {
        out = SPACE_RUN.replace_all(&out, " ").into_owned();
        changes.push("Removed extra spaces");
    }
    if options.remove_line_breaks {
        out = LINE_BREAK_RUN.replace_all(&out, " ").into_owned();
        changes.push("Removed line breaks");
    }

    if options.to_upper_case {
        out = out.to_uppercase();
        changes.push("Converted to uppercase");
    } else if options.to_lower_case {
        out = out.to_lowercase();
        changes.push("Converted to lowercase");
    } else if options.to_title_case {
        out = title_case(&out);
        changes.push("Converted to title case");
    } else if options.to_sentence_case {
        out = sentence_case(&out);
        changes.push("Converted to sentence case");
    }

    if options.sort_lines {
        let mut lines = split_lines(&out);
        lines.sort_unstable();
        out = lines.join("\n");
        changes.push("Sorted lines");
    }
    if options.remove_duplicate_lines {
        let mut seen = HashSet::new();
        out = split_lines(&out)
            .into_iter()
            .filter(|line| seen.insert(*line))
            .collect::<Vec<_>>()
            .join("\n");
        changes.push("Removed duplicate lines");
    }
    if options.reverse {
        out = out.chars().rev().collect();
        changes.push("Reversed text");
    }

    FormattingResult {
        formatted_text: out,
        success: true,
        changes_made: changes.into_iter().map(String::from).collect(),
    }
}

/// Upper-case the first char of every whitespace-separated word, lower-case the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            at_word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Lower-case everything, then upper-case the first letter of the text and
/// the first letter after each `.`, `!` or `?`.
fn sentence_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut capitalize = true;
    for c in text.chars() {
        if matches!(c, '.' | '!' | '?') {
            capitalize = true;
            out.push(c);
        } else if capitalize && c.is_alphabetic() {
            capitalize = false;
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}
