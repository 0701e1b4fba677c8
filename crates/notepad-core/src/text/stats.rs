//! Text statistics.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{split_lines, split_trimmed};

/// Average silent reading speed, words per minute.
const READING_WPM: f64 = 200.0;

/// Average speaking speed, words per minute.
const SPEAKING_WPM: f64 = 150.0;

static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("valid regex"));
static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n(?-u:\s)*\n").expect("valid regex"));

/// Counts and estimates for a block of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    pub character_count: usize,
    pub character_count_no_spaces: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub line_count: usize,
    pub reading_time_minutes: f64,
    pub speaking_time_minutes: f64,
    pub average_word_length: f64,
    pub unique_word_count: usize,
}

/// Compute statistics for `text`.
///
/// Words are runs separated by ASCII whitespace (space, tab, newline,
/// vertical tab, form feed, carriage return); a word's length only counts
/// ASCII letters and digits. Other Unicode spaces such as NBSP are ordinary
/// characters. Fractional values are rounded to two decimals.
pub fn text_stats(text: &str) -> TextStats {
    let words: Vec<&str> = text
        .split(is_space)
        .filter(|word| !word.is_empty())
        .collect();
    let word_count = words.len();

    let unique_word_count = words
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<HashSet<_>>()
        .len();

    let sentence_count = split_trimmed(&SENTENCE_END, text)
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .count();

    let paragraphs = split_trimmed(&PARAGRAPH_BREAK, text)
        .into_iter()
        .filter(|p| !p.trim().is_empty())
        .count();
    let paragraph_count = if text.trim().is_empty() {
        paragraphs
    } else {
        paragraphs.max(1)
    };

    let average_word_length = if word_count > 0 {
        let total: usize = words
            .iter()
            .map(|word| word.chars().filter(|c| c.is_ascii_alphanumeric()).count())
            .sum();
        total as f64 / word_count as f64
    } else {
        0.0
    };

    TextStats {
        character_count: text.chars().count(),
        character_count_no_spaces: text.chars().filter(|c| !is_space(*c)).count(),
        word_count,
        sentence_count,
        paragraph_count,
        line_count: split_lines(text).len(),
        reading_time_minutes: round2(word_count as f64 / READING_WPM),
        speaking_time_minutes: round2(word_count as f64 / SPEAKING_WPM),
        average_word_length: round2(average_word_length),
        unique_word_count,
    }
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
