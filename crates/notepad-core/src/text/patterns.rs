//! Extraction of URLs, emails, phone numbers, hashtags, mentions and dates.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)https?://[A-Za-z0-9_\-.~:/?#\[\]@!$&'()*+,;=%]+"#).expect("valid regex")
});
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid regex")
});
static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+?[0-9]{1,3}[-.\s]?)?(\(?[0-9]{2,4}\)?[-.\s]?)?[0-9]{3,4}[-.\s]?[0-9]{3,4}")
        .expect("valid regex")
});
static HASHTAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#[a-zA-Z0-9_]+").expect("valid regex"));
static MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"@[a-zA-Z0-9_]+").expect("valid regex"));
static DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]{1,2}[/\-.][0-9]{1,2}[/\-.][0-9]{2,4}|[0-9]{4}[/\-.][0-9]{1,2}[/\-.][0-9]{1,2}")
        .expect("valid regex")
});

/// Every match of each pattern, in order of appearance.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDetection {
    pub urls: Vec<String>,
    pub emails: Vec<String>,
    pub phone_numbers: Vec<String>,
    pub hashtags: Vec<String>,
    pub mentions: Vec<String>,
    pub dates: Vec<String>,
}

/// Run every detector over `text`.
///
/// Detectors are independent, so one span can show up in several lists
/// (the domain of `bob@example.org` is also a mention `@example`).
pub fn detect_patterns(text: &str) -> TextDetection {
    TextDetection {
        urls: find_all(&URL, text),
        emails: find_all(&EMAIL, text),
        phone_numbers: find_all(&PHONE, text),
        hashtags: find_all(&HASHTAG, text),
        mentions: find_all(&MENTION, text),
        dates: find_all(&DATE, text),
    }
}

fn find_all(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
