//! Clipboard port and the operations built on it.
//!
//! The host supplies the platform clipboard through [`Clipboard`];
//! [`MemoryClipboard`] backs the CLI and tests.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Label used when the caller does not name the clip.
pub const DEFAULT_CLIP_LABEL: &str = "Copied Text";

/// Abstracts the platform clipboard.
pub trait Clipboard: Send {
    /// Current plain-text clip, or `None` when the clipboard holds nothing.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the clipboard with a labelled plain-text clip.
    fn write(&mut self, label: &str, text: &str) -> Result<()>;
}

/// Process-local clipboard.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    clip: Option<(String, String)>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label of the current clip.
    pub fn label(&self) -> Option<&str> {
        self.clip.as_ref().map(|(label, _)| label.as_str())
    }
}

impl Clipboard for MemoryClipboard {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.clip.as_ref().map(|(_, text)| text.clone()))
    }

    fn write(&mut self, label: &str, text: &str) -> Result<()> {
        self.clip = Some((label.to_string(), text.to_string()));
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Text,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipboardContent {
    pub text: String,
    pub has_content: bool,
    pub content_type: ContentType,
    /// Read time in epoch milliseconds, set only when a clip was present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl ClipboardContent {
    fn empty() -> Self {
        Self {
            text: String::new(),
            has_content: false,
            content_type: ContentType::Unknown,
            timestamp: None,
        }
    }
}

/// What to put on the clipboard. Only plain text is written; `html` is
/// accepted for interface compatibility and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardWriteOptions {
    pub text: Option<String>,
    pub html: Option<String>,
    pub label: Option<String>,
}

/// Read the clipboard. An empty clip is reported with `has_content: false`.
pub fn get_clipboard(clipboard: &dyn Clipboard) -> Result<ClipboardContent> {
    Ok(match clipboard.read()? {
        Some(text) => ClipboardContent {
            has_content: !text.is_empty(),
            text,
            content_type: ContentType::Text,
            timestamp: Some(Utc::now().timestamp_millis()),
        },
        None => ClipboardContent::empty(),
    })
}

pub fn set_clipboard(clipboard: &mut dyn Clipboard, options: &ClipboardWriteOptions) -> Result<()> {
    let label = options.label.as_deref().unwrap_or(DEFAULT_CLIP_LABEL);
    let text = options.text.as_deref().unwrap_or_default();
    clipboard.write(label, text)
}

/// Overwrite the clipboard with an empty, unlabelled clip.
pub fn clear_clipboard(clipboard: &mut dyn Clipboard) -> Result<()> {
    clipboard.write("", "")
}
