//! Content handed to the app by another app (share sheet / intent).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedContent {
    pub text: Option<String>,
    pub url: Option<String>,
    pub files: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_app: Option<String>,
    pub has_content: bool,
}

impl SharedContent {
    /// Nothing shared: empty text and url, no files.
    pub fn empty() -> Self {
        Self {
            text: Some(String::new()),
            url: Some(String::new()),
            files: Vec::new(),
            source_app: None,
            has_content: false,
        }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            has_content: !text.is_empty(),
            text: Some(text),
            url: None,
            files: Vec::new(),
            source_app: None,
        }
    }
}

/// Holds at most one pending share until the app consumes it.
#[derive(Debug, Clone, Default)]
pub struct SharedSlot {
    pending: Option<SharedContent>,
}

impl SharedSlot {
    pub fn share(&mut self, content: SharedContent) {
        self.pending = Some(content);
    }

    pub fn get(&self) -> SharedContent {
        self.pending.clone().unwrap_or_else(SharedContent::empty)
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slot_reports_empty_state() {
        let slot = SharedSlot::default();
        let json = serde_json::to_value(slot.get()).unwrap();
        assert_eq!(json["hasContent"], false);
        assert_eq!(json["text"], "");
        assert_eq!(json["url"], "");
        assert_eq!(json["files"], serde_json::json!([]));
    }

    #[test]
    fn test_share_get_clear() {
        let mut slot = SharedSlot::default();
        slot.share(SharedContent::from_text("from another app"));
        let content = slot.get();
        assert!(content.has_content);
        assert_eq!(content.text.as_deref(), Some("from another app"));

        slot.clear();
        assert_eq!(slot.get(), SharedContent::empty());
    }
}
