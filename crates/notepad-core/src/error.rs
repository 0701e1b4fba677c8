//! Error types for Notepad core operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Errors are descriptive at the core level; the bridge and CLI layers
//! map these to `success: false` results or exit codes.

use thiserror::Error;

/// Result type alias for Notepad operations.
pub type Result<T> = std::result::Result<T, NotepadError>;

/// Core error type for Notepad operations.
#[derive(Debug, Error)]
pub enum NotepadError {
    /// Malformed transport encoding (base64) in decrypt input
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Key derivation or cipher setup failure
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// Padding or UTF-8 validation failed after decryption.
    ///
    /// Deliberately carries no detail: a wrong password, salt, IV or a
    /// corrupted ciphertext all look the same here.
    #[error("Decryption failed")]
    DecryptionFailed,

    /// Invalid user-supplied search pattern
    #[error("Invalid pattern: {source}")]
    Pattern {
        #[from]
        source: regex::Error,
    },

    /// Replacement string with a bad escape or group reference
    #[error("Invalid replacement: {0}")]
    Replacement(String),

    /// No clipboard is attached to the bridge
    #[error("Clipboard not available")]
    ClipboardUnavailable,

    /// Action name not recognized by the bridge
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl NotepadError {
    /// Whether this error came from malformed transport encoding rather than
    /// from the cipher itself.
    pub fn is_encoding(&self) -> bool {
        matches!(self, NotepadError::Encoding(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decryption_failed_message_is_generic() {
        let message = NotepadError::DecryptionFailed.to_string();
        assert_eq!(message, "Decryption failed");
    }

    #[test]
    fn test_encoding_is_distinct_from_crypto() {
        assert!(NotepadError::Encoding("bad".to_string()).is_encoding());
        assert!(!NotepadError::Crypto("bad".to_string()).is_encoding());
        assert!(!NotepadError::DecryptionFailed.is_encoding());
    }

    #[test]
    fn test_unknown_action_message() {
        let err = NotepadError::UnknownAction("frobnicate".to_string());
        assert_eq!(err.to_string(), "Unknown action: frobnicate");
    }
}
