//! Boundary operations for the crypto core.
//!
//! These never return `Err`: every failure is caught and reported as
//! `success: false` with a message, in the shape the host expects.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::cipher;
use super::digest::digest;
use super::encoding::EncodedPayload;
use crate::error::Result;

/// Result of [`encrypt_text`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptionResult {
    pub encrypted_data: String,
    pub iv: String,
    pub salt: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EncryptionResult {
    /// The encoded payload, if encryption succeeded.
    pub fn payload(&self) -> Option<EncodedPayload> {
        self.success.then(|| EncodedPayload {
            encrypted_data: self.encrypted_data.clone(),
            iv: self.iv.clone(),
            salt: self.salt.clone(),
        })
    }
}

/// Result of [`decrypt_text`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecryptionResult {
    pub decrypted_text: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of [`hash_text`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HashResult {
    pub hash: String,
    pub algorithm: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Encrypt `plaintext` under `password` and base64-encode the payload.
pub fn encrypt_text(plaintext: &str, password: &str) -> EncryptionResult {
    debug!(plaintext_len = plaintext.len(), "encrypt");
    match cipher::encrypt(plaintext, password) {
        Ok(payload) => {
            let encoded = EncodedPayload::encode(&payload);
            EncryptionResult {
                encrypted_data: encoded.encrypted_data,
                iv: encoded.iv,
                salt: encoded.salt,
                success: true,
                error: None,
            }
        }
        Err(err) => {
            warn!(error = %err, "encrypt failed");
            EncryptionResult {
                error: Some(err.to_string()),
                ..Default::default()
            }
        }
    }
}

/// Decode and decrypt a payload produced by [`encrypt_text`].
///
/// On failure `decrypted_text` is empty; partial plaintext is never returned.
pub fn decrypt_text(encrypted_data: &str, password: &str, iv: &str, salt: &str) -> DecryptionResult {
    let encoded = EncodedPayload {
        encrypted_data: encrypted_data.to_string(),
        iv: iv.to_string(),
        salt: salt.to_string(),
    };
    match decrypt_encoded(&encoded, password) {
        Ok(decrypted_text) => DecryptionResult {
            decrypted_text,
            success: true,
            error: None,
        },
        Err(err) => {
            warn!(error = %err, "decrypt failed");
            DecryptionResult {
                error: Some(err.to_string()),
                ..Default::default()
            }
        }
    }
}

/// Decode and decrypt, keeping the typed error.
///
/// Lets callers tell an encoding problem (`NotepadError::Encoding`) from a
/// cipher failure.
pub fn decrypt_encoded(encoded: &EncodedPayload, password: &str) -> Result<String> {
    let payload = encoded.decode()?;
    debug!(ciphertext_len = payload.ciphertext.len(), "decrypt");
    cipher::decrypt(&payload, password)
}

/// Hash `text` with the algorithm named by `algorithm`, falling back to SHA-256.
pub fn hash_text(text: &str, algorithm: &str) -> HashResult {
    let result = digest(text, algorithm);
    debug!(requested = algorithm, used = %result.algorithm, "hash");
    HashResult {
        hash: result.hex,
        algorithm: result.algorithm.as_str().to_string(),
        success: true,
        error: None,
    }
}
