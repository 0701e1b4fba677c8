//! Transport encoding for encrypted payloads.
//!
//! Ciphertext, IV and salt each travel as standard base64 (with padding,
//! no line wrapping). Decoding errors are reported as
//! `NotepadError::Encoding`, never as a cipher failure.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use super::cipher::{EncryptedPayload, IV_LENGTH};
use super::key::SALT_LENGTH;
use crate::error::{NotepadError, Result};

/// An encrypted payload with every field base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedPayload {
    pub encrypted_data: String,
    pub iv: String,
    pub salt: String,
}

impl EncodedPayload {
    /// Encode a raw payload for transport.
    pub fn encode(payload: &EncryptedPayload) -> Self {
        Self {
            encrypted_data: encode(&payload.ciphertext),
            iv: encode(&payload.iv),
            salt: encode(&payload.salt),
        }
    }

    /// Decode every field back to bytes.
    ///
    /// # Errors
    ///
    /// - `NotepadError::Encoding` if any field is not valid base64
    /// - `NotepadError::Crypto` if the IV or salt decodes to the wrong length
    pub fn decode(&self) -> Result<EncryptedPayload> {
        let ciphertext = decode("encrypted data", &self.encrypted_data)?;
        let iv = decode("iv", &self.iv)?;
        let salt = decode("salt", &self.salt)?;

        let iv: [u8; IV_LENGTH] = iv.try_into().map_err(|bytes: Vec<u8>| {
            NotepadError::Crypto(format!(
                "IV must be exactly {} bytes (got {})",
                IV_LENGTH,
                bytes.len()
            ))
        })?;
        let salt: [u8; SALT_LENGTH] = salt.try_into().map_err(|bytes: Vec<u8>| {
            NotepadError::Crypto(format!(
                "Salt must be exactly {} bytes (got {})",
                SALT_LENGTH,
                bytes.len()
            ))
        })?;

        Ok(EncryptedPayload {
            ciphertext,
            iv,
            salt,
        })
    }
}

/// Encode bytes as standard base64.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode a standard base64 field.
///
/// `field` names the input in the error message.
pub fn decode(field: &str, value: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(value)
        .map_err(|e| NotepadError::Encoding(format!("Invalid base64 in {}: {}", field, e)))
}
