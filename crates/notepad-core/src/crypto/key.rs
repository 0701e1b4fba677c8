//! Key derivation using PBKDF2-HMAC-SHA-256.
//!
//! The iteration count and key length are not stored in the encrypted
//! payload, so they are fixed protocol constants: changing either one makes
//! every previously produced payload undecryptable.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::ZeroizeOnDrop;

use crate::error::{NotepadError, Result};

/// PBKDF2 iteration count for payload format v1.
pub const PBKDF2_ITERATIONS: u32 = 65_536;

/// Length of derived key in bytes (32 bytes = 256 bits for AES-256).
pub const KEY_LENGTH: usize = 32;

/// Length of the random salt in bytes.
pub const SALT_LENGTH: usize = 16;

/// A cryptographic key derived from a password.
///
/// Key material is zeroized when the value is dropped. The boundary
/// operations in [`crate::crypto::service`] never hand it to callers.
#[derive(ZeroizeOnDrop)]
pub struct DerivedKey {
    /// The raw key bytes (zeroized on drop)
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate cipher setup.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive an encryption key from a password and salt.
///
/// Uses PBKDF2 with HMAC-SHA-256, [`PBKDF2_ITERATIONS`] rounds and a
/// [`KEY_LENGTH`]-byte output.
///
/// # Arguments
///
/// * `password` - The password to derive from (empty is accepted)
/// * `salt` - Random salt, exactly [`SALT_LENGTH`] bytes
///
/// # Security
///
/// - Same password + salt always produces the same key (deterministic)
/// - Different salt produces a different key (salt travels with the payload)
/// - An empty password yields a weak but valid key
///
/// # Errors
///
/// Returns `NotepadError::Crypto` if the salt has the wrong length.
pub fn derive_key(password: &str, salt: &[u8]) -> Result<DerivedKey> {
    if salt.len() != SALT_LENGTH {
        return Err(NotepadError::Crypto(format!(
            "Salt must be exactly {} bytes (got {})",
            SALT_LENGTH,
            salt.len()
        )));
    }

    let mut key = DerivedKey {
        key: [0u8; KEY_LENGTH],
    };
    pbkdf2_sha256(password.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key.key);
    Ok(key)
}

fn pbkdf2_sha256(password: &[u8], salt: &[u8], rounds: u32, out: &mut [u8]) {
    pbkdf2_hmac::<Sha256>(password, salt, rounds, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALT_A: &[u8; 16] = b"0123456789abcdef";
    const SALT_B: &[u8; 16] = b"fedcba9876543210";

    #[test]
    fn test_pbkdf2_sha256_known_vector() {
        let mut out = [0u8; 32];
        pbkdf2_sha256(b"password", b"salt", 1, &mut out);
        assert_eq!(
            hex::encode(out),
            "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b"
        );
    }

    #[test]
    fn test_derive_key_known_answer() {
        let key = derive_key("pw", SALT_A).unwrap();
        assert_eq!(
            hex::encode(key.as_bytes()),
            "ffd0420e7c468c9f2ae1ec67a5128b8d3a73c4a4e11cedd0bdaa4accf0165320"
        );
    }

    #[test]
    fn test_key_derivation_deterministic() {
        let key1 = derive_key("test-password", SALT_A).unwrap();
        let key2 = derive_key("test-password", SALT_A).unwrap();

        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_salt_different_key() {
        let key1 = derive_key("test-password", SALT_A).unwrap();
        let key2 = derive_key("test-password", SALT_B).unwrap();

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_password_different_key() {
        let key1 = derive_key("password-one", SALT_A).unwrap();
        let key2 = derive_key("password-two", SALT_A).unwrap();

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_empty_password_accepted() {
        let key = derive_key("", SALT_A).unwrap();
        assert_eq!(key.as_bytes().len(), KEY_LENGTH);
    }

    #[test]
    fn test_wrong_salt_length_rejected() {
        let result = derive_key("test-password", b"short");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Salt must be exactly 16 bytes"));
    }

    #[test]
    fn test_derived_key_debug_redacts() {
        let key = derive_key("test-password", SALT_A).unwrap();

        let debug_output = format!("{:?}", key);
        assert!(debug_output.contains("REDACTED"));

        let key_hex = hex::encode(&key.as_bytes()[..4]);
        assert!(!debug_output.contains(&key_hex));
    }
}
