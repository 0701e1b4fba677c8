//! AES-256-CBC encryption/decryption of text.
//!
//! Each call derives a fresh key from the password and a random salt, and
//! encrypts under a random IV. The ciphertext is padded with PKCS#7 and is
//! not authenticated.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use super::key::{derive_key, SALT_LENGTH};
use crate::error::{NotepadError, Result};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Length of the initialization vector in bytes.
pub const IV_LENGTH: usize = 16;

/// Raw output of an encryption: all three fields are needed to decrypt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedPayload {
    pub ciphertext: Vec<u8>,
    pub iv: [u8; IV_LENGTH],
    pub salt: [u8; SALT_LENGTH],
}

/// Encrypt text under a password.
///
/// Generates a fresh salt and IV from the OS random source, derives the key
/// and encrypts the UTF-8 bytes of `plaintext`.
///
/// # Examples
///
/// ```
/// use notepad_core::crypto::cipher::{decrypt, encrypt};
///
/// let payload = encrypt("secret note", "hunter2").unwrap();
/// assert_eq!(decrypt(&payload, "hunter2").unwrap(), "secret note");
/// ```
pub fn encrypt(plaintext: &str, password: &str) -> Result<EncryptedPayload> {
    let salt = random_bytes::<SALT_LENGTH>()?;
    let iv = random_bytes::<IV_LENGTH>()?;
    encrypt_with(plaintext, password, salt, iv)
}

pub(crate) fn encrypt_with(
    plaintext: &str,
    password: &str,
    salt: [u8; SALT_LENGTH],
    iv: [u8; IV_LENGTH],
) -> Result<EncryptedPayload> {
    let key = derive_key(password, &salt)?;
    let encryptor = Aes256CbcEnc::new_from_slices(key.as_bytes(), &iv)
        .map_err(|e| NotepadError::Crypto(format!("Failed to create encryptor: {}", e)))?;
    drop(key);

    let ciphertext = encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    Ok(EncryptedPayload {
        ciphertext,
        iv,
        salt,
    })
}

/// Decrypt a payload back to text.
///
/// # Errors
///
/// Returns `NotepadError::DecryptionFailed` if the padding or the UTF-8 of
/// the recovered bytes is invalid. A wrong password usually ends up here,
/// but since the ciphertext is unauthenticated a wrong password can, rarely,
/// produce valid-looking output instead.
pub fn decrypt(payload: &EncryptedPayload, password: &str) -> Result<String> {
    if payload.ciphertext.is_empty() || payload.ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(NotepadError::DecryptionFailed);
    }

    let key = derive_key(password, &payload.salt)?;
    let decryptor = Aes256CbcDec::new_from_slices(key.as_bytes(), &payload.iv)
        .map_err(|e| NotepadError::Crypto(format!("Failed to create decryptor: {}", e)))?;
    drop(key);

    let plaintext = decryptor
        .decrypt_padded_vec_mut::<Pkcs7>(&payload.ciphertext)
        .map_err(|_| NotepadError::DecryptionFailed)?;

    String::from_utf8(plaintext).map_err(|_| NotepadError::DecryptionFailed)
}

fn random_bytes<const N: usize>() -> Result<[u8; N]> {
    let mut bytes = [0u8; N];
    getrandom::getrandom(&mut bytes)
        .map_err(|e| NotepadError::Crypto(format!("Failed to generate random bytes: {}", e)))?;
    Ok(bytes)
}
