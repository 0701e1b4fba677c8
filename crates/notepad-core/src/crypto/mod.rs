//! Password-based encryption and hashing.
//!
//! - **key**: PBKDF2-HMAC-SHA-256 key derivation (65536 rounds, 256-bit key)
//! - **cipher**: AES-256-CBC with PKCS#7 padding, random salt and IV per call
//! - **encoding**: base64 transport encoding of payload fields
//! - **digest**: MD5 / SHA-256 / SHA-512 text hashing
//! - **service**: host-facing operations returning `success`/`error` results
//!
//! ## Payload format
//!
//! A payload is `(ciphertext, iv, salt)`, each base64-encoded. There is no
//! version marker and no MAC: key derivation parameters are implicit, and
//! the ciphertext is not authenticated. A wrong password is detected only
//! by padding/UTF-8 validation, which is probabilistic.
//!
//! ## Threat Model
//!
//! We defend against:
//! - Reading a stored payload without the password
//! - Precomputed-key attacks (per-payload random salt)
//!
//! We do NOT defend against:
//! - Ciphertext tampering (no integrity check)
//! - Offline brute force of weak passwords beyond the PBKDF2 work factor

pub mod cipher;
pub mod digest;
pub mod encoding;
pub mod key;
pub mod service;

pub use cipher::{EncryptedPayload, BLOCK_SIZE, IV_LENGTH};
pub use digest::{digest, HashAlgorithm, HashDigest};
pub use encoding::EncodedPayload;
pub use key::{derive_key, DerivedKey, KEY_LENGTH, PBKDF2_ITERATIONS, SALT_LENGTH};
pub use service::{
    decrypt_encoded, decrypt_text, encrypt_text, hash_text, DecryptionResult, EncryptionResult,
    HashResult,
};
