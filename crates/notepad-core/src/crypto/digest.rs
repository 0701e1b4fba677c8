//! Text hashing with a selectable algorithm.
//!
//! Unknown algorithm names are not an error: they silently select SHA-256.

use std::fmt;

use md5::Md5;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha512};

/// Hash algorithms recognized by [`digest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HashAlgorithm {
    #[serde(rename = "MD5")]
    Md5,
    #[default]
    #[serde(rename = "SHA-256")]
    Sha256,
    #[serde(rename = "SHA-512")]
    Sha512,
}

impl HashAlgorithm {
    /// Resolve an algorithm token.
    ///
    /// Matching is exact: `"MD5"` and `"SHA-512"` select those algorithms,
    /// anything else (including `"sha-512"` or an empty string) is SHA-256.
    pub fn from_token(token: &str) -> Self {
        match token {
            "MD5" => Self::Md5,
            "SHA-512" => Self::Sha512,
            _ => Self::Sha256,
        }
    }

    /// Canonical name, as reported back to callers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha256 => "SHA-256",
            Self::Sha512 => "SHA-512",
        }
    }

    /// Hash `data` and return the raw digest bytes.
    pub fn hash(&self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::Md5 => Md5::digest(data).to_vec(),
            Self::Sha256 => Sha256::digest(data).to_vec(),
            Self::Sha512 => Sha512::digest(data).to_vec(),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A computed digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashDigest {
    /// Lowercase hex, two characters per byte
    pub hex: String,
    /// Algorithm actually applied, after fallback
    pub algorithm: HashAlgorithm,
}

/// Hash the UTF-8 bytes of `text` with the algorithm named by `token`.
///
/// # Examples
///
/// ```
/// use notepad_core::crypto::digest::{digest, HashAlgorithm};
///
/// let result = digest("abc", "whirlpool");
/// assert_eq!(result.algorithm, HashAlgorithm::Sha256);
/// ```
pub fn digest(text: &str, token: &str) -> HashDigest {
    let algorithm = HashAlgorithm::from_token(token);
    HashDigest {
        hex: hex::encode(algorithm.hash(text.as_bytes())),
        algorithm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHA256_EMPTY: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn test_sha256_empty_vector() {
        let result = digest("", "SHA-256");
        assert_eq!(result.hex, SHA256_EMPTY);
        assert_eq!(result.algorithm, HashAlgorithm::Sha256);
    }

    #[test]
    fn test_sha256_abc_vector() {
        assert_eq!(
            digest("abc", "SHA-256").hex,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_md5_vectors() {
        assert_eq!(digest("", "MD5").hex, "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(digest("abc", "MD5").hex, "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_sha512_abc_vector() {
        assert_eq!(
            digest("abc", "SHA-512").hex,
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    #[test]
    fn test_unknown_token_falls_back_to_sha256() {
        for token in ["", "SHA-1", "sha-512", "md5", "BLAKE3"] {
            let result = digest("", token);
            assert_eq!(result.algorithm, HashAlgorithm::Sha256, "token {:?}", token);
            assert_eq!(result.algorithm.as_str(), "SHA-256");
            assert_eq!(result.hex, SHA256_EMPTY);
        }
    }

    #[test]
    fn test_hex_is_lowercase_and_two_chars_per_byte() {
        let result = digest("zero padding check", "SHA-512");
        assert_eq!(result.hex.len(), 128);
        assert!(result
            .hex
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(digest("same", "MD5"), digest("same", "MD5"));
    }

    #[test]
    fn test_algorithm_serializes_as_token() {
        assert_eq!(
            serde_json::to_value(HashAlgorithm::Sha512).unwrap(),
            "SHA-512"
        );
        assert_eq!(HashAlgorithm::Md5.to_string(), "MD5");
    }
}
