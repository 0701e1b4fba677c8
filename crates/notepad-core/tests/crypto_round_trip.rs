use notepad_core::crypto::{
    decrypt_encoded, decrypt_text, encrypt_text, hash_text, EncodedPayload,
};
use notepad_core::NotepadError;

fn decode(value: &str) -> Vec<u8> {
    use base64::Engine as _;
    base64::engine::general_purpose::STANDARD
        .decode(value)
        .expect("field should be valid base64")
}

#[test]
fn test_round_trip_multi_block_unicode() {
    let plaintext = "Grüße aus Köln 🦀\n".repeat(20);
    let encrypted = encrypt_text(&plaintext, "correct horse battery staple");
    assert!(encrypted.success);

    assert_eq!(decode(&encrypted.iv).len(), 16);
    assert_eq!(decode(&encrypted.salt).len(), 16);
    assert_eq!(decode(&encrypted.encrypted_data).len() % 16, 0);

    let decrypted = decrypt_text(
        &encrypted.encrypted_data,
        "correct horse battery staple",
        &encrypted.iv,
        &encrypted.salt,
    );
    assert!(decrypted.success);
    assert_eq!(decrypted.decrypted_text, plaintext);
}

#[test]
fn test_empty_plaintext_is_one_block() {
    let encrypted = encrypt_text("", "pw");
    assert_eq!(decode(&encrypted.encrypted_data).len(), 16);

    let payload = encrypted.payload().expect("encryption should succeed");
    assert_eq!(decrypt_encoded(&payload, "pw").expect("decrypt"), "");
}

#[test]
fn test_decrypts_fixed_payload() {
    // salt "0123456789abcdef", iv "fedcba9876543210", password "pw"
    let decrypted = decrypt_text(
        "crOrw3rPPFIIjdYNcMCN9Q==",
        "pw",
        "ZmVkY2JhOTg3NjU0MzIxMA==",
        "MDEyMzQ1Njc4OWFiY2RlZg==",
    );
    assert!(decrypted.success);
    assert_eq!(decrypted.decrypted_text, "same text");
}

#[test]
fn test_repeated_encryption_differs() {
    let first = encrypt_text("same input", "same password");
    let second = encrypt_text("same input", "same password");

    assert_ne!(first.encrypted_data, second.encrypted_data);
    assert_ne!(first.iv, second.iv);
    assert_ne!(first.salt, second.salt);
}

#[test]
fn test_wrong_password_returns_empty_text() {
    let encrypted = encrypt_text("top secret", "right");
    let decrypted = decrypt_text(&encrypted.encrypted_data, "wrong", &encrypted.iv, &encrypted.salt);

    assert!(!decrypted.success);
    assert!(decrypted.decrypted_text.is_empty());
    assert!(decrypted.error.is_some());
}

#[test]
fn test_bad_base64_is_an_encoding_error() {
    let encrypted = encrypt_text("text", "pw");
    let payload = EncodedPayload {
        encrypted_data: "%%% not base64 %%%".to_string(),
        iv: encrypted.iv,
        salt: encrypted.salt,
    };

    let err = decrypt_encoded(&payload, "pw").unwrap_err();
    assert!(err.is_encoding());
}

#[test]
fn test_short_iv_is_a_crypto_error() {
    let encrypted = encrypt_text("text", "pw");
    let payload = EncodedPayload {
        encrypted_data: encrypted.encrypted_data,
        iv: "AAAA".to_string(),
        salt: encrypted.salt,
    };

    let err = decrypt_encoded(&payload, "pw").unwrap_err();
    assert!(matches!(err, NotepadError::Crypto(_)));
}

#[test]
fn test_hash_known_digests_and_fallback() {
    let empty = hash_text("", "SHA-256");
    assert_eq!(
        empty.hash,
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );

    let fallback = hash_text("", "sha-256");
    assert_eq!(fallback.algorithm, "SHA-256");
    assert_eq!(fallback.hash, empty.hash);

    assert_eq!(hash_text("abc", "MD5").hash, "900150983cd24fb0d6963f7d28e17f72");
    assert_eq!(hash_text("abc", "SHA-512").hash.len(), 128);
}
