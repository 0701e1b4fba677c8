//! `encrypt`, `decrypt` and `hash`.

use std::io::Read;

use notepad_core::crypto::{decrypt_text, encrypt_text, hash_text, EncodedPayload};

use crate::app::AppContext;
use crate::cli::{DecryptArgs, EncryptArgs, HashArgs};
use crate::errors::CliError;
use crate::helpers::{read_text, resolve_password, TrailingNewline};
use crate::ui::{badge, kv, print, print_json, Badge};

pub fn handle_encrypt(ctx: &AppContext, args: &EncryptArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context();
    let text = read_text(args.input.text.as_deref(), TrailingNewline::Keep)?;
    let password = resolve_password(args.password.as_deref(), true, ui.interactive)?;

    let result = encrypt_text(&text, &password);
    if !result.success {
        return Err(anyhow::anyhow!(
            "Encryption failed: {}",
            result.error.as_deref().unwrap_or("unknown error")
        ));
    }

    if ui.mode.is_json() {
        return print_json(&result);
    }
    if ui.mode.is_pretty() {
        print(&ui, &badge(&ui, Badge::Ok, "Encrypted"));
    }
    print(&ui, &kv(&ui, "Encrypted Data", &result.encrypted_data));
    print(&ui, &kv(&ui, "IV", &result.iv));
    print(&ui, &kv(&ui, "Salt", &result.salt));
    Ok(())
}

pub fn handle_decrypt(ctx: &AppContext, args: &DecryptArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context();
    let payload = match args.payload.as_deref() {
        Some(raw) => parse_payload(raw)?,
        None => EncodedPayload {
            encrypted_data: args.data.clone().unwrap_or_default(),
            iv: args.iv.clone().unwrap_or_default(),
            salt: args.salt.clone().unwrap_or_default(),
        },
    };
    let password = resolve_password(args.password.as_deref(), false, ui.interactive)?;

    let result = decrypt_text(&payload.encrypted_data, &password, &payload.iv, &payload.salt);
    if ui.mode.is_json() {
        print_json(&result)?;
    }
    if !result.success {
        return Err(CliError::auth_failed_with_hint(
            result.error.unwrap_or_else(|| "Decryption failed".to_string()),
            "Hint: Check the password and that data, IV and salt come from the same encrypt call.",
        )
        .into());
    }
    if !ui.mode.is_json() {
        println!("{}", result.decrypted_text);
    }
    Ok(())
}

/// Parse a `--payload` value; `-` reads it from stdin.
fn parse_payload(raw: &str) -> anyhow::Result<EncodedPayload> {
    let json = if raw == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
        buffer
    } else {
        raw.to_string()
    };
    serde_json::from_str(&json)
        .map_err(|e| CliError::invalid_input(format!("Invalid payload JSON: {}", e)).into())
}

pub fn handle_hash(ctx: &AppContext, args: &HashArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context();
    let text = read_text(args.input.text.as_deref(), TrailingNewline::Keep)?;
    let algorithm = match args.algorithm.as_deref() {
        Some(name) => name.to_string(),
        None => ctx.config()?.hash_algorithm().to_string(),
    };

    let result = hash_text(&text, &algorithm);
    if ui.mode.is_json() {
        return print_json(&result);
    }
    print(&ui, &kv(&ui, "Algorithm", &result.algorithm));
    print(&ui, &kv(&ui, "Hash", &result.hash));
    Ok(())
}
