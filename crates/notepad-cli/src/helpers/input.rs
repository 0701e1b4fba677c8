//! Input handling helpers for text, passwords and JSON arguments.

use std::io::{self, IsTerminal, Read};

use dialoguer::Password;
use serde_json::Value;

use crate::constants::env_vars;
use crate::errors::CliError;

/// What to do with the final line break of piped stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingNewline {
    /// Byte-exact input, so `hash` agrees with `sha256sum`
    Keep,
    /// Drop one `\n` or `\r\n` left by `echo` or a heredoc
    Strip,
}

/// Read the text to operate on from `--text`, or stdin when it is piped.
///
/// `--text` is always used as given. Piped input is read to the end and its
/// last line break handled per `newline`.
pub fn read_text(text: Option<&str>, newline: TrailingNewline) -> anyhow::Result<String> {
    if let Some(value) = text {
        return Ok(value.to_string());
    }

    if io::stdin().is_terminal() {
        return Err(CliError::invalid_input(
            "No text provided. Use --text or pipe content via stdin",
        )
        .into());
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    Ok(match newline {
        TrailingNewline::Keep => buffer,
        TrailingNewline::Strip => strip_trailing_newline(buffer),
    })
}

fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// Resolve the password from `--password`, then `NOTEPAD_PASSWORD`, then an
/// interactive prompt (with confirmation when `confirm` is set).
pub fn resolve_password(
    flag: Option<&str>,
    confirm: bool,
    interactive: bool,
) -> anyhow::Result<String> {
    if let Some(value) = flag {
        return Ok(value.to_string());
    }
    if let Ok(value) = std::env::var(env_vars::PASSWORD) {
        if !value.is_empty() {
            return Ok(value);
        }
    }
    if !interactive {
        return Err(CliError::invalid_input(format!(
            "No password provided and no TTY available. Use --password or set {}",
            env_vars::PASSWORD
        ))
        .into());
    }

    let prompt = Password::new()
        .with_prompt("Password")
        .allow_empty_password(true);
    let prompt = if confirm {
        prompt.with_confirmation("Confirm password", "Passwords do not match")
    } else {
        prompt
    };
    prompt
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}

/// Parse the positional-argument array for a bridge action.
///
/// A missing value means no arguments; a single non-array value is treated
/// as a one-element argument list.
pub fn parse_json_args(raw: Option<&str>) -> anyhow::Result<Vec<Value>> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| CliError::invalid_input(format!("Invalid JSON arguments: {}", e)))?;
    Ok(match value {
        Value::Array(items) => items,
        other => vec![other],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_flag_wins() {
        assert_eq!(
            read_text(Some("given\n"), TrailingNewline::Strip).unwrap(),
            "given\n"
        );
    }

    #[test]
    fn test_strip_single_trailing_newline() {
        assert_eq!(strip_trailing_newline("a\n\n".to_string()), "a\n");
        assert_eq!(strip_trailing_newline("a\r\n".to_string()), "a");
        assert_eq!(strip_trailing_newline("a".to_string()), "a");
    }

    #[test]
    fn test_password_flag_wins() {
        assert_eq!(resolve_password(Some("pw"), false, false).unwrap(), "pw");
    }

    #[test]
    fn test_parse_json_args() {
        assert!(parse_json_args(None).unwrap().is_empty());
        assert_eq!(
            parse_json_args(Some(r#"["a", true]"#)).unwrap(),
            vec![json!("a"), json!(true)]
        );
        assert_eq!(parse_json_args(Some(r#""solo""#)).unwrap(), vec![json!("solo")]);
    }

    #[test]
    fn test_parse_json_args_rejects_bad_json() {
        let err = parse_json_args(Some("[unclosed")).unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
