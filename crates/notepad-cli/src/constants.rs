//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (explicit config file, batch file).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Decryption failed (wrong password or corrupted payload).
    pub const AUTH_FAILED: i32 = 5;
}

/// Environment variables read by the CLI.
pub mod env_vars {
    /// Password used by `encrypt` / `decrypt` when `--password` is absent.
    pub const PASSWORD: &str = "NOTEPAD_PASSWORD";

    /// Config file override.
    pub const CONFIG: &str = "NOTEPAD_CONFIG";

    /// Log filter directives (`EnvFilter` syntax).
    pub const LOG: &str = "NOTEPAD_LOG";
}
