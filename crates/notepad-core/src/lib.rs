//! # Notepad Core
//!
//! Core library for Notepad Utils - text utilities for a notepad host app,
//! centered on password-based encryption and hashing.
//!
//! This crate holds the domain logic independent of any host or CLI.
//!
//! ## Architecture
//!
//! - **crypto**: PBKDF2 key derivation, AES-256-CBC encryption, digests
//! - **text**: statistics, pattern detection, search/replace, formatting
//! - **history**: bounded undo/redo snapshots
//! - **clipboard**: clipboard port and in-memory implementation
//! - **shared**: content shared into the app by another app
//! - **bridge**: named-action dispatcher for hosts

pub mod bridge;
pub mod clipboard;
pub mod crypto;
pub mod error;
pub mod history;
pub mod shared;
pub mod text;

pub use bridge::{Action, NotepadUtils};
pub use clipboard::{Clipboard, MemoryClipboard};
pub use error::{NotepadError, Result};
pub use history::History;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
