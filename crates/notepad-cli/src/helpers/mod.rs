//! Helper functions shared by commands.

pub mod input;

pub use input::{parse_json_args, read_text, resolve_password, TrailingNewline};
