//! UI primitives for the Notepad CLI.
//!
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode selection (json, plain, pretty)
//! - **Theme**: Badge tokens and styles
//! - **Render**: Tables, headers, key-value lines, hints, errors

mod context;
mod mode;
pub mod render;
pub mod theme;

pub use context::{Terminal, UiContext, UiFlags};
pub use theme::Badge;

pub use render::{badge, header, hint, kv, print, print_error, print_json, table, Column};
