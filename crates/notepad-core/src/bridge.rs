//! Host bridge: dispatches named actions with positional JSON arguments.
//!
//! Every action returns a JSON value shaped for the host. Operations that
//! report their own failure (`encrypt`, `decrypt`, `search`, ...) still return
//! `Ok` with `success: false`; `Err` is reserved for bad calls (unknown
//! action, missing or mistyped argument, no clipboard).

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::clipboard::{self, Clipboard, ClipboardWriteOptions, MemoryClipboard};
use crate::crypto;
use crate::error::{NotepadError, Result};
use crate::history::{History, DEFAULT_MAX_HISTORY};
use crate::shared::{SharedContent, SharedSlot};
use crate::text::{self, FormattingOptions, ReplaceOptions, SearchOptions};

/// Actions understood by [`NotepadUtils::execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    GetClipboard,
    SetClipboard,
    ClearClipboard,
    GetTextStats,
    DetectPatterns,
    Encrypt,
    Decrypt,
    Hash,
    Search,
    Replace,
    FormatText,
    InitUndoRedo,
    PushState,
    Undo,
    Redo,
    GetUndoRedoState,
    ClearHistory,
    GetSharedContent,
    ClearSharedContent,
}

impl Action {
    pub const ALL: [Action; 19] = [
        Action::GetClipboard,
        Action::SetClipboard,
        Action::ClearClipboard,
        Action::GetTextStats,
        Action::DetectPatterns,
        Action::Encrypt,
        Action::Decrypt,
        Action::Hash,
        Action::Search,
        Action::Replace,
        Action::FormatText,
        Action::InitUndoRedo,
        Action::PushState,
        Action::Undo,
        Action::Redo,
        Action::GetUndoRedoState,
        Action::ClearHistory,
        Action::GetSharedContent,
        Action::ClearSharedContent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::GetClipboard => "getClipboard",
            Action::SetClipboard => "setClipboard",
            Action::ClearClipboard => "clearClipboard",
            Action::GetTextStats => "getTextStats",
            Action::DetectPatterns => "detectPatterns",
            Action::Encrypt => "encrypt",
            Action::Decrypt => "decrypt",
            Action::Hash => "hash",
            Action::Search => "search",
            Action::Replace => "replace",
            Action::FormatText => "formatText",
            Action::InitUndoRedo => "initUndoRedo",
            Action::PushState => "pushState",
            Action::Undo => "undo",
            Action::Redo => "redo",
            Action::GetUndoRedoState => "getUndoRedoState",
            Action::ClearHistory => "clearHistory",
            Action::GetSharedContent => "getSharedContent",
            Action::ClearSharedContent => "clearSharedContent",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = NotepadError;

    fn from_str(s: &str) -> Result<Self> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| NotepadError::UnknownAction(s.to_string()))
    }
}

/// Positional argument accessor.
struct Args<'a>(&'a [Value]);

impl<'a> Args<'a> {
    fn present(&self, index: usize) -> Option<&'a Value> {
        self.0.get(index).filter(|value| !value.is_null())
    }

    fn string(&self, index: usize, name: &str) -> Result<&'a str> {
        match self.present(index) {
            Some(Value::String(s)) => Ok(s),
            Some(_) => Err(invalid(name, "must be a string")),
            None => Err(invalid(name, "is required")),
        }
    }

    fn opt_string(&self, index: usize, name: &str) -> Result<Option<&'a str>> {
        match self.present(index) {
            Some(Value::String(s)) => Ok(Some(s)),
            Some(_) => Err(invalid(name, "must be a string")),
            None => Ok(None),
        }
    }

    fn flag(&self, index: usize, name: &str) -> Result<bool> {
        match self.present(index) {
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(invalid(name, "must be a boolean")),
            None => Ok(false),
        }
    }

    fn count(&self, index: usize, name: &str, default: usize) -> Result<usize> {
        match self.present(index) {
            Some(value) => value
                .as_u64()
                .and_then(|n| usize::try_from(n).ok())
                .ok_or_else(|| invalid(name, "must be a non-negative integer")),
            None => Ok(default),
        }
    }

    fn object<T: DeserializeOwned>(&self, index: usize, name: &str) -> Result<T> {
        match self.present(index) {
            Some(value @ Value::Object(_)) => Ok(serde_json::from_value(value.clone())?),
            Some(_) => Err(invalid(name, "must be an object")),
            None => Err(invalid(name, "is required")),
        }
    }
}

fn invalid(name: &str, problem: &str) -> NotepadError {
    NotepadError::InvalidInput(format!("argument '{}' {}", name, problem))
}

fn to_value<T: Serialize>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

/// Stateful front door for the host: owns the undo history, the clipboard
/// and the pending shared content.
pub struct NotepadUtils {
    clipboard: Option<Box<dyn Clipboard>>,
    history: History,
    max_history: usize,
    shared: SharedSlot,
}

impl Default for NotepadUtils {
    fn default() -> Self {
        Self::with_clipboard(Box::new(MemoryClipboard::new()))
    }
}

impl NotepadUtils {
    /// Bridge backed by an in-memory clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clipboard(clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            clipboard: Some(clipboard),
            history: History::new(),
            max_history: DEFAULT_MAX_HISTORY,
            shared: SharedSlot::default(),
        }
    }

    /// Bridge with no clipboard; clipboard actions fail.
    pub fn without_clipboard() -> Self {
        Self {
            clipboard: None,
            history: History::new(),
            max_history: DEFAULT_MAX_HISTORY,
            shared: SharedSlot::default(),
        }
    }

    /// History capacity used when `initUndoRedo` omits `maxHistory`.
    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history.max(1);
        self.history = History::with_capacity(self.max_history);
        self
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Store content shared into the app by the host.
    pub fn share(&mut self, content: SharedContent) {
        self.shared.share(content);
    }

    /// Run `action` with positional `args`.
    pub fn execute(&mut self, action: &str, args: &[Value]) -> Result<Value> {
        let action: Action = action.parse()?;
        debug!(%action, argc = args.len(), "execute");
        self.dispatch(action, &Args(args))
    }

    fn dispatch(&mut self, action: Action, args: &Args<'_>) -> Result<Value> {
        match action {
            Action::GetClipboard => to_value(&clipboard::get_clipboard(self.clipboard()?)?),
            Action::SetClipboard => {
                let options: ClipboardWriteOptions = args.object(0, "options")?;
                clipboard::set_clipboard(self.clipboard_mut()?, &options)?;
                Ok(Value::Bool(true))
            }
            Action::ClearClipboard => {
                clipboard::clear_clipboard(self.clipboard_mut()?)?;
                Ok(Value::Bool(true))
            }

            Action::GetTextStats => to_value(&text::text_stats(args.string(0, "text")?)),
            Action::DetectPatterns => to_value(&text::detect_patterns(args.string(0, "text")?)),

            Action::Encrypt => to_value(&crypto::encrypt_text(
                args.string(0, "text")?,
                args.string(1, "password")?,
            )),
            Action::Decrypt => to_value(&crypto::decrypt_text(
                args.string(0, "encryptedData")?,
                args.string(1, "password")?,
                args.string(2, "iv")?,
                args.string(3, "salt")?,
            )),
            Action::Hash => {
                let algorithm = args.opt_string(1, "algorithm")?.unwrap_or("SHA-256");
                to_value(&crypto::hash_text(args.string(0, "text")?, algorithm))
            }

            Action::Search => {
                let options = SearchOptions {
                    case_sensitive: args.flag(2, "caseSensitive")?,
                    is_regex: args.flag(3, "isRegex")?,
                    ..Default::default()
                };
                to_value(&text::search(
                    args.string(0, "text")?,
                    args.string(1, "searchTerm")?,
                    &options,
                ))
            }
            Action::Replace => {
                let options = ReplaceOptions {
                    replace_all: args.flag(3, "replaceAll")?,
                    case_sensitive: args.flag(4, "caseSensitive")?,
                    is_regex: args.flag(5, "isRegex")?,
                };
                to_value(&text::replace(
                    args.string(0, "text")?,
                    args.string(1, "searchTerm")?,
                    args.string(2, "replacement")?,
                    &options,
                ))
            }
            Action::FormatText => {
                let options: FormattingOptions = args.object(1, "options")?;
                to_value(&text::format_text(args.string(0, "text")?, &options))
            }

            Action::InitUndoRedo => {
                let initial = args.string(0, "initialText")?;
                let max = args.count(1, "maxHistory", self.max_history)?;
                to_value(&self.history.init(initial, max))
            }
            Action::PushState => to_value(&self.history.push(args.string(0, "text")?)),
            Action::Undo => to_value(&self.history.undo()),
            Action::Redo => to_value(&self.history.redo()),
            Action::GetUndoRedoState => to_value(&self.history.state()),
            Action::ClearHistory => {
                self.history.clear();
                Ok(Value::Bool(true))
            }

            Action::GetSharedContent => to_value(&self.shared.get()),
            Action::ClearSharedContent => {
                self.shared.clear();
                Ok(Value::Bool(true))
            }
        }
    }

    fn clipboard(&self) -> Result<&dyn Clipboard> {
        self.clipboard
            .as_deref()
            .ok_or(NotepadError::ClipboardUnavailable)
    }

    fn clipboard_mut(&mut self) -> Result<&mut dyn Clipboard> {
        match self.clipboard.as_deref_mut() {
            Some(clipboard) => Ok(clipboard),
            None => Err(NotepadError::ClipboardUnavailable),
        }
    }
}

impl fmt::Debug for NotepadUtils {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotepadUtils")
            .field("has_clipboard", &self.clipboard.is_some())
            .field("history", &self.history.state())
            .finish()
    }
}
