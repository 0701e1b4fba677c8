//! Bounded undo/redo history of text snapshots.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Capacity used until [`History::init`] says otherwise.
pub const DEFAULT_MAX_HISTORY: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UndoRedoState {
    pub can_undo: bool,
    pub can_redo: bool,
    /// Index of the current snapshot, `-1` when the history is empty.
    pub current_position: i64,
    pub history_length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UndoRedoResult {
    pub text: String,
    pub success: bool,
    pub state: UndoRedoState,
}

/// Linear history with a cursor. Pushing after an undo discards the redo tail.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<String>,
    position: Option<usize>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self {
            entries: VecDeque::new(),
            position: None,
            capacity: DEFAULT_MAX_HISTORY,
        }
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty history that keeps at most `capacity` snapshots (at least 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            ..Self::default()
        }
    }

    /// Reset to a single `initial` snapshot. Capacity is at least 1.
    pub fn init(&mut self, initial: impl Into<String>, max_history: usize) -> UndoRedoState {
        self.entries.clear();
        self.entries.push_back(initial.into());
        self.position = Some(0);
        self.capacity = max_history.max(1);
        debug!(capacity = self.capacity, "history initialized");
        self.state()
    }

    /// Record a new snapshot after the cursor.
    pub fn push(&mut self, text: impl Into<String>) -> UndoRedoState {
        let keep = self.position.map_or(0, |pos| pos + 1);
        self.entries.truncate(keep);
        self.entries.push_back(text.into());

        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        self.position = Some(self.entries.len() - 1);
        self.state()
    }

    pub fn undo(&mut self) -> UndoRedoResult {
        match self.position {
            Some(pos) if pos > 0 => {
                self.position = Some(pos - 1);
                self.result(self.entries[pos - 1].clone(), true)
            }
            _ => {
                let text = self.entries.front().cloned().unwrap_or_default();
                self.result(text, false)
            }
        }
    }

    pub fn redo(&mut self) -> UndoRedoResult {
        match self.position {
            Some(pos) if pos + 1 < self.entries.len() => {
                self.position = Some(pos + 1);
                self.result(self.entries[pos + 1].clone(), true)
            }
            _ => {
                let text = self.entries.back().cloned().unwrap_or_default();
                self.result(text, false)
            }
        }
    }

    pub fn state(&self) -> UndoRedoState {
        let position = self.position.map_or(-1, |pos| pos as i64);
        UndoRedoState {
            can_undo: position > 0,
            can_redo: position + 1 < self.entries.len() as i64,
            current_position: position,
            history_length: self.entries.len(),
        }
    }

    /// Drop every snapshot. Capacity is kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.position = None;
    }

    /// Snapshot under the cursor.
    pub fn current(&self) -> Option<&str> {
        self.position
            .and_then(|pos| self.entries.get(pos))
            .map(String::as_str)
    }

    fn result(&self, text: String, success: bool) -> UndoRedoResult {
        UndoRedoResult {
            text,
            success,
            state: self.state(),
        }
    }
}
