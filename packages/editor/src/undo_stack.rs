//! # Undo/Redo Stack
//!
//! Linear history of whole-schema snapshots.
//!
//! ## Design
//!
//! - Before each edit the session records the current schema
//! - Undo swaps the current schema for the most recent snapshot and keeps
//!   the current one as the nearest redo entry
//! - Redo does the reverse
//! - Recording a new edit discards every redo entry
//! - The undo side is capped; the oldest snapshot is evicted first
//!
//! Snapshots are `Arc<Schema>` handles. A published schema is never mutated
//! again, so keeping the handle is equivalent to a deep copy.

use screencraft_schema::Schema;
use std::collections::VecDeque;
use std::sync::Arc;

/// Default number of undo levels
pub const DEFAULT_MAX_LEVELS: usize = 50;

/// A schema snapshot plus the label of the edit made on top of it
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub schema: Arc<Schema>,
    pub description: Option<String>,
}

/// Undo/redo stack for an editing session
#[derive(Debug)]
pub struct UndoStack {
    /// Past snapshots, oldest first
    undo_stack: Vec<HistoryEntry>,

    /// Future snapshots, nearest first
    redo_stack: VecDeque<HistoryEntry>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,
}

impl UndoStack {
    /// Create a new undo stack with the default max levels (50)
    pub fn new() -> Self {
        Self::with_max_levels(DEFAULT_MAX_LEVELS)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: VecDeque::new(),
            max_levels,
        }
    }

    /// Record the schema as it was before an edit
    pub fn record(&mut self, current: &Arc<Schema>, description: Option<&str>) {
        self.push_undo(HistoryEntry {
            schema: Arc::clone(current),
            description: description.map(str::to_string),
        });

        // New edit invalidates the redo branch
        self.redo_stack.clear();
    }

    /// Step back. Returns the schema to install, or `None` if there is nothing to undo.
    pub fn undo(&mut self, current: &Arc<Schema>) -> Option<Arc<Schema>> {
        let entry = self.undo_stack.pop()?;

        self.redo_stack.push_front(HistoryEntry {
            schema: Arc::clone(current),
            description: entry.description.clone(),
        });

        Some(entry.schema)
    }

    /// Step forward again after an undo
    pub fn redo(&mut self, current: &Arc<Schema>) -> Option<Arc<Schema>> {
        let entry = self.redo_stack.pop_front()?;

        self.push_undo(HistoryEntry {
            schema: Arc::clone(current),
            description: entry.description.clone(),
        });

        Some(entry.schema)
    }

    fn push_undo(&mut self, entry: HistoryEntry) {
        self.undo_stack.push(entry);

        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_levels(&self) -> usize {
        self.max_levels
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Label of the edit the next undo would revert
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack
            .last()
            .and_then(|entry| entry.description.as_deref())
    }

    /// Label of the edit the next redo would reapply
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack
            .front()
            .and_then(|entry| entry.description.as_deref())
    }

    /// Oldest snapshot still reachable by undo
    pub fn oldest(&self) -> Option<&Arc<Schema>> {
        self.undo_stack.first().map(|entry| &entry.schema)
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}
