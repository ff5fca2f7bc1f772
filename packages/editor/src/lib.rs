//! # Screencraft Editor
//!
//! Schema mutation engine for the Screencraft app builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ host: canvas, property panel, key bindings  │
//! └─────────────────────────────────────────────┘
//!                     ↓ commands
//! ┌─────────────────────────────────────────────┐
//! │ session: active screen + selection          │
//! │  - Snapshot to history before each edit     │
//! │  - Run the tree mutation on the screen      │
//! │  - Publish the new schema (Arc)             │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ mutations / locator: pure tree functions    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Schema is immutable once published**: every edit produces a new one
//! 2. **Stale ids are no-ops**: commands may race a delete; nothing panics
//! 3. **Linear history**: a new edit discards the redo branch
//! 4. **Reorder and reparent stay separate**: a drop into a container at a
//!    specific spot is a reparent followed by a reorder
//!
//! ## Usage
//!
//! ```rust,ignore
//! use screencraft_editor::{EditSession, DropPosition};
//! use screencraft_schema::{ComponentType, Schema};
//!
//! let mut session = EditSession::new(Schema::template())?;
//!
//! let group = session.add_component(ComponentType::Container).unwrap();
//! session.select(Some(group.clone()));
//! let label = session.add_component(ComponentType::Text).unwrap();
//!
//! session.move_into_container(&label, None);
//! session.reorder_component(&label, &group, DropPosition::Before);
//!
//! session.undo();
//! let json = session.export_document()?;
//! ```

mod commands;
mod errors;
pub mod locator;
pub mod mutations;
mod render;
mod session;
pub mod shortcuts;
mod undo_stack;

pub use commands::Command;
pub use errors::EditorError;
pub use mutations::{Direction, DropPosition, Mutation};
pub use render::{render_screen, OutlineRenderer, RenderEvent, Renderer};
pub use session::{EditSession, SessionConfig};
pub use shortcuts::KeyChord;
pub use undo_stack::{HistoryEntry, UndoStack, DEFAULT_MAX_LEVELS};

// Re-export schema types for convenience
pub use screencraft_schema::{ComponentNode, ComponentType, Schema, Screen};
