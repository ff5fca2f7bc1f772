//! Serializable editing commands.
//!
//! Every public session operation has a matching [`Command`], so a host can
//! queue them, bind them to keys, or replay a recorded script.

use crate::errors::EditorError;
use crate::mutations::{Direction, DropPosition};
use screencraft_schema::{ComponentNode, ComponentType};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Command {
    SelectScreen {
        #[serde(rename = "screenId")]
        screen_id: String,
    },
    Select {
        #[serde(rename = "componentId", default)]
        component_id: Option<String>,
    },
    AddComponent {
        #[serde(rename = "type")]
        component_type: ComponentType,
    },
    UpdateComponent {
        component: ComponentNode,
    },
    DeleteComponent {
        #[serde(rename = "componentId")]
        component_id: String,
    },
    DuplicateComponent {
        #[serde(rename = "componentId")]
        component_id: String,
    },
    MoveComponent {
        #[serde(rename = "componentId")]
        component_id: String,
        direction: Direction,
    },
    ReorderComponent {
        #[serde(rename = "draggedId")]
        dragged_id: String,
        #[serde(rename = "targetId")]
        target_id: String,
        position: DropPosition,
    },
    MoveIntoContainer {
        #[serde(rename = "draggedId")]
        dragged_id: String,
        #[serde(rename = "containerId", default)]
        container_id: Option<String>,
    },
    SetTheme {
        theme: Value,
    },
    Undo,
    Redo,
}

impl Command {
    /// Parse a JSON array of commands
    pub fn parse_script(source: &str) -> Result<Vec<Command>, EditorError> {
        serde_json::from_str(source).map_err(|e| EditorError::InvalidScript(e.to_string()))
    }
}
