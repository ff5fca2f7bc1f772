//! # Document Boundary
//!
//! Parsing, validation and export of application documents.
//!
//! Everything that enters the editor from outside (imported files,
//! generated schemas, saved state) passes through [`Schema::from_json`].
//! A document that does not match the schema shape is rejected as a whole
//! with [`SchemaError::InvalidDocument`]; nothing is partially accepted.

use crate::ast::{AppInfo, ComponentKind, ComponentNode, Schema, Screen, TextProps};
use crate::error::{SchemaError, SchemaResult};
use serde_json::{json, Map};
use std::collections::HashSet;
use tracing::{debug, warn};

impl Schema {
    /// Parse and validate a JSON document
    pub fn from_json(source: &str) -> SchemaResult<Self> {
        let schema: Schema = serde_json::from_str(source).map_err(|e| {
            warn!(error = %e, "Rejected malformed document");
            SchemaError::invalid_document(e.to_string())
        })?;

        schema.validate()?;

        debug!(
            app = %schema.app.name,
            screens = schema.screens.len(),
            "Parsed document"
        );

        Ok(schema)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_pretty(&self) -> SchemaResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check structural invariants that the type system does not cover
    pub fn validate(&self) -> SchemaResult<()> {
        if self.screens.is_empty() {
            return Err(SchemaError::invalid_document("document has no screens"));
        }

        let mut screen_ids = HashSet::new();
        for screen in &self.screens {
            if screen.id.is_empty() {
                return Err(SchemaError::invalid_document(format!(
                    "screen \"{}\" has an empty id",
                    screen.name
                )));
            }
            if !screen_ids.insert(screen.id.as_str()) {
                return Err(SchemaError::invalid_document(format!(
                    "duplicate screen id: {}",
                    screen.id
                )));
            }
        }

        if self.component_ids().iter().any(|id| id.is_empty()) {
            return Err(SchemaError::invalid_document("component with an empty id"));
        }

        if let Some(id) = find_duplicate_id(self) {
            return Err(SchemaError::invalid_document(format!(
                "duplicate component id: {}",
                id
            )));
        }

        Ok(())
    }

    /// Starter document used for new projects and resets
    pub fn template() -> Self {
        Schema {
            app: AppInfo {
                name: "My App".to_string(),
                package_name: "com.example.myapp".to_string(),
                icon: String::new(),
            },
            theme: json!({ "name": "minimal" }),
            screens: vec![Screen {
                id: "home".to_string(),
                name: "Home".to_string(),
                components: vec![ComponentNode {
                    id: "text_welcome".to_string(),
                    kind: ComponentKind::Text {
                        props: TextProps {
                            text: "Welcome".to_string(),
                        },
                    },
                    style: Map::new(),
                }],
            }],
        }
    }
}

/// First component id that occurs more than once anywhere in the document
pub fn find_duplicate_id(schema: &Schema) -> Option<&str> {
    let mut seen = HashSet::new();
    schema
        .component_ids()
        .into_iter()
        .find(|id| !seen.insert(*id))
}
