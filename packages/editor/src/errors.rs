//! Error types for the editor

use screencraft_schema::SchemaError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Invalid command script: {0}")]
    InvalidScript(String),
}

impl EditorError {
    /// True when an imported document was rejected
    pub fn is_invalid_document(&self) -> bool {
        matches!(self, EditorError::Schema(SchemaError::InvalidDocument(_)))
    }
}
