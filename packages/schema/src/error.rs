use thiserror::Error;

pub type SchemaResult<T> = Result<T, SchemaError>;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Unknown component type: {0}")]
    UnknownComponentType(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SchemaError {
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::InvalidDocument(message.into())
    }
}
