pub mod apply;
pub mod init;
pub mod tree;
pub mod validate;

pub use apply::{apply, ApplyArgs};
pub use init::{init, InitArgs};
pub use tree::{tree, TreeArgs};
pub use validate::{validate, ValidateArgs};

use anyhow::{Context, Result};
use screencraft_schema::Schema;
use std::path::{Path, PathBuf};

/// Resolve a user-supplied path against the working directory
fn resolve_path(cwd: &str, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        PathBuf::from(cwd).join(path)
    }
}

/// Read and validate a document
fn read_document(path: &Path) -> Result<Schema> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Schema::from_json(&source).with_context(|| format!("Invalid document {}", path.display()))
}
