use super::{read_document, resolve_path};
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use screencraft_editor::{Command, EditSession};
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Document to edit
    pub file: PathBuf,

    /// JSON array of editing commands
    pub script: PathBuf,

    /// Where to write the result (defaults to overwriting the document)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn apply(args: ApplyArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;

    let document_path = resolve_path(cwd, &args.file);
    let schema = read_document(&document_path)?;

    let script_path = resolve_path(cwd, &args.script);
    let script_source = fs::read_to_string(&script_path)
        .with_context(|| format!("Failed to read {}", script_path.display()))?;
    let commands = Command::parse_script(&script_source)
        .with_context(|| format!("Invalid script {}", script_path.display()))?;

    let mut session = EditSession::with_config(schema, config.session_config())?;

    let total = commands.len();
    for command in commands {
        session.apply(command);
    }
    info!(commands = total, undo_levels = session.history().undo_levels(), "Replayed script");

    let output_path = args
        .output
        .as_deref()
        .map(|path| resolve_path(cwd, path))
        .unwrap_or(document_path);
    fs::write(&output_path, session.export_document()?)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!(
        "{} Applied {} commands → {}",
        "✓".green(),
        total,
        output_path.display()
    );
    if let Some(label) = session.history().undo_description() {
        println!("  Last edit: {}", label.dimmed());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CONFIG_NAME;
    use screencraft_schema::{ComponentType, Schema};

    fn project() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("app.json"),
            Schema::template().to_json_pretty().unwrap(),
        )
        .unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_NAME),
            r#"{ "idSeed": "cli" }"#,
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_apply_writes_output() {
        let dir = project();
        fs::write(
            dir.path().join("edits.json"),
            r#"[
                { "op": "addComponent", "type": "Container" },
                { "op": "moveIntoContainer", "draggedId": "text_welcome", "containerId": "container_cli-1" }
            ]"#,
        )
        .unwrap();

        let args = ApplyArgs {
            file: PathBuf::from("app.json"),
            script: PathBuf::from("edits.json"),
            output: Some(PathBuf::from("out.json")),
        };
        apply(args, dir.path().to_str().unwrap()).unwrap();

        let source = fs::read_to_string(dir.path().join("out.json")).unwrap();
        let schema = Schema::from_json(&source).unwrap();
        let roots = &schema.screens[0].components;
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].component_type(), ComponentType::Container);
        assert_eq!(roots[0].children().unwrap()[0].id, "text_welcome");

        // Input is left alone when an output path is given
        let original = fs::read_to_string(dir.path().join("app.json")).unwrap();
        assert_eq!(Schema::from_json(&original).unwrap(), Schema::template());
    }

    #[test]
    fn test_apply_rejects_bad_script_without_writing() {
        let dir = project();
        fs::write(dir.path().join("edits.json"), r#"{ "op": "undo" }"#).unwrap();

        let args = ApplyArgs {
            file: PathBuf::from("app.json"),
            script: PathBuf::from("edits.json"),
            output: None,
        };
        assert!(apply(args, dir.path().to_str().unwrap()).is_err());

        let source = fs::read_to_string(dir.path().join("app.json")).unwrap();
        assert_eq!(Schema::from_json(&source).unwrap(), Schema::template());
    }
}
