use super::{read_document, resolve_path};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Document to check
    pub file: PathBuf,
}

pub fn validate(args: ValidateArgs, cwd: &str) -> Result<()> {
    let path = resolve_path(cwd, &args.file);
    let schema = read_document(&path)?;

    println!("{} {}", "✓".green(), path.display());
    println!(
        "  {} ({})",
        schema.app.name.bright_white().bold(),
        schema.app.package_name
    );

    for screen in &schema.screens {
        println!(
            "  {} {} - {} root components",
            "•".blue(),
            screen.name,
            screen.components.len()
        );
    }

    println!(
        "  {} screens, {} components",
        schema.screens.len(),
        schema.component_ids().len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use screencraft_schema::Schema;

    #[test]
    fn test_validate_accepts_template() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("app.json"),
            Schema::template().to_json_pretty().unwrap(),
        )
        .unwrap();

        let args = ValidateArgs {
            file: PathBuf::from("app.json"),
        };
        assert!(validate(args, dir.path().to_str().unwrap()).is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dup.json");
        std::fs::write(
            &path,
            r#"{
                "app": { "name": "x", "packageName": "y" },
                "screens": [{ "id": "s", "name": "S", "components": [
                    { "id": "a", "type": "Spacer", "props": { "height": 4 } },
                    { "id": "a", "type": "Spacer", "props": { "height": 8 } }
                ] }]
            }"#,
        )
        .unwrap();

        let err = validate(ValidateArgs { file: path }, "/").unwrap_err();
        assert!(err.to_string().contains("Invalid document"));
    }

    #[test]
    fn test_validate_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = ValidateArgs {
            file: PathBuf::from("missing.json"),
        };
        assert!(validate(args, dir.path().to_str().unwrap()).is_err());
    }
}
