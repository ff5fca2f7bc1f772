use super::{read_document, resolve_path};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use screencraft_editor::{render_screen, OutlineRenderer};
use screencraft_schema::{Schema, Screen};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Document to print
    pub file: PathBuf,

    /// Only print this screen
    #[arg(short, long)]
    pub screen: Option<String>,
}

pub fn tree(args: TreeArgs, cwd: &str) -> Result<()> {
    let schema = read_document(&resolve_path(cwd, &args.file))?;

    let screens: Vec<&Screen> = match &args.screen {
        Some(id) => vec![schema
            .screen(id)
            .ok_or_else(|| anyhow!("No screen with id '{}'", id))?],
        None => schema.screens.iter().collect(),
    };

    for screen in screens {
        println!(
            "{} {}",
            screen.name.bright_white().bold(),
            format!("({})", screen.id).dimmed()
        );
        print!("{}", outline(&schema, screen));
    }

    Ok(())
}

fn outline(schema: &Schema, screen: &Screen) -> String {
    let mut renderer = OutlineRenderer::new();
    render_screen(&mut renderer, screen, &schema.theme).concat()
}
