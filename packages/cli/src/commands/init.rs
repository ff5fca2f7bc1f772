use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use screencraft_schema::Schema;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Document file to create
    #[arg(short, long, default_value = "app.json")]
    pub schema_file: String,

    /// Force overwrite existing files
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!(
        "{}",
        "📝 Initializing Screencraft project...".bright_blue().bold()
    );

    let config = Config {
        schema_file: args.schema_file.clone(),
        ..Config::default()
    };

    let schema_path = config.get_schema_path(cwd);
    if !schema_path.exists() || args.force {
        fs::write(&schema_path, Schema::template().to_json_pretty()?)?;
        println!("  {} Created {}", "✓".green(), args.schema_file);
    }

    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    println!();
    println!("{}", "✨ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Inspect the document:  screencraft tree {}", args.schema_file);
    println!("  2. Replay edits:          screencraft apply {} edits.json", args.schema_file);

    Ok(())
}
