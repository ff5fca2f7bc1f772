mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{apply, init, tree, validate, ApplyArgs, InitArgs, TreeArgs, ValidateArgs};

/// Screencraft CLI - edit mobile app documents from the command line
#[derive(Parser, Debug)]
#[command(name = "screencraft")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new Screencraft project
    Init(InitArgs),

    /// Check that a document is well formed
    Validate(ValidateArgs),

    /// Print the layers outline of a document
    Tree(TreeArgs),

    /// Replay a script of editing commands against a document
    Apply(ApplyArgs),
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?.display().to_string();

    match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Validate(args) => validate(args, &cwd),
        Command::Tree(args) => tree(args, &cwd),
        Command::Apply(args) => apply(args, &cwd),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
