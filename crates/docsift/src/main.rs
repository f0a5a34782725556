//! Command-line interface for the docsift document search tool.

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};

mod cli;

use cli::args::{AddArgs, GetArgs, RmArgs, SearchArgs};
use cli::commands;

#[derive(Parser)]
#[command(name = "docsift")]
#[command(about = "Document search - ingest PDF/DOCX/TXT files and search them")]
/// Top-level CLI options.
struct Cli {
    /// Path to the document store file (defaults to the user data directory)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    /// Subcommand to execute.
    command: Commands,
}

#[derive(Subcommand)]
/// Supported `docsift` subcommands.
enum Commands {
    /// Ingest files into the document store
    Add(AddArgs),

    /// Search stored documents
    Search(SearchArgs),

    /// List stored documents
    Ls,

    /// Print a stored document
    Get(GetArgs),

    /// Remove a document from the store
    Rm(RmArgs),

    /// Show the effective configuration
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let store_path = match commands::resolve_store_path(cli.store) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Add(args) => commands::add::run(&store_path, &args),
        Commands::Search(args) => commands::search::run(&store_path, &args),
        Commands::Ls => commands::ls::run(&store_path),
        Commands::Get(args) => commands::get::run(&store_path, &args),
        Commands::Rm(args) => commands::rm::run(&store_path, &args),
        Commands::Config => commands::config::run(&store_path),
    }
}
