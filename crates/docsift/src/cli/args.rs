//! Argument structs for the docsift subcommands.

use std::path::PathBuf;

use clap::Args;

/// Arguments for `docsift add`.
#[derive(Args)]
pub struct AddArgs {
    /// Files to ingest (pdf, docx, or txt)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Arguments for `docsift search`.
#[derive(Args)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Exact substring matching instead of interval matching
    #[arg(long)]
    pub exact: bool,

    /// Maximum gap between matched characters in interval mode
    #[arg(long)]
    pub max_gap: Option<usize>,

    /// Characters of context on each side of a match
    #[arg(long)]
    pub preview: Option<usize>,

    /// Maximum results to print
    #[arg(short = 'n', long, default_value = "10")]
    pub limit: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `docsift get`.
#[derive(Args)]
pub struct GetArgs {
    /// Document id
    pub id: u64,

    /// Highlight occurrences of this query in the output (emits HTML)
    #[arg(long)]
    pub highlight: Option<String>,

    /// Exact matching for --highlight
    #[arg(long)]
    pub exact: bool,

    /// Print the stored styled HTML instead of plain text
    #[arg(long)]
    pub html: bool,
}

/// Arguments for `docsift rm`.
#[derive(Args)]
pub struct RmArgs {
    /// Document id
    pub id: u64,
}
