//! Implementations of the docsift subcommands.

pub mod add;
pub mod config;
pub mod get;
pub mod ls;
pub mod rm;
pub mod search;

use std::{path::PathBuf, process::ExitCode};

use docsift_store::{JsonStore, StoreError};

/// Resolves the store file path: explicit flag or the default data directory.
pub fn resolve_store_path(explicit: Option<PathBuf>) -> Result<PathBuf, StoreError> {
    match explicit {
        Some(path) => Ok(path),
        None => docsift_store::default_store_path(),
    }
}

/// Opens the store, printing the error and returning an exit code on failure.
fn open_store(path: &std::path::Path) -> Result<JsonStore, ExitCode> {
    JsonStore::open(path).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::FAILURE
    })
}
