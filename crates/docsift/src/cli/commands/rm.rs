//! Implementation of `docsift rm`.

use std::{path::Path, process::ExitCode};

use super::open_store;
use crate::cli::args::RmArgs;

/// Removes a document from the store.
pub fn run(store_path: &Path, args: &RmArgs) -> ExitCode {
    let mut store = match open_store(store_path) {
        Ok(store) => store,
        Err(code) => return code,
    };

    if !store.remove(args.id) {
        eprintln!("error: no document with id {}", args.id);
        return ExitCode::FAILURE;
    }

    if let Err(e) = store.save() {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    println!("removed {}", args.id);
    ExitCode::SUCCESS
}
