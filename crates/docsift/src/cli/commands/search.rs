//! Implementation of `docsift search`.

use std::{path::Path, process::ExitCode};

use docsift_search::SearchOptions;

use super::open_store;
use crate::cli::args::SearchArgs;
use crate::cli::{config, output};

/// Searches the stored documents and prints ranked matches.
pub fn run(store_path: &Path, args: &SearchArgs) -> ExitCode {
    let app_config = match config::load() {
        Ok(app_config) => app_config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let store = match open_store(store_path) {
        Ok(store) => store,
        Err(code) => return code,
    };

    let options = SearchOptions {
        max_gap: args.max_gap.unwrap_or(app_config.max_gap),
        is_exact: args.exact,
        preview_range: args.preview.unwrap_or(app_config.preview_range),
    };

    let mut results = docsift_search::search(&args.query, store.documents(), &options);
    if args.limit > 0 {
        results.truncate(args.limit);
    }

    if args.json {
        output::print_results_json(&results);
    } else {
        output::print_results(&results);
    }
    ExitCode::SUCCESS
}
