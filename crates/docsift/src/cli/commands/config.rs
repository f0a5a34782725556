//! Implementation of `docsift config`.

use std::{path::Path, process::ExitCode};

use crate::cli::config;
use crate::cli::output::{dim, header};

/// Prints the effective configuration and resolved paths.
pub fn run(store_path: &Path) -> ExitCode {
    let app_config = match config::load() {
        Ok(app_config) => app_config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", header("Configuration"));
    match config::config_path() {
        Some(path) if path.exists() => println!("  config file: {}", path.display()),
        Some(path) => println!("  config file: {} {}", path.display(), dim("(not present)")),
        None => println!("  config file: {}", dim("(no home directory)")),
    }
    println!("  store: {}", store_path.display());
    println!();
    println!("  preview_range = {}", app_config.preview_range);
    println!("  max_gap       = {}", app_config.max_gap);
    println!("  detail_range  = {}", app_config.detail_range);
    ExitCode::SUCCESS
}
