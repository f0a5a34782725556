//! Implementation of `docsift add`.

use std::{path::Path, process::ExitCode};

use docsift_document::Document;
use docsift_ingest::parse_file;

use super::open_store;
use crate::cli::args::AddArgs;
use crate::cli::output::dim;

/// Ingests each file and persists it; keeps going past per-file failures.
pub fn run(store_path: &Path, args: &AddArgs) -> ExitCode {
    let mut store = match open_store(store_path) {
        Ok(store) => store,
        Err(code) => return code,
    };

    let mut failed = false;
    for file in &args.files {
        let parsed = match parse_file(file) {
            Ok(parsed) => parsed,
            Err(e) => {
                eprintln!("error: {e}");
                failed = true;
                continue;
            }
        };

        let file_name = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.display().to_string());

        let chars = parsed.text.chars().count();
        let document = Document::new(
            file_name.clone(),
            parsed.text,
            parsed.html,
            parsed.has_original_styles,
        );
        let id = store.add(document);
        println!("added {file_name} as {id} {}", dim(&format!("({chars} chars)")));
    }

    if let Err(e) = store.save() {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
