//! Implementation of `docsift ls`.

use std::{path::Path, process::ExitCode};

use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};

use super::open_store;
use crate::cli::output::dim;

/// Lists stored documents in a table.
pub fn run(store_path: &Path) -> ExitCode {
    let store = match open_store(store_path) {
        Ok(store) => store,
        Err(code) => return code,
    };

    if store.is_empty() {
        println!("{}", dim("store is empty"));
        return ExitCode::SUCCESS;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["id", "file", "date", "chars", "styled"]);

    for document in store.documents() {
        table.add_row(vec![
            document.id.map_or_else(String::new, |id| id.to_string()),
            document.file_name.clone(),
            document.date.format("%Y-%m-%d %H:%M").to_string(),
            document.content.chars().count().to_string(),
            if document.has_original_styles {
                String::from("yes")
            } else {
                String::from("no")
            },
        ]);
    }

    println!("{table}");
    ExitCode::SUCCESS
}
