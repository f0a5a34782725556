//! Implementation of `docsift get`.

use std::{path::Path, process::ExitCode};

use docsift_search::{highlight_text, text_to_html};

use super::open_store;
use crate::cli::args::GetArgs;

/// Prints one stored document: plain text, stored HTML, or highlighted HTML.
pub fn run(store_path: &Path, args: &GetArgs) -> ExitCode {
    let store = match open_store(store_path) {
        Ok(store) => store,
        Err(code) => return code,
    };

    let Some(document) = store.get(args.id) else {
        eprintln!("error: no document with id {}", args.id);
        return ExitCode::FAILURE;
    };

    if args.html {
        println!("{}", document.html_content);
    } else if let Some(query) = &args.highlight {
        let highlighted = highlight_text(&document.content, query, args.exact);
        println!("{}", text_to_html(&highlighted));
    } else {
        println!("{}", document.content);
    }
    ExitCode::SUCCESS
}
