//! JSON-file document store for docsift.
//!
//! Single-user, single-process persistence: documents live in one JSON file,
//! ids are assigned as an increasing ordinal on insert, and retrieval is
//! ordered by id. There is no concurrent-writer model.

#![warn(missing_docs)]

mod error;

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use docsift_document::Document;
pub use error::StoreError;
use serde::{Deserialize, Serialize};

/// On-disk shape of the store file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    /// Next id to assign.
    next_id: u64,
    /// All persisted documents, ordered by id.
    documents: Vec<Document>,
}

/// A document store backed by a single JSON file.
#[derive(Debug)]
pub struct JsonStore {
    /// Path of the backing file.
    path: PathBuf,
    /// Next id to assign.
    next_id: u64,
    /// Persisted documents, ordered by id ascending.
    documents: Vec<Document>,
}

impl JsonStore {
    /// Opens the store at `path`, creating an empty store if the file does
    /// not exist yet.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Ok(Self {
                path: path.to_path_buf(),
                next_id: 1,
                documents: Vec::new(),
            });
        }

        let raw = fs::read_to_string(path)?;
        let file: StoreFile = serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            next_id: file.next_id.max(1),
            documents: file.documents,
        })
    }

    /// Writes the store back to its file, creating parent directories.
    pub fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = StoreFile {
            next_id: self.next_id,
            documents: self.documents.clone(),
        };
        let json = serde_json::to_string_pretty(&file).map_err(|e| StoreError::Corrupt {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Persists a document, assigning and returning its id.
    pub fn add(&mut self, mut document: Document) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        document.id = Some(id);
        self.documents.push(document);
        id
    }

    /// All documents, ordered by id ascending.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Looks up a document by id.
    pub fn get(&self, id: u64) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == Some(id))
    }

    /// Removes a document by id; returns whether anything was removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.documents.len();
        self.documents.retain(|d| d.id != Some(id));
        self.documents.len() != before
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Default location of the store file in the user's data directory.
pub fn default_store_path() -> Result<PathBuf, StoreError> {
    let dirs = ProjectDirs::from("", "", "docsift").ok_or(StoreError::NoDataDir)?;
    Ok(dirs.data_dir().join("documents.json"))
}
