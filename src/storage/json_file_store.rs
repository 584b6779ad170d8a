//! JSON file implementation of [`ContactStore`].

use crate::error::{StorageError, StorageResult};
use crate::models::{AddressBook, Record};
use crate::storage::traits::ContactStore;
use indexmap::IndexMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File used when no path is configured.
pub const DEFAULT_BOOK_PATH: &str = "address_book.json";

/// Contact store backed by a JSON file.
///
/// The file holds one object mapping each contact name to
/// `{"name": ..., "phones": [...]}`, in the book's insertion order.
/// Saving rewrites the file in place.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_BOOK_PATH)
    }
}

impl ContactStore for JsonFileStore {
    fn load(&self) -> StorageResult<Option<AddressBook>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %self.path.display(), "Address book file not found");
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let entries: IndexMap<String, Record> = serde_json::from_str(&contents)?;
        let book = AddressBook::from_entries(entries)?;
        tracing::info!(path = %self.path.display(), records = book.len(), "Address book loaded");
        Ok(Some(book))
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let json = serde_json::to_string(book.entries())?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;
        tracing::info!(path = %self.path.display(), records = book.len(), "Address book saved");
        Ok(())
    }
}
