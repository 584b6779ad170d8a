//! The address book: every contact, keyed by name.

use super::outcome::RecordDeletion;
use super::record::Record;
use crate::error::{StorageError, StorageResult};
use crate::search::SearchQuery;
use crate::storage::{ContactStore, JsonFileStore};
use indexmap::IndexMap;
use std::path::Path;

/// Collection of contact records keyed by name.
///
/// Each record is stored under its own name. Entries keep their insertion
/// order, which is also the order used for search results and on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    entries: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a book from `path`, or start empty if the file does not exist.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        Ok(JsonFileStore::new(path.as_ref()).load()?.unwrap_or_default())
    }

    /// Build a book from persisted entries, checking each key against its record.
    pub(crate) fn from_entries(entries: IndexMap<String, Record>) -> StorageResult<Self> {
        if let Some((key, record)) = entries
            .iter()
            .find(|(key, record)| key.as_str() != record.name().as_str())
        {
            return Err(StorageError::KeyMismatch {
                key: key.clone(),
                name: record.name().as_str().to_string(),
            });
        }
        Ok(Self { entries })
    }

    pub(crate) fn entries(&self) -> &IndexMap<String, Record> {
        &self.entries
    }

    /// Store `record` under its name, replacing any record already there.
    ///
    /// A replaced record keeps its position in the book. Returns the record it
    /// replaced, if any.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        tracing::debug!(name = %key, phones = record.phones().len(), "Adding record");
        self.entries.insert(key, record)
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.entries.get(name)
    }

    /// Look up a record by exact name for phone edits.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.entries.get_mut(name)
    }

    /// Remove the record stored under `name`.
    pub fn delete(&mut self, name: &str) -> RecordDeletion {
        match self.entries.shift_remove(name) {
            Some(record) => {
                tracing::debug!(name, "Record deleted");
                RecordDeletion::Deleted(record)
            }
            None => RecordDeletion::NotFound(name.to_string()),
        }
    }

    /// Records whose name contains `query` (ignoring case) or that have a
    /// phone containing `query`, in book order.
    pub fn search(&self, query: &str) -> Vec<Record> {
        let query = SearchQuery::new(query);
        let results: Vec<Record> = self
            .entries
            .values()
            .filter(|record| query.matches(record))
            .cloned()
            .collect();
        tracing::debug!(query = %query.as_str(), results = results.len(), "Search completed");
        results
    }

    /// Replace the contents of this book with the ones held by `store`.
    ///
    /// If the store has nothing saved, the current contents are kept.
    pub fn load_from(&mut self, store: &impl ContactStore) -> StorageResult<()> {
        if let Some(book) = store.load()? {
            *self = book;
        }
        Ok(())
    }

    /// Write the whole book to `store`.
    pub fn save_to(&self, store: &impl ContactStore) -> StorageResult<()> {
        store.save(self)
    }

    /// Replace the contents of this book with the ones stored at `path`.
    ///
    /// A missing file leaves the book as it is.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> StorageResult<()> {
        self.load_from(&JsonFileStore::new(path.as_ref()))
    }

    /// Write the whole book to `path`, overwriting it.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> StorageResult<()> {
        self.save_to(&JsonFileStore::new(path.as_ref()))
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.entries.values()
    }

    /// Contact names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
