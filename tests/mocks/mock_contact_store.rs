use address_book::error::{StorageError, StorageResult};
use address_book::{AddressBook, ContactStore};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory contact store for testing.
///
/// Keeps the last saved book in memory and tracks method calls for
/// verification. Can be told to fail saves to exercise error propagation.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactStore {
    book: Arc<Mutex<Option<AddressBook>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_saves: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockContactStore {
    /// Create a store with nothing saved.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let store = Self::new();
        *store.book.lock().unwrap() = Some(book);
        store
    }

    /// Make every following save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// The book held by the store, if anything was saved.
    pub fn stored(&self) -> Option<AddressBook> {
        self.book.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn increment_call_count(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactStore for MockContactStore {
    fn load(&self) -> StorageResult<Option<AddressBook>> {
        self.increment_call_count("load");
        Ok(self.book.lock().unwrap().clone())
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.increment_call_count("save");
        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io {
                path: "memory".into(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            });
        }
        *self.book.lock().unwrap() = Some(book.clone());
        Ok(())
    }
}
