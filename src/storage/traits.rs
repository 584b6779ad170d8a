//! Storage seam for the address book.

use crate::error::StorageResult;
use crate::models::AddressBook;

/// Storage backend for an address book.
///
/// Implementations load and save the whole book at once; there is no
/// partial update and no locking between processes.
pub trait ContactStore {
    /// Load the stored book, or `None` if nothing has been saved yet.
    fn load(&self) -> StorageResult<Option<AddressBook>>;

    /// Replace the stored book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
