//! Persistence for the address book.
//!
//! [`ContactStore`] abstracts where the book lives; [`JsonFileStore`] keeps it
//! in a single JSON file.

mod json_file_store;
mod traits;

pub use json_file_store::{JsonFileStore, DEFAULT_BOOK_PATH};
pub use traits::ContactStore;
