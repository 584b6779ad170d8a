//! Contact records and the address book that owns them.

pub mod address_book;
pub mod outcome;
pub mod record;

pub use address_book::AddressBook;
pub use outcome::{PhoneRemoval, RecordDeletion};
pub use record::{Record, RecordData};
