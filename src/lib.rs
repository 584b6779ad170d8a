//! Address Book - a personal contact manager with validated records.
//!
//! Contacts are stored by name, each with zero or more ten-digit phone
//! numbers. The whole book is persisted to a single JSON file and can be
//! searched by name or phone digits.
//!
//! # Architecture
//!
//! - **domain**: Validated `Name` and `Phone` value objects and the `Field` enum
//! - **models**: `Record` and the `AddressBook` that owns them
//! - **search**: Query matching used by `AddressBook::search`
//! - **storage**: `ContactStore` trait and the JSON file store
//! - **config**: Configuration from environment variables
//! - **error**: Error types for records, storage and configuration

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod search;
pub mod storage;

pub use config::Config;
pub use domain::{Field, FieldKind, Name, Phone, ValidationError};
pub use error::{ConfigError, RecordError, StorageError};
pub use models::{AddressBook, PhoneRemoval, Record, RecordData, RecordDeletion};
pub use search::SearchQuery;
pub use storage::{ContactStore, JsonFileStore};
