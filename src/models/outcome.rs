//! Reported outcomes of removal operations.
//!
//! Removing a phone or deleting a record never fails; the caller inspects the
//! returned outcome instead. `Display` renders the user-facing message.

use super::record::Record;
use crate::domain::Phone;
use std::fmt;

/// Result of [`Record::remove_phone`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneRemoval {
    /// The phone was on the record and has been removed.
    Removed(Phone),
    /// No phone with the requested value was on the record.
    NotFound(String),
}

impl PhoneRemoval {
    pub fn is_removed(&self) -> bool {
        matches!(self, Self::Removed(_))
    }
}

impl fmt::Display for PhoneRemoval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Removed(phone) => write!(f, "Phone number {} removed", phone.as_str()),
            Self::NotFound(value) => write!(f, "No phone number {} found", value),
        }
    }
}

/// Result of [`crate::AddressBook::delete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordDeletion {
    /// The record existed and has been removed from the book.
    Deleted(Record),
    /// No record is stored under the requested name.
    NotFound(String),
}

impl RecordDeletion {
    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted(_))
    }
}

impl fmt::Display for RecordDeletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deleted(record) => write!(f, "Record {} deleted", record.name().as_str()),
            Self::NotFound(name) => write!(f, "No record found with name {}", name),
        }
    }
}
