//! Record model representing one contact.

use super::outcome::PhoneRemoval;
use crate::domain::{Name, Phone, ValidationError};
use crate::error::{RecordError, RecordResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Persisted shape of a record before validation.
///
/// A missing `phones` key reads as an empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RecordData {
    pub name: String,
    pub phones: Vec<String>,
}

/// A contact: a validated name plus an ordered list of distinct phone numbers.
///
/// The name is fixed for the lifetime of the record. Renaming a contact in an
/// [`AddressBook`](crate::AddressBook) means deleting it and adding a new record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordData")]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no phones.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in the order they were added.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Add a phone number.
    ///
    /// The value is validated first. Adding a number the record already holds
    /// is a no-op.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        let phone = Phone::new(phone)?;
        if self.phones.contains(&phone) {
            tracing::debug!(name = %self.name.as_str(), phone = %phone.as_str(), "Phone already present");
            return Ok(());
        }
        self.phones.push(phone);
        Ok(())
    }

    /// Find the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Replace `old` with `new` in place.
    ///
    /// The new value is not checked against the record's other phones, so an
    /// edit can leave two equal entries where `add_phone` would not.
    ///
    /// # Errors
    ///
    /// `RecordError::PhoneNotFound` if `old` is not on the record (checked
    /// first), otherwise `RecordError::Validation` if `new` is invalid.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RecordResult<String> {
        let slot = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old)
            .ok_or_else(|| RecordError::PhoneNotFound(old.to_string()))?;

        *slot = Phone::new(new)?;
        tracing::debug!(name = %self.name.as_str(), old, new, "Phone edited");
        Ok(format!("Phone number {} updated to {}", old, new))
    }

    /// Remove the first phone equal to `phone`, keeping the order of the rest.
    pub fn remove_phone(&mut self, phone: &str) -> PhoneRemoval {
        match self.phones.iter().position(|p| p.as_str() == phone) {
            Some(index) => PhoneRemoval::Removed(self.phones.remove(index)),
            None => PhoneRemoval::NotFound(phone.to_string()),
        }
    }
}

impl TryFrom<RecordData> for Record {
    type Error = ValidationError;

    /// Rebuild a record through the same validation as interactive edits.
    /// Duplicate phones collapse to one.
    fn try_from(data: RecordData) -> Result<Self, Self::Error> {
        let mut record = Record::new(data.name)?;
        for phone in data.phones {
            record.add_phone(phone)?;
        }
        Ok(record)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.phones.is_empty() {
            let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
            write!(
                f,
                " Contact name: {}, phones: {}",
                self.name.as_str(),
                phones.join("; ")
            )?;
        }
        Ok(())
    }
}
