//! Name value object.

use super::errors::ValidationError;
use super::field::FieldKind;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Maximum number of characters in a contact name.
pub const MAX_NAME_LENGTH: usize = 30;

// Letters only (general category L); marks, numerals and symbols are rejected
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{L}+$").expect("name pattern is a valid regex"));

/// A contact name: 1 to 30 alphabetic characters.
///
/// Spaces, digits and punctuation are rejected, so a full name is written
/// as a single word (`JohnSmith`).
///
/// # Example
///
/// ```
/// use address_book::domain::Name;
///
/// let name = Name::new("JohnSmith").unwrap();
/// assert_eq!(name.as_str(), "JohnSmith");
/// assert_eq!(name.to_string(), "Name: JohnSmith");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name, validating length and character class.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName`, `ValidationError::NameTooLong` or
    /// `ValidationError::NameNotAlphabetic` when the value breaks a rule.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    /// Check a candidate value against the name rules without constructing.
    pub fn validate(name: &str) -> Result<(), ValidationError> {
        let length = name.chars().count();
        if length > MAX_NAME_LENGTH {
            return Err(ValidationError::NameTooLong { length });
        }
        if length == 0 {
            return Err(ValidationError::EmptyName);
        }
        if !NAME_PATTERN.is_match(name) {
            return Err(ValidationError::NameNotAlphabetic(name.to_string()));
        }
        Ok(())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", FieldKind::Name.label(), self.0)
    }
}
