//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty.
    EmptyName,

    /// The provided name is longer than the allowed number of characters.
    NameTooLong { length: usize },

    /// The provided name contains something other than letters.
    NameNotAlphabetic(String),

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName | Self::NameNotAlphabetic(_) => {
                write!(f, "Name should consist of letters")
            }
            Self::NameTooLong { .. } => write!(
                f,
                "Name should be no more than {} symbols",
                super::name::MAX_NAME_LENGTH
            ),
            Self::InvalidPhone(_) => write!(
                f,
                "Phone number should be a {}-digit number",
                super::phone::PHONE_DIGITS
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
