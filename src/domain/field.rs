//! Labeled field values.

use super::name::Name;
use super::phone::Phone;
use std::fmt;

/// The kinds of validated field a record can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Phone,
}

impl FieldKind {
    /// Human-readable label used when rendering a field.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Phone => "Phone",
        }
    }
}

/// A single validated, labeled value.
///
/// The set of variants is closed; each one carries its own value object, so a
/// `Field` can only be built from a value that already passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    Name(Name),
    Phone(Phone),
}

impl Field {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Name(_) => FieldKind::Name,
            Self::Phone(_) => FieldKind::Phone,
        }
    }

    /// The raw value without its label.
    pub fn value(&self) -> &str {
        match self {
            Self::Name(name) => name.as_str(),
            Self::Phone(phone) => phone.as_str(),
        }
    }
}

impl From<Name> for Field {
    fn from(name: Name) -> Self {
        Self::Name(name)
    }
}

impl From<Phone> for Field {
    fn from(phone: Phone) -> Self {
        Self::Phone(phone)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind().label(), self.value())
    }
}
