//! Domain value objects and types.
//!
//! Contact names and phone numbers are wrapped in value objects that
//! validate at construction time, so an invalid value can never be stored
//! in a record.

pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use field::{Field, FieldKind};
pub use name::{Name, MAX_NAME_LENGTH};
pub use phone::{Phone, PHONE_DIGITS};
