//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the scalar fields of a
//! contact: its name, phone numbers, and birthday. These value objects
//! validate at construction time so that invalid data can never be
//! represented in an address book.

pub mod birthday;
pub mod contact_name;
pub mod errors;
pub mod phone;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use contact_name::ContactName;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
