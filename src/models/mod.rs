//! Data models for the address book.
//!
//! This module contains the record of a single contact and the address book
//! that owns every record and answers the upcoming-birthday query.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday, DEFAULT_LOOKAHEAD_DAYS};
pub use record::{Record, NO_BIRTHDAY, NO_PHONES};
