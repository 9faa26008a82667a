//! Persistence for the address book.
//!
//! The core never performs I/O itself: the binary loads the book once at
//! startup and saves it once at shutdown through an [`AddressBookRepository`].

pub mod json_file_repository;
pub mod traits;

pub use json_file_repository::{
    AddressBookDocument, JsonFileRepository, LoadOutcome, FORMAT_VERSION,
};
pub use traits::AddressBookRepository;
