//! Contact Assistant - a command-line address book with birthday reminders.
//!
//! This library holds the address book model, the upcoming-birthday query,
//! and the thin layers the interactive binary is built from.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: Records and the address book, including the birthday query
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Loading and saving the address book
//! - **commands**: Parsing and handling user commands
//! - **view**: Rendering records and messages

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod view;

pub use commands::{execute, run, Command, Flow};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use repositories::{AddressBookRepository, JsonFileRepository, LoadOutcome};
pub use view::{ConsoleView, View};
