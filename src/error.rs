//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Core address book operations fail with [`BookError`]; the command layer wraps
//! those in [`CommandError`] and is the only place they become user-facing text.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by address book and record operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field value failed its validation rule
    #[error("Invalid format: {0}")]
    InvalidFormat(#[from] ValidationError),

    /// A phone number that had to exist on the record does not
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// A contact that had to exist in the book does not
    #[error("Contact not found: {0}")]
    ContactNotFound(String),
}

/// Errors that can occur while handling a user command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command was given too few arguments; carries the usage hint
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    /// An argument that is not a domain field could not be parsed
    #[error("Invalid argument '{value}': {reason}")]
    InvalidArgument { value: String, reason: String },

    /// A core operation failed
    #[error(transparent)]
    Book(#[from] BookError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        Self::Book(BookError::InvalidFormat(err))
    }
}

impl CommandError {
    /// Translate the error into the message shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingArgument(hint) => (*hint).to_string(),
            Self::InvalidArgument { value, reason } => format!("Invalid value '{value}': {reason}"),
            Self::Book(BookError::InvalidFormat(ValidationError::EmptyName)) => {
                "Enter name, please.".to_string()
            }
            Self::Book(BookError::InvalidFormat(ValidationError::InvalidPhone(_))) => {
                "The number must consist of numbers only and 10 digits!".to_string()
            }
            Self::Book(BookError::InvalidFormat(ValidationError::InvalidBirthday(_))) => {
                "Invalid date format. Use DD.MM.YYYY".to_string()
            }
            Self::Book(BookError::PhoneNotFound(_)) => "Old number not found!".to_string(),
            Self::Book(BookError::ContactNotFound(_)) => "Contact not found.".to_string(),
        }
    }
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file is not a valid address book document
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The document was written by a newer, incompatible version
    #[error("Unsupported address book version {found} (supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
