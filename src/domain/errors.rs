//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
///
/// Every variant is an "invalid format" failure: the value never makes it
/// into the data model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    #[error("Contact name cannot be empty")]
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    #[error("Invalid phone number '{0}': the number must consist of 10 digits")]
    InvalidPhone(String),

    /// The provided birthday is not a real DD.MM.YYYY date.
    #[error("Invalid date '{0}'. Use DD.MM.YYYY")]
    InvalidBirthday(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::EmptyName.to_string(),
            "Contact name cannot be empty"
        );
        assert!(ValidationError::InvalidPhone("12".to_string())
            .to_string()
            .contains("10 digits"));
        assert_eq!(
            ValidationError::InvalidBirthday("31.02.2020".to_string()).to_string(),
            "Invalid date '31.02.2020'. Use DD.MM.YYYY"
        );
    }
}
