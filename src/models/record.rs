//! Record model representing one person in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Placeholder rendered when a record has no phone numbers.
pub const NO_PHONES: &str = "No phone numbers";

/// Placeholder rendered when a record has no birthday.
pub const NO_BIRTHDAY: &str = "No birthday set";

/// A single contact: a name, an ordered list of phones, and an optional birthday.
///
/// Phones keep insertion order and may repeat. Every mutation validates its
/// input before touching the record, so a failed call leaves it unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> BookResult<Self> {
        Ok(Self::with_name(ContactName::new(name)?))
    }

    /// Create a record from an already validated name.
    pub fn with_name(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The name this record is filed under.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> BookResult<()> {
        let phone = PhoneNumber::new(phone)?;
        debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `phone`. Absent values are ignored.
    pub fn remove_phone(&mut self, phone: &str) {
        if let Some(index) = self.phones.iter().position(|p| p == phone) {
            self.phones.remove(index);
        }
    }

    /// Replace `old_phone` with `new_phone`.
    ///
    /// The new number is appended and the old one removed, so the edited
    /// number moves to the end of the list.
    ///
    /// # Errors
    ///
    /// - `BookError::PhoneNotFound` if `old_phone` is not on the record
    /// - `BookError::InvalidFormat` if `new_phone` is not a valid number
    ///
    /// The phone list is unchanged on either error.
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: impl Into<String>) -> BookResult<()> {
        if self.find_phone(old_phone).is_none() {
            return Err(BookError::PhoneNotFound(old_phone.to_string()));
        }

        let new_phone = PhoneNumber::new(new_phone)?;
        debug!(name = %self.name, old = old_phone, new = %new_phone, "Editing phone");
        self.phones.push(new_phone);
        self.remove_phone(old_phone);
        Ok(())
    }

    /// Find the phone exactly equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| *p == phone)
    }

    /// Validate and set the birthday, replacing any previous one.
    pub fn set_birthday(&mut self, birthday: impl AsRef<str>) -> BookResult<()> {
        let birthday = Birthday::new(birthday)?;
        debug!(name = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Phones joined with `"; "`, or `None` when there are none.
    pub fn phones_joined(&self) -> Option<String> {
        if self.phones.is_empty() {
            return None;
        }
        Some(
            self.phones
                .iter()
                .map(PhoneNumber::as_str)
                .collect::<Vec<_>>()
                .join("; "),
        )
    }

    /// Human-readable one-line summary of the record.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Copy the record with its own phone list and birthday.
    ///
    /// Records own all of their data, so this is the same as `clone()`;
    /// it exists to make snapshot intent explicit at call sites.
    pub fn deep_clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            phones: self.phones.iter().cloned().collect(),
            birthday: self.birthday,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self.phones_joined();
        let birthday = self.birthday.map(|b| b.to_string());
        write!(
            f,
            "Name: {}, phones: {}, birthday: {}",
            self.name,
            phones.as_deref().unwrap_or(NO_PHONES),
            birthday.as_deref().unwrap_or(NO_BIRTHDAY)
        )
    }
}
