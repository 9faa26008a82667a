//! One handler per command.
//!
//! Handlers check argument counts, call into the address book, and return
//! the reply text. Failures come back as [`CommandError`] and are turned
//! into text by the caller.

use crate::error::{BookError, CommandError, CommandResult};
use crate::models::{AddressBook, Record, UpcomingBirthday};

const NEED_NAME: &str = "Enter name, please.";
const NEED_NAME_AND_PHONE: &str = "Give me name and phone, please.";
const NEED_NAME_AND_PHONES: &str = "Give me name, old phone and new phone, please.";
const NEED_NAME_AND_BIRTHDAY: &str = "Give me name and birthday, please.";

/// Return the first `N` arguments, or `MissingArgument` with `hint`.
fn require<'a, const N: usize>(
    args: &'a [String],
    hint: &'static str,
) -> CommandResult<[&'a str; N]> {
    if args.len() < N {
        return Err(CommandError::MissingArgument(hint));
    }
    Ok(std::array::from_fn(|i| args[i].as_str()))
}

/// `add [name] [phone]`
///
/// Creates the contact if needed. A new record only joins the book after
/// its phone validated, so a bad number never leaves an empty contact behind.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = require(args, NEED_NAME_AND_PHONE)?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change [name] [old_phone] [new_phone]`
pub fn change_phone(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old_phone, new_phone] = require(args, NEED_NAME_AND_PHONES)?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    record.edit_phone(old_phone, new_phone)?;

    Ok(format!(
        "Contact {name}'s updated from {old_phone} to {new_phone}."
    ))
}

/// `phone [name]`
pub fn show_phone(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let [name] = require(args, NEED_NAME)?;

    match book.find(name).and_then(Record::phones_joined) {
        Some(phones) => Ok(format!("{name}'s phone(s): {phones}")),
        None => Ok("Phone number not found or contact does not exist.".to_string()),
    }
}

/// `add-birthday [name] [DD.MM.YYYY]`
///
/// Creates the contact with only a birthday if it does not exist yet.
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, birthday] = require(args, NEED_NAME_AND_BIRTHDAY)?;

    if let Some(record) = book.find_mut(name) {
        record.set_birthday(birthday)?;
        return Ok(format!("Birthday added/updated for contact {name}."));
    }

    let mut record = Record::new(name)?;
    record.set_birthday(birthday)?;
    book.add_record(record);
    Ok(format!("Contact {name} added with birthday {birthday}."))
}

/// `show-birthday [name]`
pub fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let [name] = require(args, NEED_NAME)?;

    match book.find(name).and_then(Record::birthday) {
        Some(birthday) => Ok(format!("{name}'s birthday: {birthday}")),
        None => Ok("Birthday not found or contact does not exist.".to_string()),
    }
}

/// `birthdays [days]`, where `days` falls back to `default_days`.
pub fn birthdays(args: &[String], book: &AddressBook, default_days: i64) -> CommandResult<String> {
    let days = match args.first() {
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|_| CommandError::InvalidArgument {
                value: raw.clone(),
                reason: "number of days must be a whole number".to_string(),
            })?,
        None => default_days,
    };

    let upcoming = book.get_upcoming_birthdays(days);
    Ok(format_upcoming(&upcoming, days))
}

/// Render the result of a birthday query.
pub fn format_upcoming(upcoming: &[UpcomingBirthday], days: i64) -> String {
    if upcoming.is_empty() {
        return format!("No upcoming birthdays within the next {days} day(s).");
    }
    upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `delete [name]`
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name] = require(args, NEED_NAME)?;

    book.delete(name)
        .map(|_| format!("Contact {name} deleted."))
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;
    use chrono::NaiveDate;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_require_reports_hint() {
        let binding = args(&["Alice"]);
        let result = require::<2>(&binding, NEED_NAME_AND_PHONE);
        assert_eq!(
            result,
            Err(CommandError::MissingArgument(NEED_NAME_AND_PHONE))
        );
    }

    #[test]
    fn test_require_ignores_extra_arguments() {
        let binding = args(&["x", "y", "z"]);
        let [a, b] = require::<2>(&binding, NEED_NAME).unwrap();
        assert_eq!((a, b), ("x", "y"));
    }

    #[test]
    fn test_add_contact_new_then_update() {
        let mut book = AddressBook::new();
        assert_eq!(
            add_contact(&args(&["Alice", "1234567890"]), &mut book).unwrap(),
            "Contact added."
        );
        assert_eq!(
            add_contact(&args(&["Alice", "0987654321"]), &mut book).unwrap(),
            "Contact updated."
        );
        assert_eq!(book.find("Alice").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_add_contact_invalid_phone_creates_nothing() {
        let mut book = AddressBook::new();
        let result = add_contact(&args(&["Alice", "123"]), &mut book);
        assert_eq!(
            result,
            Err(CommandError::from(ValidationError::InvalidPhone(
                "123".to_string()
            )))
        );
        assert!(book.is_empty());
    }

    #[test]
    fn test_change_phone_unknown_contact() {
        let mut book = AddressBook::new();
        let result = change_phone(&args(&["Zed", "1111111111", "2222222222"]), &mut book);
        assert_eq!(result.unwrap_err().user_message(), "Contact not found.");
    }

    #[test]
    fn test_format_upcoming() {
        assert_eq!(
            format_upcoming(&[], 3),
            "No upcoming birthdays within the next 3 day(s)."
        );

        let upcoming = vec![
            UpcomingBirthday {
                name: "Bob".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
            },
            UpcomingBirthday {
                name: "Dina".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            },
        ];
        assert_eq!(
            format_upcoming(&upcoming, 7),
            "Bob: 12.06.2024\nDina: 10.06.2024"
        );
    }

    #[test]
    fn test_birthdays_rejects_non_numeric_days() {
        let book = AddressBook::new();
        let result = birthdays(&args(&["soon"]), &book, 7);
        assert!(matches!(
            result,
            Err(CommandError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_delete_contact() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Alice").unwrap());
        assert_eq!(
            delete_contact(&args(&["Alice"]), &mut book).unwrap(),
            "Contact Alice deleted."
        );
        assert!(delete_contact(&args(&["Alice"]), &mut book).is_err());
    }
}
