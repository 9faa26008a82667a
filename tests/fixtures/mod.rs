//! Sample data shared by the integration tests.

use chrono::NaiveDate;
use contact_assistant::{AddressBook, Record};

/// Build a calendar date from day, month, year.
#[allow(dead_code)]
pub fn date(day: u32, month: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Create a record with the given phones and optional birthday.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(name).unwrap();
    for phone in phones {
        record.add_phone(*phone).unwrap();
    }
    if let Some(birthday) = birthday {
        record.set_birthday(birthday).unwrap();
    }
    record
}

/// Create a book holding only records with birthdays.
#[allow(dead_code)]
pub fn book_with_birthdays(entries: &[(&str, &str)]) -> AddressBook {
    let mut book = AddressBook::new();
    for (name, birthday) in entries {
        book.add_record(sample_record(name, &[], Some(birthday)));
    }
    book
}
