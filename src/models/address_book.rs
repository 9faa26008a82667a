//! The address book: every record, keyed by name, plus the birthday query.

use super::record::Record;
use crate::domain::BIRTHDAY_FORMAT;
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use indexmap::IndexMap;
use std::fmt;
use tracing::debug;

/// Default lookahead window for the upcoming-birthday query, in days.
pub const DEFAULT_LOOKAHEAD_DAYS: i64 = 7;

/// A contact whose (possibly weekend-shifted) birthday falls in the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Name of the contact
    pub name: String,

    /// The day to congratulate them on, after weekend roll-forward
    pub date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date as `DD.MM.YYYY`.
    pub fn formatted_date(&self) -> String {
        self.date.format(BIRTHDAY_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.formatted_date())
    }
}

/// All records, keyed by contact name, in insertion order.
///
/// The map is private so that a record can only ever be stored under its
/// own name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name, replacing any record with that name.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().to_string();
        debug!(name = %name, "Storing record");
        // `insert` keeps the original position when overwriting
        self.records.insert(name, record);
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name for mutation.
    ///
    /// Records cannot be renamed, so handing out `&mut Record` keeps the
    /// key invariant intact.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a record by name. Returns the removed record, if any.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.shift_remove(name);
        if removed.is_some() {
            debug!(name, "Deleted record");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Copy the book together with independent copies of every record.
    pub fn deep_clone(&self) -> Self {
        Self {
            records: self
                .records
                .iter()
                .map(|(name, record)| (name.clone(), record.deep_clone()))
                .collect(),
        }
    }

    /// Birthdays within `days_ahead` days of the system's local date.
    pub fn get_upcoming_birthdays(&self, days_ahead: i64) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(Local::now().date_naive(), days_ahead)
    }

    /// Birthdays within `days_ahead` days of `today`.
    ///
    /// Each birthday is moved onto this year (or next year if it has already
    /// passed), a Saturday or Sunday is rolled forward to Monday, and the
    /// rolled date must be between `today` and `today + days_ahead`
    /// inclusive. Results follow the book's insertion order.
    pub fn upcoming_birthdays_from(
        &self,
        today: NaiveDate,
        days_ahead: i64,
    ) -> Vec<UpcomingBirthday> {
        let upcoming: Vec<UpcomingBirthday> = self
            .records
            .values()
            .filter_map(|record| {
                let birthday = record.birthday()?;

                let mut candidate = birthday.in_year(today.year());
                if candidate < today {
                    candidate = birthday.in_year(today.year() + 1);
                }

                if matches!(candidate.weekday(), Weekday::Sat | Weekday::Sun) {
                    candidate = next_weekday(candidate, Weekday::Mon);
                }

                let offset = (candidate - today).num_days();
                (0..=days_ahead).contains(&offset).then(|| UpcomingBirthday {
                    name: record.name().to_string(),
                    date: candidate,
                })
            })
            .collect();

        debug!(
            %today,
            days_ahead,
            matches = upcoming.len(),
            "Computed upcoming birthdays"
        );
        upcoming
    }
}

/// The first `weekday` strictly after `date`.
fn next_weekday(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let current = i64::from(date.weekday().num_days_from_monday());
    let target = i64::from(weekday.num_days_from_monday());
    let mut days_ahead = target - current;
    if days_ahead <= 0 {
        days_ahead += 7;
    }
    date + Duration::days(days_ahead)
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.values().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}
