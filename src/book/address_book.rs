//! Name-indexed collection of contact records.

use super::birthdays::{upcoming_entry, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
use crate::models::Record;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// The address book: every record keyed by its name.
///
/// Names are unique. Records are kept in insertion order, and replacing a
/// record under an existing name keeps its original position. `index` maps
/// every name to its position in `records`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        match self.index.get(record.name().as_str()) {
            Some(&position) => {
                debug!(contact = %record.name(), "Replacing record");
                self.records[position] = record;
            }
            None => {
                debug!(contact = %record.name(), "Adding record");
                self.index
                    .insert(record.name().as_str().to_string(), self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&position| &self.records[position])
    }

    /// Look up a record by exact name for in-place modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        let position = *self.index.get(name)?;
        self.records.get_mut(position)
    }

    /// Remove the record with the given name. Returns it if it existed.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let position = self.index.remove(name)?;
        debug!(contact = name, "Deleting record");
        let removed = self.records.remove(position);

        // Everything after the removed record moved down by one.
        for (offset, record) in self.records[position..].iter().enumerate() {
            if let Some(slot) = self.index.get_mut(record.name().as_str()) {
                *slot = position + offset;
            }
        }
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in store order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Contact names in store order.
    pub fn names(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|record| record.name().as_str())
            .collect()
    }

    /// One `describe()` line per record, in store order.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Contacts to congratulate within the default seven-day window.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(today, DEFAULT_WINDOW_DAYS)
    }

    /// Contacts whose next birthday is `0..=window_days` days from `today`.
    ///
    /// Results follow store order, not date order. Weekend dates are
    /// reported on the following Monday.
    pub fn upcoming_birthdays_within(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                upcoming_entry(record.name().as_str(), birthday, today, window_days)
            })
            .collect()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.records.iter().map(Record::describe).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
