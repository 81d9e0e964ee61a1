//! Record model representing one contact in the address book.

use crate::domain::{BirthdayDate, ContactName, PhoneNumber, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A single contact: a name, its phone numbers and an optional birthday.
///
/// Every field is a validated value object, so a `Record` can only ever hold
/// well-formed data. Phone numbers keep insertion order and are not
/// deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default)]
    birthday: Option<BirthdayDate>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&BirthdayDate> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// The record is left untouched if the number is invalid.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `raw`. Absent numbers are ignored.
    pub fn remove_phone(&mut self, raw: &str) {
        if let Some(index) = self.position_of(raw) {
            let removed = self.phones.remove(index);
            debug!(contact = %self.name, phone = %removed, "Removed phone");
        }
    }

    /// Replace `old_raw` with `new_raw`.
    ///
    /// The old entry is removed and the new one appended at the end.
    ///
    /// # Errors
    ///
    /// - `BookError::PhoneNotFound` if `old_raw` is not on the record
    /// - `BookError::Validation` if `new_raw` is not a valid phone number
    ///
    /// On error the phone list is unchanged.
    pub fn edit_phone(&mut self, old_raw: &str, new_raw: &str) -> BookResult<()> {
        let index = self
            .position_of(old_raw)
            .ok_or_else(|| BookError::PhoneNotFound(old_raw.to_string()))?;
        let replacement = PhoneNumber::new(new_raw)?;

        self.phones.remove(index);
        self.phones.push(replacement);
        debug!(contact = %self.name, old = old_raw, new = new_raw, "Edited phone");
        Ok(())
    }

    /// Find a phone by exact string match.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| phone.as_str() == raw)
    }

    /// Parse and store a birthday, replacing any existing one.
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        let birthday = BirthdayDate::parse(raw)?;
        debug!(contact = %self.name, birthday = %birthday, "Set birthday");
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Human-readable one-line summary.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Phone numbers joined with `sep`.
    pub fn joined_phones(&self, sep: &str) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(sep)
    }

    fn position_of(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|phone| phone.as_str() == raw)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.joined_phones("; ")
        )
    }
}
