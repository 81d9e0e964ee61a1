//! Shared fixtures for integration tests.

use chrono::NaiveDate;
use contact_book::Record;

/// Build a record with the given phones and optional birthday.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(name).expect("valid test name");
    for phone in phones {
        record.add_phone(phone).expect("valid test phone");
    }
    if let Some(birthday) = birthday {
        record.set_birthday(birthday).expect("valid test birthday");
    }
    record
}

/// Calendar date from day, month, year.
#[allow(dead_code)]
pub fn date(day: u32, month: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Owned command arguments.
#[allow(dead_code)]
pub fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
