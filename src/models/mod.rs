//! Data models for the contact book.
//!
//! A `Record` owns a validated name, an ordered list of phone numbers and
//! an optional birthday.

pub mod record;

pub use record::Record;
