//! Contact Book - a command-line contact manager.
//!
//! Stores contacts with phone numbers and birthdays, and tells you whose
//! birthday is coming up in the next week.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: The contact `Record`
//! - **book**: The `AddressBook` store and the upcoming-birthday query
//! - **storage**: Versioned JSON persistence for the whole book
//! - **commands**: User-facing commands and the command table
//! - **cli**: Process arguments and the interactive session
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod book;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod storage;

pub use book::{AddressBook, UpcomingBirthday};
pub use commands::{CommandHandler, CommandProcessor};
pub use config::Config;
pub use error::{BookError, ConfigError, StorageError};
pub use models::Record;
pub use storage::{BookStorage, JsonFileStorage};
