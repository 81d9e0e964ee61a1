//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The `Display` text of each variant is the message shown to the user.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while working with records and the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The referenced phone number is not on the record
    #[error("Phone number {0} not found.")]
    PhoneNotFound(String),

    /// No record with the given name
    #[error("Contact {0} not found.")]
    NotFound(String),

    /// A command was invoked without its required arguments
    #[error("Error: Not enough arguments provided.")]
    NotEnoughArguments,

    /// No handler registered under the given name
    #[error("Invalid command.")]
    UnknownCommand(String),
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored document could not be encoded or decoded
    #[error("Stored address book is malformed: {0}")]
    Json(#[from] serde_json::Error),

    /// The stored document was written by an incompatible version
    #[error("Unsupported address book format version: {0}")]
    UnsupportedVersion(u32),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
