//! Persistence for the address book.
//!
//! The whole book is loaded at startup and written back at exit. The on-disk
//! form is an explicit, versioned JSON document rather than a dump of the
//! in-memory structure.

mod json_file;

pub use json_file::{JsonFileStorage, FORMAT_VERSION};

use crate::book::AddressBook;
use crate::error::StorageResult;

/// Load/save boundary for the address book.
pub trait BookStorage {
    /// Load the stored book. A missing backing store yields an empty book.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
