//! JSON file storage.
//!
//! Document layout (version 1):
//!
//! ```json
//! {
//!   "version": 1,
//!   "records": [
//!     { "name": "Alice", "phones": ["0501234567"], "birthday": "12.05.1990" }
//!   ]
//! }
//! ```
//!
//! Records are written in store order. Every field is re-validated on load.
//! Writes go to a temporary sibling file which is then renamed over the
//! target, so an interrupted save never leaves a truncated book behind.

use super::BookStorage;
use crate::book::AddressBook;
use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Current on-disk format version.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct StoredBookRef<'a> {
    version: u32,
    records: Vec<&'a Record>,
}

#[derive(Deserialize)]
struct StoredBook {
    records: Vec<Record>,
}

#[derive(Deserialize)]
struct VersionHeader {
    version: u32,
}

/// Address book stored as a JSON document on the local file system.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Decode a stored document.
    pub fn decode(content: &str) -> StorageResult<AddressBook> {
        let header: VersionHeader = serde_json::from_str(content)?;
        if header.version != FORMAT_VERSION {
            return Err(StorageError::UnsupportedVersion(header.version));
        }

        let stored: StoredBook = serde_json::from_str(content)?;
        Ok(stored.records.into_iter().collect())
    }

    /// Encode a book as a pretty-printed document.
    pub fn encode(book: &AddressBook) -> StorageResult<String> {
        let stored = StoredBookRef {
            version: FORMAT_VERSION,
            records: book.iter().collect(),
        };
        Ok(serde_json::to_string_pretty(&stored)?)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl BookStorage for JsonFileStorage {
    fn load(&self) -> StorageResult<AddressBook> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No saved address book, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let book = Self::decode(&content)?;
        info!(
            path = %self.path.display(),
            contacts = book.len(),
            "Loaded address book"
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = Self::encode(book)?;
        let temp_path = self.temp_path();
        {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&temp_path, &self.path)?;

        debug!(path = %temp_path.display(), "Renamed temp file over address book");
        info!(
            path = %self.path.display(),
            contacts = book.len(),
            "Saved address book"
        );
        Ok(())
    }
}
