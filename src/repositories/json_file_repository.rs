use crate::error::{StorageError, StorageResult};
use crate::models::{AddressBook, Record};
use crate::repositories::traits::AddressBookRepository;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Version written into every saved document.
pub const FORMAT_VERSION: u32 = 1;

fn default_version() -> u32 {
    FORMAT_VERSION
}

/// On-disk shape of the address book.
///
/// Unknown fields are ignored and missing ones default, so older and newer
/// files with the same major shape stay readable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddressBookDocument {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub records: Vec<Record>,
}

impl From<&AddressBook> for AddressBookDocument {
    fn from(book: &AddressBook) -> Self {
        Self {
            version: FORMAT_VERSION,
            records: book.records().cloned().collect(),
        }
    }
}

impl From<AddressBookDocument> for AddressBook {
    fn from(document: AddressBookDocument) -> Self {
        let mut book = AddressBook::new();
        for record in document.records {
            book.add_record(record);
        }
        book
    }
}

/// Result of [`JsonFileRepository::load_or_recover`].
#[derive(Debug)]
pub struct LoadOutcome {
    /// The loaded book, or an empty one if the file could not be read
    pub book: AddressBook,

    /// Where an unreadable file was moved to, so saving cannot overwrite it
    pub backup: Option<PathBuf>,
}

/// Address book repository backed by a single JSON file.
///
/// Saves write a sibling temporary file first and rename it over the
/// target, so an interrupted save never leaves a truncated book behind.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.sibling_with_suffix(".tmp")
    }

    fn sibling_with_suffix(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(suffix);
        self.path.with_file_name(name)
    }

    /// Load the book, moving an unreadable file out of the way.
    ///
    /// A file that exists but cannot be loaded (corrupt JSON, invalid
    /// record, newer format version) is renamed to `<path>.corrupt` (or
    /// `<path>.corrupt.N` if that is taken) and an empty book is returned.
    /// A later save then creates a fresh file instead of overwriting the
    /// user's data.
    ///
    /// # Errors
    ///
    /// Returns the rename failure if the unreadable file could not be
    /// moved. The caller must not save in that case.
    pub fn load_or_recover(&self) -> StorageResult<LoadOutcome> {
        let load_error = match self.load() {
            Ok(book) => return Ok(LoadOutcome { book, backup: None }),
            Err(e) => e,
        };

        let backup = self.backup_path();
        warn!(
            path = %self.path.display(),
            backup = %backup.display(),
            error = %load_error,
            "Address book is unreadable, moving it aside"
        );
        fs::rename(&self.path, &backup).map_err(|e| Self::io_error(&self.path, e))?;

        Ok(LoadOutcome {
            book: AddressBook::new(),
            backup: Some(backup),
        })
    }

    /// First free `<path>.corrupt[.N]` next to the book.
    fn backup_path(&self) -> PathBuf {
        let mut candidate = self.sibling_with_suffix(".corrupt");
        let mut n = 1;
        while candidate.exists() {
            candidate = self.sibling_with_suffix(&format!(".corrupt.{n}"));
            n += 1;
        }
        candidate
    }

    fn io_error(path: &Path, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl AddressBookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No saved address book, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(Self::io_error(&self.path, e)),
        };

        let document: AddressBookDocument = serde_json::from_str(&contents)?;
        if document.version > FORMAT_VERSION {
            return Err(StorageError::UnsupportedVersion {
                found: document.version,
                supported: FORMAT_VERSION,
            });
        }

        let book = AddressBook::from(document);
        info!(path = %self.path.display(), records = book.len(), "Loaded address book");
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let document = AddressBookDocument::from(book);
        let json = serde_json::to_string_pretty(&document)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Self::io_error(parent, e))?;
        }

        let temp_path = self.temp_path();
        debug!(path = %temp_path.display(), "Writing address book");
        fs::write(&temp_path, json).map_err(|e| Self::io_error(&temp_path, e))?;
        fs::rename(&temp_path, &self.path).map_err(|e| Self::io_error(&self.path, e))?;

        info!(path = %self.path.display(), records = book.len(), "Saved address book");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_path_is_sibling() {
        let repo = JsonFileRepository::new("/data/book.json");
        assert_eq!(repo.temp_path(), PathBuf::from("/data/book.json.tmp"));
    }

    #[test]
    fn test_backup_path_is_sibling() {
        let repo = JsonFileRepository::new("/nonexistent-dir/book.json");
        assert_eq!(
            repo.backup_path(),
            PathBuf::from("/nonexistent-dir/book.json.corrupt")
        );
    }

    #[test]
    fn test_document_defaults() {
        let document: AddressBookDocument = serde_json::from_str("{}").unwrap();
        assert_eq!(document.version, FORMAT_VERSION);
        assert!(document.records.is_empty());
    }

    #[test]
    fn test_document_keeps_last_duplicate_name() {
        let json = r#"{
            "version": 1,
            "records": [
                {"name": "Ann", "phones": ["1111111111"]},
                {"name": "Ann", "phones": ["2222222222"]}
            ]
        }"#;
        let document: AddressBookDocument = serde_json::from_str(json).unwrap();
        let book = AddressBook::from(document);

        assert_eq!(book.len(), 1);
        assert_eq!(book.find("Ann").unwrap().phones()[0].as_str(), "2222222222");
    }
}
