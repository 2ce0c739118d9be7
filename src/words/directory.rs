//! Repository over a directory of JSON files
//!
//! Layout:
//! ```text
//! words/
//!   words.json      {"words": [{"id": 1, "filename": "pomme.json", "categoria": "Fruits"}]}
//!   pomme.json      one WordRecord
//! ```
//! The index is read when the repository is opened; word files are read on
//! demand, so a broken file only fails the draw that picks it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::core::{Word, WordId};

use super::record::WordRecord;
use super::{RepositoryError, WordEntry, WordRepository};

/// Name of the index file inside the directory
pub const INDEX_FILE: &str = "words.json";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct IndexEntry {
    pub id: u32,
    pub filename: String,
    #[serde(alias = "categoria", default)]
    pub category: String,
}

#[derive(Debug, Deserialize)]
struct Index {
    #[serde(default)]
    words: Vec<IndexEntry>,
}

#[derive(Debug, Clone)]
pub struct DirectoryRepository {
    root: PathBuf,
    entries: Vec<IndexEntry>,
}

impl DirectoryRepository {
    /// Open a word directory by reading its index
    ///
    /// # Errors
    /// Returns an error if the index cannot be read or parsed.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let root = root.as_ref().to_path_buf();
        let index_path = root.join(INDEX_FILE);
        let content = read(&index_path)?;
        let index: Index =
            serde_json::from_str(&content).map_err(|source| RepositoryError::Json {
                path: index_path.clone(),
                source,
            })?;

        debug!(path = %root.display(), words = index.words.len(), "opened word directory");
        Ok(Self {
            root,
            entries: index.words,
        })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    #[must_use]
    pub fn path_of(&self, entry: &IndexEntry) -> PathBuf {
        self.root.join(&entry.filename)
    }

    /// Read and parse the record behind an index entry
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid record.
    pub fn load_record(&self, entry: &IndexEntry) -> Result<WordRecord, RepositoryError> {
        let path = self.path_of(entry);
        let content = read(&path)?;
        WordRecord::from_json(&content).map_err(|source| {
            warn!(path = %path.display(), "unreadable word record");
            RepositoryError::Json { path, source }
        })
    }
}

fn read(path: &Path) -> Result<String, RepositoryError> {
    fs::read_to_string(path).map_err(|source| RepositoryError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl WordRepository for DirectoryRepository {
    fn catalog(&self) -> Result<Vec<WordEntry>, RepositoryError> {
        Ok(self
            .entries
            .iter()
            .map(|entry| WordEntry {
                id: WordId(entry.id),
                category: entry.category.clone(),
                length: None,
            })
            .collect())
    }

    fn load(&self, id: WordId) -> Result<Word, RepositoryError> {
        let entry = self
            .entries
            .iter()
            .find(|entry| entry.id == id.0)
            .ok_or(RepositoryError::UnknownWord(id))?;
        self.load_record(entry)?.into_word(id)
    }
}
