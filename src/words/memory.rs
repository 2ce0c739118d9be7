//! Repository over words held in memory

use rustc_hash::FxHashSet;

use crate::core::{Word, WordId};

use super::record::WordRecord;
use super::{RepositoryError, WordEntry, WordRepository};

/// Words kept in a vector; loading clones the stored word
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    words: Vec<Word>,
}

impl MemoryRepository {
    /// Wrap a list of words
    ///
    /// # Errors
    /// Returns `RepositoryError::InvalidRecord` if two words share an id.
    pub fn new(words: Vec<Word>) -> Result<Self, RepositoryError> {
        let mut seen = FxHashSet::default();
        for word in &words {
            if !seen.insert(word.id()) {
                return Err(RepositoryError::InvalidRecord {
                    id: word.id(),
                    reason: "duplicate id".to_string(),
                });
            }
        }
        Ok(Self { words })
    }

    /// Build from parsed records; records without an id are numbered from 1
    /// in file order
    ///
    /// # Errors
    /// Returns the first invalid record's error.
    pub fn from_records(records: Vec<WordRecord>) -> Result<Self, RepositoryError> {
        let words = records
            .into_iter()
            .zip(1..)
            .map(|(record, position)| {
                let id = WordId(record.id.unwrap_or(position));
                record.into_word(id)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(words)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordRepository for MemoryRepository {
    fn catalog(&self) -> Result<Vec<WordEntry>, RepositoryError> {
        Ok(self
            .words
            .iter()
            .map(|word| WordEntry {
                id: word.id(),
                category: word.category().display().to_string(),
                length: Some(word.len()),
            })
            .collect())
    }

    fn load(&self, id: WordId) -> Result<Word, RepositoryError> {
        self.words
            .iter()
            .find(|word| word.id() == id)
            .cloned()
            .ok_or(RepositoryError::UnknownWord(id))
    }
}
