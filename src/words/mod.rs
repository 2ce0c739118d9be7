//! Word repositories
//!
//! A repository lists the words it holds and loads one by id. The game only
//! talks to this trait; where the words come from (the embedded pack, a
//! directory of JSON files, a test fixture) is up to the implementation.

mod directory;
mod embedded;
mod memory;
mod recent;
pub mod record;

use std::io;
use std::path::PathBuf;

use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::core::{Word, WordId};

pub use directory::{DirectoryRepository, INDEX_FILE, IndexEntry};
pub use embedded::{EMBEDDED_SOURCE, embedded, embedded_records};
pub use memory::MemoryRepository;
pub use recent::{RECENT_WORDS, RecencyWindow};
pub use record::WordRecord;

/// Why a repository could not supply a word
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no words available")]
    EmptyCatalog,
    #[error("unknown word id {0}")]
    UnknownWord(WordId),
    #[error("invalid word record {id}: {reason}")]
    InvalidRecord { id: WordId, reason: String },
}

/// Catalog line: enough to list or draw a word without loading it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub id: WordId,
    pub category: String,
    /// Known only once the word is loaded for lazy repositories
    pub length: Option<usize>,
}

/// Source of target words
pub trait WordRepository {
    /// All words this repository can supply
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be read.
    fn catalog(&self) -> Result<Vec<WordEntry>, RepositoryError>;

    /// Load the full word for `id`
    ///
    /// # Errors
    /// Returns an error if the id is unknown or its record cannot be read.
    fn load(&self, id: WordId) -> Result<Word, RepositoryError>;
}

impl<R: WordRepository + ?Sized> WordRepository for Box<R> {
    fn catalog(&self) -> Result<Vec<WordEntry>, RepositoryError> {
        (**self).catalog()
    }

    fn load(&self, id: WordId) -> Result<Word, RepositoryError> {
        (**self).load(id)
    }
}

/// Draw a random word that was not played recently
///
/// Falls back to the whole catalog when every word is in the recency window,
/// so a small repository never runs dry.
///
/// # Errors
/// Returns `RepositoryError::EmptyCatalog` if the repository holds no words, or
/// the repository's error if the chosen word cannot be loaded.
pub fn pick_random<W, R>(
    repository: &W,
    recent: &RecencyWindow,
    rng: &mut R,
) -> Result<Word, RepositoryError>
where
    W: WordRepository + ?Sized,
    R: Rng + ?Sized,
{
    let catalog = repository.catalog()?;
    if catalog.is_empty() {
        return Err(RepositoryError::EmptyCatalog);
    }

    let fresh: Vec<&WordEntry> = catalog
        .iter()
        .filter(|entry| !recent.contains(entry.id))
        .collect();
    let pool = if fresh.is_empty() {
        debug!("every word played recently, drawing from the full catalog");
        catalog.iter().collect()
    } else {
        fresh
    };

    let entry = pool[rng.random_range(0..pool.len())];
    repository.load(entry.id)
}
