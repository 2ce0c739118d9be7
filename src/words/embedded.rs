//! Built-in French word pack
//!
//! Compiled into the binary so the game works without any data directory.

use std::path::PathBuf;

use super::record::WordRecord;
use super::{MemoryRepository, RepositoryError};

const EMBEDDED_WORDS: &str = include_str!("../../data/words.json");

/// Source name used in errors and reports for the embedded pack
pub const EMBEDDED_SOURCE: &str = "<embedded>";

/// Load the embedded word pack
///
/// # Errors
/// Returns an error only if the embedded data is malformed.
///
/// # Examples
/// ```
/// use les_mots::words::embedded;
///
/// let repo = embedded().unwrap();
/// assert!(repo.len() >= 4);
/// ```
pub fn embedded() -> Result<MemoryRepository, RepositoryError> {
    MemoryRepository::from_records(embedded_records()?)
}

/// Raw records of the embedded pack, before validation
///
/// # Errors
/// Returns an error only if the embedded data is not valid JSON.
pub fn embedded_records() -> Result<Vec<WordRecord>, RepositoryError> {
    serde_json::from_str(EMBEDDED_WORDS).map_err(|source| RepositoryError::Json {
        path: PathBuf::from(EMBEDDED_SOURCE),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::WordRepository;

    #[test]
    fn embedded_pack_loads() {
        let repo = embedded().unwrap();
        assert!(repo.len() > 3);
        assert_eq!(repo.catalog().unwrap().len(), repo.len());
    }

    #[test]
    fn embedded_records_are_complete() {
        let records = embedded_records().unwrap();
        for record in &records {
            assert!(
                record.problems().is_empty(),
                "{}: {:?}",
                record.word,
                record.problems()
            );
        }
    }
}
