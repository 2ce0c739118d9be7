//! Word catalog listing

use tracing::debug;

use crate::words::{RepositoryError, WordEntry, WordRepository};

/// List every word of a repository, sorted by id
///
/// Lazy repositories do not know word lengths up front; those are filled in
/// by loading each word. A word that fails to load keeps an unknown length.
///
/// # Errors
/// Returns an error if the catalog itself cannot be read.
pub fn list_words<R: WordRepository + ?Sized>(
    repository: &R,
) -> Result<Vec<WordEntry>, RepositoryError> {
    let mut entries = repository.catalog()?;
    for entry in entries.iter_mut().filter(|entry| entry.length.is_none()) {
        match repository.load(entry.id) {
            Ok(word) => entry.length = Some(word.len()),
            Err(e) => debug!(id = %entry.id, error = %e, "length unavailable"),
        }
    }
    entries.sort_by_key(|entry| entry.id);
    Ok(entries)
}
