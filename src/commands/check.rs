//! Word pack validation
//!
//! Records are independent, so they are checked in parallel. Problems that
//! span records (duplicate ids, the same word twice) are found afterwards.

use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::info;

use crate::core::{Word, WordId};
use crate::words::{DirectoryRepository, EMBEDDED_SOURCE, RepositoryError, WordRecord};

/// Findings for one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordReport {
    pub id: u32,
    /// File name, or the embedded source name
    pub source: String,
    /// Folded letters, when the word text is valid
    pub folded: Option<Vec<char>>,
    pub problems: Vec<String>,
}

impl RecordReport {
    fn from_record(id: u32, source: String, record: &WordRecord) -> Self {
        let folded = Word::new(WordId(id), &record.word)
            .ok()
            .map(|word| word.folded().to_vec());
        Self {
            id,
            source,
            folded,
            problems: record.problems(),
        }
    }

    fn unreadable(id: u32, source: String, error: &RepositoryError) -> Self {
        Self {
            id,
            source,
            folded: None,
            problems: vec![error.to_string()],
        }
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct CheckReport {
    pub records: Vec<RecordReport>,
    pub duration: Duration,
}

impl CheckReport {
    fn new(mut records: Vec<RecordReport>, duration: Duration) -> Self {
        flag_duplicates(&mut records);
        Self { records, duration }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.records.len()
    }

    /// Records with at least one problem
    pub fn flagged(&self) -> impl Iterator<Item = &RecordReport> {
        self.records.iter().filter(|r| !r.is_clean())
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.records.iter().all(RecordReport::is_clean)
    }
}

fn flag_duplicates(records: &mut [RecordReport]) {
    let mut ids = FxHashSet::default();
    let mut words: FxHashMap<Vec<char>, u32> = FxHashMap::default();

    for record in records.iter_mut() {
        if !ids.insert(record.id) {
            record.problems.push(format!("duplicate id {}", record.id));
        }

        if let Some(folded) = &record.folded {
            if let Some(first) = words.get(folded) {
                record
                    .problems
                    .push(format!("same word as record {first}"));
            } else {
                words.insert(folded.clone(), record.id);
            }
        }
    }
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// Validate every record of a word directory
#[must_use]
pub fn check_directory(repository: &DirectoryRepository, show_progress: bool) -> CheckReport {
    let start = Instant::now();
    let entries = repository.entries();
    let pb = progress_bar(entries.len(), show_progress);

    let records: Vec<RecordReport> = entries
        .par_iter()
        .map(|entry| {
            let report = match repository.load_record(entry) {
                Ok(record) => RecordReport::from_record(entry.id, entry.filename.clone(), &record),
                Err(e) => RecordReport::unreadable(entry.id, entry.filename.clone(), &e),
            };
            pb.set_message(entry.filename.clone());
            pb.inc(1);
            report
        })
        .collect();

    pb.finish_and_clear();
    info!(
        path = %repository.root().display(),
        records = records.len(),
        "word directory checked"
    );
    CheckReport::new(records, start.elapsed())
}

/// Validate a list of already parsed records
///
/// Records without an id are numbered from 1 in list order.
#[must_use]
pub fn check_records(records: &[WordRecord], show_progress: bool) -> CheckReport {
    let start = Instant::now();
    let pb = progress_bar(records.len(), show_progress);

    let reports: Vec<RecordReport> = records
        .par_iter()
        .enumerate()
        .map(|(index, record)| {
            let id = record
                .id
                .unwrap_or_else(|| u32::try_from(index + 1).unwrap_or(u32::MAX));
            let report = RecordReport::from_record(id, EMBEDDED_SOURCE.to_string(), record);
            pb.inc(1);
            report
        })
        .collect();

    pb.finish_and_clear();
    CheckReport::new(reports, start.elapsed())
}
