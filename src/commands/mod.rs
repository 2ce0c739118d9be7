//! Command implementations

pub mod catalog;
pub mod check;
pub mod simple;

pub use catalog::list_words;
pub use check::{CheckReport, RecordReport, check_directory, check_records};
pub use simple::run_simple;
