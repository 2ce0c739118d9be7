//! Terminal output formatting
//!
//! Colored tiles, boards and reports for the line-based commands.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_catalog, print_check_report, print_hint, print_outcome};
