//! Formatting utilities for terminal output

use colored::{ColoredString, Colorize};

use crate::core::{Feedback, LetterVerdict};
use crate::game::HintPool;

/// Render one letter as a colored tile
#[must_use]
pub fn tile(letter: char, verdict: LetterVerdict) -> ColoredString {
    let text = format!(" {letter} ");
    match verdict {
        LetterVerdict::Correct => text.black().on_green().bold(),
        LetterVerdict::Present => text.black().on_yellow().bold(),
        LetterVerdict::Absent => text.white().on_bright_black(),
    }
}

/// Render a submitted row as colored tiles
#[must_use]
pub fn colored_row(letters: &[char], feedback: &Feedback) -> String {
    letters
        .iter()
        .zip(feedback.verdicts())
        .map(|(&letter, &verdict)| tile(letter, verdict).to_string())
        .collect()
}

/// Render the row being typed, padded with blanks up to `length`
#[must_use]
pub fn pending_row(buffer: &[char], length: usize) -> String {
    (0..length)
        .map(|i| buffer.get(i).map_or_else(|| " _ ".to_string(), |c| format!(" {c} ")))
        .collect()
}

/// Label of the hint button for the current pool
///
/// # Examples
/// ```
/// use les_mots::core::Hint;
/// use les_mots::game::HintPool;
/// use les_mots::output::formatters::hint_button_label;
///
/// let pool = HintPool::new(vec![Hint::new("Il miaule", "Maúlla")], 3);
/// assert_eq!(hint_button_label(&pool), "Revelar Pista (3 restantes)");
/// ```
#[must_use]
pub fn hint_button_label(hints: &HintPool) -> String {
    if hints.limit_reached() {
        "Límite alcanzado".to_string()
    } else if hints.is_exhausted() {
        "Sin pistas".to_string()
    } else {
        format!("Revelar Pista ({} restantes)", hints.remaining())
    }
}

/// Attempts meter such as "●●○" (used, then left)
#[must_use]
pub fn attempts_meter(used: usize, max: usize) -> String {
    let used = used.min(max);
    format!("{}{}", "●".repeat(used), "○".repeat(max - used))
}
