//! Core domain types for Les Mots
//!
//! Words, difficulty tiers, letter folding and guess feedback. Everything here
//! is pure and deterministic.

mod difficulty;
mod feedback;
mod letters;
mod word;

pub use difficulty::{Difficulty, ParseDifficultyError};
pub use feedback::{Feedback, LetterVerdict, is_exact_match};
pub use letters::{display_letter, fold_letter, fold_word, is_latin_letter};
pub use word::{Category, Hint, Translation, Word, WordError, WordId};
