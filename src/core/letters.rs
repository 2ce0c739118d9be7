//! Accent-insensitive letter folding
//!
//! Guesses are compared against the target after folding: the letter is
//! decomposed (NFD), combining marks are dropped and the base letter is
//! upper-cased. `é`, `È` and `e` all fold to `E`.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold a single letter for comparison
///
/// Letters whose upper-case form spans several chars keep only the first one,
/// so folding never changes the length of a word.
///
/// # Examples
/// ```
/// use les_mots::core::fold_letter;
///
/// assert_eq!(fold_letter('é'), 'E');
/// assert_eq!(fold_letter('Ç'), 'C');
/// assert_eq!(fold_letter('a'), 'A');
/// ```
#[must_use]
pub fn fold_letter(letter: char) -> char {
    let base = std::iter::once(letter)
        .nfd()
        .find(|c| !is_combining_mark(*c))
        .unwrap_or(letter);
    base.to_uppercase().next().unwrap_or(base)
}

/// Whether `letter` can be typed into a guess
///
/// Accepts Latin letters with or without accents, plus the `œ` and `æ`
/// ligatures. Other scripts never match a French word.
///
/// # Examples
/// ```
/// use les_mots::core::is_latin_letter;
///
/// assert!(is_latin_letter('é'));
/// assert!(is_latin_letter('œ'));
/// assert!(!is_latin_letter('λ'));
/// ```
#[must_use]
pub fn is_latin_letter(letter: char) -> bool {
    matches!(fold_letter(letter), 'A'..='Z' | 'Œ' | 'Æ')
}

/// Fold every letter of a word
#[must_use]
pub fn fold_word(letters: &[char]) -> Vec<char> {
    letters.iter().copied().map(fold_letter).collect()
}

/// Upper-case a letter for display, keeping its accents
#[must_use]
pub fn display_letter(letter: char) -> char {
    letter.to_uppercase().next().unwrap_or(letter)
}
