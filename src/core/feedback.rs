//! Letter-by-letter feedback for a guess
//!
//! Each position of a guess receives a verdict:
//! - Correct: same letter at the same position
//! - Present: letter appears elsewhere in the target
//! - Absent: letter not in the target (or all its occurrences already used)
//!
//! Letters are folded before comparison, so accents never change a verdict.

use rustc_hash::FxHashMap;

use super::letters::fold_letter;

/// Verdict for one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterVerdict {
    Correct,
    Present,
    Absent,
}

impl LetterVerdict {
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Verdicts for a whole guess, one per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterVerdict>);

impl Feedback {
    /// Evaluate `guess` against `target`
    ///
    /// Both slices must have the same length; the game only submits full rows.
    ///
    /// # Algorithm
    /// 1. Fold both words (strip accents, upper-case)
    /// 2. First pass: mark exact matches and remove them from the available pool
    /// 3. Second pass, left to right: mark present letters while the pool still
    ///    holds that letter, consuming one occurrence each time
    ///
    /// # Examples
    /// ```
    /// use les_mots::core::{Feedback, LetterVerdict::*};
    ///
    /// let guess: Vec<char> = "TOTAL".chars().collect();
    /// let target: Vec<char> = "PORTE".chars().collect();
    ///
    /// // Only the first T is marked present: PORTE holds a single T
    /// let feedback = Feedback::evaluate(&guess, &target);
    /// assert_eq!(feedback.verdicts(), &[Present, Correct, Absent, Absent, Absent]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &[char], target: &[char]) -> Self {
        debug_assert_eq!(
            guess.len(),
            target.len(),
            "guess and target must have the same length"
        );

        let guess: Vec<char> = guess.iter().copied().map(fold_letter).collect();
        let target: Vec<char> = target.iter().copied().map(fold_letter).collect();

        let mut result = vec![LetterVerdict::Absent; guess.len()];
        let mut available: FxHashMap<char, usize> = FxHashMap::default();
        for &letter in &target {
            *available.entry(letter).or_insert(0) += 1;
        }

        // First pass: exact position matches
        for (i, (g, t)) in guess.iter().zip(&target).enumerate() {
            if g == t {
                result[i] = LetterVerdict::Correct;
                if let Some(count) = available.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, earliest positions first
        for (i, letter) in guess.iter().enumerate() {
            if result[i] == LetterVerdict::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(letter)
                && *count > 0
            {
                result[i] = LetterVerdict::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[LetterVerdict] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|v| *v == LetterVerdict::Correct)
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterVerdict::Correct)
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterVerdict::Present)
    }

    fn count(&self, verdict: LetterVerdict) -> usize {
        self.0.iter().filter(|v| **v == verdict).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.to_emoji()).collect()
    }
}

/// Accent-insensitive equality of a guess with the target
///
/// # Examples
/// ```
/// use les_mots::core::is_exact_match;
///
/// let guess: Vec<char> = "ETE".chars().collect();
/// let target: Vec<char> = "ÉTÉ".chars().collect();
/// assert!(is_exact_match(&guess, &target));
/// ```
#[must_use]
pub fn is_exact_match(guess: &[char], target: &[char]) -> bool {
    guess.len() == target.len()
        && guess
            .iter()
            .zip(target)
            .all(|(g, t)| fold_letter(*g) == fold_letter(*t))
}
