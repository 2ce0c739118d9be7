//! Target word representation
//!
//! A Word stores the letters to guess along with the learning material shown
//! around the board: category, translations and hint phrases.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use super::letters::{display_letter, fold_word};

/// Identifier of a word inside a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordId(pub u32);

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must contain at least one letter")]
    Empty,
    #[error("word contains a non-letter character {0:?}")]
    InvalidCharacter(char),
}

/// A hint phrase in French with its translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub source: String,
    pub translation: String,
}

impl Hint {
    #[must_use]
    pub fn new(source: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            translation: translation.into(),
        }
    }
}

/// Gloss of the word in another language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub translation: String,
}

/// Category label, localized by language code
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Category {
    labels: BTreeMap<String, String>,
}

impl Category {
    /// Language shown by default
    pub const DISPLAY_LANGUAGE: &'static str = "fr";

    #[must_use]
    pub fn new(labels: BTreeMap<String, String>) -> Self {
        Self { labels }
    }

    /// A category with a single French label
    #[must_use]
    pub fn french(label: impl Into<String>) -> Self {
        let mut labels = BTreeMap::new();
        labels.insert(Self::DISPLAY_LANGUAGE.to_string(), label.into());
        Self { labels }
    }

    #[must_use]
    pub fn label(&self, language: &str) -> Option<&str> {
        self.labels
            .get(language)
            .map(String::as_str)
            .filter(|label| !label.is_empty())
    }

    /// French label, falling back to any non-empty label
    #[must_use]
    pub fn display(&self) -> &str {
        self.label(Self::DISPLAY_LANGUAGE)
            .or_else(|| self.labels.values().map(String::as_str).find(|l| !l.is_empty()))
            .unwrap_or("")
    }
}

/// A word to guess
///
/// Letters are stored upper-cased with their accents so they can be displayed
/// as written; comparisons go through [`Word::folded`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    id: WordId,
    letters: Vec<char>,
    folded: Vec<char>,
    category: Category,
    gender: Option<String>,
    translations: BTreeMap<String, Translation>,
    hints: Vec<Hint>,
}

impl Word {
    /// Create a new Word from its text
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains anything other
    /// than letters.
    ///
    /// # Examples
    /// ```
    /// use les_mots::core::{Word, WordId};
    ///
    /// let word = Word::new(WordId(1), "été").unwrap();
    /// assert_eq!(word.text(), "ÉTÉ");
    /// assert_eq!(word.len(), 3);
    ///
    /// assert!(Word::new(WordId(2), "pomme de terre").is_err());
    /// ```
    pub fn new(id: WordId, text: &str) -> Result<Self, WordError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(WordError::Empty);
        }
        if let Some(bad) = text.chars().find(|c| !c.is_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let letters: Vec<char> = text.chars().map(display_letter).collect();
        let folded = fold_word(&letters);

        Ok(Self {
            id,
            letters,
            folded,
            category: Category::default(),
            gender: None,
            translations: BTreeMap::new(),
            hints: Vec::new(),
        })
    }

    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    #[must_use]
    pub fn with_translation(
        mut self,
        language: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        self.translations.insert(
            language.into(),
            Translation {
                translation: translation.into(),
            },
        );
        self
    }

    #[must_use]
    pub fn with_hints(mut self, hints: Vec<Hint>) -> Self {
        self.hints = hints;
        self
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> WordId {
        self.id
    }

    /// Letters as displayed, upper-cased with accents
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Letters folded for comparison
    #[inline]
    #[must_use]
    pub fn folded(&self) -> &[char] {
        &self.folded
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[must_use]
    pub const fn category(&self) -> &Category {
        &self.category
    }

    #[must_use]
    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref()
    }

    #[must_use]
    pub fn translation(&self, language: &str) -> Option<&str> {
        self.translations
            .get(language)
            .map(|t| t.translation.as_str())
    }

    #[must_use]
    pub const fn translations(&self) -> &BTreeMap<String, Translation> {
        &self.translations
    }

    #[must_use]
    pub fn hints(&self) -> &[Hint] {
        &self.hints
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}
