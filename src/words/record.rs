//! On-disk word records
//!
//! Records follow the word-pack JSON format: Spanish field names
//! (`palabra`, `categoria`, `pistas`, ...) as written by the content tools,
//! with English names accepted as aliases.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::core::{Category, Hint, Word, WordId};

use super::RepositoryError;

/// Category as stored: either a plain label or labels per language
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum CategoryField {
    Plain(String),
    Localized(BTreeMap<String, String>),
}

impl Default for CategoryField {
    fn default() -> Self {
        Self::Plain(String::new())
    }
}

impl From<CategoryField> for Category {
    fn from(field: CategoryField) -> Self {
        match field {
            CategoryField::Plain(label) => Self::french(label),
            CategoryField::Localized(labels) => Self::new(labels),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TranslationRecord {
    #[serde(alias = "traduccion")]
    pub translation: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HintRecord {
    #[serde(alias = "fr")]
    pub source: String,
    #[serde(alias = "es", default)]
    pub translation: String,
}

/// One word as found in a JSON file
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct WordRecord {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(alias = "categoria", default)]
    pub category: CategoryField,
    #[serde(alias = "palabra")]
    pub word: String,
    #[serde(alias = "longitud", default)]
    pub length: Option<usize>,
    #[serde(alias = "genero", default)]
    pub gender: Option<String>,
    #[serde(alias = "traducciones", alias = "traductions", default)]
    pub translations: BTreeMap<String, TranslationRecord>,
    #[serde(alias = "pistas", default)]
    pub hints: Vec<HintRecord>,
}

impl WordRecord {
    /// Parse a single record from JSON text
    ///
    /// # Errors
    /// Returns the `serde_json` error if the text is not a valid record.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Validate the record and build a [`Word`]
    ///
    /// # Errors
    /// Returns `RepositoryError::InvalidRecord` if the word text is not made of
    /// letters or if the declared length disagrees with it.
    pub fn into_word(self, id: WordId) -> Result<Word, RepositoryError> {
        let invalid = |reason: String| RepositoryError::InvalidRecord { id, reason };

        let mut word = Word::new(id, &self.word).map_err(|e| invalid(e.to_string()))?;
        if let Some(length) = self.length
            && length != word.len()
        {
            return Err(invalid(format!(
                "declared length {length} but {:?} has {} letters",
                self.word,
                word.len()
            )));
        }

        word = word.with_category(self.category.into());
        if let Some(gender) = self.gender {
            word = word.with_gender(gender);
        }
        for (language, record) in self.translations {
            word = word.with_translation(language, record.translation);
        }
        let hints = self
            .hints
            .into_iter()
            .map(|h| Hint::new(h.source, h.translation))
            .collect();

        Ok(word.with_hints(hints))
    }

    /// Content problems worth reporting to a word-pack author
    ///
    /// Unlike [`WordRecord::into_word`], this also flags records that load but
    /// make a poor game: no hints, blank hints, no Spanish translation.
    #[must_use]
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        match self.clone().into_word(WordId(self.id.unwrap_or(0))) {
            Err(RepositoryError::InvalidRecord { reason, .. }) => problems.push(reason),
            Err(e) => problems.push(e.to_string()),
            Ok(_) => {}
        }
        if self.hints.is_empty() {
            problems.push("no hints".to_string());
        }
        for (i, hint) in self.hints.iter().enumerate() {
            if hint.source.trim().is_empty() {
                problems.push(format!("hint {} has no text", i + 1));
            }
        }
        if !self.translations.contains_key("es") {
            problems.push("missing Spanish translation".to_string());
        }

        problems
    }
}
