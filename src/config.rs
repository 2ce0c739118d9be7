//! Game configuration
//!
//! Every field is optional in the TOML file:
//!
//! ```toml
//! difficulty = "hard"
//! recent_window = 3
//! auto_first_hint = true
//! auto_submit = true
//! seed = 42
//! words = "assets/db"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Difficulty;
use crate::words::RECENT_WORDS;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Preselected tier; when absent the player picks one before each series
    pub difficulty: Option<Difficulty>,
    /// Number of recent words excluded from the next draw
    pub recent_window: usize,
    /// Reveal the first hint as soon as a word is loaded
    pub auto_first_hint: bool,
    /// Submit a row as soon as its last letter is typed
    pub auto_submit: bool,
    /// Seed for word and hint selection
    pub seed: Option<u64>,
    /// Word directory to use instead of the embedded pack
    pub words: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: None,
            recent_window: RECENT_WORDS,
            auto_first_hint: true,
            auto_submit: true,
            seed: None,
            words: None,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_toml(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    /// Returns the TOML error if the text is not a valid config.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
