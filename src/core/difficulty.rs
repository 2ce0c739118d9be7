//! Difficulty tiers and their attempt/hint budgets

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Named bundle of (max attempts, max hints)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Normal, Self::Hard];

    #[must_use]
    pub const fn max_attempts(self) -> usize {
        match self {
            Self::Easy => 5,
            Self::Normal => 3,
            Self::Hard => 1,
        }
    }

    /// Hints a player may reveal, the automatic first hint included
    #[must_use]
    pub const fn max_hints(self) -> usize {
        match self {
            Self::Easy => 5,
            Self::Normal => 3,
            Self::Hard => 1,
        }
    }

    /// Name shown to players
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Easy => "Fácil",
            Self::Normal => "Normal",
            Self::Hard => "Desafío",
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty {0:?} (expected easy, normal or hard)")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "facil" | "fácil" => Ok(Self::Easy),
            "normal" => Ok(Self::Normal),
            "hard" | "desafio" | "desafío" => Ok(Self::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}
