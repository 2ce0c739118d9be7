//! Les Mots
//!
//! A French word-guessing game: guess the hidden word within a limited number
//! of attempts, with hints translated to Spanish and accents ignored when
//! comparing letters.
//!
//! # Quick Start
//!
//! ```rust
//! use les_mots::config::GameConfig;
//! use les_mots::core::Difficulty;
//! use les_mots::game::{Game, GameStatus, Phase};
//! use les_mots::words::embedded;
//!
//! let config = GameConfig {
//!     difficulty: Some(Difficulty::Normal),
//!     seed: Some(7),
//!     ..GameConfig::default()
//! };
//! let mut game = Game::new(embedded().unwrap(), &config);
//! game.start_new_game(true).unwrap();
//!
//! // Type the answer itself, without accents
//! let answer: String = game.session().unwrap().word().folded().iter().collect();
//! for letter in answer.chars() {
//!     game.append_letter(letter);
//! }
//! assert_eq!(game.phase(), Phase::Active(GameStatus::Won));
//! assert_eq!(game.streak().current, 1);
//! ```

// Core domain types
pub mod core;

// Game configuration
pub mod config;

// Game state machine
pub mod game;

// Word repositories
pub mod words;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
