//! Events emitted by the game for presentation layers
//!
//! Every operation returns the events it caused, in order. An empty list
//! means the input was ignored.

use crate::core::{Difficulty, Feedback, Hint, WordId};

use super::streak::StreakSnapshot;

/// Status of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A tier must be chosen before the next word is drawn
    DifficultyRequired,
    GameStarted {
        word_id: WordId,
        length: usize,
        difficulty: Difficulty,
    },
    LetterAdded {
        position: usize,
        letter: char,
    },
    LetterRemoved {
        position: usize,
    },
    /// A full row was submitted; `row` is zero-based
    GuessEvaluated {
        row: usize,
        feedback: Feedback,
    },
    /// Wrong guess with attempts left
    Missed {
        row: usize,
        attempts_left: usize,
    },
    Won {
        attempts: usize,
    },
    Lost {
        gave_up: bool,
    },
    HintRevealed {
        hint: Hint,
        remaining: usize,
    },
    StreakChanged {
        streak: StreakSnapshot,
        new_best: bool,
    },
}
