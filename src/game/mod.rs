//! Game state machine
//!
//! [`GameSession`] plays one word; [`Game`] strings sessions together, draws
//! words from a repository and keeps the streak.

mod engine;
mod events;
mod hints;
mod session;
mod streak;

pub use engine::{Game, Input, Phase};
pub use events::{GameEvent, GameStatus};
pub use hints::HintPool;
pub use session::GameSession;
pub use streak::{StreakSnapshot, StreakTracker};
