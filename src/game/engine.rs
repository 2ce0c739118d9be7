//! Play-session orchestration
//!
//! `Game` owns everything that outlives a single word: the repository, the
//! random source, the recency window, the chosen difficulty and the streak.
//! It builds a fresh [`GameSession`] for each word and updates the streak when
//! a session ends.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::core::{Difficulty, WordId};
use crate::words::{RecencyWindow, RepositoryError, WordRepository, pick_random};

use super::events::{GameEvent, GameStatus};
use super::session::GameSession;
use super::streak::{StreakSnapshot, StreakTracker};

/// What the presentation layer should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No tier selected yet
    ChoosingDifficulty,
    /// Tier selected, no word drawn yet
    Loading,
    /// The last draw failed; a new game request retries it
    Unavailable,
    Active(GameStatus),
}

/// Discrete inputs coming from a front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Letter(char),
    Backspace,
    Submit,
    Hint,
    GiveUp,
    /// Keep the tier after a win, choose again after a loss
    Next,
    NewGame { keep_difficulty: bool },
    /// New series: streak reset and tier chosen again
    Restart,
    SelectDifficulty(Difficulty),
}

pub struct Game<R> {
    repository: R,
    recent: RecencyWindow,
    rng: StdRng,
    streak: StreakTracker,
    difficulty: Option<Difficulty>,
    session: Option<GameSession>,
    last_error: Option<String>,
    auto_first_hint: bool,
    auto_submit: bool,
}

impl<R: WordRepository> Game<R> {
    /// Create a game over `repository`; no word is drawn until
    /// [`Game::start_new_game`] or [`Game::select_difficulty`] is called
    #[must_use]
    pub fn new(repository: R, config: &GameConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Self {
            repository,
            recent: RecencyWindow::new(config.recent_window),
            rng,
            streak: StreakTracker::new(),
            difficulty: config.difficulty,
            session: None,
            last_error: None,
            auto_first_hint: config.auto_first_hint,
            auto_submit: config.auto_submit,
        }
    }

    /// Discard the current session and draw a new word
    ///
    /// A session still being played is abandoned and counts as a loss, so the
    /// streak drops to zero. With `keep_difficulty == false` (or no tier
    /// chosen yet) no word is drawn: the game waits for
    /// [`Game::select_difficulty`].
    ///
    /// # Errors
    /// Returns the repository error when no word can be loaded; the game then
    /// stays in [`Phase::Unavailable`] until another request succeeds.
    pub fn start_new_game(
        &mut self,
        keep_difficulty: bool,
    ) -> Result<Vec<GameEvent>, RepositoryError> {
        let mut events = self.abandon_session();
        self.last_error = None;
        if !keep_difficulty {
            self.difficulty = None;
        }
        let Some(difficulty) = self.difficulty else {
            events.push(GameEvent::DifficultyRequired);
            return Ok(events);
        };

        let word = match pick_random(&self.repository, &self.recent, &mut self.rng) {
            Ok(word) => word,
            Err(e) => {
                warn!(error = %e, "cannot start a game");
                self.last_error = Some(e.to_string());
                return Err(e);
            }
        };
        self.recent.remember(word.id());
        info!(word_id = %word.id(), %difficulty, "new game");

        events.push(GameEvent::GameStarted {
            word_id: word.id(),
            length: word.len(),
            difficulty,
        });
        let mut session = GameSession::new(word, difficulty).with_auto_submit(self.auto_submit);
        if self.auto_first_hint {
            events.extend(session.reveal_first_hint());
        }
        self.session = Some(session);
        Ok(events)
    }

    /// Choose the tier and draw a word
    ///
    /// Ignored while a game is being played.
    ///
    /// # Errors
    /// Returns the repository error when no word can be loaded.
    pub fn select_difficulty(
        &mut self,
        difficulty: Difficulty,
    ) -> Result<Vec<GameEvent>, RepositoryError> {
        if self.phase() == Phase::Active(GameStatus::Playing) {
            return Ok(Vec::new());
        }
        debug!(%difficulty, "difficulty selected");
        self.difficulty = Some(difficulty);
        self.start_new_game(true)
    }

    /// Move on after a finished game: same tier after a win, new choice
    /// after a loss
    ///
    /// # Errors
    /// Returns the repository error when no word can be loaded.
    pub fn next_game(&mut self) -> Result<Vec<GameEvent>, RepositoryError> {
        let keep = self
            .session
            .as_ref()
            .is_some_and(|s| s.status() == GameStatus::Won);
        self.start_new_game(keep)
    }

    /// Start a new series: the streak drops to zero and the tier is chosen
    /// again
    ///
    /// # Errors
    /// Never fails in practice since no word is drawn, but shares the
    /// signature of the other new-game requests.
    pub fn restart(&mut self) -> Result<Vec<GameEvent>, RepositoryError> {
        self.session = None;
        self.streak.reset();
        let mut events = vec![GameEvent::StreakChanged {
            streak: self.streak.snapshot(),
            new_best: false,
        }];
        events.extend(self.start_new_game(false)?);
        Ok(events)
    }

    pub fn append_letter(&mut self, letter: char) -> Vec<GameEvent> {
        self.with_session(|session, _| session.append_letter(letter))
    }

    pub fn remove_letter(&mut self) -> Vec<GameEvent> {
        self.with_session(|session, _| session.remove_letter())
    }

    pub fn submit_guess(&mut self) -> Vec<GameEvent> {
        self.with_session(|session, _| session.submit_guess())
    }

    pub fn request_hint(&mut self) -> Vec<GameEvent> {
        self.with_session(|session, rng| session.request_hint(rng))
    }

    pub fn give_up(&mut self) -> Vec<GameEvent> {
        self.with_session(|session, _| session.give_up())
    }

    /// Dispatch a front-end input
    ///
    /// # Errors
    /// Only new-game inputs can fail, with the repository error.
    pub fn handle(&mut self, input: Input) -> Result<Vec<GameEvent>, RepositoryError> {
        match input {
            Input::Letter(letter) => Ok(self.append_letter(letter)),
            Input::Backspace => Ok(self.remove_letter()),
            Input::Submit => Ok(self.submit_guess()),
            Input::Hint => Ok(self.request_hint()),
            Input::GiveUp => Ok(self.give_up()),
            Input::Next => self.next_game(),
            Input::NewGame { keep_difficulty } => self.start_new_game(keep_difficulty),
            Input::Restart => self.restart(),
            Input::SelectDifficulty(difficulty) => self.select_difficulty(difficulty),
        }
    }

    fn with_session(
        &mut self,
        action: impl FnOnce(&mut GameSession, &mut StdRng) -> Vec<GameEvent>,
    ) -> Vec<GameEvent> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        let mut events = action(session, &mut self.rng);
        self.settle(&mut events);
        events
    }

    /// Drop the current session, resetting the streak if it was unfinished
    fn abandon_session(&mut self) -> Vec<GameEvent> {
        let Some(session) = self.session.take() else {
            return Vec::new();
        };
        if session.status() != GameStatus::Playing {
            return Vec::new();
        }

        info!(word_id = %session.word().id(), "game abandoned");
        self.streak.reset();
        vec![GameEvent::StreakChanged {
            streak: self.streak.snapshot(),
            new_best: false,
        }]
    }

    /// Apply a game outcome to the streak
    fn settle(&mut self, events: &mut Vec<GameEvent>) {
        let outcome = events.iter().find_map(|event| match event {
            GameEvent::Won { .. } => Some(true),
            GameEvent::Lost { .. } => Some(false),
            _ => None,
        });

        let new_best = match outcome {
            Some(true) => self.streak.increment(),
            Some(false) => {
                self.streak.reset();
                false
            }
            None => return,
        };
        events.push(GameEvent::StreakChanged {
            streak: self.streak.snapshot(),
            new_best,
        });
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if let Some(session) = &self.session {
            Phase::Active(session.status())
        } else if self.last_error.is_some() {
            Phase::Unavailable
        } else if self.difficulty.is_none() {
            Phase::ChoosingDifficulty
        } else {
            Phase::Loading
        }
    }

    #[must_use]
    pub const fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub const fn streak(&self) -> StreakSnapshot {
        self.streak.snapshot()
    }

    #[must_use]
    pub const fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Message of the last failed draw, if the game is unavailable
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Ids of the last drawn words, most recent first
    pub fn recent_words(&self) -> impl Iterator<Item = WordId> + '_ {
        self.recent.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::io;
    use std::path::PathBuf;

    use super::*;
    use crate::core::{Hint, Word};
    use crate::words::{MemoryRepository, WordEntry};

    fn hints() -> Vec<Hint> {
        vec![
            Hint::new("un", "uno"),
            Hint::new("deux", "dos"),
            Hint::new("trois", "tres"),
            Hint::new("quatre", "cuatro"),
        ]
    }

    fn repository(texts: &[&str]) -> MemoryRepository {
        let words = texts
            .iter()
            .zip(1..)
            .map(|(text, id)| Word::new(WordId(id), text).unwrap().with_hints(hints()))
            .collect();
        MemoryRepository::new(words).unwrap()
    }

    fn config(difficulty: Option<Difficulty>) -> GameConfig {
        GameConfig {
            difficulty,
            seed: Some(1234),
            ..GameConfig::default()
        }
    }

    fn game(texts: &[&str], difficulty: Difficulty) -> Game<MemoryRepository> {
        let mut game = Game::new(repository(texts), &config(Some(difficulty)));
        game.start_new_game(true).unwrap();
        game
    }

    fn type_word(game: &mut Game<MemoryRepository>, text: &str) -> Vec<GameEvent> {
        text.chars().flat_map(|c| game.append_letter(c)).collect()
    }

    fn status(game: &Game<MemoryRepository>) -> GameStatus {
        game.session().unwrap().status()
    }

    #[test]
    fn normal_game_won_on_third_attempt() {
        let mut game = game(&["livre"], Difficulty::Normal);
        let session = game.session().unwrap();
        assert_eq!(session.max_attempts(), 3);
        assert_eq!(session.hints().max_hints(), 3);
        assert_eq!(session.word().len(), 5);

        let mut statuses = Vec::new();
        for guess in ["libre", "lieve", "livre"] {
            type_word(&mut game, guess);
            statuses.push(status(&game));
        }

        assert_eq!(
            statuses,
            vec![GameStatus::Playing, GameStatus::Playing, GameStatus::Won]
        );
        assert_eq!(game.streak(), StreakSnapshot { current: 1, best: 1 });
        assert_eq!(game.session().unwrap().attempt(), 3);
    }

    #[test]
    fn hard_game_lost_after_one_wrong_guess() {
        let mut game = game(&["livre"], Difficulty::Hard);
        type_word(&mut game, "livre");
        assert_eq!(game.streak().current, 1);

        game.next_game().unwrap();
        let events = type_word(&mut game, "libre");

        assert_eq!(status(&game), GameStatus::Lost);
        assert_eq!(game.streak(), StreakSnapshot { current: 0, best: 1 });
        assert!(events.contains(&GameEvent::StreakChanged {
            streak: StreakSnapshot { current: 0, best: 1 },
            new_best: false,
        }));
    }

    #[test]
    fn win_emits_new_best() {
        let mut game = game(&["été"], Difficulty::Easy);
        let events = type_word(&mut game, "ete");

        assert_eq!(
            events.last(),
            Some(&GameEvent::StreakChanged {
                streak: StreakSnapshot { current: 1, best: 1 },
                new_best: true,
            })
        );
    }

    #[test]
    fn first_hint_revealed_on_start() {
        let mut game = Game::new(repository(&["chat"]), &config(Some(Difficulty::Hard)));
        let events = game.start_new_game(true).unwrap();

        assert!(matches!(events[0], GameEvent::GameStarted { length: 4, .. }));
        assert_eq!(
            events[1],
            GameEvent::HintRevealed {
                hint: Hint::new("un", "uno"),
                remaining: 0,
            }
        );
        // Hard budget already spent
        assert!(game.request_hint().is_empty());
    }

    #[test]
    fn first_hint_can_be_disabled() {
        let config = GameConfig {
            auto_first_hint: false,
            ..config(Some(Difficulty::Normal))
        };
        let mut game = Game::new(repository(&["chat"]), &config);
        let events = game.start_new_game(true).unwrap();

        assert_eq!(events.len(), 1);
        assert!(game.session().unwrap().hints().revealed().is_empty());
    }

    #[test]
    fn hint_requests_stop_at_budget() {
        let mut game = game(&["chat"], Difficulty::Normal);
        assert_eq!(game.request_hint().len(), 1);
        assert_eq!(game.request_hint().len(), 1);
        assert!(game.request_hint().is_empty());

        let hints = game.session().unwrap().hints();
        assert_eq!(hints.revealed().len(), 3);
        assert_eq!(hints.available().len(), 1);
    }

    #[test]
    fn give_up_resets_streak() {
        let mut game = game(&["chat"], Difficulty::Easy);
        type_word(&mut game, "chat");
        game.next_game().unwrap();
        assert_eq!(game.streak().current, 1);

        let events = game.give_up();
        assert_eq!(events[0], GameEvent::Lost { gave_up: true });
        assert_eq!(status(&game), GameStatus::Lost);
        assert_eq!(game.streak(), StreakSnapshot { current: 0, best: 1 });
    }

    #[test]
    fn recent_words_are_not_repeated() {
        let mut game = game(&["chat", "chien", "loup", "ours", "lion"], Difficulty::Easy);
        let mut picks = vec![game.session().unwrap().word().id()];
        for _ in 0..60 {
            game.start_new_game(true).unwrap();
            picks.push(game.session().unwrap().word().id());
        }

        for window in picks.windows(3) {
            assert_ne!(window[0], window[1]);
            assert_ne!(window[1], window[2]);
            assert_ne!(window[0], window[2]);
        }
        assert_eq!(game.recent_words().count(), 3);
    }

    #[test]
    fn losing_requires_new_difficulty() {
        let mut game = game(&["chat", "chien"], Difficulty::Hard);
        game.give_up();

        assert_eq!(game.next_game().unwrap(), vec![GameEvent::DifficultyRequired]);
        assert_eq!(game.phase(), Phase::ChoosingDifficulty);
        assert_eq!(game.difficulty(), None);
        assert!(game.append_letter('c').is_empty());
        assert!(game.request_hint().is_empty());

        game.select_difficulty(Difficulty::Easy).unwrap();
        assert_eq!(game.phase(), Phase::Active(GameStatus::Playing));
        assert_eq!(game.session().unwrap().max_attempts(), 5);
    }

    #[test]
    fn winning_keeps_difficulty() {
        let mut game = game(&["chat"], Difficulty::Hard);
        type_word(&mut game, "chat");
        game.next_game().unwrap();

        assert_eq!(game.difficulty(), Some(Difficulty::Hard));
        assert_eq!(game.phase(), Phase::Active(GameStatus::Playing));
    }

    #[test]
    fn select_difficulty_ignored_mid_game() {
        let mut game = game(&["chat"], Difficulty::Normal);
        type_word(&mut game, "ch");

        assert!(game.select_difficulty(Difficulty::Easy).unwrap().is_empty());
        assert_eq!(game.difficulty(), Some(Difficulty::Normal));
        assert_eq!(game.session().unwrap().buffer().len(), 2);
    }

    #[test]
    fn new_game_without_difficulty_waits() {
        let mut game = Game::new(repository(&["chat"]), &config(None));
        assert_eq!(game.phase(), Phase::ChoosingDifficulty);
        assert_eq!(
            game.start_new_game(true).unwrap(),
            vec![GameEvent::DifficultyRequired]
        );

        let configured = Game::new(repository(&["chat"]), &config(Some(Difficulty::Easy)));
        assert_eq!(configured.phase(), Phase::Loading);
    }

    #[test]
    fn empty_repository_makes_game_unavailable() {
        let mut game = Game::new(
            MemoryRepository::default(),
            &config(Some(Difficulty::Normal)),
        );

        assert!(matches!(
            game.start_new_game(true),
            Err(RepositoryError::EmptyCatalog)
        ));
        assert_eq!(game.phase(), Phase::Unavailable);
        assert_eq!(game.last_error(), Some("no words available"));
        assert!(game.append_letter('a').is_empty());
        assert!(game.give_up().is_empty());
    }

    /// Fails the first catalog read, then serves the inner repository
    struct FlakyRepository {
        inner: MemoryRepository,
        offline: Cell<bool>,
    }

    impl WordRepository for FlakyRepository {
        fn catalog(&self) -> Result<Vec<WordEntry>, RepositoryError> {
            if self.offline.replace(false) {
                return Err(RepositoryError::Io {
                    path: PathBuf::from("words.json"),
                    source: io::Error::other("offline"),
                });
            }
            self.inner.catalog()
        }

        fn load(&self, id: WordId) -> Result<Word, RepositoryError> {
            self.inner.load(id)
        }
    }

    #[test]
    fn retry_after_unavailable_starts_game() {
        let repository = FlakyRepository {
            inner: repository(&["chat"]),
            offline: Cell::new(true),
        };
        let mut game = Game::new(repository, &config(Some(Difficulty::Normal)));

        assert!(matches!(
            game.start_new_game(true),
            Err(RepositoryError::Io { .. })
        ));
        assert_eq!(game.phase(), Phase::Unavailable);
        assert!(game.last_error().is_some_and(|e| e.contains("offline")));

        let events = game
            .handle(Input::NewGame {
                keep_difficulty: true,
            })
            .unwrap();
        assert!(matches!(events[0], GameEvent::GameStarted { length: 4, .. }));
        assert_eq!(game.phase(), Phase::Active(GameStatus::Playing));
        assert_eq!(game.last_error(), None);
        assert_eq!(game.difficulty(), Some(Difficulty::Normal));
    }

    #[test]
    fn new_game_mid_play_resets_streak() {
        let mut game = game(&["chat"], Difficulty::Easy);
        type_word(&mut game, "chat");
        game.next_game().unwrap();
        type_word(&mut game, "chut");
        type_word(&mut game, "char");
        assert_eq!(game.streak(), StreakSnapshot { current: 1, best: 1 });

        let events = game
            .handle(Input::NewGame {
                keep_difficulty: true,
            })
            .unwrap();

        assert_eq!(game.streak(), StreakSnapshot { current: 0, best: 1 });
        assert_eq!(
            events[0],
            GameEvent::StreakChanged {
                streak: StreakSnapshot { current: 0, best: 1 },
                new_best: false,
            }
        );
        assert!(matches!(events[1], GameEvent::GameStarted { .. }));
        assert_eq!(game.phase(), Phase::Active(GameStatus::Playing));
    }

    #[test]
    fn new_game_mid_play_without_tier_still_resets_streak() {
        let mut game = game(&["chat"], Difficulty::Normal);
        type_word(&mut game, "chat");
        game.next_game().unwrap();
        type_word(&mut game, "ch");

        let events = game.start_new_game(false).unwrap();
        assert_eq!(game.streak().current, 0);
        assert_eq!(events.last(), Some(&GameEvent::DifficultyRequired));
        assert!(events.iter().any(|e| matches!(e, GameEvent::StreakChanged { .. })));
    }

    #[test]
    fn new_game_after_win_keeps_streak() {
        let mut game = game(&["chat"], Difficulty::Normal);
        type_word(&mut game, "chat");

        let events = game.start_new_game(true).unwrap();
        assert_eq!(game.streak(), StreakSnapshot { current: 1, best: 1 });
        assert!(!events.iter().any(|e| matches!(e, GameEvent::StreakChanged { .. })));
    }

    #[test]
    fn restart_resets_streak_and_difficulty() {
        let mut game = game(&["chat"], Difficulty::Normal);
        type_word(&mut game, "chat");
        assert_eq!(game.streak().current, 1);

        let events = game.restart().unwrap();
        assert_eq!(game.streak(), StreakSnapshot { current: 0, best: 1 });
        assert_eq!(events.last(), Some(&GameEvent::DifficultyRequired));
        assert_eq!(game.phase(), Phase::ChoosingDifficulty);
    }

    #[test]
    fn handle_dispatches_inputs() {
        let config = GameConfig {
            auto_submit: false,
            ..config(None)
        };
        let mut game = Game::new(repository(&["chat"]), &config);

        game.handle(Input::SelectDifficulty(Difficulty::Normal))
            .unwrap();
        for letter in ['c', 'h', 'a', 'x'] {
            game.handle(Input::Letter(letter)).unwrap();
        }
        game.handle(Input::Backspace).unwrap();
        assert!(game.handle(Input::Submit).unwrap().is_empty());

        game.handle(Input::Letter('t')).unwrap();
        let events = game.handle(Input::Submit).unwrap();
        assert!(events.contains(&GameEvent::Won { attempts: 1 }));

        game.handle(Input::Next).unwrap();
        assert_eq!(game.phase(), Phase::Active(GameStatus::Playing));

        game.handle(Input::NewGame {
            keep_difficulty: false,
        })
        .unwrap();
        assert_eq!(game.phase(), Phase::ChoosingDifficulty);
    }

    #[test]
    fn huge_recent_window_falls_back_to_catalog() {
        let config = GameConfig {
            recent_window: usize::MAX,
            ..config(Some(Difficulty::Easy))
        };
        let mut game = Game::new(repository(&["chat", "loup"]), &config);
        for _ in 0..4 {
            game.start_new_game(true).unwrap();
            assert_eq!(game.phase(), Phase::Active(GameStatus::Playing));
        }
        assert_eq!(game.recent_words().count(), 2);
    }

    #[test]
    fn seeded_games_draw_the_same_words() {
        let draw = || {
            let mut game = game(&["chat", "chien", "loup", "ours", "lion"], Difficulty::Easy);
            let mut ids = Vec::new();
            for _ in 0..10 {
                ids.push(game.session().unwrap().word().id());
                game.start_new_game(true).unwrap();
            }
            ids
        };
        assert_eq!(draw(), draw());
    }
}
