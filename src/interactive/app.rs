//! TUI application state and logic

use std::io;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::core::{Difficulty, is_latin_letter};
use crate::game::{Game, GameEvent, GameStatus, Input, Phase};
use crate::words::WordRepository;

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Game(Input),
    MenuUp,
    MenuDown,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<R> {
    pub game: Game<R>,
    pub messages: Vec<Message>,
    /// Highlighted entry of the difficulty menu
    pub menu_cursor: usize,
    pub should_quit: bool,
}

impl<R: WordRepository> App<R> {
    #[must_use]
    pub fn new(game: Game<R>) -> Self {
        let mut app = Self {
            game,
            messages: Vec::new(),
            menu_cursor: 1,
            should_quit: false,
        };
        app.add_message("¡Bienvenido! Adivina la palabra francesa.", MessageStyle::Info);
        app
    }

    /// Draw the first word when the tier is already known
    pub fn start(&mut self) {
        if self.game.phase() == Phase::Loading {
            self.apply(Input::NewGame {
                keep_difficulty: true,
            });
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match map_key(key, self.game.phase(), self.menu_cursor) {
            Some(Action::Game(input)) => self.apply(input),
            Some(Action::MenuUp) => self.menu_cursor = self.menu_cursor.saturating_sub(1),
            Some(Action::MenuDown) => {
                self.menu_cursor = (self.menu_cursor + 1).min(Difficulty::ALL.len() - 1);
            }
            Some(Action::Quit) => self.should_quit = true,
            None => {}
        }
    }

    /// Forward an input to the game and turn its events into messages
    pub fn apply(&mut self, input: Input) {
        match self.game.handle(input) {
            Ok(events) => {
                for event in &events {
                    self.on_event(event);
                }
            }
            Err(e) => self.add_message(
                &format!("No se pudo cargar la palabra: {e}"),
                MessageStyle::Error,
            ),
        }
    }

    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::DifficultyRequired => {
                self.add_message("Elige una dificultad", MessageStyle::Info);
            }
            GameEvent::GameStarted {
                length, difficulty, ..
            } => {
                self.messages.clear();
                self.add_message(
                    &format!(
                        "Nueva palabra: {length} letras ({})",
                        difficulty.display_name()
                    ),
                    MessageStyle::Info,
                );
            }
            GameEvent::Missed { attempts_left, .. } => self.add_message(
                &format!("Incorrecto, quedan {attempts_left} intentos"),
                MessageStyle::Error,
            ),
            GameEvent::Won { attempts } => self.add_message(
                &format!("¡Felicidades! Encontrada en {attempts} intentos"),
                MessageStyle::Success,
            ),
            GameEvent::Lost { .. } => {
                let answer = self
                    .game
                    .session()
                    .map(|s| s.word().text())
                    .unwrap_or_default();
                self.add_message(
                    &format!("¡Juego terminado! La palabra era {answer}"),
                    MessageStyle::Error,
                );
            }
            GameEvent::StreakChanged { new_best: true, streak } => self.add_message(
                &format!("⭐ ¡Nueva mejor racha: {}!", streak.best),
                MessageStyle::Success,
            ),
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Translate a key press for the current phase
#[must_use]
pub fn map_key(key: KeyEvent, phase: Phase, menu_cursor: usize) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        let finished = matches!(phase, Phase::Active(GameStatus::Won | GameStatus::Lost));
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Game(Input::Restart)),
            // After a loss the tier is chosen again
            KeyCode::Char('n') if finished => Some(Action::Game(Input::Next)),
            KeyCode::Char('n') => Some(Action::Game(Input::NewGame {
                keep_difficulty: true,
            })),
            _ => None,
        };
    }

    match phase {
        Phase::ChoosingDifficulty => match key.code {
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                Some(Action::Game(Input::SelectDifficulty(Difficulty::ALL[index])))
            }
            KeyCode::Up => Some(Action::MenuUp),
            KeyCode::Down => Some(Action::MenuDown),
            KeyCode::Enter => Difficulty::ALL
                .get(menu_cursor)
                .map(|&d| Action::Game(Input::SelectDifficulty(d))),
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
        Phase::Loading => None,
        Phase::Unavailable => match key.code {
            KeyCode::Enter | KeyCode::Char('r') => Some(Action::Game(Input::NewGame {
                keep_difficulty: true,
            })),
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
        Phase::Active(GameStatus::Playing) => match key.code {
            KeyCode::Tab | KeyCode::Char('?') => Some(Action::Game(Input::Hint)),
            KeyCode::Char(c) if is_latin_letter(c) => Some(Action::Game(Input::Letter(c))),
            KeyCode::Backspace => Some(Action::Game(Input::Backspace)),
            KeyCode::Enter => Some(Action::Game(Input::Submit)),
            KeyCode::Esc => Some(Action::Game(Input::GiveUp)),
            _ => None,
        },
        Phase::Active(_) => match key.code {
            KeyCode::Enter | KeyCode::Char('n') => Some(Action::Game(Input::Next)),
            KeyCode::Char('r') => Some(Action::Game(Input::Restart)),
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: WordRepository>(app: App<R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, R>(terminal: &mut Terminal<B>, mut app: App<R>) -> Result<()>
where
    B: ratatui::backend::Backend,
    R: WordRepository,
{
    app.start();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::{Hint, Word, WordId};
    use crate::words::MemoryRepository;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app(difficulty: Option<Difficulty>) -> App<MemoryRepository> {
        let word = Word::new(WordId(1), "chat")
            .unwrap()
            .with_hints(vec![
                Hint::new("Il miaule", "Maúlla"),
                Hint::new("Il ronronne", "Ronronea"),
            ]);
        let config = GameConfig {
            difficulty,
            seed: Some(5),
            ..GameConfig::default()
        };
        let mut app = App::new(Game::new(MemoryRepository::new(vec![word]).unwrap(), &config));
        app.start();
        app
    }

    fn type_keys(app: &mut App<MemoryRepository>, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn keys_map_per_phase() {
        let playing = Phase::Active(GameStatus::Playing);
        assert_eq!(
            map_key(key(KeyCode::Char('é')), playing, 0),
            Some(Action::Game(Input::Letter('é')))
        );
        assert_eq!(
            map_key(key(KeyCode::Tab), playing, 0),
            Some(Action::Game(Input::Hint))
        );
        assert_eq!(
            map_key(key(KeyCode::Esc), playing, 0),
            Some(Action::Game(Input::GiveUp))
        );
        assert_eq!(map_key(key(KeyCode::Char('1')), playing, 0), None);

        assert_eq!(
            map_key(key(KeyCode::Char('3')), Phase::ChoosingDifficulty, 0),
            Some(Action::Game(Input::SelectDifficulty(Difficulty::Hard)))
        );
        assert_eq!(
            map_key(key(KeyCode::Enter), Phase::ChoosingDifficulty, 0),
            Some(Action::Game(Input::SelectDifficulty(Difficulty::Easy)))
        );
        assert_eq!(
            map_key(key(KeyCode::Enter), Phase::Active(GameStatus::Won), 0),
            Some(Action::Game(Input::Next))
        );
        assert_eq!(
            map_key(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                playing,
                0
            ),
            Some(Action::Quit)
        );
    }

    #[test]
    fn menu_selects_difficulty() {
        let mut app = app(None);
        assert_eq!(app.game.phase(), Phase::ChoosingDifficulty);

        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.menu_cursor, 2);
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.game.difficulty(), Some(Difficulty::Hard));
        assert_eq!(app.game.phase(), Phase::Active(GameStatus::Playing));
    }

    #[test]
    fn typed_word_wins_and_reports() {
        let mut app = app(Some(Difficulty::Normal));
        type_keys(&mut app, "chat");

        assert_eq!(app.game.phase(), Phase::Active(GameStatus::Won));
        assert!(
            app.messages
                .iter()
                .any(|m| m.style == MessageStyle::Success && m.text.contains("Felicidades"))
        );

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.game.phase(), Phase::Active(GameStatus::Playing));
    }

    #[test]
    fn give_up_reveals_answer() {
        let mut app = app(Some(Difficulty::Easy));
        app.handle_key(key(KeyCode::Esc));

        assert_eq!(app.game.phase(), Phase::Active(GameStatus::Lost));
        assert!(app.messages.iter().any(|m| m.text.contains("CHAT")));
    }

    #[test]
    fn empty_repository_shows_error() {
        let config = GameConfig {
            difficulty: Some(Difficulty::Easy),
            ..GameConfig::default()
        };
        let mut app = App::new(Game::new(MemoryRepository::default(), &config));
        app.start();

        assert_eq!(app.game.phase(), Phase::Unavailable);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_n_follows_outcome_once_game_is_over() {
        let ctrl_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert_eq!(
            map_key(ctrl_n, Phase::Active(GameStatus::Lost), 0),
            Some(Action::Game(Input::Next))
        );
        assert_eq!(
            map_key(ctrl_n, Phase::Active(GameStatus::Won), 0),
            Some(Action::Game(Input::Next))
        );
        assert_eq!(
            map_key(ctrl_n, Phase::Active(GameStatus::Playing), 0),
            Some(Action::Game(Input::NewGame {
                keep_difficulty: true
            }))
        );

        let mut app = app(Some(Difficulty::Easy));
        app.handle_key(key(KeyCode::Esc));
        app.handle_key(ctrl_n);
        assert_eq!(app.game.phase(), Phase::ChoosingDifficulty);
        assert_eq!(app.game.difficulty(), None);
    }

    #[test]
    fn ctrl_n_mid_game_resets_streak() {
        let ctrl_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        let mut app = app(Some(Difficulty::Easy));
        type_keys(&mut app, "chat");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.game.streak().current, 1);

        type_keys(&mut app, "ch");
        app.handle_key(ctrl_n);
        assert_eq!(app.game.streak().current, 0);
        assert_eq!(app.game.phase(), Phase::Active(GameStatus::Playing));
    }

    #[test]
    fn non_latin_keys_are_ignored() {
        let playing = Phase::Active(GameStatus::Playing);
        assert_eq!(map_key(key(KeyCode::Char('λ')), playing, 0), None);
        assert_eq!(map_key(key(KeyCode::Char('中')), playing, 0), None);
        assert_eq!(
            map_key(key(KeyCode::Char('ç')), playing, 0),
            Some(Action::Game(Input::Letter('ç')))
        );
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app(None);
        for i in 0..10 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "5");
    }
}
