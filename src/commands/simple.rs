//! Simple interactive CLI mode
//!
//! Line-based game without TUI: one guess per line.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::debug;

use crate::core::{Difficulty, is_latin_letter};
use crate::game::{Game, GameEvent, GameStatus, Phase};
use crate::output::{print_board, print_hint, print_outcome};
use crate::words::{RepositoryError, WordRepository};

/// One line typed by the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(Vec<char>),
    Hint,
    GiveUp,
    NewGame,
    Quit,
    Empty,
}

impl Command {
    /// Parse a line; anything that is not a command is a guess made of its
    /// letters
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" => Self::Empty,
            "?" | "pista" | "hint" => Self::Hint,
            "!" | "rendirse" | "abandon" => Self::GiveUp,
            "new" | "nueva" => Self::NewGame,
            "quit" | "q" | "exit" | "salir" => Self::Quit,
            _ => Self::Guess(line.chars().filter(|&c| is_latin_letter(c)).collect()),
        }
    }
}

/// Parse a difficulty answer: a menu number or a tier name
#[must_use]
pub fn parse_difficulty(input: &str) -> Option<Difficulty> {
    match input.trim() {
        "1" => Some(Difficulty::Easy),
        "2" => Some(Difficulty::Normal),
        "3" => Some(Difficulty::Hard),
        other => other.parse().ok(),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading user input or writing the prompt fails.
pub fn run_simple<R: WordRepository>(game: &mut Game<R>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Les Mots - Modo interactivo                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Adivina la palabra francesa. Los acentos no importan.");
    println!("Comandos: '?' pista, '!' rendirse, 'new' nueva palabra, 'quit' salir\n");

    loop {
        match game.phase() {
            Phase::ChoosingDifficulty => {
                for difficulty in Difficulty::ALL {
                    println!(
                        "  {}. {} ({} intentos, {} pistas)",
                        menu_number(difficulty),
                        difficulty.display_name().bright_white().bold(),
                        difficulty.max_attempts(),
                        difficulty.max_hints()
                    );
                }
                let Some(input) = get_user_input("Dificultad")? else {
                    return Ok(());
                };
                if Command::parse(&input) == Command::Quit {
                    return farewell();
                }
                match parse_difficulty(&input) {
                    Some(difficulty) => start(game, |g| g.select_difficulty(difficulty)),
                    None => println!("❌ Elige 1, 2 o 3\n"),
                }
            }
            Phase::Loading => start(game, |g| g.start_new_game(true)),
            Phase::Unavailable => {
                let error = game.last_error().unwrap_or("unknown error");
                println!("{} {error}", "❌ No se pudo cargar la palabra:".red().bold());
                match get_user_input("¿Reintentar? (s/n)")? {
                    Some(answer) if is_yes(&answer) => start(game, |g| g.start_new_game(true)),
                    _ => return farewell(),
                }
            }
            Phase::Active(GameStatus::Playing) => {
                if let Some(session) = game.session() {
                    print_board(session, game.streak());
                }
                let Some(input) = get_user_input("Palabra")? else {
                    return Ok(());
                };
                match Command::parse(&input) {
                    Command::Quit => return farewell(),
                    Command::Empty => {}
                    Command::Hint => {
                        let events = game.request_hint();
                        if events.is_empty() {
                            println!("{}", "No quedan pistas".bright_black());
                        }
                        report(&events);
                    }
                    Command::GiveUp => report(&game.give_up()),
                    Command::NewGame => start(game, |g| g.start_new_game(true)),
                    Command::Guess(letters) => guess(game, &letters),
                }
            }
            Phase::Active(_) => {
                if let Some(session) = game.session() {
                    print_board(session, game.streak());
                    print_outcome(session, game.streak());
                }
                match get_user_input("¿Otra partida? (s/n)")? {
                    Some(answer) if is_yes(&answer) => start(game, Game::next_game),
                    _ => return farewell(),
                }
            }
        }
    }
}

fn guess<R: WordRepository>(game: &mut Game<R>, letters: &[char]) {
    let Some(length) = game.session().map(|s| s.word().len()) else {
        return;
    };
    if letters.len() != length {
        println!("❌ La palabra tiene {length} letras\n");
        return;
    }

    while !game.remove_letter().is_empty() {}
    let mut events: Vec<GameEvent> = letters
        .iter()
        .flat_map(|&letter| game.append_letter(letter))
        .collect();
    if !events
        .iter()
        .any(|e| matches!(e, GameEvent::GuessEvaluated { .. }))
    {
        events.extend(game.submit_guess());
    }
    report(&events);
}

fn start<R, F>(game: &mut Game<R>, action: F)
where
    R: WordRepository,
    F: FnOnce(&mut Game<R>) -> Result<Vec<GameEvent>, RepositoryError>,
{
    match action(game) {
        Ok(events) => report(&events),
        Err(e) => debug!(error = %e, "draw failed"),
    }
}

/// Print the events worth a line of their own
fn report(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::GameStarted { length, .. } => {
                println!("\n🔄 Nueva palabra de {length} letras");
            }
            GameEvent::HintRevealed { hint, .. } => print_hint(hint),
            GameEvent::Missed { attempts_left, .. } => {
                println!(
                    "{}",
                    format!("Incorrecto, quedan {attempts_left} intentos").yellow()
                );
            }
            GameEvent::StreakChanged { new_best: true, .. } => {
                println!("{}", "⭐ ¡Nueva mejor racha!".bright_yellow().bold());
            }
            _ => {}
        }
    }
}

const fn menu_number(difficulty: Difficulty) -> u8 {
    match difficulty {
        Difficulty::Easy => 1,
        Difficulty::Normal => 2,
        Difficulty::Hard => 3,
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "si" | "sí" | "y" | "yes" | "o" | "oui"
    )
}

fn farewell() -> Result<()> {
    println!("\n👋 ¡Hasta pronto!\n");
    Ok(())
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read input")?;

    Ok((read > 0).then(|| input.trim().to_string()))
}
