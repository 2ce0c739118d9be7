//! Display functions for command results

use colored::Colorize;

use super::formatters::{attempts_meter, colored_row, hint_button_label, pending_row};
use crate::commands::CheckReport;
use crate::core::Hint;
use crate::game::{GameSession, GameStatus, StreakSnapshot};
use crate::words::WordEntry;

/// Print the word catalog as a table
pub fn print_catalog(entries: &[WordEntry]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {}", "LES MOTS: CATALOGUE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("  {:>5}  {:>8}  {}", "ID", "LETTRES", "CATÉGORIE");

    for entry in entries {
        let length = entry
            .length
            .map_or_else(|| "?".to_string(), |len| len.to_string());
        let category = if entry.category.is_empty() {
            "-".bright_black().to_string()
        } else {
            entry.category.clone()
        };
        println!("  {:>5}  {:>8}  {}", entry.id.0, length, category);
    }

    println!("{}", "─".repeat(60).cyan());
    println!("  {} mots", entries.len().to_string().bright_yellow().bold());
}

/// Print the result of a word pack check
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {}", "WORD PACK CHECK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for record in report.flagged() {
        println!(
            "\n  {} {} ({})",
            "✗".red().bold(),
            record.source.bright_white().bold(),
            format!("id {}", record.id).bright_black()
        );
        for problem in &record.problems {
            println!("      • {problem}");
        }
    }

    let flagged = report.flagged().count();
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "  Records checked: {}",
        report.total().to_string().bright_white().bold()
    );
    println!(
        "  Time:            {:.2}s",
        report.duration.as_secs_f64()
    );
    if flagged == 0 {
        println!("{}", "  ✅ No problems found".green().bold());
    } else {
        println!(
            "{}",
            format!("  ❌ {flagged} record(s) with problems").red().bold()
        );
    }
}

/// Print the header and board of a session in progress
pub fn print_board(session: &GameSession, streak: StreakSnapshot) {
    let word = session.word();
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{}  {}  {}",
        word.category().display().bright_cyan().bold(),
        session.difficulty().display_name().bright_yellow(),
        format!("racha {} · mejor {}", streak.current, streak.best).bright_black()
    );
    println!(
        "Intentos {}  ·  {}",
        attempts_meter(session.attempt(), session.max_attempts()),
        hint_button_label(session.hints()).bright_black()
    );
    println!("{}", "─".repeat(60).cyan());

    for (letters, feedback) in session.rows() {
        println!("  {}  {}", colored_row(letters, &feedback), feedback.to_emoji());
    }
    if session.status() == GameStatus::Playing {
        println!("  {}", pending_row(session.buffer(), word.len()).bright_white());
    }
}

pub fn print_hint(hint: &Hint) {
    println!(
        "  💡 {}  {}",
        hint.source.bright_white().bold(),
        format!("({})", hint.translation).bright_black()
    );
}

/// Print the end-of-game banner with the answer and its translation
pub fn print_outcome(session: &GameSession, streak: StreakSnapshot) {
    let word = session.word();
    let translation = word
        .translation("es")
        .map(|t| format!(" · {t}"))
        .unwrap_or_default();

    println!("\n{}", "═".repeat(60).bright_cyan());
    match session.status() {
        GameStatus::Won => {
            println!("{}", "  🎉  ¡Felicidades!  🎉".bright_green().bold());
            println!(
                "  Encontrado en {} {}",
                session.attempt().to_string().bright_cyan().bold(),
                if session.attempt() == 1 {
                    "intento"
                } else {
                    "intentos"
                }
            );
        }
        GameStatus::Lost => {
            println!("{}", "  ¡Juego terminado!".red().bold());
        }
        GameStatus::Playing => {}
    }
    println!(
        "  La palabra era {}{}",
        word.text().bright_yellow().bold(),
        translation
    );
    if let Some(gender) = word.gender() {
        println!("  {}", gender.bright_black());
    }
    println!(
        "  Racha: {}  ·  Mejor racha: {}",
        streak.current.to_string().bright_white().bold(),
        streak.best.to_string().bright_white().bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
}
