//! TUI rendering with ratatui
//!
//! Board, hints and status panels for the game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

use super::app::{App, MessageStyle};
use crate::core::{Difficulty, LetterVerdict};
use crate::game::{GameSession, GameStatus, Phase};
use crate::output::formatters::{attempts_meter, hint_button_label};
use crate::words::WordRepository;

/// Main UI rendering function
pub fn ui<R: WordRepository>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(4), // Result / prompt area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board or menu
            Constraint::Percentage(45), // Hints and messages
        ])
        .split(chunks[1]);

    match (app.game.phase(), app.game.session()) {
        (Phase::Active(_), Some(session)) => render_board(f, session, main_chunks[0]),
        (Phase::Unavailable, _) => render_unavailable(f, app, main_chunks[0]),
        _ => render_menu(f, app, main_chunks[0]),
    }
    render_side_panel(f, app, main_chunks[1]);

    render_prompt(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header<R: WordRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let mut spans = vec![Span::styled(
        "🇫🇷 LES MOTS",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(session) = app.game.session() {
        spans.push(Span::raw("  ·  "));
        spans.push(Span::styled(
            session.word().category().display().to_string(),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::raw("  ·  "));
        spans.push(Span::styled(
            session.difficulty().display_name(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn verdict_style(verdict: LetterVerdict) -> Style {
    let style = Style::default().fg(Color::Black).add_modifier(Modifier::BOLD);
    match verdict {
        LetterVerdict::Correct => style.bg(Color::Green),
        LetterVerdict::Present => style.bg(Color::Yellow),
        LetterVerdict::Absent => style.fg(Color::White).bg(Color::DarkGray),
    }
}

fn tile(letter: char, style: Style) -> [Span<'static>; 2] {
    [Span::styled(format!(" {letter} "), style), Span::raw(" ")]
}

/// Rows of tiles: submitted guesses, the row being typed, then empty rows
pub(crate) fn board_lines(session: &GameSession) -> Vec<Line<'static>> {
    let length = session.word().len();
    let mut lines: Vec<Line> = session
        .rows()
        .map(|(letters, feedback)| {
            Line::from(
                letters
                    .iter()
                    .zip(feedback.verdicts())
                    .flat_map(|(&letter, &verdict)| tile(letter, verdict_style(verdict)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    if session.status() == GameStatus::Playing {
        let typing = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        let row: Vec<Span> = (0..length)
            .flat_map(|i| {
                session
                    .buffer()
                    .get(i)
                    .map_or_else(|| tile('_', Style::default().fg(Color::DarkGray)), |&c| {
                        tile(c, typing)
                    })
            })
            .collect();
        lines.push(row.into());
    }

    let empty = Style::default().fg(Color::DarkGray);
    while lines.len() < session.max_attempts() {
        let row: Vec<Span> = (0..length).flat_map(|_| tile('·', empty)).collect();
        lines.push(row.into());
    }

    // Blank line between rows
    lines
        .into_iter()
        .flat_map(|line| [line, Line::default()])
        .collect()
}

fn render_board(f: &mut Frame, session: &GameSession, area: Rect) {
    let board = Paragraph::new(board_lines(session))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" {} letras ", session.word().len()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_menu<R: WordRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let mut lines = vec![Line::from("Elige una dificultad:"), Line::default()];
    for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
        let selected = i == app.menu_cursor;
        let style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::raw(if selected { " ▶ " } else { "   " }),
            Span::styled(format!("{}. {:<8}", i + 1, difficulty.display_name()), style),
            Span::styled(
                format!(
                    "  {} intentos · {} pistas",
                    difficulty.max_attempts(),
                    difficulty.max_hints()
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let menu = Paragraph::new(lines).block(
        Block::default()
            .title(" Dificultad ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(menu, area);
}

fn render_unavailable<R: WordRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let error = app.game.last_error().unwrap_or("error desconocido");
    let content = vec![
        Line::from(Span::styled(
            "No se pudo cargar la palabra",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(error.to_string()),
    ];
    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Red)),
        );
    f.render_widget(paragraph, area);
}

fn render_side_panel<R: WordRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Hints
            Constraint::Percentage(40), // Messages
        ])
        .split(area);

    render_hints(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_hints<R: WordRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let (items, title) = app.game.session().map_or_else(
        || (Vec::new(), " Pistas ".to_string()),
        |session| {
            let hints = session.hints();
            let items: Vec<ListItem> = hints
                .revealed()
                .iter()
                .map(|hint| {
                    ListItem::new(vec![
                        Line::from(vec![
                            Span::raw("💡 "),
                            Span::styled(
                                hint.source.clone(),
                                Style::default().add_modifier(Modifier::BOLD),
                            ),
                        ]),
                        Line::from(Span::styled(
                            format!("   {}", hint.translation),
                            Style::default().fg(Color::DarkGray),
                        )),
                    ])
                })
                .collect();
            (items, format!(" Pistas · {} ", hint_button_label(hints)))
        },
    );

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(list, area);
}

fn render_messages<R: WordRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Mensajes ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_prompt<R: WordRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let session = app.game.session();
    let (title, content, color) = match app.game.phase() {
        Phase::Active(GameStatus::Won) => (
            " 🎉 ¡Felicidades! 🎉 | Enter: siguiente palabra ",
            outcome_line(session),
            Color::Green,
        ),
        Phase::Active(GameStatus::Lost) => (
            " ¡Juego terminado! | Enter: elegir dificultad ",
            outcome_line(session),
            Color::Red,
        ),
        Phase::Active(GameStatus::Playing) => (
            " Escribe la palabra | Tab: pista | Esc: rendirse ",
            session
                .map(|s| s.buffer().iter().collect::<String>())
                .unwrap_or_default(),
            Color::Yellow,
        ),
        Phase::Unavailable => (
            " Enter: reintentar | q: salir ",
            String::new(),
            Color::Red,
        ),
        Phase::ChoosingDifficulty | Phase::Loading => (
            " 1-3 o ↑↓ + Enter ",
            String::new(),
            Color::Cyan,
        ),
    };

    let prompt = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(prompt, area);
}

/// "CAFÉ · café" for a finished session
fn outcome_line(session: Option<&GameSession>) -> String {
    session.map_or_else(String::new, |s| {
        let word = s.word();
        word.translation("es").map_or_else(
            || format!("La palabra era {}", word.text()),
            |t| format!("La palabra era {} · {t}", word.text()),
        )
    })
}

fn render_status<R: WordRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let difficulty = app
        .game
        .difficulty()
        .map_or("-", |d| d.display_name());
    let mode = Paragraph::new(format!("Nivel: {difficulty}")).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let streak = app.game.streak();
    let streak_text = format!("Racha: {} | Mejor: {}", streak.current, streak.best);
    let streak = Paragraph::new(streak_text).alignment(Alignment::Center);
    f.render_widget(streak, chunks[1]);

    let attempts_text = app.game.session().map_or_else(String::new, |s| {
        format!(
            "Intentos: {}",
            attempts_meter(s.attempt(), s.max_attempts())
        )
    });
    let attempts = Paragraph::new(attempts_text).alignment(Alignment::Center);
    f.render_widget(attempts, chunks[2]);

    let help = Paragraph::new("Ctrl-C: salir | Ctrl-R: reiniciar")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
