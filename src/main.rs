//! Les Mots - CLI
//!
//! French word-guessing game with TUI and CLI modes.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use les_mots::{
    commands::{check_directory, check_records, list_words, run_simple},
    config::GameConfig,
    core::Difficulty,
    game::Game,
    interactive::{App, run_tui},
    output::{print_catalog, print_check_report},
    words::{DirectoryRepository, WordRepository, embedded, embedded_records},
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "LES_MOTS_LOG";

#[derive(Parser)]
#[command(
    name = "les_mots",
    about = "Guess the French word: accents are free, hints come in Spanish",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: easy/fácil, normal, hard/desafío (asked when omitted)
    #[arg(short, long, global = true)]
    difficulty: Option<Difficulty>,

    /// Word directory containing a words.json index (default: embedded pack)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for reproducible word and hint selection
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// List the words of the catalog
    Words,

    /// Validate a word pack
    Check {
        /// Word directory to check (default: --words, then the embedded pack)
        dir: Option<PathBuf>,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Merge the config file (if any) with command-line overrides
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load_toml(path)?,
        None => GameConfig::default(),
    };

    if cli.difficulty.is_some() {
        config.difficulty = cli.difficulty;
    }
    if cli.words.is_some() {
        config.words.clone_from(&cli.words);
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    debug!(?config, "configuration loaded");
    Ok(config)
}

fn open_repository(words: Option<&Path>) -> Result<Box<dyn WordRepository>> {
    match words {
        Some(dir) => {
            let repo = DirectoryRepository::open(dir)
                .with_context(|| format!("cannot open word directory {}", dir.display()))?;
            Ok(Box::new(repo))
        }
        None => Ok(Box::new(embedded().context("embedded word pack is invalid")?)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = load_config(&cli)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Words => run_words_command(&config),
        Commands::Check { dir } => run_check_command(dir.as_deref().or(config.words.as_deref())),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    let repository = open_repository(config.words.as_deref())?;
    let app = App::new(Game::new(repository, config));
    run_tui(app)
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let repository = open_repository(config.words.as_deref())?;
    let mut game = Game::new(repository, config);
    run_simple(&mut game)
}

fn run_words_command(config: &GameConfig) -> Result<()> {
    let repository = open_repository(config.words.as_deref())?;
    let entries = list_words(&repository)?;
    print_catalog(&entries);
    Ok(())
}

fn run_check_command(dir: Option<&Path>) -> Result<()> {
    let report = match dir {
        Some(dir) => {
            let repository = DirectoryRepository::open(dir)
                .with_context(|| format!("cannot open word directory {}", dir.display()))?;
            println!(
                "Checking {} records in {}",
                repository.entries().len(),
                dir.display()
            );
            check_directory(&repository, true)
        }
        None => {
            let records = embedded_records()?;
            println!("Checking {} embedded records", records.len());
            check_records(&records, true)
        }
    };

    print_check_report(&report);
    if !report.is_clean() {
        bail!("{} record(s) with problems", report.flagged().count());
    }
    Ok(())
}
