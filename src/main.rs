//! Mind Game Royale - CLI
//!
//! Game hub with TUI and line-based modes, plus a corpus checker.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use mind_games::{
    commands::{CheckConfig, run_check, run_simple},
    core::{Level, SeededRandom},
    output::print_check_report,
    session::{DEFAULT_MAX_ROUNDS, Session, SessionConfig},
    shell::Shell,
    wordlists::{Corpus, loader::load_from_file},
};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "mind_games",
    about = "Mind Game Royale: Word Scramble and friends in your terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for word order and scrambling (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Words per Word Scramble session
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ROUNDS)]
    rounds: usize,

    /// Tab-separated corpus file to use instead of the built-in words
    #[arg(short, long, global = true)]
    corpus: Option<PathBuf>,

    /// Write a debug log to this file
    #[arg(long, global = true)]
    log: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based hub without TUI)
    Simple,

    /// Verify that every corpus entry scrambles correctly
    Check {
        /// Scrambles per entry
        #[arg(short = 'n', long, default_value = "1000")]
        trials: usize,
    },
}

fn init_logging(path: &Path) -> Result<()> {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let log_file =
        File::create(path).with_context(|| format!("cannot create log file {}", path.display()))?;
    let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    Ok(())
}

fn load_corpus(path: Option<&Path>) -> Result<Corpus> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to load corpus from {}", path.display())),
        None => Ok(Corpus::embedded()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log {
        init_logging(path)?;
    }

    if cli.rounds == 0 {
        bail!("--rounds must be at least 1");
    }

    let corpus = load_corpus(cli.corpus.as_deref())?;
    log::info!(
        "Corpus loaded: {} easy, {} medium, {} hard",
        corpus.len(Level::Easy),
        corpus.len(Level::Medium),
        corpus.len(Level::Hard)
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    let config = SessionConfig::new(cli.rounds);

    match command {
        Commands::Play => run_play_command(&corpus, cli.seed, config),
        Commands::Simple => run_simple_command(&corpus, cli.seed, config),
        Commands::Check { trials } => run_check_command(&corpus, cli.seed, trials),
    }
}

fn run_play_command(corpus: &Corpus, seed: Option<u64>, config: SessionConfig) -> Result<()> {
    use mind_games::interactive::{App, run_tui};

    let session = Session::new(corpus, SeededRandom::new(seed), config);
    let app = App::new(Shell::new(session));
    run_tui(app)
}

fn run_simple_command(corpus: &Corpus, seed: Option<u64>, config: SessionConfig) -> Result<()> {
    let session = Session::new(corpus, SeededRandom::new(seed), config);
    let mut shell = Shell::new(session);
    let stats = run_simple(&mut shell).map_err(|e| anyhow::anyhow!(e))?;
    log::info!(
        "Simple mode finished: {} won, {} lost, {} skipped",
        stats.rounds_won,
        stats.rounds_lost,
        stats.rounds_skipped
    );
    Ok(())
}

fn run_check_command(corpus: &Corpus, seed: Option<u64>, trials: usize) -> Result<()> {
    let config = CheckConfig::new(trials, seed.unwrap_or(0));
    let report = run_check(corpus, &config);
    print_check_report(&report);

    if !report.is_clean() {
        bail!("{} corpus entries failed the scramble check", report.violations.len());
    }
    Ok(())
}
