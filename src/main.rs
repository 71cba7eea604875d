use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four_engine::ai::OpponentSelector;
use connect_four_engine::config::{AppConfig, ComputerSide};
use connect_four_engine::game::{GameOutcome, Player, Sequencer};
use connect_four_engine::ui::App;
use connect_four_engine::{logging, sequencer_for};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four on a 6x8 board")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Override the opponent seed
    #[arg(long)]
    seed: Option<u64>,

    /// Side played by the computer: one, two or none
    #[arg(long)]
    computer: Option<ComputerSide>,

    /// Let the computer play both sides and print the result
    #[arg(long)]
    headless: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(seed) = cli.seed {
        config.opponent.seed = seed;
    }
    if let Some(computer) = cli.computer {
        config.game.computer = computer;
    }

    logging::init(&config.log, cli.headless)
        .with_context(|| format!("initializing log file {}", config.log.file.display()))?;

    if cli.headless {
        run_headless(&config);
        Ok(())
    } else {
        let sequencer = sequencer_for(config.game.computer.player(), config.opponent.seed);
        run_tui(App::new(sequencer, &config.ui)).context("terminal UI failed")
    }
}

fn run_headless(config: &AppConfig) {
    let seed = config.opponent.seed;
    let mut sequencer = Sequencer::new()
        .with_computer(Player::One, Box::new(OpponentSelector::new(seed)))
        .with_computer(Player::Two, Box::new(OpponentSelector::new(seed.wrapping_add(1))));
    sequencer.run_until_input();

    log::info!("final board:\n{}", sequencer.board());
    match sequencer.winner() {
        Some(GameOutcome::Winner(player)) => {
            log::info!("{player} wins after {} moves", sequencer.move_count())
        }
        Some(GameOutcome::Draw) => log::info!("draw after {} moves", sequencer.move_count()),
        None => log::warn!("game stopped before a result"),
    }
}

fn run_tui(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
