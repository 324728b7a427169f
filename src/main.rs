use std::fs::File;
use std::panic;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use grid_snake::canvas::Display;
use grid_snake::clock::FrameClock;
use grid_snake::config::{DEFAULT_BOARD, TICKS_PER_SECOND, WINDOW_TITLE};
use grid_snake::error::{GameError, Result};
use grid_snake::game::{Control, Game};
use grid_snake::input::{EventSource, TerminalEvents};
use grid_snake::renderer;
use grid_snake::terminal_runtime::{TerminalSession, cleanup_terminal_best_effort};
use log::{LevelFilter, info};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (level from RUST_LOG, default info).
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        if let Err(error) = init_logging(path) {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    }

    install_panic_hook();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut game = match cli.seed {
        Some(seed) => Game::new_with_seed(DEFAULT_BOARD, seed)?,
        None => Game::new(DEFAULT_BOARD)?,
    };
    let mut session = TerminalSession::enter(WINDOW_TITLE, DEFAULT_BOARD)?;
    let mut events = TerminalEvents;
    let mut clock = FrameClock::new(TICKS_PER_SECOND);

    info!("session started at {TICKS_PER_SECOND} ticks per second");
    renderer::render_initial(&mut session, &game);
    session.present()?;

    loop {
        clock.tick();

        if game.handle_events(events.poll_events()?) == Control::Quit {
            info!("quit after {} ticks", game.tick_count);
            break;
        }

        let outcome = game.tick()?;
        renderer::render_tick(&mut session, &game, outcome);
        session.present()?;
    }

    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .map_err(|error| GameError::Logging(format!("{}: {error}", path.display())))?;

    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|error| GameError::Logging(error.to_string()))
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal_best_effort();
        default_hook(panic_info);
    }));
}
