use std::error::Error;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use baguette_snake::config::{INPUT_POLL_INTERVAL_MS, THEME_SOURDOUGH};
use baguette_snake::game::{GameState, TickOutcome};
use baguette_snake::input::{GameInput, poll_input};
use baguette_snake::renderer;
use baguette_snake::scheduler::TickScheduler;
use baguette_snake::settings::{Overrides, Settings, SettingsError, load_settings_file};
use baguette_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use baguette_snake::ui::hud::{HudInfo, status_message};
use clap::Parser;
use log::{LevelFilter, error, info};
use simplelog::{Config, WriteLogger};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Board width in cells.
    #[arg(long)]
    cols: Option<u16>,

    /// Board height in cells.
    #[arg(long)]
    rows: Option<u16>,

    /// Milliseconds between simulation ticks.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Seed for food placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON settings file; defaults to the platform config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the log.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log every eaten piece of food, not just game-level events.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match resolve_settings(&cli) {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("Invalid settings: {error}");
            return ExitCode::FAILURE;
        }
    };

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(error) = init_logging(&settings.log_file, level) {
        eprintln!("Logging disabled: {error}");
    }

    info!(
        "starting on {}x{} grid, tick {:?}, seed {:?}",
        settings.grid.cols(),
        settings.grid.rows(),
        settings.tick_interval,
        settings.seed
    );

    install_panic_hook();

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("terminal error: {error}");
            eprintln!("Terminal error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn resolve_settings(cli: &Cli) -> Result<Settings, SettingsError> {
    let file = load_settings_file(cli.config.as_deref())?;
    let overrides = Overrides {
        cols: cli.cols,
        rows: cli.rows,
        tick_ms: cli.tick_ms,
        seed: cli.seed,
        log_file: cli.log_file.clone(),
    };

    Settings::resolve(file, overrides)
}

fn init_logging(path: &Path, level: LevelFilter) -> Result<(), Box<dyn Error>> {
    WriteLogger::init(level, Config::default(), File::create(path)?)?;
    Ok(())
}

fn run(settings: &Settings) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let mut state = match settings.seed {
        Some(seed) => GameState::new_with_seed(settings.grid, seed),
        None => GameState::new(settings.grid),
    };
    let mut scheduler = TickScheduler::new(settings.tick_interval);
    let mut last_outcome: Option<TickOutcome> = None;
    let poll_interval = Duration::from_millis(INPUT_POLL_INTERVAL_MS);

    loop {
        let hud_info = HudInfo {
            message: status_message(&state, last_outcome),
        };
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state, &THEME_SOURDOUGH, &hud_info))?;

        if let Some(input) = poll_input(poll_interval)? {
            match input {
                GameInput::Quit => break,
                GameInput::Restart => {
                    state.reset();
                    scheduler.restart();
                    last_outcome = None;
                }
                GameInput::Pause => state.toggle_pause(),
                GameInput::Direction(direction) => state.set_direction(direction),
            }
        }

        if let Some(outcome) = scheduler.poll(Instant::now(), &mut state) {
            last_outcome = Some(outcome);
        }
    }

    info!(
        "quit after {} ticks with score {}",
        state.tick_count(),
        state.score()
    );
    Ok(())
}
