//! Terminal runner.
//!
//! Loads the configuration, sets up file logging, then runs the frame loop:
//! poll input until the next frame, feed elapsed time to the game, draw.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use blocktris::cli::Args;
use blocktris::config::Config;
use blocktris::core::{GameSnapshot, GameState, TickOutcome};
use blocktris::input::{handle_key_event, should_quit};
use blocktris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref()).context("loading configuration")?;
    args.apply(&mut config);
    let rules = config.ruleset()?;

    if args.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    init_logging(&config)?;

    let seed = config.game.seed.unwrap_or_else(time_seed);
    info!(edition = rules.edition.as_str(), seed, "starting");

    let mut game = GameState::new(rules, seed);
    game.start();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &config);

    // Always try to restore terminal state.
    let restored = term.exit();
    info!(score = game.score(), lines = game.lines(), "exiting");
    result.and(restored)
}

fn init_logging(config: &Config) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log.file)
        .with_context(|| format!("opening log file {}", config.log.file.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log.level.to_ascii_lowercase()));

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(filter)
        .init();
    Ok(())
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, game: &mut GameState, config: &Config) -> Result<()> {
    let view = GameView::new(config.display.cell_width).with_grid(config.display.show_grid);
    let frame = Duration::from_millis(config.display.frame_ms as u64);

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_frame = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input until the next frame is due.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let changed = game.apply_action(action);
                        debug!(action = action.as_str(), changed, "input");
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            let ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
            if let TickOutcome::Locked { lines } = game.advance(ms) {
                if lines > 0 {
                    debug!(lines, score = game.score(), "lines cleared");
                }
            }
        }
    }
}
