//! Terminal racing runner (default binary).
//!
//! An input thread forwards terminal events over a channel; this thread owns
//! the race, steps it on a fixed timestep and redraws after every step that
//! ran a tick.

use std::fs::File;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{Event, KeyEventKind};

use pole_position::core::{render_frame, FixedTimestep, GameState};
use pole_position::input::{should_quit, InputHandler, InputThread};
use pole_position::term::{Canvas, FrameBuffer, SpriteSheet, TerminalRenderer, Viewport};
use pole_position::types::SpriteKind;
use pole_position::GameConfig;

const ALL_SPRITES: [SpriteKind; 5] = [
    SpriteKind::Car,
    SpriteKind::Banner,
    SpriteKind::Landscape,
    SpriteKind::CircuitMap,
    SpriteKind::Speedometer,
];

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    match &result {
        Ok(()) => log::info!("race finished"),
        Err(e) => log::error!("race aborted: {e:#}"),
    }
    result
}

/// The terminal belongs to the game, so logs only go to a file.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut game = GameState::new(config.seed, config.distance_mode)?
        .with_clock(FixedTimestep::new(config.tick_ms));

    let sheet = SpriteSheet::builtin();
    let assets = sheet.catalog();
    assets.report_missing(&ALL_SPRITES);
    game.use_assets(&assets);

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut canvas = Canvas::new(sheet, Viewport::new(w, h));
    let mut fb = FrameBuffer::new(w, h);

    let mut input = InputHandler::new()
        .with_key_release_timeout_ms(config.key_release_timeout_ms)
        .with_release_events(term.keyboard_enhanced());

    // Dropped on every exit path, which stops and joins the reader.
    let (tx, rx) = mpsc::channel();
    let reader = InputThread::spawn(tx);

    let mut last = Instant::now();
    let mut dirty = true;
    let mut running = true;

    while running {
        if dirty {
            canvas.begin_frame();
            render_frame(&game, &assets, &mut canvas);
            canvas.present(&mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Sleep until the next tick unless an event arrives first.
        let wait = Duration::from_millis(game.clock().until_next_tick_ms() as u64);
        match rx.recv_timeout(wait) {
            Ok(Event::Key(key)) => {
                if key.kind == KeyEventKind::Press && should_quit(key) {
                    running = false;
                } else if let Some(ev) = input.handle_key_event(key) {
                    game.apply_input(ev);
                }
            }
            Ok(Event::Resize(w, h)) => {
                canvas.resize(Viewport::new(w, h));
                term.invalidate();
                dirty = true;
            }
            Ok(_) | Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => running = false,
        }

        let now = Instant::now();
        let elapsed_ms = now.duration_since(last).as_millis().min(u32::MAX as u128) as u32;
        last = now;

        for ev in input.update(elapsed_ms) {
            game.apply_input(ev);
        }
        if game.step(elapsed_ms) > 0 {
            dirty = true;
        }
    }

    reader.finish().context("input thread failed")?;
    log::info!(
        "stopped after {} ticks, {} laps",
        game.tick_count(),
        game.road().laps()
    );
    Ok(())
}
