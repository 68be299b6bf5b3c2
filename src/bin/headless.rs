//! Headless race runner.
//!
//! Steps the simulation without a terminal, feeding scripted input, and
//! prints one JSON object per tick on stdout. Logs go to stderr (`RUST_LOG`).

use std::io::{self, BufWriter, Write};

use anyhow::{bail, Result};
use clap::Parser;
use serde::Serialize;

use pole_position::core::{DistanceMode, GameState, RaceSnapshot};
use pole_position::{GameConfig, InputScript};

#[derive(Parser, Debug, Clone)]
#[command(name = "headless")]
#[command(about = "Run the race simulation without a terminal", long_about = None)]
struct Args {
    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 250)]
    ticks: u64,

    /// RNG seed (defaults to POLE_SEED or 1).
    #[arg(long)]
    seed: Option<u32>,

    /// Input script, e.g. "accelerateOn@0,steerLeft@40".
    #[arg(long, default_value = "")]
    script: String,

    /// literal | scaled (defaults to POLE_DISTANCE_MODE or literal).
    #[arg(long)]
    distance_mode: Option<String>,

    /// Print every Nth tick only.
    #[arg(long, default_value_t = 1)]
    every: u64,
}

#[derive(Serialize)]
struct BannerRecord {
    active: bool,
    side: &'static str,
    frame: u8,
    x: i32,
    y: i32,
    scale: i32,
}

#[derive(Serialize)]
struct TickRecord {
    tick: u64,
    speed: i32,
    steer: &'static str,
    accelerating: bool,
    braking: bool,
    frame: u8,
    distance: usize,
    laps: u32,
    curvature: i32,
    scroll: i32,
    off_road: bool,
    landscape_offset: i32,
    banner: BannerRecord,
}

impl From<&RaceSnapshot> for TickRecord {
    fn from(snap: &RaceSnapshot) -> Self {
        Self {
            tick: snap.tick,
            speed: snap.speed,
            steer: snap.steer.as_str(),
            accelerating: snap.accelerating,
            braking: snap.braking,
            frame: snap.frame.index(),
            distance: snap.distance,
            laps: snap.laps,
            curvature: snap.curvature,
            scroll: snap.scroll,
            off_road: snap.off_road,
            landscape_offset: snap.landscape_offset,
            banner: BannerRecord {
                active: snap.banner.active,
                side: snap.banner.side.as_str(),
                frame: snap.banner.frame,
                x: snap.banner.x,
                y: snap.banner.y,
                scale: snap.banner.scale,
            },
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = GameConfig::from_env();

    let distance_mode = match args.distance_mode.as_deref() {
        Some(s) => match DistanceMode::from_str(s) {
            Some(mode) => mode,
            None => bail!("unknown distance mode {s:?} (expected literal or scaled)"),
        },
        None => config.distance_mode,
    };
    let seed = args.seed.unwrap_or(config.seed);
    let mut script = InputScript::parse(&args.script)?;
    let every = args.every.max(1);

    let mut game = GameState::new(seed, distance_mode)?;
    log::info!(
        "headless run: {} ticks, {} scripted events",
        args.ticks,
        script.len()
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut snap = RaceSnapshot::default();

    for tick in 0..args.ticks {
        for ev in script.due(tick) {
            game.apply_input(ev);
        }
        game.tick();

        if (tick + 1) % every == 0 {
            game.snapshot_into(&mut snap);
            serde_json::to_writer(&mut out, &TickRecord::from(&snap))?;
            out.write_all(b"\n")?;
        }
    }
    out.flush()?;
    Ok(())
}
