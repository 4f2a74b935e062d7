//! Sandfall - headless falling-sand simulation

use std::path::PathBuf;

use clap::Parser;
use sandfall::{App, PaintScript, SandfallConfig};
use sandfall_core::{ParticleKind, TOOL_NAMES};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (RON); defaults to ./sandfall.ron when present
    #[arg(long)]
    config: Option<PathBuf>,

    /// Paint script (RON) with scheduled strokes
    #[arg(long)]
    script: Option<PathBuf>,

    /// Number of grid rows
    #[arg(long)]
    rows: Option<usize>,

    /// Number of grid columns
    #[arg(long)]
    cols: Option<usize>,

    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Number of frames to simulate
    #[arg(long)]
    frames: Option<u64>,

    /// Speed control: 0 (1,000 steps per frame) to 100 (1,000,000)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    speed: Option<u8>,

    /// Directory receiving PNG snapshots
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write a snapshot every N frames (0 disables snapshots)
    #[arg(long)]
    snapshot_every: Option<u64>,

    /// List the paint tool names and exit
    #[arg(long)]
    list_tools: bool,
}

impl Args {
    /// Command-line values take priority over every configuration layer
    fn apply_overrides(&self, config: &mut SandfallConfig) {
        if let Some(rows) = self.rows {
            config.grid.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.grid.cols = cols;
        }
        if self.seed.is_some() {
            config.grid.seed = self.seed;
        }
        if let Some(frames) = self.frames {
            config.run.frames = frames;
        }
        if let Some(speed) = self.speed {
            config.run.speed_control = speed;
        }
        if let Some(output) = &self.output {
            config.output.directory = output.clone();
        }
        if let Some(every) = self.snapshot_every {
            config.output.snapshot_every = every;
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.list_tools {
        for name in TOOL_NAMES {
            println!("{name}");
        }
        return Ok(());
    }

    let mut config = SandfallConfig::load(args.config.as_deref())?;
    args.apply_overrides(&mut config);

    let script = match &args.script {
        Some(path) => PaintScript::load(path)?,
        None => PaintScript::default(),
    };

    log::info!("Starting Sandfall");

    let mut app = App::new(config, script)?;
    let summary = app.run()?;

    log::info!(
        "Finished {} frames ({} steps, seed {}): {} moves, {} phase changes, {} dissolved, {} dissipated",
        summary.frames,
        summary.steps,
        summary.seed,
        summary.counters.moved,
        summary.counters.state_changes,
        summary.counters.dissolved,
        summary.counters.dissipated
    );
    for kind in ParticleKind::ALL {
        let count = summary.histogram[kind.index()];
        if count > 0 {
            log::info!("  {:<6} {}", kind.name(), count);
        }
    }
    if !summary.snapshots.is_empty() {
        log::info!("Wrote {} snapshots", summary.snapshots.len());
    }

    Ok(())
}
