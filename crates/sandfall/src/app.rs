//! Headless frame loop
//!
//! One frame: apply the paint strokes held during the frame, run the number of
//! steps selected by the speed control, then optionally write a snapshot.

use std::path::PathBuf;

use anyhow::{Context, Result};
use sandfall_core::{ParticleKind, Simulation, StepCounters, steps_per_frame, tool_for_name};

use crate::config::SandfallConfig;
use crate::render::{PixelRenderer, auto_cell_size};
use crate::script::PaintScript;

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub frames: u64,
    pub steps: u64,
    pub seed: u64,
    /// Rule outcomes accumulated over the whole run
    pub counters: StepCounters,
    /// Final population per kind, indexed by [`ParticleKind::index`]
    pub histogram: [usize; ParticleKind::COUNT],
    pub snapshots: Vec<PathBuf>,
}

/// Main application state
pub struct App {
    simulation: Simulation,
    script: PaintScript,
    renderer: PixelRenderer,
    config: SandfallConfig,
    seed: u64,
    frame: u64,
    steps_per_frame: u64,
    totals: StepCounters,
    snapshots: Vec<PathBuf>,
}

impl App {
    /// Create the simulation, renderer and output directory
    pub fn new(config: SandfallConfig, script: PaintScript) -> Result<Self> {
        let seed = config.grid.seed.unwrap_or_else(rand::random);
        let simulation = Simulation::seeded(config.grid.rows, config.grid.cols, seed)
            .context("Failed to create simulation")?;

        let cell_size = match config.output.cell_size {
            0 => auto_cell_size(config.grid.rows, config.grid.cols),
            size => size,
        };
        let renderer = PixelRenderer::new(config.grid.rows, config.grid.cols, cell_size)?;

        if config.output.snapshot_every > 0 {
            std::fs::create_dir_all(&config.output.directory).with_context(|| {
                format!(
                    "Failed to create output directory {}",
                    config.output.directory.display()
                )
            })?;
        }

        if let Some(last) = script.last_frame()
            && last >= config.run.frames
        {
            log::warn!(
                "Paint script holds strokes until frame {} but only {} frames run",
                last,
                config.run.frames
            );
        }

        let steps_per_frame = steps_per_frame(config.run.speed_control);

        log::info!(
            "Simulating {}x{} grid (seed {}), {} steps per frame",
            config.grid.rows,
            config.grid.cols,
            seed,
            steps_per_frame
        );

        Ok(Self {
            simulation,
            script,
            renderer,
            config,
            seed,
            frame: 0,
            steps_per_frame,
            totals: StepCounters::default(),
            snapshots: Vec::new(),
        })
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    /// Frames completed so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Run every configured frame
    pub fn run(&mut self) -> Result<RunSummary> {
        for _ in 0..self.config.run.frames {
            self.run_frame()?;
        }

        // Always capture the final state when snapshots are enabled
        let every = self.config.output.snapshot_every;
        if every > 0 && self.frame > 0 && self.frame % every != 0 {
            self.snapshot()?;
        }

        Ok(RunSummary {
            frames: self.frame,
            steps: self.frame * self.steps_per_frame,
            seed: self.seed,
            counters: self.totals,
            histogram: self.simulation.grid().histogram(),
            snapshots: self.snapshots.clone(),
        })
    }

    /// Advance by one frame
    pub fn run_frame(&mut self) -> Result<()> {
        self.apply_strokes();
        self.simulation.step_many(self.steps_per_frame);
        self.frame += 1;

        let counters = self.simulation.take_counters();
        self.totals += counters;
        log::debug!(
            "Frame {}: {} moved, {} phase changes, {} dissolved, {} dissipated",
            self.frame,
            counters.moved,
            counters.state_changes,
            counters.dissolved,
            counters.dissipated
        );

        let every = self.config.output.snapshot_every;
        if every > 0 && self.frame % every == 0 {
            self.snapshot()?;
        }

        Ok(())
    }

    fn apply_strokes(&mut self) {
        let grid = self.simulation.grid_mut();

        for stroke in self.script.active_strokes(self.frame) {
            let tool = tool_for_name(&stroke.tool);
            if let Err(err) = tool.apply(grid, stroke.row, stroke.col, stroke.radius) {
                log::warn!("Skipping {} stroke: {}", stroke.tool, err);
            }
        }
    }

    /// Render the grid and write it as `frame_NNNNN.png`
    fn snapshot(&mut self) -> Result<()> {
        self.renderer.render(self.simulation.grid());

        let path = self
            .config
            .output
            .directory
            .join(format!("frame_{:05}.png", self.frame));
        self.renderer.save_png(&path)?;

        log::info!("Wrote snapshot {}", path.display());
        self.snapshots.push(path);
        Ok(())
    }
}
