//! Driver configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `sandfall.ron` in the working directory, or an explicit file
//! 3. Environment variables prefixed with `SANDFALL_`
//!
//! Example environment variable: `SANDFALL_RUN__SPEED_CONTROL=80`
//!
//! Command-line flags are applied on top by the binary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use sandfall_core::DEFAULT_SPEED_CONTROL;
use serde::{Deserialize, Serialize};

/// Main driver configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SandfallConfig {
    #[serde(default)]
    pub grid: GridConfig,

    #[serde(default)]
    pub run: RunConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Grid dimensions and randomness
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of rows (row 0 is the bottom)
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
    /// RNG seed; a random seed is drawn and logged when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 120,
            cols: 80,
            seed: None,
        }
    }
}

/// Frame loop settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of frames to simulate
    pub frames: u64,
    /// Speed control (0-100), mapped exponentially to steps per frame
    pub speed_control: u8,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            speed_control: DEFAULT_SPEED_CONTROL,
        }
    }
}

/// Snapshot output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving PNG snapshots
    pub directory: PathBuf,
    /// Write a snapshot every N frames (0 disables snapshots)
    pub snapshot_every: u64,
    /// Pixels per cell edge (0 picks a size that fits about 600 pixels)
    pub cell_size: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("frames"),
            snapshot_every: 60,
            cell_size: 0,
        }
    }
}

impl SandfallConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `path` if given (must exist), else `sandfall.ron` (optional)
    /// 3. Environment variables prefixed with `SANDFALL_` (highest priority)
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).format(FileFormat::Ron).required(true),
            None => File::with_name("sandfall")
                .format(FileFormat::Ron)
                .required(false),
        };

        let builder = Config::builder()
            // Layer 1: Compiled defaults
            .set_default("grid.rows", 120_i64)?
            .set_default("grid.cols", 80_i64)?
            .set_default("run.frames", 600_i64)?
            .set_default("run.speed_control", i64::from(DEFAULT_SPEED_CONTROL))?
            .set_default("output.directory", "frames")?
            .set_default("output.snapshot_every", 60_i64)?
            .set_default("output.cell_size", 0_i64)?
            // Layer 2: Config file
            .add_source(file)
            // Layer 3: Environment variables (SANDFALL_GRID__ROWS, etc.)
            .add_source(
                Environment::with_prefix("SANDFALL")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
