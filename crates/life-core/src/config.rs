//! Configuration types for the simulator and its command-line front end.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Initial grid parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Width of the grid
    pub width: usize,
    /// Height of the grid
    pub height: usize,
    /// Explicit live seed coordinates as (x, y)
    pub live_cells: Vec<(usize, usize)>,
    /// Named pattern stamped onto the grid in addition to `live_cells`
    pub pattern: Option<PatternPlacement>,
    /// Random soup used instead of an all-dead background
    pub random: Option<RandomSoupConfig>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            live_cells: vec![(4, 4), (4, 5), (4, 6)],
            pattern: None,
            random: None,
        }
    }
}

/// A named seed pattern and the offset of its top-left corner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternPlacement {
    pub name: String,
    #[serde(default)]
    pub x: usize,
    #[serde(default)]
    pub y: usize,
}

/// Seeded random initial population
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomSoupConfig {
    /// RNG seed for reproducibility
    pub seed: u64,
    /// Probability that a cell starts alive (0.0 to 1.0)
    pub density: f32,
}

impl Default for RandomSoupConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            density: 0.35,
        }
    }
}

/// Terminal rendering and pacing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Delay between generations (milliseconds)
    pub interval_ms: u64,
    /// Stop after this many generations; run until interrupted when unset
    pub max_generations: Option<u64>,
    /// Clear the terminal before each frame
    pub clear_screen: bool,
    /// Print a generation header above each frame
    pub show_generation: bool,
    /// Stop once the grid dies out or repeats a recent generation
    pub stop_on_cycle: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            interval_ms: 500,
            max_generations: None,
            clear_screen: true,
            show_generation: true,
            stop_on_cycle: false,
        }
    }
}

/// Top-level configuration for the command-line runner
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub simulation: SimulationConfig,
    pub render: RenderConfig,
}

impl CliConfig {
    /// Load and validate a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: CliConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded configuration");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let sim = &self.simulation;
        if sim.width == 0 || sim.height == 0 {
            return Err(Error::InvalidDimensions {
                width: sim.width,
                height: sim.height,
            });
        }
        if let Some(random) = &sim.random {
            if !(0.0..=1.0).contains(&random.density) {
                return Err(Error::InvalidConfig(format!(
                    "random.density must be within [0, 1], got {}",
                    random.density
                )));
            }
        }
        if self.render.interval_ms == 0 {
            return Err(Error::InvalidConfig(
                "render.interval_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
