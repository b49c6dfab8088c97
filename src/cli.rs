use crate::config::{SimulationConfig, Variant};
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the Langton's ant simulation
#[derive(Parser, Debug)]
#[command(name = "langtons_ants", about = "🐜 Langton's ants on a toroidal grid")]
pub struct Args {
    /// Export recorded frames instead of drawing them (ex. frames.json, frames.bin)
    #[arg(short = 'a', long = "animation")]
    pub animation: Option<PathBuf>,

    /// Max step count
    #[arg(short = 'c', long = "count")]
    pub count: Option<u32>,

    /// Random seed
    #[arg(short = 's', long)]
    pub seed: Option<u64>,

    /// Number of ants
    #[arg(short = 'n', long = "ants")]
    pub ants: Option<usize>,

    /// Grid height in cells
    #[arg(long)]
    pub height: Option<usize>,

    /// Grid width in cells
    #[arg(long)]
    pub width: Option<usize>,

    /// Rule followed by the ants
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// TOML file with simulation settings; flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Record or redraw a frame every N steps
    #[arg(long = "record-every")]
    pub record_every: Option<u32>,

    /// Terminal columns used when drawing the grid
    #[arg(long, default_value_t = 100)]
    pub columns: usize,

    /// Suppress per-step progress output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

impl Args {
    /// Defaults, then the config file, then explicit flags
    pub fn resolve_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::load(path)?,
            None => SimulationConfig::default(),
        };
        if let Some(count) = self.count {
            config.max_steps = count;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(ants) = self.ants {
            config.ant_count = ants;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(variant) = self.variant {
            config.variant = variant;
        }
        if let Some(every) = self.record_every {
            config.record_interval = every;
        }
        config.validate()?;
        Ok(config)
    }
}
