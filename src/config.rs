use crate::ant::ColorAnt;
use crate::error::{Result, SimError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Rule driving every ant in a run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Two-color Langton's ant
    #[default]
    Binary,
    /// Two colors per ant plus a trail image
    #[value(alias = "multi")]
    Multicolor,
}

impl Variant {
    pub const fn as_str(self) -> &'static str {
        match self {
            Variant::Binary => "binary",
            Variant::Multicolor => "multicolor",
        }
    }
}

/// Run parameters. Missing TOML keys take the defaults below.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub height: usize,
    pub width: usize,
    pub ant_count: usize,
    pub max_steps: u32,
    pub seed: u64,
    pub variant: Variant,
    /// Ticks between recorded/rendered frames
    pub record_interval: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            height: 400,
            width: 400,
            ant_count: 19,
            max_steps: 30_000,
            seed: 8,
            variant: Variant::Binary,
            record_interval: 100,
        }
    }
}

impl SimulationConfig {
    /// Load and validate a configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config: SimulationConfig = toml::from_str(&text)
            .map_err(|e| SimError::ConfigParse(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the simulation cannot run; nothing is clamped
    pub fn validate(&self) -> Result<()> {
        if self.height == 0 || self.width == 0 {
            return Err(SimError::InvalidConfig(format!(
                "grid dimensions must be positive, got {}x{}",
                self.height, self.width
            )));
        }
        if u32::try_from(self.height).is_err() || u32::try_from(self.width).is_err() {
            return Err(SimError::InvalidConfig(format!(
                "grid dimensions must not exceed {}",
                u32::MAX
            )));
        }
        if isize::try_from(self.height).is_err() || isize::try_from(self.width).is_err() {
            return Err(SimError::InvalidConfig("grid dimensions too large".to_string()));
        }
        if self.height.checked_mul(self.width).is_none() {
            return Err(SimError::InvalidConfig("grid cell count overflows".to_string()));
        }
        if self.ant_count == 0 {
            return Err(SimError::InvalidConfig("ant count must be positive".to_string()));
        }
        if self.max_steps == 0 {
            return Err(SimError::InvalidConfig("step limit must be positive".to_string()));
        }
        if self.record_interval == 0 {
            return Err(SimError::InvalidConfig("record interval must be positive".to_string()));
        }
        if self.variant == Variant::Multicolor {
            let last = u32::try_from(self.ant_count)
                .map_err(|_| SimError::InvalidConfig("too many ants".to_string()))?;
            ColorAnt::colors_for(last)?;
        }
        Ok(())
    }
}
