use crate::ant::Ant;
use crate::config::{SimulationConfig, Variant};
use crate::error::{Result, SimError};
use crate::simulation::colony::Colony;
use crate::snapshot::Snapshot;
use crate::world::grid::Grid;
use crate::world::spawn::spawn_ants;
use log::{debug, info, trace, warn};

/// Lifecycle of a run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Initialized,
    Running,
    Done,
}

/// Outcome of a call to [`SimulationEngine::step`]
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// All ants moved; carries the number of completed ticks
    Advanced(u32),
    /// The step limit was already reached; nothing changed
    Finished,
}

/// Owns the grid, the ants and the step counter of one run
#[derive(Clone, Debug)]
pub struct SimulationEngine {
    config: SimulationConfig,
    grid: Grid,
    colony: Colony,
    step: u32,
    phase: Phase,
}

impl SimulationEngine {
    /// Validate `config` and seed a fresh run from `config.seed`
    pub fn new(config: SimulationConfig) -> Result<Self> {
        let mut rng = fastrand::Rng::with_seed(config.seed);
        Self::with_rng(config, &mut rng)
    }

    /// Validate `config` and place the ants with the given generator
    pub fn with_rng(config: SimulationConfig, rng: &mut fastrand::Rng) -> Result<Self> {
        config.validate()?;

        let height = u32::try_from(config.height)
            .map_err(|_| SimError::InvalidConfig("grid height exceeds u32".to_string()))?;
        let width = u32::try_from(config.width)
            .map_err(|_| SimError::InvalidConfig("grid width exceeds u32".to_string()))?;
        let ants = spawn_ants(config.ant_count, height, width, rng);
        for ant in &ants {
            debug!(
                "ant {} starts at ({}, {}) facing {}",
                ant.id,
                ant.y,
                ant.x,
                ant.direction.as_str()
            );
        }

        let colony = Colony::new(config.variant, ants, config.height, config.width)?;
        let grid = Grid::new(config.height, config.width)?;

        Ok(Self {
            config,
            grid,
            colony,
            step: 0,
            phase: Phase::Initialized,
        })
    }

    /// Advance every ant by one move, in creation order
    pub fn step(&mut self) -> Tick {
        if self.phase == Phase::Done {
            warn!("step called after the run finished at {}", self.step);
            return Tick::Finished;
        }

        self.colony.tick(&mut self.grid);
        self.step += 1;
        trace!("tick {}/{} done", self.step, self.config.max_steps);

        self.phase = if self.step >= self.config.max_steps {
            info!("reached step limit {}", self.config.max_steps);
            Phase::Done
        } else {
            Phase::Running
        };
        Tick::Advanced(self.step)
    }

    /// Step until done, handing every post-tick snapshot to `observer`.
    /// Returns the number of ticks performed by this call.
    pub fn run<F>(&mut self, mut observer: F) -> u32
    where
        F: FnMut(Snapshot<'_>),
    {
        let mut ticks = 0;
        while let Tick::Advanced(_) = self.step() {
            ticks += 1;
            observer(self.snapshot());
        }
        ticks
    }

    /// Like [`run`](Self::run), but stops at the first error from `observer`
    pub fn try_run<F>(&mut self, mut observer: F) -> Result<u32>
    where
        F: FnMut(Snapshot<'_>) -> Result<()>,
    {
        let mut ticks = 0;
        while let Tick::Advanced(_) = self.step() {
            ticks += 1;
            observer(self.snapshot())?;
        }
        Ok(ticks)
    }

    /// Step at most `n` times; stops early when the run finishes
    pub fn advance(&mut self, n: u32) -> u32 {
        let mut ticks = 0;
        while ticks < n {
            match self.step() {
                Tick::Advanced(_) => ticks += 1,
                Tick::Finished => break,
            }
        }
        ticks
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            step: self.step,
            max_steps: self.config.max_steps,
            grid: &self.grid,
            trail: self.colony.trail(),
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    #[inline]
    pub fn step_count(&self) -> u32 {
        self.step
    }

    pub fn max_steps(&self) -> u32 {
        self.config.max_steps
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn variant(&self) -> Variant {
        self.colony.variant()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn trail(&self) -> Option<&Grid> {
        self.colony.trail()
    }

    pub fn ants(&self) -> impl Iterator<Item = &Ant> {
        self.colony.ants()
    }

    pub fn ant_positions(&self) -> Vec<(usize, usize)> {
        self.colony.ants().map(Ant::position).collect()
    }
}
