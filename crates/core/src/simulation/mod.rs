//! Probabilistic cellular-automaton fire spread
//!
//! [`FireSpreadEngine`] owns the grid and advances it one discrete tick at a
//! time. Every tick reads only the previous tick's states: the current grid is
//! copied into a second buffer, all transitions are written into that buffer,
//! and the two are swapped once the whole grid has been processed.
//!
//! Per-cell rules, with `p` the humidity's ignition probability:
//! - `Vegetation` with at least one burning or hot-scorched neighbour ignites on
//!   a single draw `< p`.
//! - `Burning` ages by one and scorches once the age reaches the burnout
//!   threshold. In the same tick every vegetation neighbour gets its own draw
//!   `< p` to ignite.
//! - `ScorchedHot` goes cold on a draw `< 0.4`; otherwise it ages and, on a
//!   further draw `< 0.005`, spreads like a burning cell.
//! - `ScorchedCold` and `Inert` never change.
//!
//! A vegetation cell already ignited earlier in the tick is never drawn for or
//! ignited again.

pub mod rules;
pub mod snapshot;
pub mod stats;

pub use rules::SpreadRules;
pub use snapshot::SimulationSnapshot;
pub use stats::{CellCounts, SimulationStats};

use crate::core_types::cell::{Cell, CellState};
use crate::core_types::params::SimulationParameters;
use crate::core_types::units::Probability;
use crate::error::SimulationError;
use crate::grid::ForestGrid;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

/// Wildfire simulation over a fixed-size grid
///
/// Generic over its random source so tests can inject a seeded or constant
/// generator. Each instance is independent; `step` must not be called
/// concurrently on the same instance (it takes `&mut self`).
///
/// # Example
/// ```
/// use wildfire_core::{CellState, FireSpreadEngine, Humidity, SimulationParameters, TerrainType};
///
/// let mut engine = FireSpreadEngine::with_seed(40, 30, 7).unwrap();
/// engine.configure(SimulationParameters::new(Humidity::Dry, TerrainType::Continuous));
/// assert_eq!(engine.cell_state_at(20, 15).unwrap(), CellState::Burning);
///
/// engine.step();
/// let stats = engine.statistics();
/// assert!((stats.total() - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct FireSpreadEngine<R = StdRng> {
    /// Published state of the last completed tick
    grid: ForestGrid,
    /// Scratch buffer the next tick is written into
    next: ForestGrid,
    rng: R,
    rules: SpreadRules,
    parameters: Option<SimulationParameters>,
    tick: u64,
}

impl FireSpreadEngine<StdRng> {
    /// Create an unconfigured engine seeded from the operating system
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidDimensions`] if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self, SimulationError> {
        Self::with_rng(width, height, StdRng::from_os_rng())
    }

    /// Create an unconfigured engine with a reproducible random sequence
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidDimensions`] if either dimension is zero.
    pub fn with_seed(width: usize, height: usize, seed: u64) -> Result<Self, SimulationError> {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> FireSpreadEngine<R> {
    /// Create an unconfigured engine drawing from `rng`
    ///
    /// Every cell starts as vegetation and nothing burns until
    /// [`configure`](Self::configure) seeds the fire.
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidDimensions`] if either dimension is
    /// zero or the cell count overflows `usize`.
    pub fn with_rng(width: usize, height: usize, rng: R) -> Result<Self, SimulationError> {
        if width == 0 || height == 0 || width.checked_mul(height).is_none() {
            return Err(SimulationError::InvalidDimensions { width, height });
        }

        info!("Creating fire spread engine: {}x{} grid", width, height);

        Ok(Self {
            grid: ForestGrid::new(width, height),
            next: ForestGrid::new(width, height),
            rng,
            rules: SpreadRules::default(),
            parameters: None,
            tick: 0,
        })
    }

    /// Replace the transition constants
    pub fn with_rules(mut self, rules: SpreadRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn rules(&self) -> &SpreadRules {
        &self.rules
    }

    /// Parameters of the current run, `None` until configured
    pub fn parameters(&self) -> Option<SimulationParameters> {
        self.parameters
    }

    pub fn is_configured(&self) -> bool {
        self.parameters.is_some()
    }

    /// Steps taken since construction or the last configure
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Read-only view of the grid
    pub fn grid(&self) -> &ForestGrid {
        &self.grid
    }

    /// Reset the grid for a new run
    ///
    /// Every cell becomes vegetation, then each cell independently turns inert
    /// when its draw exceeds the terrain coverage. Finally the two seed cells
    /// `(width/2, height/2)` and `(width/2 + 1, height/2)` ignite unless inert
    /// (or, for the right-hand seed, outside a one-column grid).
    pub fn configure(&mut self, parameters: SimulationParameters) {
        let coverage = parameters.coverage();

        info!(
            "Configuring run: humidity={}, terrain={} (ignition={}, coverage={})",
            parameters.humidity,
            parameters.terrain,
            parameters.ignition_probability(),
            coverage
        );

        self.grid.fill_vegetation();
        for cell in self.grid.cells_mut() {
            if self.rng.random::<f64>() > *coverage {
                *cell = Cell::INERT;
            }
        }

        let mid_x = self.grid.width() / 2;
        let mid_y = self.grid.height() / 2;
        for (x, y) in [(mid_x, mid_y), (mid_x + 1, mid_y)] {
            match self.grid.cell_at_mut(x, y) {
                Some(cell) if cell.state() == CellState::Inert => {
                    warn!("Seed cell ({}, {}) is inert, not igniting", x, y);
                }
                Some(cell) => cell.ignite(),
                None => warn!("Seed cell ({}, {}) is outside the grid", x, y),
            }
        }

        self.parameters = Some(parameters);
        self.tick = 0;

        let counts = self.cell_counts();
        info!(
            "Run configured: {} inert cells, {} burning",
            counts.inert, counts.burning
        );
    }

    /// Parse parameter names and configure
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidParameter`] for an unrecognised
    /// humidity or terrain name. The grid is left untouched in that case.
    pub fn configure_named(
        &mut self,
        humidity: &str,
        terrain: &str,
    ) -> Result<(), SimulationError> {
        let parameters = SimulationParameters::parse(humidity, terrain)?;
        self.configure(parameters);
        Ok(())
    }

    /// Advance the simulation by one tick
    pub fn step(&mut self) {
        // An unconfigured grid holds no fire, so the fallback never spreads anything
        let ignition = self.parameters.unwrap_or_default().ignition_probability();
        let rules = self.rules;

        self.next.cells_mut().copy_from_slice(self.grid.cells());

        for idx in 0..self.grid.len() {
            let (x, y) = self.grid.coords(idx);
            let cell = self.grid.cells()[idx];

            match cell.state() {
                CellState::Vegetation => {
                    // Skip cells a spreading neighbour already lit this tick
                    if self.next.cells()[idx].state() == CellState::Vegetation
                        && self.grid.exposed_to_fire(x, y)
                        && ignition.admits(self.rng.random())
                    {
                        self.next.cells_mut()[idx].ignite();
                    }
                }
                CellState::Burning => {
                    let next = &mut self.next.cells_mut()[idx];
                    next.burning_age += 1;
                    if next.burning_age >= rules.burnout_ticks {
                        next.scorch();
                    }
                    spread_fire(&self.grid, &mut self.next, &mut self.rng, x, y, ignition);
                }
                CellState::ScorchedHot => {
                    if rules.cooling_probability.admits(self.rng.random()) {
                        self.next.cells_mut()[idx].state = CellState::ScorchedCold;
                    } else {
                        self.next.cells_mut()[idx].scorched_age += 1;
                        if rules.flare_up_probability.admits(self.rng.random()) {
                            debug!("Flare-up at ({}, {})", x, y);
                            spread_fire(&self.grid, &mut self.next, &mut self.rng, x, y, ignition);
                        }
                    }
                }
                CellState::ScorchedCold | CellState::Inert => {}
            }
        }

        std::mem::swap(&mut self.grid, &mut self.next);
        self.tick += 1;

        debug!(
            "Tick {}: {} burning",
            self.tick,
            self.grid.count(CellState::Burning)
        );
    }

    /// Step until `max_ticks` ticks have run or the fire is out
    ///
    /// Returns the number of ticks executed.
    pub fn run(&mut self, max_ticks: u64) -> u64 {
        let mut executed = 0;
        while executed < max_ticks && self.has_active_fire() {
            self.step();
            executed += 1;
        }
        info!(
            "Run stopped after {} ticks (fire active: {})",
            executed,
            self.has_active_fire()
        );
        executed
    }

    /// Capture the full engine state
    pub fn snapshot(&self) -> SimulationSnapshot {
        SimulationSnapshot {
            width: self.grid.width(),
            height: self.grid.height(),
            parameters: self.parameters,
            tick: self.tick,
            cells: self.grid.cells().to_vec(),
        }
    }

    /// Replace grid, parameters and tick with a previously captured snapshot
    ///
    /// # Errors
    /// Returns [`SimulationError::SnapshotMismatch`] if the snapshot's
    /// dimensions differ from this engine's or its cell count does not match
    /// its dimensions. The engine is left untouched in that case.
    pub fn restore(&mut self, snapshot: SimulationSnapshot) -> Result<(), SimulationError> {
        let expected = (self.grid.width(), self.grid.height(), self.grid.len());
        let found = (snapshot.width, snapshot.height, snapshot.cells.len());
        if (snapshot.width, snapshot.height) != (expected.0, expected.1) {
            return Err(SimulationError::SnapshotMismatch { expected, found });
        }
        let grid = ForestGrid::from_cells(snapshot.width, snapshot.height, snapshot.cells)
            .ok_or(SimulationError::SnapshotMismatch { expected, found })?;

        self.grid = grid;
        self.parameters = snapshot.parameters;
        self.tick = snapshot.tick;
        info!("Restored snapshot at tick {}", self.tick);
        Ok(())
    }
}

impl<R> FireSpreadEngine<R> {
    /// Fractions of the grid burning, burned, vegetated and inert
    pub fn statistics(&self) -> SimulationStats {
        SimulationStats::from_counts(&self.cell_counts())
    }

    /// Raw per-state counts
    pub fn cell_counts(&self) -> CellCounts {
        CellCounts::from_grid(&self.grid)
    }

    /// Whether any cell is burning or hot-scorched
    pub fn has_active_fire(&self) -> bool {
        self.grid.cells().iter().any(|c| c.state().is_fire_source())
    }

    /// State of the cell at `(x, y)`
    ///
    /// # Errors
    /// Returns [`SimulationError::OutOfBounds`] outside `[0, width) x [0, height)`.
    pub fn cell_state_at(&self, x: isize, y: isize) -> Result<CellState, SimulationError> {
        self.cell_at(x, y).map(Cell::state)
    }

    /// Full cell (state and timers) at `(x, y)`
    ///
    /// # Errors
    /// Returns [`SimulationError::OutOfBounds`] outside `[0, width) x [0, height)`.
    pub fn cell_at(&self, x: isize, y: isize) -> Result<Cell, SimulationError> {
        self.grid
            .checked_index(x, y)
            .map(|idx| self.grid.cells()[idx])
            .ok_or(SimulationError::OutOfBounds {
                x,
                y,
                width: self.grid.width(),
                height: self.grid.height(),
            })
    }
}

/// Give every vegetation neighbour of `(x, y)` its own ignition draw
///
/// Neighbours are judged on the previous snapshot; ones already lit in `next`
/// are skipped without drawing.
fn spread_fire<R: Rng>(
    prev: &ForestGrid,
    next: &mut ForestGrid,
    rng: &mut R,
    x: usize,
    y: usize,
    ignition: Probability,
) {
    for n in prev.neighbors(x, y) {
        if prev.cells()[n].state() == CellState::Vegetation
            && next.cells()[n].state() == CellState::Vegetation
            && ignition.admits(rng.random())
        {
            next.cells_mut()[n].ignite();
        }
    }
}
