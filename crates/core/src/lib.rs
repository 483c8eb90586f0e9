//! Wildfire Spread Core Library
//!
//! A probabilistic cellular automaton that spreads fire across a 2D grid of
//! vegetation. Each cell runs a small state machine (vegetation, burning,
//! hot-scorched, cold-scorched, inert); fire jumps between Moore neighbours
//! with a probability set by the air humidity, and the terrain type decides how
//! much of the grid carries fuel at all.
//!
//! Rendering and run controls live outside this crate: a consumer constructs a
//! [`FireSpreadEngine`], calls [`configure`](FireSpreadEngine::configure), then
//! drives [`step`](FireSpreadEngine::step) on its own timer while reading
//! [`cell_state_at`](FireSpreadEngine::cell_state_at) and
//! [`statistics`](FireSpreadEngine::statistics).
//!
//! ```
//! use wildfire_core::FireSpreadEngine;
//!
//! let mut engine = FireSpreadEngine::with_seed(64, 48, 42).unwrap();
//! engine.configure_named("dry", "spaced").unwrap();
//! let ticks = engine.run(500);
//! let stats = engine.statistics();
//! println!("{ticks} ticks, {:.1}% burned", stats.percent_burned());
//! ```

// Core types and utilities
pub mod core_types;
pub mod error;

pub mod grid;
pub mod simulation;

// Re-export core types
pub use core_types::{Cell, CellState, Humidity, Probability, SimulationParameters, TerrainType};
pub use error::SimulationError;

pub use grid::ForestGrid;
pub use simulation::{
    CellCounts, FireSpreadEngine, SimulationSnapshot, SimulationStats, SpreadRules,
};
