//! Core types and utilities

pub mod cell;
pub mod params;
pub mod units;

pub use cell::{Cell, CellState};
pub use params::{Humidity, SimulationParameters, TerrainType};
pub use units::Probability;
