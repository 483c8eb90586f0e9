//! Point-in-time copy of an engine's state
//!
//! The snapshot is a plain serde value; which encoding (if any) it is written
//! with is up to the caller.

use crate::core_types::cell::Cell;
use crate::core_types::params::SimulationParameters;
use serde::{Deserialize, Serialize};

/// Everything needed to resume a run on an engine of the same size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    pub width: usize,
    pub height: usize,
    /// `None` while the engine has never been configured
    pub parameters: Option<SimulationParameters>,
    /// Steps taken since the last configure
    pub tick: u64,
    /// Row-major cells: [y * width + x]
    pub cells: Vec<Cell>,
}
