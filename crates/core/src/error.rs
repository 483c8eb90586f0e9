//! Errors surfaced by the simulation engine
//!
//! Every variant is a caller precondition violation. Nothing here is transient,
//! so callers should report rather than retry.

use std::fmt;

/// Errors that can occur when driving a [`FireSpreadEngine`](crate::FireSpreadEngine)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// A parameter name was not recognised
    InvalidParameter {
        /// Which parameter (`humidity` or `terrain`)
        name: &'static str,
        /// The rejected input
        value: String,
    },
    /// Cell coordinates outside `[0, width) x [0, height)`
    OutOfBounds {
        x: isize,
        y: isize,
        width: usize,
        height: usize,
    },
    /// Grid dimensions must both be positive and their product fit in `usize`
    InvalidDimensions { width: usize, height: usize },
    /// Snapshot does not fit this engine's grid
    SnapshotMismatch {
        /// `(width, height, cells)` the engine expects
        expected: (usize, usize, usize),
        /// `(width, height, cells)` found in the snapshot
        found: (usize, usize, usize),
    },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidParameter { name, value } => {
                write!(f, "Invalid {name} parameter: '{value}'")
            }
            SimulationError::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "Cell ({x}, {y}) is outside the {width}x{height} grid"
            ),
            SimulationError::InvalidDimensions { width, height } => {
                write!(f, "Grid dimensions must be positive, got {width}x{height}")
            }
            SimulationError::SnapshotMismatch { expected, found } => write!(
                f,
                "Snapshot mismatch: expected {}x{} ({} cells), found {}x{} ({} cells)",
                expected.0, expected.1, expected.2, found.0, found.1, found.2
            ),
        }
    }
}

impl std::error::Error for SimulationError {}
