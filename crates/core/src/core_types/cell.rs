//! Per-cell fire state
//!
//! Each grid position carries one [`Cell`]: its [`CellState`] plus the two
//! step counters that drive the burning and hot-scorched phases.
//!
//! State progression:
//! ```text
//! Vegetation ──ignite──> Burning ──burnout──> ScorchedHot ──cool──> ScorchedCold
//! Inert (never changes)
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// What occupies a grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellState {
    /// Unburnt fuel that can be ignited
    #[default]
    Vegetation,
    /// Actively burning, spreads fire every step
    Burning,
    /// Burnt out but still hot; may flare up and spread again
    ScorchedHot,
    /// Burnt out and cold (terminal)
    ScorchedCold,
    /// No fuel: rock, water, bare ground (terminal)
    Inert,
}

impl CellState {
    /// All states, in display order
    pub const ALL: [CellState; 5] = [
        CellState::Vegetation,
        CellState::Burning,
        CellState::ScorchedHot,
        CellState::ScorchedCold,
        CellState::Inert,
    ];

    /// Terminal states have no outgoing transitions
    pub fn is_terminal(self) -> bool {
        matches!(self, CellState::ScorchedCold | CellState::Inert)
    }

    /// Whether a vegetation neighbour of this cell counts as exposed to fire
    pub fn is_fire_source(self) -> bool {
        matches!(self, CellState::Burning | CellState::ScorchedHot)
    }

    /// Burnt out, hot or cold
    pub fn is_burned(self) -> bool {
        matches!(self, CellState::ScorchedHot | CellState::ScorchedCold)
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellState::Vegetation => "vegetation",
            CellState::Burning => "burning",
            CellState::ScorchedHot => "scorched-hot",
            CellState::ScorchedCold => "scorched-cold",
            CellState::Inert => "inert",
        };
        f.write_str(name)
    }
}

/// One grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) state: CellState,
    /// Steps spent in [`CellState::Burning`]
    pub(crate) burning_age: u32,
    /// Steps spent in [`CellState::ScorchedHot`]
    pub(crate) scorched_age: u32,
}

impl Cell {
    /// Fresh unburnt vegetation
    pub const VEGETATION: Cell = Cell {
        state: CellState::Vegetation,
        burning_age: 0,
        scorched_age: 0,
    };

    /// Fresh inert ground
    pub const INERT: Cell = Cell {
        state: CellState::Inert,
        burning_age: 0,
        scorched_age: 0,
    };

    /// Current state
    pub fn state(self) -> CellState {
        self.state
    }

    /// Steps spent burning
    pub fn burning_age(self) -> u32 {
        self.burning_age
    }

    /// Steps spent hot-scorched
    pub fn scorched_age(self) -> u32 {
        self.scorched_age
    }

    /// Set alight with a zeroed burn timer
    pub(crate) fn ignite(&mut self) {
        self.state = CellState::Burning;
        self.burning_age = 0;
    }

    /// Enter the hot-scorched phase with a zeroed timer
    pub(crate) fn scorch(&mut self) {
        self.state = CellState::ScorchedHot;
        self.scorched_age = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        let terminal: Vec<_> = CellState::ALL
            .into_iter()
            .filter(|s| s.is_terminal())
            .collect();
        assert_eq!(terminal, vec![CellState::ScorchedCold, CellState::Inert]);
    }

    #[test]
    fn test_fire_sources() {
        assert!(CellState::Burning.is_fire_source());
        assert!(CellState::ScorchedHot.is_fire_source());
        assert!(!CellState::ScorchedCold.is_fire_source());
        assert!(!CellState::Vegetation.is_fire_source());
        assert!(!CellState::Inert.is_fire_source());
    }

    #[test]
    fn test_ignite_resets_burn_timer() {
        let mut cell = Cell {
            state: CellState::Vegetation,
            burning_age: 7,
            scorched_age: 0,
        };
        cell.ignite();
        assert_eq!(cell.state(), CellState::Burning);
        assert_eq!(cell.burning_age(), 0);
    }

    #[test]
    fn test_scorch_resets_scorch_timer() {
        let mut cell = Cell {
            state: CellState::Burning,
            burning_age: 2,
            scorched_age: 3,
        };
        cell.scorch();
        assert_eq!(cell.state(), CellState::ScorchedHot);
        assert_eq!(cell.scorched_age(), 0);
        assert_eq!(cell.burning_age(), 2);
    }

    #[test]
    fn test_default_is_vegetation() {
        assert_eq!(Cell::default(), Cell::VEGETATION);
    }
}
