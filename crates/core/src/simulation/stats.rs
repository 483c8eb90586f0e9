//! Grid-wide statistics

use crate::core_types::cell::CellState;
use crate::grid::ForestGrid;
use serde::{Deserialize, Serialize};

/// Raw number of cells in each state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CellCounts {
    pub vegetation: usize,
    pub burning: usize,
    pub scorched_hot: usize,
    pub scorched_cold: usize,
    pub inert: usize,
}

impl CellCounts {
    /// Tally every cell of `grid` in one pass
    pub fn from_grid(grid: &ForestGrid) -> Self {
        let mut counts = Self::default();
        for cell in grid.cells() {
            match cell.state() {
                CellState::Vegetation => counts.vegetation += 1,
                CellState::Burning => counts.burning += 1,
                CellState::ScorchedHot => counts.scorched_hot += 1,
                CellState::ScorchedCold => counts.scorched_cold += 1,
                CellState::Inert => counts.inert += 1,
            }
        }
        counts
    }

    /// Count for a single state
    pub fn get(&self, state: CellState) -> usize {
        match state {
            CellState::Vegetation => self.vegetation,
            CellState::Burning => self.burning,
            CellState::ScorchedHot => self.scorched_hot,
            CellState::ScorchedCold => self.scorched_cold,
            CellState::Inert => self.inert,
        }
    }

    /// Hot plus cold scorched cells
    pub fn burned(&self) -> usize {
        self.scorched_hot + self.scorched_cold
    }

    pub fn total(&self) -> usize {
        self.vegetation + self.burning + self.burned() + self.inert
    }
}

/// Fractions of the grid in each reported category, each in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationStats {
    pub fraction_burning: f64,
    /// Hot and cold scorched cells combined
    pub fraction_burned: f64,
    pub fraction_vegetation: f64,
    pub fraction_inert: f64,
}

impl SimulationStats {
    /// Convert counts to fractions of their total
    pub fn from_counts(counts: &CellCounts) -> Self {
        let total = counts.total();
        if total == 0 {
            return Self::default();
        }
        let total = total as f64;
        Self {
            fraction_burning: counts.burning as f64 / total,
            fraction_burned: counts.burned() as f64 / total,
            fraction_vegetation: counts.vegetation as f64 / total,
            fraction_inert: counts.inert as f64 / total,
        }
    }

    /// Sum of all four fractions (1.0 up to rounding)
    pub fn total(&self) -> f64 {
        self.fraction_burning + self.fraction_burned + self.fraction_vegetation + self.fraction_inert
    }

    pub fn percent_burning(&self) -> f64 {
        self.fraction_burning * 100.0
    }

    pub fn percent_burned(&self) -> f64 {
        self.fraction_burned * 100.0
    }

    pub fn percent_vegetation(&self) -> f64 {
        self.fraction_vegetation * 100.0
    }

    pub fn percent_inert(&self) -> f64 {
        self.fraction_inert * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_counts_merge_scorched_states() {
        let counts = CellCounts {
            vegetation: 5,
            burning: 2,
            scorched_hot: 1,
            scorched_cold: 1,
            inert: 1,
        };
        assert_eq!(counts.burned(), 2);
        assert_eq!(counts.total(), 10);

        let stats = SimulationStats::from_counts(&counts);
        assert_relative_eq!(stats.fraction_vegetation, 0.5);
        assert_relative_eq!(stats.fraction_burning, 0.2);
        assert_relative_eq!(stats.fraction_burned, 0.2);
        assert_relative_eq!(stats.fraction_inert, 0.1);
        assert_relative_eq!(stats.total(), 1.0);
        assert_relative_eq!(stats.percent_burned(), 20.0);
    }

    #[test]
    fn test_counts_from_fresh_grid() {
        let grid = ForestGrid::new(4, 3);
        let counts = CellCounts::from_grid(&grid);
        assert_eq!(counts.get(CellState::Vegetation), 12);
        assert_eq!(counts.total(), 12);
        assert_relative_eq!(SimulationStats::from_counts(&counts).fraction_vegetation, 1.0);
    }

    #[test]
    fn test_empty_counts_give_zero_stats() {
        let stats = SimulationStats::from_counts(&CellCounts::default());
        assert_eq!(stats, SimulationStats::default());
    }
}
