//! Run parameters: weather dryness and vegetation layout
//!
//! Both enums map to a fixed probability. Names parse from the lowercase keys a
//! control surface would send (`"very-dry"`, `"scattered"`, ...).

use crate::core_types::units::Probability;
use crate::error::SimulationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Air humidity, which sets how readily fire jumps between cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Humidity {
    /// 10% ignition chance
    Humid,
    /// 30% ignition chance
    #[default]
    Normal,
    /// 60% ignition chance
    Dry,
    /// 90% ignition chance
    VeryDry,
}

impl Humidity {
    /// All humidity levels, wettest first
    pub const ALL: [Humidity; 4] = [
        Humidity::Humid,
        Humidity::Normal,
        Humidity::Dry,
        Humidity::VeryDry,
    ];

    /// Chance that an exposed vegetation cell catches fire on one draw
    pub fn ignition_probability(self) -> Probability {
        match self {
            Humidity::Humid => Probability::new(0.1),
            Humidity::Normal => Probability::new(0.3),
            Humidity::Dry => Probability::new(0.6),
            Humidity::VeryDry => Probability::new(0.9),
        }
    }

    fn key(self) -> &'static str {
        match self {
            Humidity::Humid => "humid",
            Humidity::Normal => "normal",
            Humidity::Dry => "dry",
            Humidity::VeryDry => "very-dry",
        }
    }
}

/// Vegetation layout, which sets how much of the grid carries fuel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TerrainType {
    /// Every cell vegetated
    #[default]
    Continuous,
    /// 95% of cells vegetated
    Sparse,
    /// 80% of cells vegetated
    Spaced,
    /// 50% of cells vegetated
    Scattered,
}

impl TerrainType {
    /// All terrain types, densest first
    pub const ALL: [TerrainType; 4] = [
        TerrainType::Continuous,
        TerrainType::Sparse,
        TerrainType::Spaced,
        TerrainType::Scattered,
    ];

    /// Fraction of cells expected to carry vegetation
    pub fn coverage(self) -> Probability {
        match self {
            TerrainType::Continuous => Probability::ONE,
            TerrainType::Sparse => Probability::new(0.95),
            TerrainType::Spaced => Probability::new(0.8),
            TerrainType::Scattered => Probability::new(0.5),
        }
    }

    fn key(self) -> &'static str {
        match self {
            TerrainType::Continuous => "continuous",
            TerrainType::Sparse => "sparse",
            TerrainType::Spaced => "spaced",
            TerrainType::Scattered => "scattered",
        }
    }
}

/// Lowercase, with `_` and spaces folded to `-`
fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

impl FromStr for Humidity {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        Humidity::ALL
            .into_iter()
            .find(|h| h.key() == key || (key == "verydry" && *h == Humidity::VeryDry))
            .ok_or_else(|| SimulationError::InvalidParameter {
                name: "humidity",
                value: s.to_string(),
            })
    }
}

impl FromStr for TerrainType {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        TerrainType::ALL
            .into_iter()
            .find(|t| t.key() == key)
            .ok_or_else(|| SimulationError::InvalidParameter {
                name: "terrain",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Humidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl fmt::Display for TerrainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Parameters for one simulation run
///
/// # Example
/// ```
/// use wildfire_core::{Humidity, SimulationParameters, TerrainType};
///
/// let params = SimulationParameters::parse("very-dry", "scattered").unwrap();
/// assert_eq!(params.humidity, Humidity::VeryDry);
/// assert_eq!(params.terrain, TerrainType::Scattered);
/// assert!(SimulationParameters::parse("soggy", "continuous").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimulationParameters {
    pub humidity: Humidity,
    pub terrain: TerrainType,
}

impl SimulationParameters {
    pub fn new(humidity: Humidity, terrain: TerrainType) -> Self {
        Self { humidity, terrain }
    }

    /// Parse both parameters from their names
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidParameter`] naming the first
    /// unrecognised value (humidity is checked before terrain).
    pub fn parse(humidity: &str, terrain: &str) -> Result<Self, SimulationError> {
        Ok(Self {
            humidity: humidity.parse()?,
            terrain: terrain.parse()?,
        })
    }

    /// Ignition probability for the configured humidity
    pub fn ignition_probability(&self) -> Probability {
        self.humidity.ignition_probability()
    }

    /// Vegetation coverage for the configured terrain
    pub fn coverage(&self) -> Probability {
        self.terrain.coverage()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignition_table() {
        assert_eq!(*Humidity::Humid.ignition_probability(), 0.1);
        assert_eq!(*Humidity::Normal.ignition_probability(), 0.3);
        assert_eq!(*Humidity::Dry.ignition_probability(), 0.6);
        assert_eq!(*Humidity::VeryDry.ignition_probability(), 0.9);
    }

    #[test]
    fn test_coverage_table() {
        assert_eq!(*TerrainType::Continuous.coverage(), 1.0);
        assert_eq!(*TerrainType::Sparse.coverage(), 0.95);
        assert_eq!(*TerrainType::Spaced.coverage(), 0.8);
        assert_eq!(*TerrainType::Scattered.coverage(), 0.5);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("humid".parse::<Humidity>(), Ok(Humidity::Humid));
        assert_eq!("Very-Dry".parse::<Humidity>(), Ok(Humidity::VeryDry));
        assert_eq!("very_dry".parse::<Humidity>(), Ok(Humidity::VeryDry));
        assert_eq!("VeryDry".parse::<Humidity>(), Ok(Humidity::VeryDry));
        assert_eq!(" sparse ".parse::<TerrainType>(), Ok(TerrainType::Sparse));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "boggy".parse::<TerrainType>().unwrap_err();
        assert_eq!(
            err,
            SimulationError::InvalidParameter {
                name: "terrain",
                value: "boggy".to_string(),
            }
        );
        assert!("".parse::<Humidity>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for h in Humidity::ALL {
            assert_eq!(h.to_string().parse::<Humidity>(), Ok(h));
        }
        for t in TerrainType::ALL {
            assert_eq!(t.to_string().parse::<TerrainType>(), Ok(t));
        }
    }

    #[test]
    fn test_defaults() {
        let params = SimulationParameters::default();
        assert_eq!(params.humidity, Humidity::Normal);
        assert_eq!(params.terrain, TerrainType::Continuous);
    }
}
