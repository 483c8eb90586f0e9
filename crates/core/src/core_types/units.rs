//! Semantic unit types for probability handling
//!
//! Ignition chances, vegetation coverage and the cooling/flare-up rates are all
//! probabilities compared against a uniform draw in `[0, 1)`. Wrapping them in a
//! newtype keeps them from being mixed up with cell counts or ages and guarantees
//! the stored value never leaves `[0, 1]`.
//!
//! # Usage
//! ```
//! use wildfire_core::core_types::units::Probability;
//!
//! let p = Probability::new(0.3);
//! assert!(p.admits(0.29));
//! assert!(!p.admits(0.3));
//! assert!(!Probability::ZERO.admits(0.0));
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

/// A probability in the range [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
#[repr(transparent)]
pub struct Probability(f64);

impl Eq for Probability {}

impl PartialOrd for Probability {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Probability {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for Probability {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Probability {
    /// Never happens
    pub const ZERO: Probability = Probability(0.0);

    /// Always happens (every draw in `[0, 1)` is admitted)
    pub const ONE: Probability = Probability(1.0);

    /// Create a new probability. Asserts value is within [0, 1].
    #[inline]
    #[must_use]
    pub fn new(value: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&value),
            "Probability::new: value not in [0, 1]"
        );
        Probability(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Whether a uniform sample in `[0, 1)` falls under this probability
    ///
    /// The comparison is strict, matching `sample < p` for every ignition check.
    #[inline]
    #[must_use]
    pub fn admits(self, sample: f64) -> bool {
        sample < self.0
    }
}

impl TryFrom<f64> for Probability {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if (0.0..=1.0).contains(&value) {
            Ok(Probability(value))
        } else {
            Err(format!("probability {value} not in [0, 1]"))
        }
    }
}

impl From<Probability> for f64 {
    fn from(p: Probability) -> f64 {
        p.0
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admits_is_strict() {
        let p = Probability::new(0.4);
        assert!(p.admits(0.0));
        assert!(p.admits(0.399));
        assert!(!p.admits(0.4));
        assert!(!p.admits(0.9));
    }

    #[test]
    fn test_one_admits_every_unit_sample() {
        assert!(Probability::ONE.admits(0.0));
        assert!(Probability::ONE.admits(1.0 - f64::EPSILON));
    }

    #[test]
    #[should_panic(expected = "not in [0, 1]")]
    fn test_new_rejects_out_of_range() {
        let _ = Probability::new(1.01);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        let ok: Probability = serde_json::from_str("0.6").unwrap();
        assert_eq!(*ok, 0.6);
        assert!(serde_json::from_str::<Probability>("2.0").is_err());
    }
}
