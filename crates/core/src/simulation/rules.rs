//! Fixed transition constants of the per-cell state machine

use crate::core_types::units::Probability;
use serde::{Deserialize, Serialize};

/// Constants driving the burning and hot-scorched phases
///
/// The defaults are the standard rules; tests and experiments can swap them via
/// [`FireSpreadEngine::with_rules`](crate::FireSpreadEngine::with_rules).
///
/// # Example
/// ```
/// use wildfire_core::{Probability, SpreadRules};
///
/// let rules = SpreadRules {
///     flare_up_probability: Probability::ZERO,
///     ..Default::default()
/// };
/// assert_eq!(rules.burnout_ticks, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpreadRules {
    /// A burning cell scorches once its burn age reaches this many steps
    pub burnout_ticks: u32,
    /// Per-step chance a hot-scorched cell goes cold
    pub cooling_probability: Probability,
    /// Per-step chance a hot-scorched cell that stayed hot spreads fire again
    pub flare_up_probability: Probability,
}

impl Default for SpreadRules {
    fn default() -> Self {
        Self {
            burnout_ticks: 2,
            cooling_probability: Probability::new(0.4),
            flare_up_probability: Probability::new(0.005),
        }
    }
}
