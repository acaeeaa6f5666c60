//! Search configuration for the route planner.

/// Configuration parameters for route search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Minutes of travel assumed per unit of straight-line distance.
    /// Scales the best-first heuristic and derived connection times.
    /// Must be finite and non-negative.
    pub minutes_per_unit: f64,

    /// Minutes added to a route's priority score for each transfer.
    pub transfer_penalty_mins: u32,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    ///
    /// `minutes_per_unit` must be finite and non-negative, otherwise the
    /// straight-line estimate could go negative or NaN.
    pub fn new(minutes_per_unit: f64, transfer_penalty_mins: u32) -> Self {
        debug_assert!(
            minutes_per_unit.is_finite() && minutes_per_unit >= 0.0,
            "minutes_per_unit must be finite and non-negative"
        );
        Self {
            minutes_per_unit,
            transfer_penalty_mins,
        }
    }

    /// Estimated travel minutes for a straight-line distance.
    pub fn minutes_for_distance(&self, distance: f64) -> f64 {
        distance * self.minutes_per_unit
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            minutes_per_unit: 2.0,
            transfer_penalty_mins: 5,
        }
    }
}
