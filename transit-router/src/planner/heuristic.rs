//! Remaining-time estimates for best-first search.
//!
//! The straight-line estimate is only a lower bound when every connection
//! takes at least `distance * minutes_per_unit`. Flat-fare shortcut edges
//! can break that, so best-first search with [`StraightLine`] is a
//! best-effort search. [`ZeroHeuristic`] is always a lower bound and makes
//! best-first search behave as uniform-cost search.

use crate::network::Network;

/// Estimate of the minutes still needed to travel between two stations.
///
/// Implementations must return `f64::INFINITY` when either station is not
/// in the network, `0.0` when `from == to`, and never a negative value.
pub trait Heuristic {
    fn estimate(&self, network: &Network, from: &str, to: &str) -> f64;
}

/// Straight-line distance scaled by a fixed minutes-per-unit factor.
#[derive(Debug, Clone, Copy)]
pub struct StraightLine {
    minutes_per_unit: f64,
}

impl StraightLine {
    /// `minutes_per_unit` must be finite and non-negative.
    pub fn new(minutes_per_unit: f64) -> Self {
        debug_assert!(
            minutes_per_unit.is_finite() && minutes_per_unit >= 0.0,
            "minutes_per_unit must be finite and non-negative"
        );
        Self { minutes_per_unit }
    }
}

impl Heuristic for StraightLine {
    fn estimate(&self, network: &Network, from: &str, to: &str) -> f64 {
        match (network.station(from), network.station(to)) {
            (Some(a), Some(b)) => a.position.distance_to(&b.position) * self.minutes_per_unit,
            _ => f64::INFINITY,
        }
    }
}

/// Estimates zero for every pair of known stations.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, network: &Network, from: &str, to: &str) -> f64 {
        if network.contains(from) && network.contains(to) {
            0.0
        } else {
            f64::INFINITY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::medellin_network;

    #[test]
    fn straight_line_scales_distance() {
        let network = medellin_network();
        let h = StraightLine::new(2.0);

        // Niquía (0,0) to Bello (0,2)
        assert_eq!(h.estimate(&network, "Niquía", "Bello"), 4.0);
        // Barbosa (-2,0) to Poblado (0,14)
        let expected = (4.0f64 + 196.0).sqrt() * 2.0;
        assert!((h.estimate(&network, "Barbosa", "Poblado") - expected).abs() < 1e-9);
    }

    #[test]
    fn estimate_to_self_is_zero() {
        let network = medellin_network();
        let h = StraightLine::new(2.0);

        for station in network.stations() {
            assert_eq!(h.estimate(&network, &station.name, &station.name), 0.0);
        }
    }

    #[test]
    fn closer_stations_estimate_lower() {
        let network = medellin_network();
        let h = StraightLine::new(2.0);

        assert!(
            h.estimate(&network, "Niquía", "Bello") < h.estimate(&network, "Barbosa", "Poblado")
        );
    }

    #[test]
    fn unknown_station_is_infinite() {
        let network = medellin_network();

        for h in [&StraightLine::new(2.0) as &dyn Heuristic, &ZeroHeuristic] {
            assert_eq!(h.estimate(&network, "Nowhere", "Bello"), f64::INFINITY);
            assert_eq!(h.estimate(&network, "Bello", "Nowhere"), f64::INFINITY);
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "minutes_per_unit must be finite and non-negative")]
    fn negative_scale_rejected() {
        StraightLine::new(-2.0);
    }

    #[test]
    fn zero_heuristic() {
        let network = medellin_network();
        assert_eq!(ZeroHeuristic.estimate(&network, "Niquía", "La Estrella"), 0.0);
    }
}
