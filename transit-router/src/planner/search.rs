//! Route search entry point.
//!
//! A [`Planner`] borrows a read-only [`Network`] and answers
//! origin/destination queries with one of two strategies:
//!
//! - [`Strategy::BestFirst`]: heuristic-guided search minimising travel time
//! - [`Strategy::BreadthFirst`]: unweighted search minimising hop count

use std::fmt;
use std::str::FromStr;

use crate::domain::Route;
use crate::network::Network;

use super::best_first::find_best_first;
use super::bfs::find_breadth_first;
use super::config::SearchConfig;
use super::heuristic::{Heuristic, StraightLine};

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Strategy token not recognised
    #[error("unknown search strategy: {0}")]
    UnknownStrategy(String),
}

/// Search algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Cost-guided search ordered by time so far plus estimated time left.
    #[default]
    BestFirst,
    /// Unweighted search returning the route with the fewest hops.
    BreadthFirst,
}

impl Strategy {
    /// Returns the canonical token for this strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::BestFirst => "best-first",
            Strategy::BreadthFirst => "breadth-first",
        }
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    /// Parse a strategy token.
    ///
    /// Accepts `best-first` (or `a-star`) and `breadth-first` (or `bfs`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "best-first" | "a-star" => Ok(Strategy::BestFirst),
            "breadth-first" | "bfs" => Ok(Strategy::BreadthFirst),
            other => Err(SearchError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Route planner over a borrowed network.
///
/// The planner holds no mutable state, so one planner (or several) can
/// serve queries from many threads while the network is not being
/// modified.
pub struct Planner<'a, H: Heuristic = StraightLine> {
    network: &'a Network,
    config: &'a SearchConfig,
    heuristic: H,
}

impl<'a> Planner<'a, StraightLine> {
    /// Create a planner using the straight-line heuristic from `config`.
    pub fn new(network: &'a Network, config: &'a SearchConfig) -> Self {
        Self::with_heuristic(network, config, StraightLine::new(config.minutes_per_unit))
    }
}

impl<'a, H: Heuristic> Planner<'a, H> {
    /// Create a planner with a custom heuristic for best-first search.
    pub fn with_heuristic(network: &'a Network, config: &'a SearchConfig, heuristic: H) -> Self {
        Self {
            network,
            config,
            heuristic,
        }
    }

    /// Find a route from `origin` to `destination`.
    ///
    /// Returns `None` when either station is unknown or no path exists;
    /// the two cases are not distinguished.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_router::network::medellin_network;
    /// use transit_router::planner::{Planner, SearchConfig, Strategy};
    ///
    /// let network = medellin_network();
    /// let config = SearchConfig::default();
    /// let planner = Planner::new(&network, &config);
    ///
    /// let route = planner
    ///     .find_route("Barbosa", "Poblado", Strategy::BestFirst)
    ///     .unwrap();
    /// assert_eq!(route.stations(), ["Barbosa", "Poblado"]);
    /// assert_eq!(route.total_cost(), 5255.0);
    ///
    /// assert!(planner.find_route("Nowhere", "Poblado", Strategy::BestFirst).is_none());
    /// ```
    pub fn find_route(&self, origin: &str, destination: &str, strategy: Strategy) -> Option<Route> {
        let penalty = self.config.transfer_penalty_mins;
        match strategy {
            Strategy::BestFirst => {
                find_best_first(self.network, &self.heuristic, origin, destination, penalty)
            }
            Strategy::BreadthFirst => {
                find_breadth_first(self.network, origin, destination, penalty)
            }
        }
    }

    /// Find a route using a strategy given by name.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownStrategy`] for an unrecognised token,
    /// before any search is attempted.
    pub fn find_route_by_name(
        &self,
        origin: &str,
        destination: &str,
        strategy: &str,
    ) -> Result<Option<Route>, SearchError> {
        let strategy: Strategy = strategy.parse()?;
        Ok(self.find_route(origin, destination, strategy))
    }

    /// The network this planner searches.
    pub fn network(&self) -> &'a Network {
        self.network
    }

    pub fn config(&self) -> &'a SearchConfig {
        self.config
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
