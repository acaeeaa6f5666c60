//! Route type.
//!
//! A `Route` is the itinerary a search produces: the stations visited, the
//! fare label of each hop, and the time, cost and transfer totals derived
//! from them.

use serde::Serialize;

/// An itinerary from origin to destination.
///
/// # Invariants
///
/// - At least one station (origin == destination gives a one-station route)
/// - `lines_used().len() == stations().len() - 1`
/// - A transfer is recorded at station `i + 1` whenever hop `i` and hop
///   `i + 1` carry different line labels
///
/// The priority score is a ranking aid and is not serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    stations: Vec<String>,
    total_minutes: u32,
    total_cost: f64,
    transfers: Vec<String>,
    lines_used: Vec<String>,
    #[serde(skip)]
    priority: u32,
}

impl Route {
    /// Builds a route from its station sequence and per-hop line labels.
    ///
    /// Transfers are derived from changes in the line labels and the
    /// priority score is `total_minutes + transfer_penalty * transfers`.
    /// Both saturate at `u32::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_router::domain::Route;
    ///
    /// let route = Route::new(
    ///     vec!["Barbosa".into(), "Poblado".into(), "Lleras".into()],
    ///     vec!["Ruta Integrada Barbosa".into(), "Ruta Integrada Poblado".into()],
    ///     47,
    ///     9145.0,
    ///     5,
    /// );
    ///
    /// assert_eq!(route.transfers(), ["Poblado"]);
    /// assert_eq!(route.priority(), 52);
    /// ```
    pub fn new(
        stations: Vec<String>,
        lines_used: Vec<String>,
        total_minutes: u32,
        total_cost: f64,
        transfer_penalty: u32,
    ) -> Self {
        debug_assert!(!stations.is_empty(), "route must have at least one station");
        debug_assert_eq!(lines_used.len() + 1, stations.len());

        let transfers: Vec<String> = lines_used
            .windows(2)
            .enumerate()
            .filter(|(_, pair)| pair[0] != pair[1])
            .map(|(i, _)| stations[i + 1].clone())
            .collect();

        let transfer_count = u32::try_from(transfers.len()).unwrap_or(u32::MAX);
        let priority =
            total_minutes.saturating_add(transfer_penalty.saturating_mul(transfer_count));

        Self {
            stations,
            total_minutes,
            total_cost,
            transfers,
            lines_used,
            priority,
        }
    }

    /// A route that starts and ends at the same station.
    pub fn trivial(station: impl Into<String>) -> Self {
        Self::new(vec![station.into()], Vec::new(), 0, 0.0, 0)
    }

    /// Station names in travel order, origin first.
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    /// Returns the origin station name.
    pub fn origin(&self) -> &str {
        &self.stations[0]
    }

    /// Returns the destination station name.
    pub fn destination(&self) -> &str {
        &self.stations[self.stations.len() - 1]
    }

    /// Total travel time in minutes.
    pub fn total_minutes(&self) -> u32 {
        self.total_minutes
    }

    /// Sum of the fares of every connection travelled.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Stations where the line label changes, in travel order.
    pub fn transfers(&self) -> &[String] {
        &self.transfers
    }

    pub fn transfer_count(&self) -> usize {
        self.transfers.len()
    }

    /// Line label of each hop, in travel order.
    pub fn lines_used(&self) -> &[String] {
        &self.lines_used
    }

    /// Distinct line labels in order of first use.
    pub fn distinct_lines(&self) -> Vec<&str> {
        let mut lines: Vec<&str> = Vec::new();
        for line in &self.lines_used {
            if !lines.contains(&line.as_str()) {
                lines.push(line);
            }
        }
        lines
    }

    /// Number of connections travelled.
    pub fn hop_count(&self) -> usize {
        self.lines_used.len()
    }

    /// Ranking score: total minutes plus a penalty per transfer.
    pub fn priority(&self) -> u32 {
        self.priority
    }
}
