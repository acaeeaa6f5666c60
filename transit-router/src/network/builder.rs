//! Fluent builder for networks.

use tracing::trace;

use crate::domain::{Connection, Mode, Station};

use super::Network;

/// Builder for creating networks.
///
/// Provides a fluent API for adding stations and connections. Stations
/// with empty names are skipped rather than reported, which keeps seed
/// data terse; use [`Network::add_station`] directly to see the error.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    inner: Network,
}

impl NetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station.
    pub fn station(
        mut self,
        name: &str,
        mode: Mode,
        position: (f64, f64),
        lines: &[&str],
        services: &[&str],
    ) -> Self {
        let station = Station::new(name, mode, position, to_strings(lines))
            .with_services(to_strings(services));
        if self.inner.add_station(station).is_err() {
            trace!("skipping station with empty name");
        }
        self
    }

    /// Add a single directed connection.
    pub fn connection(
        mut self,
        origin: &str,
        destination: &str,
        minutes: u32,
        cost: f64,
        line: &str,
        mode: Mode,
    ) -> Self {
        self.inner
            .add_connection(Connection::new(origin, destination, minutes, cost, line, mode));
        self
    }

    /// Add a connection in both directions with the same time, fare and label.
    ///
    /// The outbound edge is inserted before the return edge.
    pub fn bidirectional(
        mut self,
        a: &str,
        b: &str,
        minutes: u32,
        cost: f64,
        line: &str,
        mode: Mode,
    ) -> Self {
        let outbound = Connection::new(a, b, minutes, cost, line, mode);
        let inbound = outbound.reversed();
        self.inner.add_connection(outbound);
        self.inner.add_connection(inbound);
        self
    }

    /// Build the network.
    pub fn build(self) -> Network {
        self.inner
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
