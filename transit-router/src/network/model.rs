//! In-memory network model.

use std::collections::{BTreeMap, HashMap};

use crate::domain::{Connection, Station};

use super::NetworkError;

/// Stations keyed by name plus the directed connections between them.
///
/// Connections are kept in insertion order. An adjacency index keyed by
/// origin name holds connection indices in that same order, so
/// [`connections_from`](Network::connections_from) yields exactly what a
/// linear scan of the connection list would, without the scan.
///
/// No referential checks are made on insertion: a connection whose endpoint
/// is not a station in the network is kept, but search never travels it.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: BTreeMap<String, Station>,
    connections: Vec<Connection>,
    outgoing: HashMap<String, Vec<usize>>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a station, replacing any station with the same name.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::EmptyStationName`] if the name is empty.
    pub fn add_station(&mut self, station: Station) -> Result<(), NetworkError> {
        if station.name.is_empty() {
            return Err(NetworkError::EmptyStationName);
        }
        self.stations.insert(station.name.clone(), station);
        Ok(())
    }

    /// Append a connection. Duplicates are kept as separate entries.
    pub fn add_connection(&mut self, connection: Connection) {
        let index = self.connections.len();
        self.outgoing
            .entry(connection.origin.clone())
            .or_default()
            .push(index);
        self.connections.push(connection);
    }

    /// Connections leaving `station`, in insertion order.
    pub fn connections_from<'a>(
        &'a self,
        station: &str,
    ) -> impl Iterator<Item = &'a Connection> + 'a {
        self.outgoing
            .get(station)
            .into_iter()
            .flatten()
            .map(|&index| &self.connections[index])
    }

    /// Returns true if both stations exist and have a line in common.
    ///
    /// Unknown names give `false`, not an error.
    pub fn shares_line(&self, a: &str, b: &str) -> bool {
        match (self.stations.get(a), self.stations.get(b)) {
            (Some(a), Some(b)) => a.shares_line_with(b),
            _ => false,
        }
    }

    /// Look up a station by name.
    pub fn station(&self, name: &str) -> Option<&Station> {
        self.stations.get(name)
    }

    /// Returns true if a station with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.stations.contains_key(name)
    }

    /// All stations, ordered by name.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// All connections, in insertion order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }
}
