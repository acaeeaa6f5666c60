//! JSON network files.
//!
//! A network file lists stations and connections:
//!
//! ```json
//! {
//!   "stations": [
//!     { "name": "Niquía", "mode": "metro", "position": { "x": 0, "y": 0 },
//!       "lines": ["Línea A"], "services": ["transferencia"] }
//!   ],
//!   "connections": [
//!     { "origin": "Niquía", "destination": "Bello", "minutes": 3,
//!       "cost": 3430, "line": "Línea A - Solo Metro", "mode": "metro" }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Connection, Station};

use super::{Network, NetworkError};

/// On-disk layout of a network.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkFile {
    #[serde(default)]
    pub stations: Vec<Station>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl Network {
    /// Build a network from a parsed network file.
    ///
    /// All stations are inserted before any connection.
    pub fn from_file(file: NetworkFile) -> Result<Self, NetworkError> {
        let mut network = Network::new();
        for station in file.stations {
            network.add_station(station)?;
        }
        for connection in file.connections {
            network.add_connection(connection);
        }
        Ok(network)
    }

    /// Parse a network from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, NetworkError> {
        let file: NetworkFile = serde_json::from_str(json)?;
        Self::from_file(file)
    }

    /// Read and parse a network file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| NetworkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let network = Self::from_json_str(&contents)?;

        debug!(
            path = %path.display(),
            stations = network.station_count(),
            connections = network.connection_count(),
            "Loaded network file"
        );

        Ok(network)
    }

    /// Snapshot the network in file layout.
    pub fn to_file(&self) -> NetworkFile {
        NetworkFile {
            stations: self.stations().cloned().collect(),
            connections: self.connections().to_vec(),
        }
    }
}
