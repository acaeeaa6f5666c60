//! Connection type.

use serde::{Deserialize, Serialize};

use super::Mode;

/// A directed, weighted edge between two stations.
///
/// Time and cost are specific to the edge. A network may encode a flat or
/// integrated fare as a single connection spanning several stops, and may
/// hold several connections between the same pair of stations under
/// different fare labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// Origin station name
    pub origin: String,
    /// Destination station name
    pub destination: String,
    /// Travel time in minutes
    pub minutes: u32,
    /// Fare in currency units
    pub cost: f64,
    /// Line or fare label, compared between hops to detect transfers
    pub line: String,
    /// Mode operating the connection
    pub mode: Mode,
}

impl Connection {
    /// Creates a new connection.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        minutes: u32,
        cost: f64,
        line: impl Into<String>,
        mode: Mode,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            minutes,
            cost,
            line: line.into(),
            mode,
        }
    }

    /// Returns the same connection travelled in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            origin: self.destination.clone(),
            destination: self.origin.clone(),
            ..self.clone()
        }
    }
}
