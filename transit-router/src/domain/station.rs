//! Station types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Service tag marking a station where riders may change lines.
pub const TRANSFER_TAG: &str = "transferencia";

/// Fixed transit mode serving a station or connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Metro,
    Bus,
    Transmilenio,
    Metrobus,
}

impl Mode {
    /// Returns the lowercase name used in network files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Metro => "metro",
            Mode::Bus => "bus",
            Mode::Transmilenio => "transmilenio",
            Mode::Metrobus => "metrobus",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point on the schematic network plane.
///
/// Coordinates are abstract units, not geographic degrees. They only feed
/// the straight-line travel time estimate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Creates a position from its two coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A named stop in the transit network.
///
/// The name is the station's identity: inserting another station with the
/// same name into a [`Network`](crate::network::Network) replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Unique station name
    pub name: String,
    /// Mode serving this station
    pub mode: Mode,
    /// Schematic position, used for travel time estimates
    pub position: Position,
    /// Names of the lines calling here
    pub lines: Vec<String>,
    /// Service tags (e.g. [`TRANSFER_TAG`])
    #[serde(default)]
    pub services: Vec<String>,
}

impl Station {
    /// Creates a station with no service tags.
    pub fn new(
        name: impl Into<String>,
        mode: Mode,
        position: impl Into<Position>,
        lines: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            mode,
            position: position.into(),
            lines,
            services: Vec::new(),
        }
    }

    /// Replaces the station's service tags.
    pub fn with_services(mut self, services: Vec<String>) -> Self {
        self.services = services;
        self
    }

    /// Returns true if the station is served by `line`.
    pub fn serves_line(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    /// Returns true if the station carries the given service tag.
    pub fn has_service(&self, tag: &str) -> bool {
        self.services.iter().any(|s| s == tag)
    }

    /// Returns true if the two stations have at least one line in common.
    pub fn shares_line_with(&self, other: &Station) -> bool {
        self.lines.iter().any(|line| other.serves_line(line))
    }
}
