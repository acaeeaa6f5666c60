//! Network error types.

use std::path::PathBuf;

/// Errors raised while building or loading a network.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Station names are the network's keys and cannot be blank
    #[error("station name must not be empty")]
    EmptyStationName,

    /// Network file could not be read
    #[error("failed to read network file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Network file is not valid JSON for the expected layout
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
