//! The transit network: stations, connections, and how they are loaded.
//!
//! A [`Network`] is built once (by hand, through [`NetworkBuilder`], or from
//! a JSON network file) and is then shared read-only by every search.

mod builder;
mod error;
mod loader;
mod medellin;
mod model;

pub use builder::NetworkBuilder;
pub use error::NetworkError;
pub use loader::NetworkFile;
pub use medellin::medellin_network;
pub use model::Network;
