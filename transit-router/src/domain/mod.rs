//! Domain types for the transit router.
//!
//! Stations and connections are the raw material the network is built
//! from; a `Route` is what a search hands back to the caller.

mod connection;
mod route;
mod station;

pub use connection::Connection;
pub use route::Route;
pub use station::{Mode, Position, Station, TRANSFER_TAG};
