//! Route planner.
//!
//! This module implements the route search engine that answers:
//! "what is the best way from this station to that one?"
//!
//! Two strategies share one entry point: a heuristic-guided best-first
//! search that minimises travel time, and a breadth-first search that
//! minimises the number of connections taken.

mod best_first;
mod bfs;
mod config;
mod heuristic;
mod path;
mod search;

pub use config::SearchConfig;
pub use heuristic::{Heuristic, StraightLine, ZeroHeuristic};
pub use search::{Planner, SearchError, Strategy};
