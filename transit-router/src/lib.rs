//! Transit route planner.
//!
//! Answers: "what is the best way from this station to that one?" over a
//! small multimodal network of metro lines and integrated buses, with
//! line-based flat fares and integrated tickets encoded as connections.

pub mod domain;
pub mod network;
pub mod planner;
pub mod rules;
