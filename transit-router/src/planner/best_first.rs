//! Best-first route search.
//!
//! Expands stations in order of `f = g + h`, where `g` is the travel time so
//! far and `h` the heuristic estimate to the destination. The first pop of a
//! station closes it; later, costlier paths to a closed station are dropped.
//! The frontier is drained completely and the lowest-`g` goal path is kept.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use tracing::{debug, trace};

use crate::domain::Route;
use crate::network::Network;

use super::heuristic::Heuristic;
use super::path::PathArena;

/// Frontier entry.
///
/// Ordered so that `BinaryHeap` pops the lowest `f` first, then the lowest
/// `g`, then the earliest pushed. Path nodes are allocated in push order, so
/// the node index doubles as the insertion sequence number.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    f: f64,
    g: u32,
    node: usize,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.g.cmp(&self.g))
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Run best-first search from `origin` to `destination`.
///
/// Returns `None` if either station is unknown or no path exists.
pub(super) fn find_best_first<H: Heuristic>(
    network: &Network,
    heuristic: &H,
    origin: &str,
    destination: &str,
    transfer_penalty: u32,
) -> Option<Route> {
    let origin: &str = &network.station(origin)?.name;
    let destination: &str = &network.station(destination)?.name;

    let mut arena = PathArena::new();
    let mut frontier = BinaryHeap::new();
    let mut closed: HashSet<&str> = HashSet::new();
    let mut best: Option<(u32, usize)> = None;
    let mut expanded = 0usize;

    let root = arena.root(origin);
    frontier.push(Candidate {
        f: 0.0,
        g: 0,
        node: root,
    });

    while let Some(Candidate { g, node, .. }) = frontier.pop() {
        let station = arena.station(node);
        if !closed.insert(station) {
            continue;
        }

        if station == destination {
            if best.is_none_or(|(best_g, _)| g < best_g) {
                best = Some((g, node));
            }
            continue;
        }

        expanded += 1;
        for connection in network.connections_from(station) {
            let next = connection.destination.as_str();
            // Dangling connections are inert
            if closed.contains(next) || !network.contains(next) {
                continue;
            }

            let next_g = g.saturating_add(connection.minutes);
            let h = heuristic.estimate(network, next, destination);
            let child = arena.extend(node, connection);

            trace!(
                from = station,
                to = next,
                line = %connection.line,
                g = next_g,
                h,
                "best-first push"
            );

            frontier.push(Candidate {
                f: f64::from(next_g) + h,
                g: next_g,
                node: child,
            });
        }
    }

    debug!(
        strategy = "best-first",
        origin,
        destination,
        expanded,
        paths = arena.len(),
        found = best.is_some(),
        "best-first search complete"
    );

    best.map(|(_, node)| arena.route(node, transfer_penalty))
}
