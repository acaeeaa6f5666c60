//! Breadth-first route search.
//!
//! Explores connections in FIFO order, so the first time the destination is
//! dequeued it has been reached in the fewest hops. Travel time and fare play
//! no part in the ordering.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use crate::domain::Route;
use crate::network::Network;

use super::path::PathArena;

/// Run breadth-first search from `origin` to `destination`.
///
/// Returns `None` if either station is unknown or no path exists.
pub(super) fn find_breadth_first(
    network: &Network,
    origin: &str,
    destination: &str,
    transfer_penalty: u32,
) -> Option<Route> {
    let origin: &str = &network.station(origin)?.name;
    let destination: &str = &network.station(destination)?.name;

    let mut arena = PathArena::new();
    let mut queue = VecDeque::new();
    let mut visited: HashSet<&str> = HashSet::new();

    queue.push_back(arena.root(origin));

    while let Some(node) = queue.pop_front() {
        let station = arena.station(node);
        if !visited.insert(station) {
            continue;
        }

        if station == destination {
            debug!(
                strategy = "breadth-first",
                origin,
                destination,
                visited = visited.len(),
                found = true,
                "breadth-first search complete"
            );
            return Some(arena.route(node, transfer_penalty));
        }

        for connection in network.connections_from(station) {
            let next = connection.destination.as_str();
            if visited.contains(next) || !network.contains(next) {
                continue;
            }
            trace!(from = station, to = next, line = %connection.line, "breadth-first enqueue");
            queue.push_back(arena.extend(node, connection));
        }
    }

    debug!(
        strategy = "breadth-first",
        origin,
        destination,
        visited = visited.len(),
        found = false,
        "breadth-first search complete"
    );

    None
}
