//! Partial paths stored as a tree of back-pointers.
//!
//! Both searches extend paths one connection at a time. Rather than copying
//! the station and line sequences into every frontier entry, each entry
//! holds the index of a node here and the full route is only rebuilt for the
//! goal.

use crate::domain::{Connection, Route};

/// One step of a partial path.
#[derive(Debug, Clone, Copy)]
struct PathNode<'n> {
    station: &'n str,
    /// Connection used to reach `station`; `None` for the origin.
    via: Option<&'n Connection>,
    parent: Option<usize>,
}

/// Arena of path nodes borrowed from a network.
#[derive(Debug, Default)]
pub(super) struct PathArena<'n> {
    nodes: Vec<PathNode<'n>>,
}

impl<'n> PathArena<'n> {
    pub(super) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Start a path at `station`. Returns the node index.
    pub(super) fn root(&mut self, station: &'n str) -> usize {
        self.push(PathNode {
            station,
            via: None,
            parent: None,
        })
    }

    /// Extend the path ending at `parent` along `connection`.
    pub(super) fn extend(&mut self, parent: usize, connection: &'n Connection) -> usize {
        self.push(PathNode {
            station: &connection.destination,
            via: Some(connection),
            parent: Some(parent),
        })
    }

    /// Station at the end of the path ending at `node`.
    pub(super) fn station(&self, node: usize) -> &'n str {
        self.nodes[node].station
    }

    /// Number of nodes allocated so far.
    pub(super) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Rebuild the route ending at `node`.
    pub(super) fn route(&self, node: usize, transfer_penalty: u32) -> Route {
        let mut stations = Vec::new();
        let mut hops = Vec::new();

        let mut cursor = Some(node);
        while let Some(index) = cursor {
            let step = &self.nodes[index];
            stations.push(step.station.to_string());
            if let Some(connection) = step.via {
                hops.push(connection);
            }
            cursor = step.parent;
        }
        stations.reverse();
        hops.reverse();

        let total_minutes = hops
            .iter()
            .fold(0u32, |total, c| total.saturating_add(c.minutes));
        let total_cost: f64 = hops.iter().map(|c| c.cost).sum();
        let lines_used: Vec<String> = hops.iter().map(|c| c.line.clone()).collect();

        Route::new(stations, lines_used, total_minutes, total_cost, transfer_penalty)
    }

    fn push(&mut self, node: PathNode<'n>) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Mode;

    #[test]
    fn root_only_is_trivial_route() {
        let mut arena = PathArena::new();
        let root = arena.root("A");

        assert_eq!(arena.route(root, 5), Route::trivial("A"));
    }

    #[test]
    fn rebuilds_branching_paths() {
        let ab = Connection::new("A", "B", 3, 100.0, "L1", Mode::Metro);
        let bc = Connection::new("B", "C", 4, 50.0, "L2", Mode::Bus);
        let bd = Connection::new("B", "D", 7, 25.0, "L1", Mode::Metro);

        let mut arena = PathArena::new();
        let a = arena.root("A");
        let b = arena.extend(a, &ab);
        let c = arena.extend(b, &bc);
        let d = arena.extend(b, &bd);

        assert_eq!(arena.len(), 4);
        assert_eq!(arena.station(d), "D");

        let to_c = arena.route(c, 5);
        assert_eq!(to_c.stations(), ["A", "B", "C"]);
        assert_eq!(to_c.lines_used(), ["L1", "L2"]);
        assert_eq!(to_c.total_minutes(), 7);
        assert_eq!(to_c.total_cost(), 150.0);
        assert_eq!(to_c.transfers(), ["B"]);

        let to_d = arena.route(d, 5);
        assert_eq!(to_d.stations(), ["A", "B", "D"]);
        assert_eq!(to_d.total_minutes(), 10);
        assert!(to_d.transfers().is_empty());
    }

    #[test]
    fn total_minutes_saturate() {
        let ab = Connection::new("A", "B", u32::MAX, 1.0, "L1", Mode::Metro);
        let bc = Connection::new("B", "C", 7, 1.0, "L1", Mode::Metro);

        let mut arena = PathArena::new();
        let a = arena.root("A");
        let b = arena.extend(a, &ab);
        let c = arena.extend(b, &bc);

        let route = arena.route(c, 5);
        assert_eq!(route.total_minutes(), u32::MAX);
        assert_eq!(route.total_cost(), 2.0);
    }
}
