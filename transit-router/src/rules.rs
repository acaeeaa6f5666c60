//! Named travel rules as plain predicates.
//!
//! None of these feed back into route search. They answer yes/no questions
//! about stations and finished routes, and [`matching_rules`] collects the
//! names of the route-level rules that hold so callers can log them.

use chrono::{NaiveTime, Timelike};

use crate::domain::{Connection, Route, Station, TRANSFER_TAG};
use crate::network::Network;
use crate::planner::SearchConfig;

/// Travel time multiplier during peak hours.
pub const PEAK_MULTIPLIER: f64 = 1.3;

/// Base fare for a derived same-line connection (COP).
pub const SAME_LINE_BASE_FARE: f64 = 2500.0;

/// Routes faster than this are preferable (minutes).
pub const PREFERABLE_MAX_MINUTES: u32 = 60;

/// Routes cheaper than this are preferable (COP).
pub const PREFERABLE_MAX_COST: f64 = 10000.0;

/// Priority bonus for a route with no transfers.
pub const DIRECT_ROUTE_BONUS: u32 = 10;

pub const RULE_PREFERABLE: &str = "ruta_preferible";
pub const RULE_DIRECT: &str = "sin_transbordos";
pub const RULE_PEAK_HOUR: &str = "tiempo_hora_pico";

/// True if both stations exist and share a line.
pub fn same_line(network: &Network, a: &str, b: &str) -> bool {
    network.shares_line(a, b)
}

/// True if riders may change lines at `station`.
pub fn transfer_permitted(station: &Station) -> bool {
    station.has_service(TRANSFER_TAG)
}

/// Peak hours run 06:00–09:59 and 17:00–20:59.
pub fn is_peak_hour(at: NaiveTime) -> bool {
    matches!(at.hour(), 6..=9 | 17..=20)
}

/// Travel minutes adjusted for peak-hour waiting.
pub fn peak_adjusted_minutes(base_minutes: u32, at: NaiveTime) -> f64 {
    let base = f64::from(base_minutes);
    if is_peak_hour(at) {
        base * PEAK_MULTIPLIER
    } else {
        base
    }
}

/// A route is preferable if it is both reasonably fast and cheap.
pub fn is_preferable(route: &Route) -> bool {
    route.total_minutes() < PREFERABLE_MAX_MINUTES && route.total_cost() < PREFERABLE_MAX_COST
}

/// True if the route needs no transfers.
pub fn is_direct(route: &Route) -> bool {
    route.transfers().is_empty()
}

/// Route priority with the direct-route bonus applied.
pub fn direct_bonus(route: &Route) -> u32 {
    if is_direct(route) {
        route.priority() + DIRECT_ROUTE_BONUS
    } else {
        route.priority()
    }
}

/// Whole minutes to cover the straight line between two stations.
pub fn estimated_travel_minutes(a: &Station, b: &Station, config: &SearchConfig) -> u32 {
    config
        .minutes_for_distance(a.position.distance_to(&b.position))
        .floor() as u32
}

/// Derive a direct connection between two stations on a common line.
///
/// The connection runs on the alphabetically first shared line, takes the
/// estimated straight-line time and charges [`SAME_LINE_BASE_FARE`].
/// Returns `None` if either station is unknown or they share no line.
pub fn same_line_connection(
    network: &Network,
    a: &str,
    b: &str,
    config: &SearchConfig,
) -> Option<Connection> {
    let from = network.station(a)?;
    let to = network.station(b)?;

    let line = from
        .lines
        .iter()
        .filter(|line| to.serves_line(line))
        .min()?;

    Some(Connection::new(
        a,
        b,
        estimated_travel_minutes(from, to, config),
        SAME_LINE_BASE_FARE,
        line.as_str(),
        from.mode,
    ))
}

/// Names of the route-level rules that hold for `route` at time `at`.
pub fn matching_rules(route: &Route, at: NaiveTime) -> Vec<&'static str> {
    let mut matched = Vec::new();
    if is_preferable(route) {
        matched.push(RULE_PREFERABLE);
    }
    if is_direct(route) {
        matched.push(RULE_DIRECT);
    }
    if is_peak_hour(at) {
        matched.push(RULE_PEAK_HOUR);
    }
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::medellin_network;
    use crate::planner::{Planner, Strategy};

    fn time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn route(from: &str, to: &str) -> Route {
        let network = medellin_network();
        let config = SearchConfig::default();
        Planner::new(&network, &config)
            .find_route(from, to, Strategy::BestFirst)
            .unwrap()
    }

    #[test]
    fn same_line_matches_network() {
        let network = medellin_network();

        assert!(same_line(&network, "Niquía", "Bello"));
        assert!(!same_line(&network, "Barbosa", "Poblado"));
        assert!(!same_line(&network, "Niquía", "Nowhere"));
    }

    #[test]
    fn transfer_stations() {
        let network = medellin_network();

        assert!(transfer_permitted(network.station("Niquía").unwrap()));
        assert!(!transfer_permitted(network.station("Bello").unwrap()));
    }

    #[test]
    fn peak_hours() {
        assert!(!is_peak_hour(time("05:59")));
        assert!(is_peak_hour(time("06:00")));
        assert!(is_peak_hour(time("09:59")));
        assert!(!is_peak_hour(time("10:00")));
        assert!(!is_peak_hour(time("16:59")));
        assert!(is_peak_hour(time("17:00")));
        assert!(is_peak_hour(time("20:30")));
        assert!(!is_peak_hour(time("21:00")));
    }

    #[test]
    fn peak_adjustment() {
        assert_eq!(peak_adjusted_minutes(10, time("12:00")), 10.0);
        assert!((peak_adjusted_minutes(10, time("07:30")) - 13.0).abs() < 1e-9);
    }

    #[test]
    fn preferable_and_direct() {
        let direct = route("Barbosa", "Poblado");
        assert!(is_preferable(&direct));
        assert!(is_direct(&direct));
        assert_eq!(direct_bonus(&direct), direct.priority() + DIRECT_ROUTE_BONUS);

        let with_transfer = route("Barbosa", "El Poblado Centro");
        assert!(is_preferable(&with_transfer));
        assert!(!is_direct(&with_transfer));
        assert_eq!(direct_bonus(&with_transfer), with_transfer.priority());
    }

    #[test]
    fn expensive_route_not_preferable() {
        let route = Route::new(
            vec!["A".into(), "B".into()],
            vec!["L".into()],
            30,
            12000.0,
            5,
        );
        assert!(!is_preferable(&route));
    }

    #[test]
    fn estimated_minutes_floor() {
        let network = medellin_network();
        let config = SearchConfig::default();
        let barbosa = network.station("Barbosa").unwrap();
        let poblado = network.station("Poblado").unwrap();

        // sqrt(200) * 2 = 28.28...
        assert_eq!(estimated_travel_minutes(barbosa, poblado, &config), 28);
    }

    #[test]
    fn derived_same_line_connection() {
        let network = medellin_network();
        let config = SearchConfig::default();

        let c = same_line_connection(&network, "Niquía", "Madera", &config).unwrap();
        assert_eq!(c.origin, "Niquía");
        assert_eq!(c.destination, "Madera");
        assert_eq!(c.minutes, 8);
        assert_eq!(c.cost, SAME_LINE_BASE_FARE);
        assert_eq!(c.line, "Línea A");

        assert!(same_line_connection(&network, "Barbosa", "Poblado", &config).is_none());
        assert!(same_line_connection(&network, "Nowhere", "Poblado", &config).is_none());
    }

    #[test]
    fn rule_names() {
        let direct = route("Niquía", "Itagüí");

        assert_eq!(
            matching_rules(&direct, time("08:15")),
            vec![RULE_PREFERABLE, RULE_DIRECT, RULE_PEAK_HOUR]
        );
        assert_eq!(
            matching_rules(&direct, time("12:00")),
            vec![RULE_PREFERABLE, RULE_DIRECT]
        );
    }
}
