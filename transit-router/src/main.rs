use std::process::ExitCode;

use chrono::Local;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use transit_router::domain::Route;
use transit_router::network::{Network, medellin_network};
use transit_router::planner::{Planner, SearchConfig};
use transit_router::rules::matching_rules;

/// Queries run when no origin and destination are given.
const DEMO_QUERIES: [(&str, &str); 4] = [
    ("Barbosa", "Poblado"),
    ("Barbosa", "El Poblado Centro"),
    ("Niquía", "Itagüí"),
    ("Poblado", "La Estrella"),
];

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Network from file if configured, otherwise the built-in Medellín data
    let network = match std::env::var("TRANSIT_NETWORK") {
        Ok(path) => match Network::load(&path) {
            Ok(network) => network,
            Err(e) => {
                error!(error = %e, "Failed to load network");
                return ExitCode::FAILURE;
            }
        },
        Err(_) => medellin_network(),
    };
    info!(
        stations = network.station_count(),
        connections = network.connection_count(),
        "Network ready"
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    let queries: Vec<(&str, &str, &str)> = match args.as_slice() {
        [] => DEMO_QUERIES
            .iter()
            .map(|(from, to)| (*from, *to, "best-first"))
            .collect(),
        [from, to] => vec![(from.as_str(), to.as_str(), "best-first")],
        [from, to, strategy] => vec![(from.as_str(), to.as_str(), strategy.as_str())],
        _ => {
            eprintln!("Usage: transit-router [ORIGIN DESTINATION [best-first|breadth-first]]");
            return ExitCode::FAILURE;
        }
    };

    // One JSON route (or null) per line instead of the text report
    let json_output = std::env::var("TRANSIT_OUTPUT").is_ok_and(|v| v == "json");

    let config = SearchConfig::default();
    let planner = Planner::new(&network, &config);

    for (from, to, strategy) in queries {
        if json_output {
            let rendered = planner
                .find_route_by_name(from, to, strategy)
                .map(|route| render_json(route.as_ref()));
            match rendered {
                Ok(Ok(line)) => println!("{line}"),
                Ok(Err(e)) => {
                    error!(error = %e, "Failed to serialize route");
                    return ExitCode::FAILURE;
                }
                Err(e) => {
                    error!(error = %e, "Invalid query");
                    return ExitCode::FAILURE;
                }
            }
            continue;
        }

        println!();
        println!("Route from '{from}' to '{to}' ({strategy}):");
        println!("{}", "-".repeat(60));

        match planner.find_route_by_name(from, to, strategy) {
            Ok(Some(route)) => print_route(&route),
            Ok(None) => println!("No route found"),
            Err(e) => {
                error!(error = %e, "Invalid query");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn print_route(route: &Route) {
    println!("  Stations: {}", route.stations().join(" -> "));
    println!("  Total time: {} minutes", route.total_minutes());
    println!("  Total cost: ${} COP", group_thousands(route.total_cost()));
    println!("  Lines: {}", route.distinct_lines().join(", "));
    if route.transfers().is_empty() {
        println!("  No transfers (direct route)");
    } else {
        println!("  Transfers at: {}", route.transfers().join(", "));
    }

    let rules = matching_rules(route, Local::now().time());
    if !rules.is_empty() {
        info!(rules = ?rules, "Matching travel rules");
    }
}

/// Serialize a search result as a single JSON line; `null` when not found.
fn render_json(route: Option<&Route>) -> Result<String, serde_json::Error> {
    serde_json::to_string(&route)
}

/// Format a whole currency amount with comma thousands separators.
fn group_thousands(amount: f64) -> String {
    let digits = format!("{:.0}", amount.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0.0 {
        grouped.insert(0, '-');
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    use transit_router::planner::Strategy;

    #[test]
    fn json_output() {
        let network = medellin_network();
        let config = SearchConfig::default();
        let planner = Planner::new(&network, &config);
        let route = planner.find_route("Barbosa", "Poblado", Strategy::BestFirst);

        let line = render_json(route.as_ref()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();

        assert!(!line.contains('\n'));
        assert_eq!(value["stations"], serde_json::json!(["Barbosa", "Poblado"]));
        assert_eq!(value["total_minutes"], 43);
        assert_eq!(value["total_cost"], 5255.0);
        assert_eq!(value["transfers"], serde_json::json!([]));
        assert_eq!(value["lines_used"], serde_json::json!(["Ruta Integrada Barbosa"]));
    }

    #[test]
    fn json_output_not_found() {
        assert_eq!(render_json(None).unwrap(), "null");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(5255.0), "5,255");
        assert_eq!(group_thousands(9145.4), "9,145");
        assert_eq!(group_thousands(1234567.0), "1,234,567");
    }
}
