//! Seed data for the Medellín metro and its integrated bus routes.
//!
//! Line A runs north-south from Niquía to La Estrella. Travelling only on
//! the metro costs a single flat fare whatever the distance, so every pair
//! of line A stations gets its own connection carrying that fare and the
//! summed segment times. Integrated routes bundle a feeder bus and the metro
//! into one fare, so they are likewise single connections.

use crate::domain::{Mode, TRANSFER_TAG};

use super::{Network, NetworkBuilder};

/// Flat metro-only fare (COP).
const METRO_FARE: f64 = 3430.0;
/// Integrated bus + metro fare from Barbosa (COP).
const BARBOSA_INTEGRATED_FARE: f64 = 5255.0;
/// Integrated feeder fare around Poblado (COP).
const POBLADO_INTEGRATED_FARE: f64 = 3890.0;
/// Stand-alone bus fare, no integration (COP).
const STANDALONE_BUS_FARE: f64 = 3400.0;

const LINE_A: &str = "Línea A";
const METRO_ONLY: &str = "Línea A - Solo Metro";
const BARBOSA_ROUTE: &str = "Ruta Integrada Barbosa";
const POBLADO_ROUTE: &str = "Ruta Integrada Poblado";
const STANDALONE_BUS: &str = "Bus No Integrado";

/// Line A stations north to south, with whether each allows transfers.
const LINE_A_STATIONS: [(&str, bool); 12] = [
    ("Niquía", true),
    ("Bello", false),
    ("Madera", false),
    ("San Antonio", true),
    ("Alpujarra", false),
    ("Exposiciones", false),
    ("Industriales", false),
    ("Poblado", true),
    ("Aguacatala", false),
    ("Itagüí", true),
    ("Sabaneta", false),
    ("La Estrella", false),
];

/// Minutes between consecutive line A stations.
const LINE_A_SEGMENT_MINUTES: [u32; 11] = [3, 2, 3, 2, 2, 3, 3, 2, 3, 2, 3];

/// Build the seeded Medellín network.
pub fn medellin_network() -> Network {
    let mut builder = NetworkBuilder::new();

    for (i, (name, transfer)) in LINE_A_STATIONS.iter().enumerate() {
        let services: &[&str] = if *transfer { &[TRANSFER_TAG] } else { &[] };
        builder = builder.station(name, Mode::Metro, (0.0, 2.0 * i as f64), &[LINE_A], services);
    }

    builder = builder
        .station("Barbosa", Mode::Bus, (-2.0, 0.0), &[BARBOSA_ROUTE], &[])
        .station("El Poblado Centro", Mode::Bus, (2.0, 14.0), &[POBLADO_ROUTE], &[])
        .station("Lleras", Mode::Bus, (2.0, 15.0), &[POBLADO_ROUTE], &[])
        .station("Oviedo", Mode::Bus, (2.0, 16.0), &[POBLADO_ROUTE], &[]);

    // Flat-fare metro trips between every pair of line A stations
    for from in 0..LINE_A_STATIONS.len() {
        for to in (from + 1)..LINE_A_STATIONS.len() {
            let minutes: u32 = LINE_A_SEGMENT_MINUTES[from..to].iter().sum();
            builder = builder.bidirectional(
                LINE_A_STATIONS[from].0,
                LINE_A_STATIONS[to].0,
                minutes,
                METRO_FARE,
                METRO_ONLY,
                Mode::Metro,
            );
        }
    }

    // Bus to Niquía plus metro to Poblado, billed once
    builder = builder.bidirectional(
        "Barbosa",
        "Poblado",
        43,
        BARBOSA_INTEGRATED_FARE,
        BARBOSA_ROUTE,
        Mode::Bus,
    );

    for (stop, minutes) in [("El Poblado Centro", 5), ("Lleras", 4), ("Oviedo", 6)] {
        builder = builder.bidirectional(
            "Poblado",
            stop,
            minutes,
            POBLADO_INTEGRATED_FARE,
            POBLADO_ROUTE,
            Mode::Bus,
        );
    }

    builder
        .bidirectional(
            "Poblado",
            "El Poblado Centro",
            5,
            STANDALONE_BUS_FARE,
            STANDALONE_BUS,
            Mode::Bus,
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_and_connection_counts() {
        let network = medellin_network();

        assert_eq!(network.station_count(), 16);
        // 66 metro pairs and 5 bus pairs, both directions
        assert_eq!(network.connection_count(), 2 * (66 + 5));
    }

    #[test]
    fn metro_times_sum_segments() {
        let network = medellin_network();

        let trip = network
            .connections_from("Niquía")
            .find(|c| c.destination == "Itagüí")
            .unwrap();
        assert_eq!(trip.minutes, 23);
        assert_eq!(trip.cost, METRO_FARE);

        let back = network
            .connections_from("La Estrella")
            .find(|c| c.destination == "Niquía")
            .unwrap();
        assert_eq!(back.minutes, 28);
    }

    #[test]
    fn parallel_fares_to_poblado_centro() {
        let network = medellin_network();

        let fares: Vec<(f64, &str)> = network
            .connections_from("Poblado")
            .filter(|c| c.destination == "El Poblado Centro")
            .map(|c| (c.cost, c.line.as_str()))
            .collect();

        assert_eq!(
            fares,
            vec![
                (POBLADO_INTEGRATED_FARE, POBLADO_ROUTE),
                (STANDALONE_BUS_FARE, STANDALONE_BUS),
            ]
        );
    }

    #[test]
    fn transfer_stations_tagged() {
        let network = medellin_network();

        for name in ["Niquía", "San Antonio", "Poblado", "Itagüí"] {
            assert!(network.station(name).unwrap().has_service(TRANSFER_TAG), "{name}");
        }
        assert!(!network.station("Bello").unwrap().has_service(TRANSFER_TAG));
    }

    #[test]
    fn line_membership() {
        let network = medellin_network();

        assert!(network.shares_line("Niquía", "Bello"));
        assert!(!network.shares_line("Barbosa", "Poblado"));
        assert!(network.shares_line("Lleras", "Oviedo"));
    }
}
