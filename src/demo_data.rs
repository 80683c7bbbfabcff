//! Demo load boards for the planning engine.
//!
//! Provides deterministic demo boards for three dispatch desks:
//! - Chicago (regional retail/grocery, roughly fills one trailer)
//! - Gulf (chemical corridor, carries hazmat and no-mix constraints)
//! - Peak (oversubscribed holiday board that overflows and runs heavy)
//!
//! Pallet counts and weights come from a seeded [`StdRng`], so a board is
//! exactly as reproducible as the plans built from it.

use chrono::NaiveTime;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{HandlingConstraint, Load};

/// Freight profile behind a demo load.
#[derive(Clone, Copy)]
enum FreightKind {
    /// Early-window perishables, mid-weight pallets.
    Grocery,
    /// Daytime store deliveries, light pallets.
    Retail,
    /// Plant-to-plant freight, heavy pallets.
    Industrial,
    /// Drummed or totes chemicals, heaviest pallets.
    Chemical,
}

impl FreightKind {
    fn pallet_range(&self) -> (usize, usize) {
        match self {
            FreightKind::Grocery => (3, 6),
            FreightKind::Retail => (4, 9),
            FreightKind::Industrial => (3, 6),
            FreightKind::Chemical => (3, 5),
        }
    }

    fn pallet_weight_range(&self) -> (f64, f64) {
        match self {
            FreightKind::Grocery => (900.0, 1_400.0),
            FreightKind::Retail => (500.0, 1_100.0),
            FreightKind::Industrial => (1_200.0, 2_200.0),
            FreightKind::Chemical => (1_500.0, 2_600.0),
        }
    }

    fn stop_window_hours(&self) -> (u32, u32) {
        match self {
            FreightKind::Grocery => (5, 9),
            FreightKind::Retail => (9, 16),
            FreightKind::Industrial => (7, 15),
            FreightKind::Chemical => (8, 14),
        }
    }
}

/// Static shipper row backing one demo load.
struct LoadData {
    destination: &'static str,
    kind: FreightKind,
    constraints: &'static [HandlingConstraint],
}

/// Demo board configuration.
struct BoardConfig {
    seed: u64,
    id_base: u32,
}

// ============================================================================
// Chicago Board
// ============================================================================

const CHICAGO_LOADS: &[LoadData] = &[
    LoadData { destination: "MKE", kind: FreightKind::Grocery, constraints: &[] }, // Lakeside Grocers
    LoadData { destination: "MSN", kind: FreightKind::Grocery, constraints: &[] }, // Prairie Fresh Foods
    LoadData { destination: "GRB", kind: FreightKind::Retail, constraints: &[] }, // Halsted Hardware
    LoadData { destination: "MKE", kind: FreightKind::Retail, constraints: &[] }, // Wacker Supply Co
    LoadData { destination: "RFD", kind: FreightKind::Industrial, constraints: &[] }, // Cicero Fastener Works
    LoadData { destination: "GRB", kind: FreightKind::Industrial, constraints: &[] }, // Calumet Castings
    LoadData { destination: "MSN", kind: FreightKind::Retail, constraints: &[] }, // North Shore Paper
    LoadData { destination: "RFD", kind: FreightKind::Industrial, constraints: &[HandlingConstraint::NoSplit] }, // Pullman Plastics
    LoadData { destination: "MKE", kind: FreightKind::Retail, constraints: &[] }, // Elston Electrical
];

// ============================================================================
// Gulf Board
// ============================================================================

const GULF_LOADS: &[LoadData] = &[
    LoadData { destination: "BTR", kind: FreightKind::Chemical, constraints: &[HandlingConstraint::Hazmat, HandlingConstraint::NoMix] }, // Bayport Solvents
    LoadData { destination: "LAF", kind: FreightKind::Chemical, constraints: &[HandlingConstraint::Hazmat] }, // Channelview Resins
    LoadData { destination: "BTR", kind: FreightKind::Industrial, constraints: &[] }, // Pasadena Polymers
    LoadData { destination: "MOB", kind: FreightKind::Chemical, constraints: &[HandlingConstraint::Hazmat, HandlingConstraint::DirectNoTouch] }, // La Porte Lubricants
    LoadData { destination: "LAF", kind: FreightKind::Chemical, constraints: &[] }, // Deer Park Additives
    LoadData { destination: "CRP", kind: FreightKind::Industrial, constraints: &[] }, // Galena Park Gaskets
    LoadData { destination: "MOB", kind: FreightKind::Chemical, constraints: &[HandlingConstraint::Hazmat, HandlingConstraint::NoSplit] }, // Baytown Catalysts
    LoadData { destination: "CRP", kind: FreightKind::Industrial, constraints: &[] }, // Texas City Totes
];

// ============================================================================
// Peak Board
// ============================================================================

const PEAK_LOADS: &[LoadData] = &[
    LoadData { destination: "ATL", kind: FreightKind::Retail, constraints: &[] }, // Hollis Toy Exchange
    LoadData { destination: "ATL", kind: FreightKind::Retail, constraints: &[] }, // Decatur Dry Goods
    LoadData { destination: "BHM", kind: FreightKind::Retail, constraints: &[] }, // Marietta Mills
    LoadData { destination: "CLT", kind: FreightKind::Grocery, constraints: &[] }, // Peachtree Provisions
    LoadData { destination: "CLT", kind: FreightKind::Industrial, constraints: &[] }, // Augusta Appliance
    LoadData { destination: "JAX", kind: FreightKind::Retail, constraints: &[] }, // Savannah Shelving
    LoadData { destination: "JAX", kind: FreightKind::Retail, constraints: &[HandlingConstraint::NoSplit] }, // Macon Mattress Co
    LoadData { destination: "BHM", kind: FreightKind::Retail, constraints: &[] }, // Athens Athletic Supply
    LoadData { destination: "ATL", kind: FreightKind::Retail, constraints: &[] }, // Columbus Cookware
    LoadData { destination: "CHA", kind: FreightKind::Retail, constraints: &[] }, // Rome Rug Works
    LoadData { destination: "JAX", kind: FreightKind::Industrial, constraints: &[] }, // Valdosta Vending
    LoadData { destination: "BHM", kind: FreightKind::Grocery, constraints: &[] }, // Albany Paper Goods
    LoadData { destination: "CHA", kind: FreightKind::Industrial, constraints: &[] }, // Dalton Flooring
    LoadData { destination: "CLT", kind: FreightKind::Grocery, constraints: &[] }, // Gainesville Grains
];

// ============================================================================
// Generator Functions
// ============================================================================

fn window_label(start_hour: u32, end_hour: u32) -> String {
    let fmt = |hour: u32| {
        NaiveTime::from_hms_opt(hour, 0, 0)
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| format!("{:02}:00", hour))
    };
    format!("{}-{}", fmt(start_hour), fmt(end_hour))
}

fn generate_board(config: &BoardConfig, rows: &[LoadData]) -> Vec<Load> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let (min_pallets, max_pallets) = row.kind.pallet_range();
            let (min_weight, max_weight) = row.kind.pallet_weight_range();
            let (window_start, window_end) = row.kind.stop_window_hours();

            let pallets = rng.gen_range(min_pallets..=max_pallets);
            let weight_lbs = (pallets as f64 * rng.gen_range(min_weight..=max_weight)).round();

            let mut load = Load::new(format!("L-{}", config.id_base + i as u32), pallets as f64, weight_lbs)
                .with_destination(row.destination)
                .with_stop_window(window_label(window_start, window_end));
            for &constraint in row.constraints {
                load = load.with_constraint(constraint);
            }
            load
        })
        .collect()
}

/// Generates the Chicago board (9 loads, regional retail/grocery).
pub fn generate_chicago() -> Vec<Load> {
    generate_board(&BoardConfig { seed: 0, id_base: 1001 }, CHICAGO_LOADS)
}

/// Generates the Gulf board (8 loads, chemical corridor with hazmat).
pub fn generate_gulf() -> Vec<Load> {
    generate_board(&BoardConfig { seed: 1, id_base: 4501 }, GULF_LOADS)
}

/// Generates the Peak board (14 loads, oversubscribes one trailer).
pub fn generate_peak() -> Vec<Load> {
    generate_board(&BoardConfig { seed: 2, id_base: 7301 }, PEAK_LOADS)
}

/// Returns all available demo board names.
pub fn available_boards() -> &'static [&'static str] {
    &["CHICAGO", "GULF", "PEAK"]
}

/// Generates a demo board by name.
///
/// # Examples
///
/// ```
/// use trailer_loading::demo_data::generate_by_name;
///
/// let board = generate_by_name("CHICAGO").unwrap();
/// assert_eq!(board.len(), 9);
///
/// assert!(generate_by_name("UNKNOWN").is_none());
/// ```
pub fn generate_by_name(name: &str) -> Option<Vec<Load>> {
    match name.to_uppercase().as_str() {
        "CHICAGO" => Some(generate_chicago()),
        "GULF" => Some(generate_gulf()),
        "PEAK" => Some(generate_peak()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TrailerSpec;

    #[test]
    fn test_board_sizes() {
        assert_eq!(generate_chicago().len(), 9);
        assert_eq!(generate_gulf().len(), 8);
        assert_eq!(generate_peak().len(), 14);
    }

    #[test]
    fn test_boards_are_deterministic() {
        let first = serde_json::to_string(&generate_gulf()).unwrap();
        let second = serde_json::to_string(&generate_gulf()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_gulf_carries_hazmat() {
        let hazmat = generate_gulf()
            .iter()
            .filter(|l| l.has_constraint(HandlingConstraint::Hazmat))
            .count();
        assert_eq!(hazmat, 4);
    }

    #[test]
    fn test_peak_oversubscribes_default_trailer() {
        let total_pallets: usize = generate_peak().iter().map(|l| l.pallet_count()).sum();
        assert!(
            total_pallets > TrailerSpec::default().capacity(),
            "Expected > 40 pallets, got {}",
            total_pallets
        );
    }

    #[test]
    fn test_loads_have_windows_and_destinations() {
        for load in generate_chicago() {
            assert!(load.stop_window.is_some());
            assert!(load.destination_code.is_some());
            assert!(load.pallet_count() >= 3);
            assert!(load.weight_lbs > 0.0);
        }
    }
}
