//! Placement generation: ordered loads into the trailer grid.
//!
//! Loads are processed strictly in the order given; choosing that order is
//! the planner's job (see [`crate::planner`]). Pallets stream into a single
//! grid cursor with the lane index cycling fastest, so freight fills the
//! nose of the trailer first, both lanes at a time.

use tracing::debug;

use crate::domain::{
    Load, Placement, Severity, TrailerSpec, Violation, ViolationType, PALLET_LENGTH_M,
    PALLET_WIDTH_M,
};

/// Assigns each load's pallets to (slot, lane) cells.
///
/// Each load contributes [`Load::pallet_count`] pallets carrying an equal
/// share of the load's weight. A pallet that lands at or past grid
/// capacity produces an `OVER_CAPACITY` violation instead of a placement;
/// the cursor never advances past capacity, so every later pallet in the
/// same call is reported the same way rather than short-circuiting the
/// rest of the board. Placed pallets are numbered by `sequence_index`
/// starting at 1 across the whole call.
///
/// Identical `(loads, spec)` input always yields identical output.
///
/// # Examples
///
/// ```
/// use trailer_loading::domain::{Load, TrailerSpec};
/// use trailer_loading::placement::place_pallets;
///
/// let loads = vec![Load::new("L1", 3.0, 3_000.0)];
/// let (placements, violations) = place_pallets(&loads, &TrailerSpec::default());
///
/// assert_eq!(placements.len(), 3);
/// assert!(violations.is_empty());
/// // Lane cycles fastest: (0,0), (0,1), then slot advances to (1,0).
/// assert_eq!((placements[0].slot_index, placements[0].lane_index), (0, 0));
/// assert_eq!((placements[1].slot_index, placements[1].lane_index), (0, 1));
/// assert_eq!((placements[2].slot_index, placements[2].lane_index), (1, 0));
/// ```
pub fn place_pallets(loads: &[Load], spec: &TrailerSpec) -> (Vec<Placement>, Vec<Violation>) {
    let capacity = spec.capacity();
    let mut placements = Vec::new();
    let mut violations = Vec::new();

    // Flattened grid position; advances only when a pallet actually lands.
    let mut cursor = 0usize;
    let mut sequence = 0usize;

    for load in loads {
        let pallet_count = load.pallet_count();
        let share = load.per_pallet_weight_lbs();

        for pallet_index in 0..pallet_count {
            if cursor >= capacity {
                violations.push(
                    Violation::new(
                        ViolationType::OverCapacity,
                        Severity::High,
                        format!(
                            "Pallet {} of load {} does not fit: trailer holds {} pallets",
                            pallet_index + 1,
                            load.id,
                            capacity
                        ),
                    )
                    .with_suggested_fix("Split the load or plan a second trailer")
                    .with_load(load.id.clone())
                    .with_pallets(vec![pallet_index]),
                );
                continue;
            }

            let slot_index = cursor / spec.lane_count;
            let lane_index = cursor % spec.lane_count;
            sequence += 1;

            placements.push(Placement {
                load_id: load.id.clone(),
                pallet_index,
                slot_index,
                lane_index,
                weight_lbs: share,
                sequence_index: sequence,
                destination_code: load.destination_code.clone(),
                stop_window: load.stop_window.clone(),
                length_m: PALLET_LENGTH_M,
                width_m: PALLET_WIDTH_M,
            });
            cursor += 1;
        }
    }

    debug!(
        placed = placements.len(),
        dropped = violations.len(),
        "placement pass complete"
    );
    (placements, violations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_fit() {
        let loads = vec![Load::new("L1", 20.0, 20_000.0)];
        let spec = TrailerSpec::default(); // 2 lanes x 20 slots = 40

        let (placements, violations) = place_pallets(&loads, &spec);

        assert_eq!(placements.len(), 20);
        assert!(violations.is_empty());
        // Sequence numbers run 1..=20 across the call.
        for (i, p) in placements.iter().enumerate() {
            assert_eq!(p.sequence_index, i + 1);
            assert_eq!(p.weight_lbs, 1_000.0);
        }
        // 20 pallets over 2 lanes occupy slots 0..=9.
        assert_eq!(placements.last().unwrap().slot_index, 9);
        assert_eq!(placements.last().unwrap().lane_index, 1);
    }

    #[test]
    fn test_capacity_invariant() {
        let loads = vec![Load::new("L1", 50.0, 50_000.0)];
        let spec = TrailerSpec::default();

        let (placements, violations) = place_pallets(&loads, &spec);

        assert_eq!(placements.len(), 40);
        for p in &placements {
            assert!(p.absolute_index(spec.lane_count) < spec.capacity());
        }
        // Every dropped pallet is reported individually.
        assert_eq!(violations.len(), 10);
        for v in &violations {
            assert_eq!(v.violation_type, ViolationType::OverCapacity);
            assert_eq!(v.severity, Severity::High);
            assert_eq!(v.load_id.as_deref(), Some("L1"));
        }
        // Pallet indices 40..=49 are the ones that did not fit.
        let dropped: Vec<usize> = violations
            .iter()
            .flat_map(|v| v.pallet_indices.clone().unwrap())
            .collect();
        assert_eq!(dropped, (40..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_overflow_spans_loads() {
        // Second load starts after capacity is exhausted; all of its
        // pallets are reported, none placed.
        let loads = vec![
            Load::new("L1", 40.0, 40_000.0),
            Load::new("L2", 3.0, 3_000.0),
        ];
        let spec = TrailerSpec::default();

        let (placements, violations) = place_pallets(&loads, &spec);

        assert_eq!(placements.len(), 40);
        assert_eq!(violations.len(), 3);
        assert!(violations.iter().all(|v| v.load_id.as_deref() == Some("L2")));
    }

    #[test]
    fn test_weight_conservation() {
        let loads = vec![
            Load::new("L1", 7.0, 9_100.0),
            Load::new("L2", 5.0, 4_250.0),
            Load::new("L3", 3.0, 2_000.0),
        ];
        let spec = TrailerSpec::default();

        let (placements, _) = place_pallets(&loads, &spec);

        let placed: f64 = placements.iter().map(|p| p.weight_lbs).sum();
        let input: f64 = loads.iter().map(|l| l.weight_lbs).sum();
        assert!((placed - input).abs() < 0.01 * placements.len() as f64);
    }

    #[test]
    fn test_fractional_and_negative_pallets() {
        let loads = vec![
            Load::new("L1", 2.9, 2_900.0), // floors to 2
            Load::new("L2", -4.0, 1_000.0), // clamps to 0
        ];
        let spec = TrailerSpec::default();

        let (placements, violations) = place_pallets(&loads, &spec);

        assert_eq!(placements.len(), 2);
        assert!(violations.is_empty());
        assert_eq!(placements[0].weight_lbs, 1_450.0);
    }

    #[test]
    fn test_empty_input() {
        let (placements, violations) = place_pallets(&[], &TrailerSpec::default());
        assert!(placements.is_empty());
        assert!(violations.is_empty());
    }

    #[test]
    fn test_labels_copied_from_load() {
        let loads = vec![Load::new("L1", 1.0, 800.0)
            .with_destination("ATL")
            .with_stop_window("06:00-10:00")];

        let (placements, _) = place_pallets(&loads, &TrailerSpec::default());

        assert_eq!(placements[0].destination_code.as_deref(), Some("ATL"));
        assert_eq!(placements[0].stop_window.as_deref(), Some("06:00-10:00"));
        assert_eq!(placements[0].length_m, PALLET_LENGTH_M);
        assert_eq!(placements[0].width_m, PALLET_WIDTH_M);
    }
}
