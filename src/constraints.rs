//! Handling-constraint detection over completed placements.
//!
//! Runs after placement and before summarization. The pass only reads the
//! grid: it groups placements by slot row and lane adjacency and emits
//! violations for loads whose declared constraints are breached. The
//! placement algorithm itself is never altered by a constraint.
//!
//! # Rules
//!
//! - **NO_MIX**: the load shares a slot row with another load's pallet
//! - **HAZMAT**: a non-hazmat pallet sits in the same slot row, or in an
//!   adjacent slot of the same lane (reported as `COMPATIBILITY`)
//! - **NO_SPLIT**: overflow dropped part of the load
//! - **DIRECT_NO_TOUCH**: another load's pallet is laterally adjacent

use crate::domain::{HandlingConstraint, Load, Placement, Severity, Violation, ViolationType};

/// Detects breaches of declared handling constraints.
///
/// Emits at most one violation per (load, rule), in load order with rules
/// in the documented order, so output is deterministic. Loads without
/// constraints cost nothing.
pub fn detect_handling_violations(loads: &[Load], placements: &[Placement]) -> Vec<Violation> {
    let mut violations = Vec::new();

    for load in loads {
        if load.constraints.is_empty() {
            continue;
        }

        let own: Vec<&Placement> = placements
            .iter()
            .filter(|p| p.load_id == load.id)
            .collect();
        let others: Vec<&Placement> = placements
            .iter()
            .filter(|p| p.load_id != load.id)
            .collect();

        if load.has_constraint(HandlingConstraint::NoMix) {
            let mixed = offending_pallets(&own, |mine| {
                others.iter().any(|o| o.slot_index == mine.slot_index)
            });
            if !mixed.is_empty() {
                violations.push(
                    Violation::new(
                        ViolationType::NoMix,
                        Severity::Warning,
                        format!("Load {} shares a slot row with other freight", load.id),
                    )
                    .with_suggested_fix("Give this load a dedicated slot row")
                    .with_load(load.id.clone())
                    .with_pallets(mixed),
                );
            }
        }

        if load.has_constraint(HandlingConstraint::Hazmat) {
            let hazmat_ids: Vec<&str> = loads
                .iter()
                .filter(|l| l.has_constraint(HandlingConstraint::Hazmat))
                .map(|l| l.id.as_str())
                .collect();
            let exposed = offending_pallets(&own, |mine| {
                others.iter().any(|o| {
                    !hazmat_ids.contains(&o.load_id.as_str())
                        && (o.slot_index == mine.slot_index
                            || (o.lane_index == mine.lane_index
                                && o.slot_index.abs_diff(mine.slot_index) == 1))
                })
            });
            if !exposed.is_empty() {
                violations.push(
                    Violation::new(
                        ViolationType::Compatibility,
                        Severity::Warning,
                        format!("Hazmat load {} is stowed against regular freight", load.id),
                    )
                    .with_suggested_fix("Buffer hazmat with an empty slot row")
                    .with_load(load.id.clone())
                    .with_pallets(exposed),
                );
            }
        }

        if load.has_constraint(HandlingConstraint::NoSplit) && own.len() < load.pallet_count() {
            violations.push(
                Violation::new(
                    ViolationType::NoSplit,
                    Severity::High,
                    format!(
                        "Load {} must ship complete but only {} of {} pallets fit",
                        load.id,
                        own.len(),
                        load.pallet_count()
                    ),
                )
                .with_suggested_fix("Plan this load first or move it to a larger trailer")
                .with_load(load.id.clone()),
            );
        }

        if load.has_constraint(HandlingConstraint::DirectNoTouch) {
            let touched = offending_pallets(&own, |mine| {
                others.iter().any(|o| {
                    o.slot_index == mine.slot_index
                        && o.lane_index.abs_diff(mine.lane_index) == 1
                })
            });
            if !touched.is_empty() {
                violations.push(
                    Violation::new(
                        ViolationType::DirectNoTouch,
                        Severity::Warning,
                        format!("Load {} has lateral contact with other freight", load.id),
                    )
                    .with_suggested_fix("Stage this load in its own lane")
                    .with_load(load.id.clone())
                    .with_pallets(touched),
                );
            }
        }
    }

    violations
}

/// Pallet indices of `own` placements matching `breached`, in pallet order.
fn offending_pallets(own: &[&Placement], breached: impl Fn(&Placement) -> bool) -> Vec<usize> {
    let mut indices: Vec<usize> = own
        .iter()
        .filter(|p| breached(p))
        .map(|p| p.pallet_index)
        .collect();
    indices.sort_unstable();
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TrailerSpec;
    use crate::placement::place_pallets;

    #[test]
    fn test_no_constraints_no_violations() {
        let loads = vec![Load::new("L1", 4.0, 4_000.0), Load::new("L2", 4.0, 4_000.0)];
        let (placements, _) = place_pallets(&loads, &TrailerSpec::default());

        assert!(detect_handling_violations(&loads, &placements).is_empty());
    }

    #[test]
    fn test_no_mix_shared_row() {
        // L1 has 3 pallets: (0,0), (0,1), (1,0). L2 lands at (1,1) and
        // shares slot row 1 with L1's third pallet.
        let loads = vec![
            Load::new("L1", 3.0, 3_000.0).with_constraint(HandlingConstraint::NoMix),
            Load::new("L2", 1.0, 1_000.0),
        ];
        let (placements, _) = place_pallets(&loads, &TrailerSpec::default());

        let violations = detect_handling_violations(&loads, &placements);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].violation_type, ViolationType::NoMix);
        assert_eq!(violations[0].load_id.as_deref(), Some("L1"));
        assert_eq!(violations[0].pallet_indices.as_deref(), Some(&[2][..]));
    }

    #[test]
    fn test_no_mix_clean_rows() {
        // Even pallet counts keep each load in its own slot rows.
        let loads = vec![
            Load::new("L1", 4.0, 4_000.0).with_constraint(HandlingConstraint::NoMix),
            Load::new("L2", 4.0, 4_000.0),
        ];
        let (placements, _) = place_pallets(&loads, &TrailerSpec::default());

        assert!(detect_handling_violations(&loads, &placements).is_empty());
    }

    #[test]
    fn test_hazmat_against_regular_freight() {
        let loads = vec![
            Load::new("H1", 2.0, 2_000.0).with_constraint(HandlingConstraint::Hazmat),
            Load::new("L2", 2.0, 2_000.0),
        ];
        // H1 fills slot 0, L2 fills slot 1: adjacent slots, same lanes.
        let (placements, _) = place_pallets(&loads, &TrailerSpec::default());

        let violations = detect_handling_violations(&loads, &placements);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].violation_type, ViolationType::Compatibility);
        assert_eq!(violations[0].load_id.as_deref(), Some("H1"));
    }

    #[test]
    fn test_two_hazmat_loads_tolerate_each_other() {
        let loads = vec![
            Load::new("H1", 2.0, 2_000.0).with_constraint(HandlingConstraint::Hazmat),
            Load::new("H2", 2.0, 2_000.0).with_constraint(HandlingConstraint::Hazmat),
        ];
        let (placements, _) = place_pallets(&loads, &TrailerSpec::default());

        assert!(detect_handling_violations(&loads, &placements).is_empty());
    }

    #[test]
    fn test_no_split_on_overflow() {
        let loads = vec![
            Load::new("L1", 39.0, 39_000.0),
            Load::new("L2", 4.0, 4_000.0).with_constraint(HandlingConstraint::NoSplit),
        ];
        // Only one slot remains for L2's four pallets.
        let (placements, _) = place_pallets(&loads, &TrailerSpec::default());

        let violations = detect_handling_violations(&loads, &placements);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].violation_type, ViolationType::NoSplit);
        assert_eq!(violations[0].severity, Severity::High);
        assert_eq!(violations[0].load_id.as_deref(), Some("L2"));
    }

    #[test]
    fn test_direct_no_touch_lateral_contact() {
        // L1's single pallet at (0,0); L2's first pallet at (0,1) touches it.
        let loads = vec![
            Load::new("L1", 1.0, 1_000.0).with_constraint(HandlingConstraint::DirectNoTouch),
            Load::new("L2", 1.0, 1_000.0),
        ];
        let (placements, _) = place_pallets(&loads, &TrailerSpec::default());

        let violations = detect_handling_violations(&loads, &placements);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].violation_type, ViolationType::DirectNoTouch);
        assert_eq!(violations[0].pallet_indices.as_deref(), Some(&[0][..]));
    }
}
