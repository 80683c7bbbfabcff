//! Plan summarization: weight, fill, axle balance, and violation tallies.
//!
//! Overweight and axle-imbalance detection live here rather than in the
//! placement generator because both need the aggregate weight and position
//! of every placed pallet, not a single one.

use std::collections::BTreeMap;
use tracing::debug;

use crate::domain::{
    AxleBalance, AxleStatus, Load, PlanSummary, Placement, Severity, SeverityCounts, TrailerSpec,
    Violation, ViolationType,
};

/// Axle delta beyond which balance is flagged `BAD`.
const AXLE_BAD_DELTA: f64 = 0.12;
/// Axle delta beyond which balance is flagged `WARNING`.
const AXLE_WARNING_DELTA: f64 = 0.07;

/// Aggregates one candidate plan into a [`PlanSummary`].
///
/// Totals come from the placed pallets when any exist; an all-overflow
/// plan with zero placements falls back to the raw load figures so the
/// summary still means something. The synthetic overweight and axle
/// violations are counted against a copy of `violations`; the caller's
/// list is never touched and keeps only what the caller put in it.
///
/// # Examples
///
/// ```
/// use trailer_loading::domain::{Load, TrailerSpec};
/// use trailer_loading::placement::place_pallets;
/// use trailer_loading::summary::summarize;
///
/// let loads = vec![Load::new("L1", 20.0, 20_000.0)];
/// let spec = TrailerSpec::default();
/// let (placements, violations) = place_pallets(&loads, &spec);
///
/// let summary = summarize(&loads, &placements, &spec, &violations);
/// assert_eq!(summary.pallet_count, 20);
/// assert_eq!(summary.fill_pct, 50.0);
/// assert_eq!(summary.total_weight_lbs, 20_000.0);
/// assert!(!summary.overweight);
/// ```
pub fn summarize(
    loads: &[Load],
    placements: &[Placement],
    spec: &TrailerSpec,
    violations: &[Violation],
) -> PlanSummary {
    let total_weight_lbs = if placements.is_empty() {
        loads.iter().map(|l| l.weight_lbs).sum()
    } else {
        placements.iter().map(|p| p.weight_lbs).sum()
    };

    let pallet_count = if placements.is_empty() {
        loads.iter().map(|l| l.pallet_count()).sum()
    } else {
        placements.len()
    };

    let fill_pct = round_one_decimal(pallet_count as f64 / spec.capacity() as f64 * 100.0);

    // Each pallet's slot position, normalized into [0, 1), stands in for
    // its front-to-rear weight contribution.
    let mut front_weight_lbs: f64 = 0.0;
    let mut rear_weight_lbs: f64 = 0.0;
    for p in placements {
        let x = p.slot_index as f64 / spec.slot_count as f64;
        front_weight_lbs += p.weight_lbs * (1.0 - x);
        rear_weight_lbs += p.weight_lbs * x;
    }
    if placements.is_empty() && total_weight_lbs > 0.0 {
        // All-overflow plan: assume an even split rather than reading as
        // perfectly balanced or wildly imbalanced.
        front_weight_lbs = total_weight_lbs / 2.0;
        rear_weight_lbs = total_weight_lbs / 2.0;
    }

    let front_pct: f64 = if total_weight_lbs > 0.0 {
        front_weight_lbs / total_weight_lbs
    } else {
        0.5
    };

    let overweight = total_weight_lbs > spec.legal_weight_lbs;
    let delta = (front_pct - 0.5).abs();
    let status = if overweight || delta > AXLE_BAD_DELTA {
        AxleStatus::Bad
    } else if delta > AXLE_WARNING_DELTA {
        AxleStatus::Warning
    } else {
        AxleStatus::Good
    };

    // Count against a copy; the caller-supplied list stays untouched.
    let mut counted = violations.to_vec();
    if overweight {
        counted.push(
            Violation::new(
                ViolationType::OverweightTrailer,
                Severity::High,
                format!(
                    "Total weight {:.0} lb exceeds the legal limit of {:.0} lb",
                    total_weight_lbs, spec.legal_weight_lbs
                ),
            )
            .with_suggested_fix("Move the heaviest load to a second trailer"),
        );
    }
    if status != AxleStatus::Good {
        let severity = if status == AxleStatus::Bad {
            Severity::High
        } else {
            Severity::Warning
        };
        counted.push(
            Violation::new(
                ViolationType::AxleImbalance,
                severity,
                format!(
                    "Front axle group carries {:.0}% of the payload",
                    front_pct * 100.0
                ),
            )
            .with_suggested_fix("Re-sequence heavy pallets toward the middle slots"),
        );
    }

    let mut violations_by_severity = SeverityCounts::default();
    let mut violations_by_type: BTreeMap<ViolationType, usize> = BTreeMap::new();
    for v in &counted {
        violations_by_severity.record(v.severity);
        *violations_by_type.entry(v.violation_type).or_insert(0) += 1;
    }

    debug!(
        pallet_count,
        total_weight_lbs,
        fill_pct,
        axle = status.as_str(),
        "plan summarized"
    );

    PlanSummary {
        load_count: loads.len(),
        pallet_count,
        total_weight_lbs,
        legal_weight_lbs: spec.legal_weight_lbs,
        overweight,
        fill_pct,
        axle_balance: AxleBalance {
            status,
            front_weight_lbs,
            rear_weight_lbs,
            front_pct,
        },
        violations_by_severity,
        violations_by_type,
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
