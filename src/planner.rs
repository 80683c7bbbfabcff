//! Plan variant generation, scoring, and ranking.
//!
//! Each strategy is one total ordering of the input loads. The registry is
//! plain data, so adding a strategy means adding an entry, not touching
//! the placement/summary pipeline.
//!
//! # Default strategies
//!
//! - **Plan A (stop sequence)**: stop window, then destination, then id
//! - **Plan B (heaviest first)**: weight descending, then id
//! - **Plan C (most pallets first)**: pallet count descending, then id
//!
//! Every comparator ends in an id tie-break, so each ordering is total and
//! two runs over the same input are byte-identical.

use std::cmp::Ordering;

use tracing::debug;

use crate::constraints::detect_handling_violations;
use crate::domain::{
    AxleStatus, Load, PlanSummary, RiskLevel, SuggestedPlan, TrailerSpec, TrailerSpecPatch,
};
use crate::placement::place_pallets;
use crate::summary::summarize;

/// Score deducted when the plan runs over the legal weight limit.
const OVERWEIGHT_PENALTY: f64 = 30.0;
/// Score deducted for BAD axle balance.
const AXLE_BAD_PENALTY: f64 = 18.0;
/// Score deducted for WARNING axle balance.
const AXLE_WARNING_PENALTY: f64 = 8.0;
/// Score deducted per high-severity violation.
const HIGH_VIOLATION_PENALTY: f64 = 6.0;
/// Score deducted per critical-severity violation.
const CRITICAL_VIOLATION_PENALTY: f64 = 10.0;
/// Flat score offset applied before clamping.
const SCORE_OFFSET: f64 = 20.0;
/// Score clamp range.
const SCORE_MIN: i64 = 35;
const SCORE_MAX: i64 = 99;
/// Floor for the savings display heuristic.
const SAVINGS_FLOOR_USD: i64 = 450;

/// One named load ordering.
///
/// Plain data: a registry entry, not a trait object.
#[derive(Clone, Copy)]
pub struct Strategy {
    /// Stable slug used as the plan id.
    pub key: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Fixed notes describing the strategy's intent.
    pub notes: &'static [&'static str],
    /// Total ordering over loads.
    pub comparator: fn(&Load, &Load) -> Ordering,
}

/// The built-in strategy registry, in presentation order.
pub const DEFAULT_STRATEGIES: &[Strategy] = &[
    Strategy {
        key: "plan-a",
        name: "Stop sequence",
        notes: &[
            "Loads in delivery-window order so the first stop unloads from the tail",
            "Best when stop windows are tight",
        ],
        comparator: by_stop_window,
    },
    Strategy {
        key: "plan-b",
        name: "Heaviest first",
        notes: &[
            "Places the heaviest freight at the nose for a stable pull",
            "Best for dense, uniform-destination boards",
        ],
        comparator: by_weight_desc,
    },
    Strategy {
        key: "plan-c",
        name: "Most pallets first",
        notes: &[
            "Blocks out the bulkiest loads before filling gaps",
            "Best when pallet counts vary widely",
        ],
        comparator: by_pallets_desc,
    },
];

fn by_stop_window(a: &Load, b: &Load) -> Ordering {
    // Missing windows sort first, like an empty string.
    a.stop_window
        .as_deref()
        .unwrap_or("")
        .cmp(b.stop_window.as_deref().unwrap_or(""))
        .then_with(|| {
            a.destination_code
                .as_deref()
                .unwrap_or("")
                .cmp(b.destination_code.as_deref().unwrap_or(""))
        })
        .then_with(|| a.id.cmp(&b.id))
}

fn by_weight_desc(a: &Load, b: &Load) -> Ordering {
    b.weight_lbs
        .total_cmp(&a.weight_lbs)
        .then_with(|| a.id.cmp(&b.id))
}

fn by_pallets_desc(a: &Load, b: &Load) -> Ordering {
    b.pallets.total_cmp(&a.pallets).then_with(|| a.id.cmp(&b.id))
}

/// Builds the default set of ranked candidate plans for one load set.
///
/// Runs every registry strategy through ordering, placement,
/// handling-constraint detection, and summarization. Plans come back in
/// registry order; `score` and `savings_usd` carry the ranking signal.
///
/// # Examples
///
/// ```
/// use trailer_loading::domain::Load;
/// use trailer_loading::planner::build_suggested_plans;
///
/// let loads = vec![
///     Load::new("L1", 10.0, 12_000.0),
///     Load::new("L2", 6.0, 18_000.0),
/// ];
/// let plans = build_suggested_plans(&loads, None);
///
/// assert_eq!(plans.len(), 3);
/// assert_eq!(plans[0].plan_id, "plan-a");
/// // Plan B orders by weight descending.
/// assert_eq!(plans[1].loads[0].id, "L2");
/// ```
pub fn build_suggested_plans(
    loads: &[Load],
    spec_patch: Option<&TrailerSpecPatch>,
) -> Vec<SuggestedPlan> {
    let spec = TrailerSpec::normalized(spec_patch);
    DEFAULT_STRATEGIES
        .iter()
        .enumerate()
        .map(|(variant_index, strategy)| build_plan(loads, &spec, strategy, variant_index))
        .collect()
}

/// Builds one candidate plan for a single strategy.
pub fn build_plan(
    loads: &[Load],
    spec: &TrailerSpec,
    strategy: &Strategy,
    variant_index: usize,
) -> SuggestedPlan {
    let mut ordered: Vec<Load> = loads.to_vec();
    ordered.sort_by(strategy.comparator);

    let (placements, mut violations) = place_pallets(&ordered, spec);
    violations.extend(detect_handling_violations(&ordered, &placements));

    let summary = summarize(&ordered, &placements, spec, &violations);
    let score = score_plan(&summary);
    let risk = risk_level(&summary);
    let savings_usd = savings_usd(score, summary.fill_pct, variant_index);

    debug!(
        plan = strategy.key,
        score,
        risk = risk.as_str(),
        violations = violations.len(),
        "variant built"
    );

    SuggestedPlan {
        plan_id: strategy.key.to_string(),
        name: strategy.name.to_string(),
        score,
        savings_usd,
        risk,
        notes: strategy.notes.iter().map(|n| n.to_string()).collect(),
        loads: ordered,
        placements,
        violations,
        summary,
    }
}

/// Scores a summarized plan into the 35..=99 band.
///
/// Fill percentage is the base; overweight, axle imbalance, and
/// high/critical violation counts pull it down.
pub fn score_plan(summary: &PlanSummary) -> i64 {
    let overweight_penalty = if summary.overweight {
        OVERWEIGHT_PENALTY
    } else {
        0.0
    };
    let axle_penalty = match summary.axle_balance.status {
        AxleStatus::Bad => AXLE_BAD_PENALTY,
        AxleStatus::Warning => AXLE_WARNING_PENALTY,
        AxleStatus::Good => 0.0,
    };
    let violation_penalty = HIGH_VIOLATION_PENALTY * summary.violations_by_severity.high as f64
        + CRITICAL_VIOLATION_PENALTY * summary.violations_by_severity.critical as f64;

    let raw = summary.fill_pct - overweight_penalty - axle_penalty - violation_penalty
        + SCORE_OFFSET;
    (raw.round() as i64).clamp(SCORE_MIN, SCORE_MAX)
}

/// Classifies operational risk from the summary.
pub fn risk_level(summary: &PlanSummary) -> RiskLevel {
    if summary.overweight || summary.axle_balance.status == AxleStatus::Bad {
        RiskLevel::High
    } else if summary.axle_balance.status == AxleStatus::Warning {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Display ranking heuristic in whole dollars.
///
/// Not a cost model; it exists to order plans for an operator and must
/// never feed a billing or settlement path.
pub fn savings_usd(score: i64, fill_pct: f64, variant_index: usize) -> i64 {
    let raw = (score as f64 * 17.0 + fill_pct * 8.0 - variant_index as f64 * 220.0).round() as i64;
    raw.max(SAVINGS_FLOOR_USD)
}
