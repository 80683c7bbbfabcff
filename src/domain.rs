//! Domain model for trailer load planning.
//!
//! # Overview
//!
//! Models the load-planning problem with:
//! - [`TrailerSpec`]: physical/legal trailer parameters with compiled-in defaults
//! - [`Load`]: a freight shipment broken into pallets with weight
//! - [`Placement`]: one pallet assigned to a (slot, lane) cell
//! - [`Violation`]: a constraint breach, modeled as data rather than an error
//! - [`PlanSummary`]: aggregate weight, fill, and axle-balance metrics
//! - [`SuggestedPlan`]: one scored candidate loading plan
//!
//! # Design
//!
//! Everything here is an immutable snapshot. The planning pipeline reads
//! loads and a spec, and produces placements, violations, and summaries;
//! nothing mutates its inputs. Invalid numeric input is normalized or
//! clamped, never rejected.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Default interior length in meters (53-foot dry van, usable floor).
pub const DEFAULT_INTERIOR_LENGTH_M: f64 = 16.0;
/// Default interior width in meters.
pub const DEFAULT_INTERIOR_WIDTH_M: f64 = 2.46;
/// Default interior height in meters.
pub const DEFAULT_INTERIOR_HEIGHT_M: f64 = 2.67;
/// Default number of side-by-side lanes.
pub const DEFAULT_LANE_COUNT: usize = 2;
/// Default number of length-wise slots.
pub const DEFAULT_SLOT_COUNT: usize = 20;
/// Default legal payload limit in pounds.
pub const DEFAULT_LEGAL_WEIGHT_LBS: f64 = 44_000.0;
/// Default drive-axle X offset in meters from the floor midpoint.
pub const DEFAULT_DRIVE_AXLE_X_M: f64 = -2.2;
/// Default trailer-axle X offset in meters from the floor midpoint.
pub const DEFAULT_TRAILER_AXLE_X_M: f64 = 4.0;

/// Synthetic pallet footprint length in meters.
///
/// Placements carry a fixed label footprint, not one derived from the
/// trailer geometry.
pub const PALLET_LENGTH_M: f64 = 1.2;
/// Synthetic pallet footprint width in meters.
pub const PALLET_WIDTH_M: f64 = 1.0;

/// Physical and legal capacity descriptor for a target trailer.
///
/// Constructed fresh per planning call via [`TrailerSpec::normalized`],
/// which merges a partial override onto the defaults. Never mutated after
/// construction.
///
/// # Examples
///
/// ```
/// use trailer_loading::domain::TrailerSpec;
///
/// let spec = TrailerSpec::default();
/// assert_eq!(spec.lane_count, 2);
/// assert_eq!(spec.slot_count, 20);
/// assert_eq!(spec.capacity(), 40);
/// assert_eq!(spec.legal_weight_lbs, 44_000.0);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailerSpec {
    /// Interior length in meters.
    pub interior_length_m: f64,
    /// Interior width in meters.
    pub interior_width_m: f64,
    /// Interior height in meters.
    pub interior_height_m: f64,
    /// Number of side-by-side lanes (>= 1 after normalization).
    pub lane_count: usize,
    /// Number of length-wise slots (>= 1 after normalization).
    pub slot_count: usize,
    /// Legal payload limit in pounds.
    pub legal_weight_lbs: f64,
    /// Drive-axle X offset in meters. Documentation/future geometry only;
    /// the balance heuristic does not read it.
    pub drive_axle_x_m: f64,
    /// Trailer-axle X offset in meters. Documentation/future geometry only.
    pub trailer_axle_x_m: f64,
}

impl Default for TrailerSpec {
    fn default() -> Self {
        Self {
            interior_length_m: DEFAULT_INTERIOR_LENGTH_M,
            interior_width_m: DEFAULT_INTERIOR_WIDTH_M,
            interior_height_m: DEFAULT_INTERIOR_HEIGHT_M,
            lane_count: DEFAULT_LANE_COUNT,
            slot_count: DEFAULT_SLOT_COUNT,
            legal_weight_lbs: DEFAULT_LEGAL_WEIGHT_LBS,
            drive_axle_x_m: DEFAULT_DRIVE_AXLE_X_M,
            trailer_axle_x_m: DEFAULT_TRAILER_AXLE_X_M,
        }
    }
}

impl TrailerSpec {
    /// Merges a partial override onto the defaults.
    ///
    /// Absent fields silently fall back to the defaults. Lane and slot
    /// counts of zero count as absent, so the grid invariant
    /// (`lane_count >= 1 && slot_count >= 1`) always holds afterwards.
    /// No further validation is performed; callers supply sane values.
    ///
    /// # Examples
    ///
    /// ```
    /// use trailer_loading::domain::{TrailerSpec, TrailerSpecPatch};
    ///
    /// let spec = TrailerSpec::normalized(None);
    /// assert_eq!(spec.capacity(), 40);
    ///
    /// let patch = TrailerSpecPatch {
    ///     slot_count: Some(26),
    ///     lane_count: Some(0), // invalid, falls back to default
    ///     legal_weight_lbs: Some(45_000.0),
    ///     ..TrailerSpecPatch::default()
    /// };
    /// let spec = TrailerSpec::normalized(Some(&patch));
    /// assert_eq!(spec.slot_count, 26);
    /// assert_eq!(spec.lane_count, 2);
    /// assert_eq!(spec.capacity(), 52);
    /// assert_eq!(spec.legal_weight_lbs, 45_000.0);
    /// ```
    pub fn normalized(patch: Option<&TrailerSpecPatch>) -> Self {
        let base = Self::default();
        let Some(p) = patch else {
            return base;
        };

        Self {
            interior_length_m: p.interior_length_m.unwrap_or(base.interior_length_m),
            interior_width_m: p.interior_width_m.unwrap_or(base.interior_width_m),
            interior_height_m: p.interior_height_m.unwrap_or(base.interior_height_m),
            lane_count: p.lane_count.filter(|&n| n >= 1).unwrap_or(base.lane_count),
            slot_count: p.slot_count.filter(|&n| n >= 1).unwrap_or(base.slot_count),
            legal_weight_lbs: p.legal_weight_lbs.unwrap_or(base.legal_weight_lbs),
            drive_axle_x_m: p.drive_axle_x_m.unwrap_or(base.drive_axle_x_m),
            trailer_axle_x_m: p.trailer_axle_x_m.unwrap_or(base.trailer_axle_x_m),
        }
    }

    /// Total pallet capacity of the slot × lane grid.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.lane_count * self.slot_count
    }
}

/// Partial [`TrailerSpec`] override, as supplied by the planning caller.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrailerSpecPatch {
    pub interior_length_m: Option<f64>,
    pub interior_width_m: Option<f64>,
    pub interior_height_m: Option<f64>,
    pub lane_count: Option<usize>,
    pub slot_count: Option<usize>,
    pub legal_weight_lbs: Option<f64>,
    pub drive_axle_x_m: Option<f64>,
    pub trailer_axle_x_m: Option<f64>,
}

/// Handling constraint carried on a load.
///
/// Declared by shippers, detected as extra violations after placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HandlingConstraint {
    /// Must not share a slot row with other loads.
    NoMix,
    /// Dangerous goods; flagged when stowed against regular freight.
    Hazmat,
    /// All pallets must ship together or not at all.
    NoSplit,
    /// No lateral contact with other loads.
    DirectNoTouch,
}

/// A freight shipment to place, broken into pallets.
///
/// Loads are read-only inputs; the planner never creates or destroys them.
///
/// # Examples
///
/// ```
/// use trailer_loading::domain::Load;
///
/// let load = Load::new("L-1001", 8.0, 12_400.0)
///     .with_destination("ORD")
///     .with_stop_window("06:00-10:00");
///
/// assert_eq!(load.pallet_count(), 8);
/// assert_eq!(load.per_pallet_weight_lbs(), 1_550.0);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Load {
    /// Caller-supplied load identifier.
    pub id: String,
    /// Pallet count as given. May arrive fractional or negative from the
    /// boundary; [`Load::pallet_count`] floors and clamps.
    pub pallets: f64,
    /// Total shipment weight in pounds, split evenly across pallets.
    pub weight_lbs: f64,
    /// Delivery stop window label, compared lexicographically when ordering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_window: Option<String>,
    /// Destination terminal code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_code: Option<String>,
    /// Preferred lane label. Carried through for display; placement uses
    /// the grid cursor, not this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lane: Option<String>,
    /// Handling constraints declared on this load.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<HandlingConstraint>,
}

impl Load {
    /// Creates a new load.
    pub fn new(id: impl Into<String>, pallets: f64, weight_lbs: f64) -> Self {
        Self {
            id: id.into(),
            pallets,
            weight_lbs,
            stop_window: None,
            destination_code: None,
            lane: None,
            constraints: Vec::new(),
        }
    }

    /// Sets the stop window label.
    pub fn with_stop_window(mut self, window: impl Into<String>) -> Self {
        self.stop_window = Some(window.into());
        self
    }

    /// Sets the destination code.
    pub fn with_destination(mut self, code: impl Into<String>) -> Self {
        self.destination_code = Some(code.into());
        self
    }

    /// Sets the lane label.
    pub fn with_lane(mut self, lane: impl Into<String>) -> Self {
        self.lane = Some(lane.into());
        self
    }

    /// Adds a handling constraint.
    pub fn with_constraint(mut self, constraint: HandlingConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Whole pallets in this load: `floor(pallets)`, clamped to 0 for
    /// negative or non-finite input.
    ///
    /// # Examples
    ///
    /// ```
    /// use trailer_loading::domain::Load;
    ///
    /// assert_eq!(Load::new("L1", 7.5, 9_000.0).pallet_count(), 7);
    /// assert_eq!(Load::new("L2", -3.0, 9_000.0).pallet_count(), 0);
    /// assert_eq!(Load::new("L3", f64::NAN, 9_000.0).pallet_count(), 0);
    /// ```
    #[inline]
    pub fn pallet_count(&self) -> usize {
        if !self.pallets.is_finite() || self.pallets <= 0.0 {
            return 0;
        }
        self.pallets.floor() as usize
    }

    /// Equal weight share per pallet, or 0 if the load has no pallets.
    #[inline]
    pub fn per_pallet_weight_lbs(&self) -> f64 {
        let count = self.pallet_count();
        if count == 0 {
            0.0
        } else {
            self.weight_lbs / count as f64
        }
    }

    /// Returns true if this load declares the given handling constraint.
    #[inline]
    pub fn has_constraint(&self, constraint: HandlingConstraint) -> bool {
        self.constraints.contains(&constraint)
    }
}

/// One physical pallet's location in the trailer grid.
///
/// Produced in bulk by the placement generator for one ordering;
/// immutable once produced.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    /// Owning load.
    pub load_id: String,
    /// 0-based pallet index within its load.
    pub pallet_index: usize,
    /// Length-wise slot position, 0 = nose.
    pub slot_index: usize,
    /// Side-by-side lane position.
    pub lane_index: usize,
    /// This pallet's weight share in pounds.
    pub weight_lbs: f64,
    /// 1-based position in the overall loading sequence.
    pub sequence_index: usize,
    /// Destination copied from the load for downstream labeling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_code: Option<String>,
    /// Stop window copied from the load for downstream labeling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_window: Option<String>,
    /// Synthetic footprint length in meters.
    pub length_m: f64,
    /// Synthetic footprint width in meters.
    pub width_m: f64,
}

impl Placement {
    /// Position in the flattened grid: `slot_index * lane_count + lane_index`.
    #[inline]
    pub fn absolute_index(&self, lane_count: usize) -> usize {
        self.slot_index * lane_count + self.lane_index
    }
}

/// Kind of constraint breach.
///
/// Closed set; unknown wire values deserialize as [`ViolationType::Other`]
/// so future types degrade instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationType {
    OverweightTrailer,
    AxleImbalance,
    OverCapacity,
    NoMix,
    NoSplit,
    DirectNoTouch,
    TimeWindow,
    Compatibility,
    Other,
}

impl ViolationType {
    /// Wire/display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationType::OverweightTrailer => "OVERWEIGHT_TRAILER",
            ViolationType::AxleImbalance => "AXLE_IMBALANCE",
            ViolationType::OverCapacity => "OVER_CAPACITY",
            ViolationType::NoMix => "NO_MIX",
            ViolationType::NoSplit => "NO_SPLIT",
            ViolationType::DirectNoTouch => "DIRECT_NO_TOUCH",
            ViolationType::TimeWindow => "TIME_WINDOW",
            ViolationType::Compatibility => "COMPATIBILITY",
            ViolationType::Other => "OTHER",
        }
    }

    fn from_wire(value: &str) -> Self {
        match value {
            "OVERWEIGHT_TRAILER" => ViolationType::OverweightTrailer,
            "AXLE_IMBALANCE" => ViolationType::AxleImbalance,
            "OVER_CAPACITY" => ViolationType::OverCapacity,
            "NO_MIX" => ViolationType::NoMix,
            "NO_SPLIT" => ViolationType::NoSplit,
            "DIRECT_NO_TOUCH" => ViolationType::DirectNoTouch,
            "TIME_WINDOW" => ViolationType::TimeWindow,
            "COMPATIBILITY" => ViolationType::Compatibility,
            _ => ViolationType::Other,
        }
    }
}

impl<'de> Deserialize<'de> for ViolationType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(ViolationType::from_wire(&value))
    }
}

/// Severity of a violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Warning,
    High,
    Critical,
}

impl Severity {
    /// Wire/display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Warning => "warning",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

/// A flagged constraint breach. Appended, never edited.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    #[serde(rename = "type")]
    pub violation_type: ViolationType,
    pub severity: Severity,
    /// Human-readable explanation.
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_fix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pallet_indices: Option<Vec<usize>>,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(
        violation_type: ViolationType,
        severity: Severity,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            violation_type,
            severity,
            reason: reason.into(),
            suggested_fix: None,
            load_id: None,
            pallet_indices: None,
        }
    }

    /// Sets the suggested fix.
    pub fn with_suggested_fix(mut self, fix: impl Into<String>) -> Self {
        self.suggested_fix = Some(fix.into());
        self
    }

    /// Attaches the offending load.
    pub fn with_load(mut self, load_id: impl Into<String>) -> Self {
        self.load_id = Some(load_id.into());
        self
    }

    /// Attaches the offending pallet indices.
    pub fn with_pallets(mut self, pallet_indices: Vec<usize>) -> Self {
        self.pallet_indices = Some(pallet_indices);
        self
    }
}

/// Axle-balance classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AxleStatus {
    Good,
    Warning,
    Bad,
}

impl AxleStatus {
    /// Wire/display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            AxleStatus::Good => "GOOD",
            AxleStatus::Warning => "WARNING",
            AxleStatus::Bad => "BAD",
        }
    }
}

/// Heuristic front/rear weight-distribution estimate.
///
/// Derived from each pallet's normalized slot position; a proxy for legal
/// axle-weight compliance, not a geometric axle-load computation.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxleBalance {
    pub status: AxleStatus,
    pub front_weight_lbs: f64,
    pub rear_weight_lbs: f64,
    /// Fraction of total weight carried forward, 0.5 = perfectly balanced.
    pub front_pct: f64,
}

/// Violation counts by severity. All four buckets are always present.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeverityCounts {
    pub low: usize,
    pub warning: usize,
    pub high: usize,
    pub critical: usize,
}

impl SeverityCounts {
    /// Increments the bucket for one violation.
    pub fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Low => self.low += 1,
            Severity::Warning => self.warning += 1,
            Severity::High => self.high += 1,
            Severity::Critical => self.critical += 1,
        }
    }

    /// Total violations across all buckets.
    pub fn total(&self) -> usize {
        self.low + self.warning + self.high + self.critical
    }
}

/// Aggregate metrics for one candidate plan. Computed once; immutable.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub load_count: usize,
    pub pallet_count: usize,
    pub total_weight_lbs: f64,
    pub legal_weight_lbs: f64,
    pub overweight: bool,
    /// Placed pallets as a percentage of grid capacity, one decimal place.
    pub fill_pct: f64,
    pub axle_balance: AxleBalance,
    pub violations_by_severity: SeverityCounts,
    /// Sparse tally; only types that occurred appear.
    pub violations_by_type: BTreeMap<ViolationType, usize>,
}

/// Operational risk classification of a plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Wire/display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

/// One ranked candidate loading plan.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedPlan {
    /// Deterministic strategy slug, e.g. `plan-a`.
    pub plan_id: String,
    /// Strategy display name.
    pub name: String,
    /// 35–99 after penalties and clamping.
    pub score: i64,
    /// Display ranking aid only; carries no financial meaning.
    pub savings_usd: i64,
    pub risk: RiskLevel,
    /// Fixed notes describing the strategy's intent.
    pub notes: Vec<String>,
    /// The loads in the order this plan used.
    pub loads: Vec<Load>,
    pub placements: Vec<Placement>,
    pub violations: Vec<Violation>,
    pub summary: PlanSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_normalization_invalid_counts() {
        let patch = TrailerSpecPatch {
            lane_count: Some(0),
            slot_count: Some(0),
            ..TrailerSpecPatch::default()
        };
        let spec = TrailerSpec::normalized(Some(&patch));
        assert_eq!(spec.lane_count, DEFAULT_LANE_COUNT);
        assert_eq!(spec.slot_count, DEFAULT_SLOT_COUNT);
    }

    #[test]
    fn test_violation_type_wire_roundtrip() {
        for vt in [
            ViolationType::OverweightTrailer,
            ViolationType::AxleImbalance,
            ViolationType::OverCapacity,
            ViolationType::NoMix,
            ViolationType::NoSplit,
            ViolationType::DirectNoTouch,
            ViolationType::TimeWindow,
            ViolationType::Compatibility,
            ViolationType::Other,
        ] {
            let json = serde_json::to_string(&vt).unwrap();
            assert_eq!(json, format!("\"{}\"", vt.as_str()));
            let back: ViolationType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, vt);
        }
    }

    #[test]
    fn test_violation_type_unknown_becomes_other() {
        let vt: ViolationType = serde_json::from_str("\"LIFTGATE_REQUIRED\"").unwrap();
        assert_eq!(vt, ViolationType::Other);
    }

    #[test]
    fn test_load_weight_share() {
        let load = Load::new("L1", 4.0, 10_000.0);
        assert_eq!(load.per_pallet_weight_lbs(), 2_500.0);

        let empty = Load::new("L2", 0.0, 10_000.0);
        assert_eq!(empty.per_pallet_weight_lbs(), 0.0);
    }

    #[test]
    fn test_severity_counts_record() {
        let mut counts = SeverityCounts::default();
        counts.record(Severity::High);
        counts.record(Severity::High);
        counts.record(Severity::Warning);
        assert_eq!(counts.high, 2);
        assert_eq!(counts.warning, 1);
        assert_eq!(counts.low, 0);
        assert_eq!(counts.total(), 3);
    }
}
