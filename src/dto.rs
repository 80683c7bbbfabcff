//! Request/response shapes for the planning HTTP boundary.
//!
//! The HTTP layer itself lives outside this crate; these types define the
//! wire vocabulary it exchanges with the engine, plus the pure helpers it
//! calls for preview and apply. Persistence, event emission, and load
//! mutation stay with the boundary.

use serde::{Deserialize, Serialize};

use crate::domain::{
    AxleStatus, Load, PlanSummary, Placement, SuggestedPlan, TrailerSpec, TrailerSpecPatch,
    Violation, ViolationType,
};
use crate::summary::summarize;

/// Input for the suggested-plans operation.
///
/// `load_ids` and `trailer_id` are resolved to concrete loads and a spec
/// by the boundary before the engine runs.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SuggestedPlansRequest {
    pub load_ids: Option<Vec<String>>,
    pub trailer_id: Option<String>,
    pub trailer_spec: Option<TrailerSpecPatch>,
}

/// Output of the suggested-plans operation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SuggestedPlansResponse {
    pub plans: Vec<SuggestedPlan>,
}

/// Input for re-summarizing an operator-edited placement set.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanPreviewRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailer_spec: Option<TrailerSpecPatch>,
    pub loads: Vec<Load>,
    pub placements: Vec<Placement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<Violation>>,
}

/// Output of the preview operation.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanPreviewResponse {
    pub summary: PlanSummary,
    pub notes: Vec<String>,
}

/// Input recorded when an operator accepts a plan.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanApplyRequest {
    pub plan_id: String,
    pub loads: Vec<Load>,
    pub placements: Vec<Placement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailer_spec: Option<TrailerSpecPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<Violation>>,
    /// Free-text operator note, stored with the applied plan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// The engine's contribution to an apply: the recomputed summary.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanApplyResponse {
    pub plan_id: String,
    pub summary: PlanSummary,
}

/// Rejection record. The engine defines the shape and nothing more.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRejectRequest {
    pub plan_id: String,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_ids: Option<Vec<String>>,
}

/// Re-summarizes an edited placement set and derives operator notes.
///
/// # Examples
///
/// ```
/// use trailer_loading::domain::{Load, TrailerSpec};
/// use trailer_loading::dto::{preview, PlanPreviewRequest};
/// use trailer_loading::placement::place_pallets;
///
/// let loads = vec![Load::new("L1", 10.0, 50_000.0)];
/// let (placements, violations) = place_pallets(&loads, &TrailerSpec::default());
///
/// let response = preview(&PlanPreviewRequest {
///     plan_id: Some("plan-a".into()),
///     trailer_id: None,
///     trailer_spec: None,
///     loads,
///     placements,
///     violations: Some(violations),
/// });
///
/// assert!(response.summary.overweight);
/// assert!(response.notes.iter().any(|n| n.contains("legal weight")));
/// ```
pub fn preview(request: &PlanPreviewRequest) -> PlanPreviewResponse {
    let spec = TrailerSpec::normalized(request.trailer_spec.as_ref());
    let violations = request.violations.as_deref().unwrap_or(&[]);
    let summary = summarize(&request.loads, &request.placements, &spec, violations);
    let notes = summary_notes(&summary);
    PlanPreviewResponse { summary, notes }
}

/// Recomputes the summary recorded alongside an applied plan.
pub fn apply_summary(request: &PlanApplyRequest) -> PlanApplyResponse {
    let spec = TrailerSpec::normalized(request.trailer_spec.as_ref());
    let violations = request.violations.as_deref().unwrap_or(&[]);
    let summary = summarize(&request.loads, &request.placements, &spec, violations);
    PlanApplyResponse {
        plan_id: request.plan_id.clone(),
        summary,
    }
}

/// Operator-facing notes derived from a summary.
fn summary_notes(summary: &PlanSummary) -> Vec<String> {
    let mut notes = vec![format!(
        "{} pallets placed, {:.1}% of trailer capacity",
        summary.pallet_count, summary.fill_pct
    )];

    if summary.overweight {
        notes.push(format!(
            "Over legal weight by {:.0} lb",
            summary.total_weight_lbs - summary.legal_weight_lbs
        ));
    }
    match summary.axle_balance.status {
        AxleStatus::Bad => {
            notes.push("Axle balance out of range; redistribute weight before dispatch".into())
        }
        AxleStatus::Warning => notes.push("Axle balance is marginal".into()),
        AxleStatus::Good => {}
    }
    if let Some(dropped) = summary.violations_by_type.get(&ViolationType::OverCapacity) {
        notes.push(format!("{} pallets did not fit in the trailer", dropped));
    }

    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::place_pallets;

    #[test]
    fn test_request_deserializes_from_camel_case() {
        let json = r#"{
            "loadIds": ["L1", "L2"],
            "trailerSpec": { "slotCount": 24, "legalWeightLbs": 46000 }
        }"#;
        let request: SuggestedPlansRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.load_ids.as_deref().unwrap().len(), 2);
        let patch = request.trailer_spec.unwrap();
        assert_eq!(patch.slot_count, Some(24));
        assert_eq!(patch.legal_weight_lbs, Some(46_000.0));
        assert!(patch.lane_count.is_none());
    }

    #[test]
    fn test_preview_respects_spec_patch() {
        let loads = vec![Load::new("L1", 10.0, 45_000.0)];
        let spec = TrailerSpec::default();
        let (placements, violations) = place_pallets(&loads, &spec);

        // Overweight against the default limit, fine against a raised one.
        let mut request = PlanPreviewRequest {
            plan_id: None,
            trailer_id: None,
            trailer_spec: None,
            loads,
            placements,
            violations: Some(violations),
        };
        assert!(preview(&request).summary.overweight);

        request.trailer_spec = Some(TrailerSpecPatch {
            legal_weight_lbs: Some(48_000.0),
            ..TrailerSpecPatch::default()
        });
        assert!(!preview(&request).summary.overweight);
    }

    #[test]
    fn test_preview_notes_mention_dropped_pallets() {
        let loads = vec![Load::new("L1", 50.0, 20_000.0)];
        let spec = TrailerSpec::default();
        let (placements, violations) = place_pallets(&loads, &spec);

        let response = preview(&PlanPreviewRequest {
            plan_id: None,
            trailer_id: None,
            trailer_spec: None,
            loads,
            placements,
            violations: Some(violations),
        });

        assert!(response
            .notes
            .iter()
            .any(|n| n.contains("10 pallets did not fit")));
    }

    #[test]
    fn test_apply_summary_echoes_plan_id() {
        let loads = vec![Load::new("L1", 4.0, 4_000.0)];
        let spec = TrailerSpec::default();
        let (placements, _) = place_pallets(&loads, &spec);

        let response = apply_summary(&PlanApplyRequest {
            plan_id: "plan-b".into(),
            loads,
            placements,
            trailer_spec: None,
            violations: None,
            note: Some("driver requested nose-heavy".into()),
        });

        assert_eq!(response.plan_id, "plan-b");
        assert_eq!(response.summary.pallet_count, 4);
    }

    #[test]
    fn test_reject_request_roundtrip() {
        let request = PlanRejectRequest {
            plan_id: "plan-c".into(),
            reason: "dock cannot take mixed rows".into(),
            load_ids: Some(vec!["L1".into()]),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"planId\":\"plan-c\""));

        let back: PlanRejectRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.reason, request.reason);
    }
}
