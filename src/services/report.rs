use crate::domain::constants::{DEFAULT_RISK_TOLERANCE, DEFAULT_TIME_HORIZON};
use crate::domain::models::{ActionBias, Level, RecommendationWindow, Report};
use serde_json::Value;
use tracing::debug;

use super::dissent::{dissent_map, dissent_metrics};
use super::normalize::normalize_constraints;
use super::risk_matrix::{build_risk_matrix, summarize_risk_matrix};
use super::scoring::summarize_direction;

pub fn recommendation_window(bias: ActionBias) -> RecommendationWindow {
    match bias {
        ActionBias::ActNow => RecommendationWindow::Next24h,
        ActionBias::Sequence => RecommendationWindow::ThisWeek,
        ActionBias::Stabilize => RecommendationWindow::ThisMonth,
    }
}

fn non_empty_str<'a>(payload: &'a Value, key: &str) -> Option<&'a str> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Builds the full report from a request payload.
///
/// Works on unvalidated payloads too: every missing or malformed field falls
/// back to its default instead of failing.
pub fn assemble_report(payload: &Value) -> Report {
    let risk_tolerance = non_empty_str(payload, "risk_tolerance");
    let time_horizon = non_empty_str(payload, "time_horizon");

    let constraints = normalize_constraints(payload.get("constraints"));
    let summary = summarize_direction(risk_tolerance, time_horizon, constraints);
    debug!(
        direction = %summary.direction,
        confidence = summary.confidence,
        urgency = summary.urgency_score,
        action_bias = %summary.action_bias,
        "scored request"
    );

    let risk_matrix = build_risk_matrix(summary.direction, summary.constraints_count);
    let risk_aggregate = summarize_risk_matrix(&risk_matrix);

    let tolerance = risk_tolerance.and_then(Level::parse).unwrap_or_default();
    let dissent = dissent_map(tolerance).to_vec();
    let metrics = dissent_metrics(&dissent);
    debug!(
        overall_risk = %risk_aggregate.overall_risk_level,
        advisors = metrics.advisor_count,
        variance = metrics.variance_score,
        "built risk matrix and dissent map"
    );

    Report {
        question: non_empty_str(payload, "question").unwrap_or_default().to_string(),
        risk_tolerance: risk_tolerance.unwrap_or(DEFAULT_RISK_TOLERANCE).to_string(),
        time_horizon: time_horizon.unwrap_or(DEFAULT_TIME_HORIZON).to_string(),
        recommendation_window: recommendation_window(summary.action_bias),
        summary,
        risk_matrix,
        dissent_map: dissent,
        dissent_metrics: metrics,
        risk_aggregate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Direction;
    use serde_json::json;

    #[test]
    fn defaults_fill_missing_fields() {
        let r = assemble_report(&json!({"question": "Hire now?"}));
        assert_eq!(r.question, "Hire now?");
        assert_eq!(r.risk_tolerance, "medium");
        assert_eq!(r.time_horizon, "7d");
        assert_eq!(r.summary.direction, Direction::Balanced);
        assert_eq!(r.summary.confidence, 0.66);
        assert_eq!(r.summary.urgency_score, 0.47);
        assert_eq!(r.recommendation_window, RecommendationWindow::ThisWeek);
        assert_eq!(r.dissent_map[0].advisor, "balance-operator");
    }

    #[test]
    fn raw_enum_spelling_is_echoed() {
        let r = assemble_report(&json!({
            "question": "Ship?",
            "risk_tolerance": "HIGH",
            "time_horizon": "24H"
        }));
        assert_eq!(r.risk_tolerance, "HIGH");
        assert_eq!(r.time_horizon, "24H");
        assert_eq!(r.summary.direction, Direction::Aggressive);
        assert_eq!(r.dissent_map[0].advisor, "speed-advocate");
    }

    #[test]
    fn unvalidated_payload_still_assembles() {
        let r = assemble_report(&json!({
            "question": 12,
            "risk_tolerance": "extreme",
            "constraints": "budget"
        }));
        assert_eq!(r.question, "");
        assert_eq!(r.risk_tolerance, "extreme");
        assert_eq!(r.summary.risk_score, 0.60);
        assert_eq!(r.summary.constraints_count, 0);
        assert_eq!(r.dissent_map.len(), 2);
    }

    #[test]
    fn window_follows_action_bias() {
        assert_eq!(recommendation_window(ActionBias::ActNow), RecommendationWindow::Next24h);
        assert_eq!(recommendation_window(ActionBias::Sequence), RecommendationWindow::ThisWeek);
        assert_eq!(recommendation_window(ActionBias::Stabilize), RecommendationWindow::ThisMonth);

        let r = assemble_report(&json!({
            "question": "Stop the bleed?",
            "risk_tolerance": "high",
            "time_horizon": "24h",
            "constraints": [{"text": "outage", "severity": "high"}]
        }));
        assert_eq!(r.summary.action_bias, ActionBias::ActNow);
        assert_eq!(r.recommendation_window, RecommendationWindow::Next24h);
    }

    #[test]
    fn serialized_report_is_one_flat_object() {
        let r = assemble_report(&json!({"question": "Ship?", "constraints": ["a"]}));
        let v = serde_json::to_value(&r).expect("serialize report");
        let keys: Vec<&str> = v
            .as_object()
            .expect("object")
            .keys()
            .map(String::as_str)
            .collect();
        for key in [
            "question",
            "riskTolerance",
            "timeHorizon",
            "direction",
            "confidence",
            "recommendation",
            "constraints",
            "constraintsCount",
            "constraintPenalty",
            "riskScore",
            "horizonScore",
            "urgencyScore",
            "actionBias",
            "riskMatrix",
            "dissentMap",
            "advisorCount",
            "varianceScore",
            "riskLevelCounts",
            "overallRiskLevel",
            "riskSummary",
            "recommendationWindow",
        ] {
            assert!(keys.contains(&key), "missing key {key}");
        }
        assert_eq!(keys.len(), 21);
        assert_eq!(v["constraints"][0], json!({"text": "a", "severity": "medium"}));
    }
}
