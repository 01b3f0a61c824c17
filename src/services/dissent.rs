use crate::domain::models::{DissentEntry, DissentMetrics, Level};

use super::scoring::round_to;

/// Canned advisor stances keyed by risk tolerance. A fixed lookup table,
/// not a deliberation.
pub fn dissent_map(tolerance: Level) -> [DissentEntry; 2] {
    match tolerance {
        Level::High => [
            DissentEntry {
                advisor: "speed-advocate",
                stance: "push launch in this cycle",
                confidence: 0.74,
            },
            DissentEntry {
                advisor: "risk-guardian",
                stance: "allow launch only with kill-switch and canary",
                confidence: 0.62,
            },
        ],
        Level::Low => [
            DissentEntry {
                advisor: "risk-guardian",
                stance: "defer launch until reversibility checks are complete",
                confidence: 0.76,
            },
            DissentEntry {
                advisor: "speed-advocate",
                stance: "ship a reduced scope behind a flag",
                confidence: 0.55,
            },
        ],
        Level::Medium => [
            DissentEntry {
                advisor: "balance-operator",
                stance: "ship progressively with rollback guardrails",
                confidence: 0.71,
            },
            DissentEntry {
                advisor: "speed-advocate",
                stance: "optimize for iteration speed after first canary",
                confidence: 0.58,
            },
        ],
    }
}

/// Advisor count and population standard deviation of the finite
/// confidences (3 decimals). Both are zero for an empty map.
pub fn dissent_metrics(entries: &[DissentEntry]) -> DissentMetrics {
    let confidences: Vec<f64> = entries
        .iter()
        .map(|e| e.confidence)
        .filter(|c| c.is_finite())
        .collect();

    if confidences.is_empty() {
        return DissentMetrics {
            advisor_count: 0,
            variance_score: 0.0,
        };
    }

    let n = confidences.len() as f64;
    let avg = confidences.iter().sum::<f64>() / n;
    let variance = confidences.iter().map(|c| (c - avg).powi(2)).sum::<f64>() / n;

    DissentMetrics {
        advisor_count: confidences.len(),
        variance_score: round_to(variance.sqrt(), 3),
    }
}
