pub const USAGE: &str =
    "Usage: decision-brief --input <json-file> [--format json|md|both] [--out <file>]";

pub const DEFAULT_RISK_TOLERANCE: &str = "medium";
pub const DEFAULT_TIME_HORIZON: &str = "7d";
pub const MISSING_QUESTION: &str = "(missing question)";

pub const RECOMMENDATION_AGGRESSIVE: &str =
    "Prioritize speed, accept bounded downside, and add short feedback loops.";
pub const RECOMMENDATION_CONSERVATIVE: &str =
    "Prioritize reversibility, guardrail checks, and staged rollout.";
pub const RECOMMENDATION_BALANCED: &str =
    "Balance execution speed with explicit rollback and review gates.";

pub const VECTOR_EXECUTION_SPEED: &str = "execution_speed";
pub const VECTOR_ROLLBACK_COMPLEXITY: &str = "rollback_complexity";
pub const VECTOR_CONSTRAINT_ALIGNMENT: &str = "constraint_alignment";

pub const MITIGATION_EXECUTION_SPEED: &str = "use canary rollout and short feedback intervals";
pub const MITIGATION_ROLLBACK_COMPLEXITY: &str =
    "prepare explicit rollback runbook before release";
pub const MITIGATION_CONSTRAINT_ALIGNMENT: &str =
    "convert constraints into measurable acceptance checks";

/// Footer of every Markdown brief; independent of the request.
pub const ACTION_WINDOWS: [&str; 2] = [
    "- Next 24h: validate assumptions with one low-cost experiment.",
    "- Next 7d: commit or rollback based on explicit success thresholds.",
];
