use crate::cli::OutputFormat;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Three-step scale shared by constraint severity, risk tolerance and risk
/// matrix levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    #[default]
    Medium,
    High,
}

impl Level {
    /// Case-insensitive parse; `None` for anything outside `low|medium|high`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "low" => Some(Level::Low),
            "medium" => Some(Level::Medium),
            "high" => Some(Level::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `24h`, `7d` or `30d`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeHorizon {
    Day,
    #[default]
    Week,
    Month,
}

impl TimeHorizon {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "24h" => Some(TimeHorizon::Day),
            "7d" => Some(TimeHorizon::Week),
            "30d" => Some(TimeHorizon::Month),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Conservative,
    Balanced,
    Aggressive,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Conservative => "conservative",
            Direction::Balanced => "balanced",
            Direction::Aggressive => "aggressive",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionBias {
    Stabilize,
    Sequence,
    ActNow,
}

impl fmt::Display for ActionBias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ActionBias::Stabilize => "stabilize",
            ActionBias::Sequence => "sequence",
            ActionBias::ActNow => "act_now",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RecommendationWindow {
    #[serde(rename = "next_24h")]
    Next24h,
    #[serde(rename = "this_week")]
    ThisWeek,
    #[serde(rename = "this_month")]
    ThisMonth,
}

/// Normalized constraint; severity is always one of the three levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Constraint {
    pub text: String,
    pub severity: Level,
}

/// Scorer output. Scalars are already rounded for presentation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionSummary {
    pub direction: Direction,
    pub confidence: f64,
    pub recommendation: &'static str,
    pub constraints: Vec<Constraint>,
    pub constraints_count: usize,
    pub constraint_penalty: f64,
    pub risk_score: f64,
    pub horizon_score: f64,
    pub urgency_score: f64,
    pub action_bias: ActionBias,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskMatrixEntry {
    pub vector: &'static str,
    pub level: Level,
    pub mitigation: &'static str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskLevelCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAggregate {
    pub risk_level_counts: RiskLevelCounts,
    pub overall_risk_level: Level,
    pub risk_summary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DissentEntry {
    pub advisor: &'static str,
    pub stance: &'static str,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DissentMetrics {
    pub advisor_count: usize,
    pub variance_score: f64,
}

/// The brief: echoed request fields plus every derived field, flattened
/// into one JSON object. Never mutated after assembly.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub question: String,
    pub risk_tolerance: String,
    pub time_horizon: String,
    #[serde(flatten)]
    pub summary: DirectionSummary,
    pub risk_matrix: Vec<RiskMatrixEntry>,
    pub dissent_map: Vec<DissentEntry>,
    #[serde(flatten)]
    pub dissent_metrics: DissentMetrics,
    #[serde(flatten)]
    pub risk_aggregate: RiskAggregate,
    pub recommendation_window: RecommendationWindow,
}

/// Rendering options resolved from the command line.
#[derive(Debug, Clone, Default)]
pub struct BriefOptions {
    /// Defaults to `json`.
    pub format: OutputFormat,
    /// When set, the rendered brief is also written here (full overwrite).
    pub out: Option<PathBuf>,
}
