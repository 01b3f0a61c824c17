use crate::domain::constants::{
    RECOMMENDATION_AGGRESSIVE, RECOMMENDATION_BALANCED, RECOMMENDATION_CONSERVATIVE,
};
use crate::domain::models::{ActionBias, Constraint, Direction, DirectionSummary, Level, TimeHorizon};

pub const CONFIDENCE_MIN: f64 = 0.20;
pub const CONFIDENCE_MAX: f64 = 0.90;
pub const URGENCY_MIN: f64 = 0.10;
pub const URGENCY_MAX: f64 = 0.95;

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Rounds the stored double to `places` decimals, like `toFixed`: the
/// decision is made on the exact binary value, and only exact ties go away
/// from zero. Never returns negative zero.
pub fn round_to(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let magnitude = value.abs();

    // Exact expansion past the rounding digit; a tie is `5` followed by zeros.
    let expanded = format!("{:.*}", places + TIE_CHECK_DIGITS, magnitude);
    let tail = &expanded[expanded.len() - TIE_CHECK_DIGITS..];
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');

    let rounded = if is_tie {
        let factor = 10f64.powi(places as i32);
        ((magnitude * factor).floor() + 1.0) / factor
    } else {
        format!("{:.*}", places, magnitude)
            .parse()
            .unwrap_or(magnitude)
    };

    if rounded == 0.0 {
        0.0
    } else {
        rounded.copysign(value)
    }
}

const TIE_CHECK_DIGITS: usize = 30;

/// Unknown or missing tolerance scores as `medium`.
pub fn risk_score(tolerance: Option<&str>) -> f64 {
    match tolerance.and_then(Level::parse).unwrap_or_default() {
        Level::Low => 0.35,
        Level::Medium => 0.60,
        Level::High => 0.80,
    }
}

/// Unknown or missing horizon scores as `7d`.
pub fn horizon_score(horizon: Option<&str>) -> f64 {
    match horizon.and_then(TimeHorizon::parse).unwrap_or_default() {
        TimeHorizon::Day => 0.45,
        TimeHorizon::Week => 0.60,
        TimeHorizon::Month => 0.75,
    }
}

pub fn constraint_penalty(constraints: &[Constraint]) -> f64 {
    constraints
        .iter()
        .map(|c| match c.severity {
            Level::High => 0.08,
            Level::Medium => 0.05,
            Level::Low => 0.03,
        })
        .fold(0.0, |acc, weight| acc + weight)
}

pub fn direction_for(risk: f64) -> Direction {
    if risk >= 0.70 {
        Direction::Aggressive
    } else if risk <= 0.45 {
        Direction::Conservative
    } else {
        Direction::Balanced
    }
}

pub fn action_bias_for(urgency: f64) -> ActionBias {
    if urgency >= 0.67 {
        ActionBias::ActNow
    } else if urgency <= 0.42 {
        ActionBias::Stabilize
    } else {
        ActionBias::Sequence
    }
}

pub fn recommendation_for(direction: Direction) -> &'static str {
    match direction {
        Direction::Aggressive => RECOMMENDATION_AGGRESSIVE,
        Direction::Conservative => RECOMMENDATION_CONSERVATIVE,
        Direction::Balanced => RECOMMENDATION_BALANCED,
    }
}

/// Scores a request from its categorical inputs and normalized constraints.
///
/// Confidence and urgency are both computed from the unrounded penalty and
/// clamped before each is rounded on its own; action bias uses the unrounded
/// urgency.
pub fn summarize_direction(
    risk_tolerance: Option<&str>,
    time_horizon: Option<&str>,
    constraints: Vec<Constraint>,
) -> DirectionSummary {
    let risk = risk_score(risk_tolerance);
    let horizon = horizon_score(time_horizon);
    let penalty = constraint_penalty(&constraints);

    let confidence = clamp(0.45 + horizon * 0.35 - penalty, CONFIDENCE_MIN, CONFIDENCE_MAX);
    let urgency = clamp(
        risk * 0.55 + (1.0 - horizon) * 0.35 + penalty * 0.90,
        URGENCY_MIN,
        URGENCY_MAX,
    );

    let direction = direction_for(risk);

    DirectionSummary {
        direction,
        confidence: round_to(confidence, 2),
        recommendation: recommendation_for(direction),
        constraints_count: constraints.len(),
        constraints,
        constraint_penalty: round_to(penalty, 2),
        risk_score: risk,
        horizon_score: horizon,
        urgency_score: round_to(urgency, 2),
        action_bias: action_bias_for(urgency),
    }
}
