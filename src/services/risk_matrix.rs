use crate::domain::constants::{
    MITIGATION_CONSTRAINT_ALIGNMENT, MITIGATION_EXECUTION_SPEED, MITIGATION_ROLLBACK_COMPLEXITY,
    VECTOR_CONSTRAINT_ALIGNMENT, VECTOR_EXECUTION_SPEED, VECTOR_ROLLBACK_COMPLEXITY,
};
use crate::domain::models::{Direction, Level, RiskAggregate, RiskLevelCounts, RiskMatrixEntry};

/// Always three entries, in fixed vector order.
pub fn build_risk_matrix(direction: Direction, constraints_count: usize) -> Vec<RiskMatrixEntry> {
    let execution = match direction {
        Direction::Aggressive => Level::High,
        Direction::Balanced => Level::Medium,
        Direction::Conservative => Level::Low,
    };
    let rollback = match direction {
        Direction::Conservative => Level::Low,
        _ => Level::Medium,
    };
    let alignment = match constraints_count {
        0 => Level::Low,
        1 | 2 => Level::Medium,
        _ => Level::High,
    };

    vec![
        RiskMatrixEntry {
            vector: VECTOR_EXECUTION_SPEED,
            level: execution,
            mitigation: MITIGATION_EXECUTION_SPEED,
        },
        RiskMatrixEntry {
            vector: VECTOR_ROLLBACK_COMPLEXITY,
            level: rollback,
            mitigation: MITIGATION_ROLLBACK_COMPLEXITY,
        },
        RiskMatrixEntry {
            vector: VECTOR_CONSTRAINT_ALIGNMENT,
            level: alignment,
            mitigation: MITIGATION_CONSTRAINT_ALIGNMENT,
        },
    ]
}

/// Counts per level, the highest level present, and a one-line synthesis.
pub fn summarize_risk_matrix(matrix: &[RiskMatrixEntry]) -> RiskAggregate {
    let mut counts = RiskLevelCounts::default();
    for entry in matrix {
        match entry.level {
            Level::Low => counts.low += 1,
            Level::Medium => counts.medium += 1,
            Level::High => counts.high += 1,
        }
    }

    let overall = if counts.high > 0 {
        Level::High
    } else if counts.medium > 0 {
        Level::Medium
    } else {
        Level::Low
    };

    let risk_summary = format!(
        "{} overall risk across {} vectors (high: {}, medium: {}, low: {})",
        overall,
        matrix.len(),
        counts.high,
        counts.medium,
        counts.low
    );

    RiskAggregate {
        risk_level_counts: counts,
        overall_risk_level: overall,
        risk_summary,
    }
}
