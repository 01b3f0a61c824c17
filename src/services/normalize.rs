use crate::domain::models::{Constraint, Level};
use serde_json::Value;

/// Canonicalizes raw constraint entries.
///
/// Permissive on purpose: a non-array yields an empty list and entries of
/// any other shape are dropped, so callers that skip validation still get a
/// usable list. Severity defaults to `medium` when missing or unknown.
pub fn normalize_constraints(raw: Option<&Value>) -> Vec<Constraint> {
    let Some(Value::Array(items)) = raw else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|entry| match entry {
            Value::String(text) => Some(Constraint {
                text: text.clone(),
                severity: Level::Medium,
            }),
            Value::Object(o) => {
                let text = o.get("text")?.as_str()?;
                let severity = o
                    .get("severity")
                    .and_then(Value::as_str)
                    .and_then(Level::parse)
                    .unwrap_or_default();
                Some(Constraint {
                    text: text.to_string(),
                    severity,
                })
            }
            _ => None,
        })
        .collect()
}
