use crate::domain::models::{Level, TimeHorizon};
use serde_json::Value;

/// Checks the shape of a raw request. Every violated rule is reported; an
/// empty list means the request is valid.
pub fn validate_request(payload: &Value) -> Vec<String> {
    let Some(obj) = payload.as_object() else {
        return vec!["input must be a JSON object".to_string()];
    };

    let mut errors = Vec::new();

    let question_ok = obj
        .get("question")
        .and_then(Value::as_str)
        .is_some_and(|q| !q.trim().is_empty());
    if !question_ok {
        errors.push("question must be a non-empty string".to_string());
    }

    match obj.get("constraints") {
        None => {}
        Some(Value::Array(items)) => {
            if !items.iter().all(is_constraint_entry) {
                errors.push(
                    "constraints entries must be strings or objects with { text, severity? }"
                        .to_string(),
                );
            }
        }
        Some(_) => errors.push("constraints must be an array of strings when provided".to_string()),
    }

    if let Some(raw) = obj.get("risk_tolerance") {
        if raw.as_str().and_then(Level::parse).is_none() {
            errors.push("risk_tolerance must be one of: low, medium, high".to_string());
        }
    }

    if let Some(raw) = obj.get("time_horizon") {
        if raw.as_str().and_then(TimeHorizon::parse).is_none() {
            errors.push("time_horizon must be one of: 24h, 7d, 30d".to_string());
        }
    }

    errors
}

fn is_constraint_entry(item: &Value) -> bool {
    match item {
        Value::String(_) => true,
        Value::Object(o) => o.get("text").is_some_and(Value::is_string),
        _ => false,
    }
}
