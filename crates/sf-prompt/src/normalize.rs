//! Input normalization
//!
//! Defaulting rules:
//! - Scalars: absent, JSON null, `""`, or the literal string `"null"` become
//!   the placeholder. Non-string values pass through unchanged.
//! - Sequences: missing, not an array, empty, or all-falsy become a
//!   single-element placeholder sequence; otherwise falsy elements are
//!   dropped and the scalar rule applies to each survivor.
//! - `Other parameters`: anything that is not a mapping is replaced with the
//!   canonical default mapping.
//!
//! Normalization never fails and is idempotent.

use serde_json::Value;

use crate::types::{NormalizedRequest, OtherParameters, ProjectRequest};

/// Default substituted for every missing or empty field.
pub const PLACEHOLDER: &str = "choose the best one";

fn placeholder() -> Value {
    Value::String(PLACEHOLDER.to_string())
}

/// Falsiness in the sense the upstream prompt contract uses: null, false,
/// zero, and empty strings/arrays/objects.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Scalar defaulting rule.
fn clean_value(value: Option<Value>) -> Value {
    match value {
        None | Some(Value::Null) => placeholder(),
        Some(Value::String(s)) if s.is_empty() || s == "null" => placeholder(),
        Some(other) => other,
    }
}

/// Sequence defaulting rule. A value that is not an array at all is
/// replaced outright.
fn clean_sequence(value: Option<Value>) -> Vec<Value> {
    let items = match value {
        Some(Value::Array(items)) => items,
        _ => return vec![placeholder()],
    };

    let kept: Vec<Value> = items
        .into_iter()
        .filter(|item| !is_falsy(item))
        .map(|item| clean_value(Some(item)))
        .collect();

    if kept.is_empty() {
        vec![placeholder()]
    } else {
        kept
    }
}

/// Mapping rule for `Other parameters`.
fn clean_other_parameters(value: Option<Value>) -> OtherParameters {
    match value {
        Some(Value::Object(mut map)) => OtherParameters {
            communication: clean_value(map.remove("communication")),
            control: clean_value(map.remove("control")),
            timing: clean_sequence(map.remove("timing")),
        },
        _ => OtherParameters {
            communication: placeholder(),
            control: placeholder(),
            timing: vec![placeholder()],
        },
    }
}

/// Produce the canonical request. Always succeeds; missing or malformed
/// fields are defaulted, never rejected.
pub fn normalize(request: ProjectRequest) -> NormalizedRequest {
    NormalizedRequest {
        project_name: clean_value(request.project_name),
        definition: clean_value(request.definition),
        mcu: clean_value(request.mcu),
        sensors: clean_sequence(request.sensors),
        actuators: clean_sequence(request.actuators),
        other_parameters: clean_other_parameters(request.other_parameters),
    }
}
