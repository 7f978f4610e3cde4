//! Coercion of raw candidate values into the semantic types requested by
//! definitions.
//!
//! Every function here is total: a value that cannot be represented in the
//! target type yields `None`, which the collector treats exactly like
//! absence. Numeric and boolean tokens ignore surrounding whitespace;
//! parsing is otherwise strict base-10 / strict float, and floats that JSON
//! cannot carry (NaN, infinities) are invalid.

use serde_json::{Number, Value};

use crate::types::ParamType;

/// Coerce one raw value into `ty`. Array types coerce with their element
/// rule; the collector applies this per element.
pub(crate) fn coerce(ty: ParamType, raw: &Value) -> Option<Value> {
    match ty {
        ParamType::String | ParamType::StringArray => Some(raw.clone()),
        ParamType::Int | ParamType::IntArray => parse_int(raw).map(Value::from),
        ParamType::Uint | ParamType::UintArray => {
            parse_int(raw).filter(|n| *n >= 0).map(Value::from)
        }
        ParamType::Float | ParamType::FloatArray => parse_float(raw),
        ParamType::Boolean => parse_bool(raw).map(Value::Bool),
        ParamType::Json => parse_json(raw),
    }
}

fn parse_int(raw: &Value) -> Option<i64> {
    raw.as_str()?.trim().parse().ok()
}

fn parse_float(raw: &Value) -> Option<Value> {
    let parsed: f64 = raw.as_str()?.trim().parse().ok()?;
    Number::from_f64(parsed).map(Value::Number)
}

fn parse_bool(raw: &Value) -> Option<bool> {
    // A native boolean (bare flag) passes through unchanged.
    if let Value::Bool(b) = raw {
        return Some(*b);
    }
    match raw.as_str()?.trim().to_ascii_lowercase().as_str() {
        "1" | "t" | "true" | "y" | "yes" | "on" | "enable" | "enabled" => Some(true),
        "0" | "f" | "false" | "n" | "no" | "off" | "disable" | "disabled" => Some(false),
        _ => None,
    }
}

fn parse_json(raw: &Value) -> Option<Value> {
    match raw {
        // A parsed `null` is indistinguishable from a failed parse by
        // contract, so it counts as invalid and the default applies.
        Value::String(text) => serde_json::from_str(text).ok().filter(|v: &Value| !v.is_null()),
        Value::Bool(b) => Some(Value::Bool(*b)),
        _ => None,
    }
}
