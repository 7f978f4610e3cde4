//! The parameter collector: merge environment and command-line sources per
//! definition, coerce, and fall back to defaults.
//!
//! The merge pipeline for each definition:
//! 1. Scalars: environment candidate (non-empty string), overridden by a
//!    truthy argument value; the winning raw value is coerced once.
//! 2. Arrays: indexed environment keys (`NAME_0`, `NAME_1`, ... until the
//!    first gap) followed by repeated flag occurrences, each element coerced
//!    individually with failures dropped.
//! 3. Absence and coercion failure are indistinguishable; both fall back to
//!    the declared default, used verbatim, or omit the key.
//!
//! Nothing here returns an error or panics; callers that treat a parameter
//! as required post-check with [`ResolvedParams::require`].

use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::argv::ParsedArgs;
use crate::coerce::coerce;
use crate::types::{ARGV_KEY, ParamDefinition, ResolvedParams};

/// Collect parameters from an in-memory environment mapping and argument
/// list.
///
/// Pure and deterministic: identical inputs yield identical outputs, and
/// neither the definitions nor the sources are mutated. The result always
/// carries the positional tokens under [`ARGV_KEY`].
pub fn collect<S: AsRef<str>>(
    definitions: &[ParamDefinition],
    env: &HashMap<String, String>,
    argv: &[S],
) -> ResolvedParams {
    let args = ParsedArgs::parse(argv);
    let mut values = Map::new();

    for definition in definitions {
        if definition.name.is_empty() {
            tracing::debug!("skipping parameter definition without a name");
            continue;
        }
        let resolved = if definition.ty.is_array() {
            resolve_array(definition, env, &args)
        } else {
            resolve_scalar(definition, env, &args)
        };
        match resolved.or_else(|| definition.default.clone()) {
            Some(value) => {
                values.insert(definition.name.clone(), value);
            }
            None => {
                tracing::debug!(
                    name = %definition.name,
                    "parameter resolved to nothing and has no default"
                );
            }
        }
    }

    // Reserved key, inserted last so it wins over a same-named definition.
    values.insert(
        ARGV_KEY.to_string(),
        Value::Array(
            args.positional()
                .iter()
                .map(|token| Value::String(token.clone()))
                .collect(),
        ),
    );

    ResolvedParams::new(values)
}

/// Collect from the running process: `.env` preload (if present), process
/// environment, and `std::env::args` minus the program name.
pub fn collect_from_process(definitions: &[ParamDefinition]) -> ResolvedParams {
    let _ = dotenvy::dotenv(); // a missing .env file is fine
    let env: HashMap<String, String> = std::env::vars().collect();
    let argv: Vec<String> = std::env::args().skip(1).collect();
    collect(definitions, &env, &argv)
}

/// Resolve a scalar definition: env candidate, arg override, one coercion of
/// the winner. A malformed winner discards the losing candidate too; the
/// default applies instead.
fn resolve_scalar(
    definition: &ParamDefinition,
    env: &HashMap<String, String>,
    args: &ParsedArgs,
) -> Option<Value> {
    let mut raw: Option<Value> = None;
    if let Some(env_name) = &definition.env_name {
        if let Some(value) = env.get(env_name).filter(|value| !value.is_empty()) {
            raw = Some(Value::String(value.clone()));
        }
    }
    if let Some(arg_name) = &definition.arg_name {
        if let Some(value) = args.last(arg_name).filter(|value| is_truthy(value)) {
            raw = Some(value.clone());
        }
    }
    let raw = raw?;
    let coerced = coerce(definition.ty, &raw);
    if coerced.is_none() {
        tracing::debug!(
            name = %definition.name,
            ty = %definition.ty,
            "candidate value failed coercion"
        );
    }
    coerced
}

/// Resolve an array definition: indexed env keys until the first gap, then
/// all flag occurrences, coerced per element with failures dropped.
fn resolve_array(
    definition: &ParamDefinition,
    env: &HashMap<String, String>,
    args: &ParsedArgs,
) -> Option<Value> {
    let mut raw: Vec<Value> = Vec::new();
    if let Some(env_name) = &definition.env_name {
        // Presence, not truthiness: empty strings are elements. Stops at the
        // first missing index, so sparse numbering is not supported.
        for idx in 0.. {
            match env.get(&format!("{env_name}_{idx}")) {
                Some(value) => raw.push(Value::String(value.clone())),
                None => break,
            }
        }
    }
    if let Some(arg_name) = &definition.arg_name {
        raw.extend(args.occurrences(arg_name).iter().cloned());
    }

    let total = raw.len();
    let coerced: Vec<Value> = raw
        .iter()
        .filter_map(|element| coerce(definition.ty, element))
        .collect();
    if coerced.len() < total {
        tracing::debug!(
            name = %definition.name,
            ty = %definition.ty,
            dropped = total - coerced.len(),
            "dropped array elements that failed coercion"
        );
    }
    if coerced.is_empty() {
        None
    } else {
        Some(Value::Array(coerced))
    }
}

/// Truthiness of a parsed argument value: the empty string, `false`, zero,
/// and null do not count as an override.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Null => false,
        Value::Array(_) | Value::Object(_) => true,
    }
}
