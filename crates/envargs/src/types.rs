//! Core types: parameter definitions, the type tag they carry, and the
//! resolved output mapping.
//!
//! All definition types derive serde and schemars traits so definition lists
//! can live in JSON files and get IDE autocomplete via [`crate::schema`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Reserved output key holding the positional (unmatched) command-line
/// tokens. Always present, inserted after all definitions, so it wins over a
/// definition of the same name.
pub const ARGV_KEY: &str = "argv";

/// The semantic type a collected value is coerced into.
///
/// Array variants gather indexed environment variables (`NAME_0`, `NAME_1`,
/// ...) and repeated command-line flags; scalar variants resolve to a single
/// value. A definition without an explicit type is a `string`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum ParamType {
    #[default]
    #[serde(rename = "string")]
    String,
    #[serde(rename = "string[]")]
    StringArray,
    #[serde(rename = "int")]
    Int,
    #[serde(rename = "int[]")]
    IntArray,
    #[serde(rename = "uint")]
    Uint,
    #[serde(rename = "uint[]")]
    UintArray,
    #[serde(rename = "float")]
    Float,
    #[serde(rename = "float[]")]
    FloatArray,
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "json")]
    Json,
}

impl ParamType {
    /// Whether this type resolves via multi-value search (indexed env keys
    /// plus repeated flags).
    pub const fn is_array(self) -> bool {
        matches!(
            self,
            Self::StringArray | Self::IntArray | Self::UintArray | Self::FloatArray
        )
    }

    /// The wire name, identical to the serde representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::StringArray => "string[]",
            Self::Int => "int",
            Self::IntArray => "int[]",
            Self::Uint => "uint",
            Self::UintArray => "uint[]",
            Self::Float => "float",
            Self::FloatArray => "float[]",
            Self::Boolean => "boolean",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declarative description of one parameter: where to look for it, what type
/// to coerce it to, and what to fall back to.
///
/// All fields use `#[serde(default)]` so partial definitions work; a missing
/// `type` normalizes to `string` at deserialization, never by mutating the
/// caller's data during collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ParamDefinition {
    /// Output key under which the resolved value is stored. A definition
    /// with an empty name is skipped during collection.
    pub name: String,

    /// Environment variable to probe. For array types this is a prefix:
    /// `NAME_0`, `NAME_1`, ... are probed until the first gap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_name: Option<String>,

    /// Command-line flag to look up (without leading dashes). Repeated
    /// occurrences feed array types; the last occurrence wins for scalars.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg_name: Option<String>,

    /// Target type of the collected value.
    #[serde(rename = "type")]
    pub ty: ParamType,

    /// Fallback used verbatim (never coerced) when no usable value is found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl ParamDefinition {
    /// Create a definition with a name and target type and no sources.
    pub fn new(name: impl Into<String>, ty: ParamType) -> Self {
        Self {
            name: name.into(),
            ty,
            ..Self::default()
        }
    }

    /// Set the environment variable name (or prefix, for array types).
    pub fn env(mut self, env_name: impl Into<String>) -> Self {
        self.env_name = Some(env_name.into());
        self
    }

    /// Set the command-line flag name (without leading dashes).
    pub fn arg(mut self, arg_name: impl Into<String>) -> Self {
        self.arg_name = Some(arg_name.into());
        self
    }

    /// Set the fallback value. Used verbatim on resolution failure.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// Error returned by [`ResolvedParams::require`] when a parameter resolved
/// to nothing and declared no default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("required parameter '{name}' was not collected and has no default")]
pub struct MissingParam {
    /// Definition name that was requested.
    pub name: String,
}

/// The output of a collection run: a flat mapping from definition name to
/// coerced value.
///
/// Keys for parameters that resolved to nothing (and had no default) are
/// absent. The reserved [`ARGV_KEY`] entry always holds the positional
/// command-line tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedParams(Map<String, Value>);

impl ResolvedParams {
    pub(crate) fn new(values: Map<String, Value>) -> Self {
        Self(values)
    }

    /// Look up a resolved value by definition name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Whether the named parameter resolved to a value (or default).
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Look up a resolved value, failing if it is absent. This is the
    /// post-check for callers that treat a parameter as required.
    pub fn require(&self, name: &str) -> Result<&Value, MissingParam> {
        self.get(name).ok_or_else(|| MissingParam {
            name: name.to_string(),
        })
    }

    /// String view of a resolved value.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Signed integer view of a resolved value.
    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_i64)
    }

    /// Unsigned integer view of a resolved value.
    pub fn get_u64(&self, name: &str) -> Option<u64> {
        self.get(name).and_then(Value::as_u64)
    }

    /// Floating-point view of a resolved value.
    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_f64)
    }

    /// Boolean view of a resolved value.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    /// Array view of a resolved value (array-typed parameters).
    pub fn get_array(&self, name: &str) -> Option<&Vec<Value>> {
        self.get(name).and_then(Value::as_array)
    }

    /// The positional command-line tokens stored under [`ARGV_KEY`].
    pub fn positional(&self) -> Vec<&str> {
        self.0
            .get(ARGV_KEY)
            .and_then(Value::as_array)
            .map(|tokens| tokens.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Iterate over all resolved entries, including [`ARGV_KEY`].
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Number of entries, including the reserved [`ARGV_KEY`] entry.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the mapping holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume into the underlying JSON object.
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}
