//! Advisory validation for parameter definition lists.
//!
//! Validation is advisory - it produces warnings but never blocks
//! collection. Collection itself silently skips or omits problem
//! definitions, so this is the place authoring mistakes get surfaced.

use serde_json::Value;
use std::collections::HashSet;

use crate::types::{ParamDefinition, ParamType};

/// An advisory warning about a definition-list issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisoryWarning {
    /// Machine-readable warning code.
    pub code: &'static str,

    /// Human-readable warning message.
    pub message: String,

    /// Definition name (or positional path for nameless definitions).
    pub path: String,
}

impl std::fmt::Display for AdvisoryWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.path, self.message)
    }
}

/// Validate a definition list and return advisory warnings.
///
/// This does NOT fail on issues - it only collects warnings that callers
/// can choose to display or log before running collection.
pub fn validate(definitions: &[ParamDefinition]) -> Vec<AdvisoryWarning> {
    let mut warnings = vec![];
    let mut seen: HashSet<&str> = HashSet::new();

    for (idx, definition) in definitions.iter().enumerate() {
        let path = if definition.name.is_empty() {
            format!("definitions[{idx}]")
        } else {
            definition.name.clone()
        };

        if definition.name.is_empty() {
            warnings.push(AdvisoryWarning {
                code: "definition.name.empty",
                message: "Definition has no name and will be skipped".into(),
                path: path.clone(),
            });
        } else if !seen.insert(definition.name.as_str()) {
            warnings.push(AdvisoryWarning {
                code: "definition.name.duplicate",
                message: format!(
                    "Duplicate definition name '{}'; the later definition overwrites the earlier result",
                    definition.name
                ),
                path: path.clone(),
            });
        }

        let has_env = definition.env_name.as_deref().is_some_and(|n| !n.is_empty());
        let has_arg = definition.arg_name.as_deref().is_some_and(|n| !n.is_empty());
        if !has_env && !has_arg && definition.default.is_none() {
            warnings.push(AdvisoryWarning {
                code: "definition.sources.none",
                message: "No env_name, no arg_name, and no default: this parameter can never resolve"
                    .into(),
                path: path.clone(),
            });
        }

        if let Some(arg_name) = definition.arg_name.as_deref() {
            if arg_name.starts_with('-') {
                warnings.push(AdvisoryWarning {
                    code: "definition.arg_name.dashed",
                    message: format!(
                        "arg_name '{arg_name}' includes leading dashes; flags are looked up bare"
                    ),
                    path: path.clone(),
                });
            }
        }

        if let Some(default) = &definition.default {
            if !default_matches(definition.ty, default) {
                warnings.push(AdvisoryWarning {
                    code: "definition.default.mismatch",
                    message: format!(
                        "Default {default} cannot match declared type '{}'; defaults are used verbatim",
                        definition.ty
                    ),
                    path,
                });
            }
        }
    }

    warnings
}

/// Whether a declared default is representable under the declared type.
/// Defaults are never coerced, so this is a shape check only.
fn default_matches(ty: ParamType, default: &Value) -> bool {
    match ty {
        ParamType::StringArray
        | ParamType::IntArray
        | ParamType::UintArray
        | ParamType::FloatArray => default.is_array(),
        ParamType::String => default.is_string(),
        ParamType::Int => default.is_i64(),
        ParamType::Uint => default.is_u64(),
        ParamType::Float => default.is_number(),
        ParamType::Boolean => default.is_boolean(),
        ParamType::Json => true,
    }
}
