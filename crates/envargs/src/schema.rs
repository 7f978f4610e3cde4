//! JSON Schema generation for parameter definition lists.
//!
//! Uses schemars to generate a JSON Schema that can be used for IDE
//! autocomplete and validation of definition files.

use crate::types::ParamDefinition;
use schemars::{Schema, generate::SchemaSettings};

/// Generate the JSON Schema for a definition list (`Vec<ParamDefinition>`).
pub fn schema() -> Schema {
    SchemaSettings::default()
        .into_generator()
        .into_root_schema_for::<Vec<ParamDefinition>>()
}

/// Generate the JSON Schema as a pretty-printed JSON string.
pub fn schema_json_pretty() -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&schema())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParamType;
    use serde_json::json;

    #[test]
    fn test_schema_is_valid_json() {
        let json = schema_json_pretty().unwrap();
        let _: serde_json::Value = serde_json::from_str(&json).unwrap();
    }

    #[test]
    fn test_schema_names_every_param_type() {
        let json = schema_json_pretty().unwrap();
        for ty in [
            ParamType::String,
            ParamType::StringArray,
            ParamType::Int,
            ParamType::IntArray,
            ParamType::Uint,
            ParamType::UintArray,
            ParamType::Float,
            ParamType::FloatArray,
            ParamType::Boolean,
            ParamType::Json,
        ] {
            assert!(
                json.contains(&format!("\"{}\"", ty.as_str())),
                "schema is missing type '{ty}'"
            );
        }
    }

    #[test]
    fn test_definition_list_validates_against_schema() {
        let definitions = json!([
            {
                "name": "smtpPort",
                "env_name": "SMTP_PORT",
                "arg_name": "smtp-port",
                "type": "uint",
                "default": 25
            },
            {
                "name": "mqttTopics",
                "env_name": "MQTT_TOPICS",
                "arg_name": "mqtt-topics",
                "type": "string[]"
            }
        ]);

        let validator =
            jsonschema::validator_for(&serde_json::to_value(schema()).unwrap()).unwrap();
        assert!(
            validator.validate(&definitions).is_ok(),
            "definition list should validate against schema"
        );
    }

    #[test]
    fn test_unknown_type_fails_validation() {
        let definitions = json!([
            {"name": "port", "type": "decimal"}
        ]);

        let validator =
            jsonschema::validator_for(&serde_json::to_value(schema()).unwrap()).unwrap();
        assert!(validator.validate(&definitions).is_err());
    }
}
