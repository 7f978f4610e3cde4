//! Declarative collection of typed parameters from environment variables and
//! command-line arguments.
//!
//! One call at startup turns a list of [`ParamDefinition`]s plus two raw
//! sources into a flat, typed [`ResolvedParams`] mapping:
//! - [`collect`]: pure function over an in-memory environment mapping and
//!   argument list
//! - [`collect_from_process`]: the same, fed from `.env` (if present), the
//!   process environment, and the process argument list
//!
//! # Precedence (lowest to highest)
//! 1. Declared default (used verbatim, never coerced)
//! 2. Environment variable value
//! 3. Command-line argument value
//!
//! A value that fails coercion into the declared [`ParamType`] is treated as
//! absent; nothing here panics or returns an error. Callers that treat a
//! parameter as required post-check with [`ResolvedParams::require`].
//!
//! Array types gather indexed environment variables (`NAME_0`, `NAME_1`, ...)
//! followed by repeated command-line flags, coerced per element.
//!
//! # Example
//! ```
//! use envargs::{ParamDefinition, ParamType, collect};
//! use std::collections::HashMap;
//!
//! let definitions = vec![
//!     ParamDefinition::new("smtpPort", ParamType::Uint)
//!         .env("SMTP_PORT")
//!         .arg("smtp-port")
//!         .default_value(25),
//!     ParamDefinition::new("mqttTopics", ParamType::StringArray)
//!         .env("MQTT_TOPICS")
//!         .arg("mqtt-topics"),
//! ];
//!
//! let env = HashMap::from([
//!     ("SMTP_PORT".to_string(), "587".to_string()),
//!     ("MQTT_TOPICS_0".to_string(), "alerts".to_string()),
//! ]);
//! let argv = ["--mqtt-topics=metrics", "broker.local"];
//!
//! let params = collect(&definitions, &env, &argv);
//! assert_eq!(params.get_u64("smtpPort"), Some(587));
//! assert_eq!(params.get_array("mqttTopics").map(Vec::len), Some(2));
//! assert_eq!(params.positional(), vec!["broker.local"]);
//! ```

pub mod argv;
mod coerce;
pub mod collect;
pub mod schema;
pub mod types;
pub mod validation;

// Re-exports for convenient access
pub use collect::{collect, collect_from_process};
pub use types::{ARGV_KEY, MissingParam, ParamDefinition, ParamType, ResolvedParams};
pub use validation::{AdvisoryWarning, validate};
