//! Minimal long-flag tokenizer for command-line argument lists.
//!
//! Recognized forms: `--name=value`, `--name value`, and bare `--name`
//! (boolean `true`). Repeated flags accumulate in occurrence order. A `--`
//! token ends flag parsing; it and any token that is not a long flag land in
//! the positional list.

use serde_json::Value;
use std::collections::BTreeMap;

/// Parsed command-line arguments: flag occurrences plus positional tokens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedArgs {
    flags: BTreeMap<String, Vec<Value>>,
    positional: Vec<String>,
}

impl ParsedArgs {
    /// Tokenize an argument list.
    ///
    /// Flag values are `Value::String`; a bare flag records `Value::Bool(true)`.
    /// In the `--name value` form the next token is consumed only when it does
    /// not start with `-`, so `--port -5` leaves `-5` positional while
    /// `--port=-5` assigns it.
    pub fn parse<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut flags: BTreeMap<String, Vec<Value>> = BTreeMap::new();
        let mut positional = Vec::new();
        let mut iter = args.into_iter().peekable();
        let mut flags_done = false;

        while let Some(token) = iter.next() {
            let token = token.as_ref();
            if flags_done {
                positional.push(token.to_string());
                continue;
            }
            if token == "--" {
                flags_done = true;
                continue;
            }
            let Some(flag) = token.strip_prefix("--") else {
                positional.push(token.to_string());
                continue;
            };
            if let Some((name, value)) = flag.split_once('=') {
                flags
                    .entry(name.to_string())
                    .or_default()
                    .push(Value::String(value.to_string()));
            } else {
                let takes_next = iter
                    .peek()
                    .is_some_and(|next| !next.as_ref().starts_with('-'));
                let value = if takes_next {
                    iter.next()
                        .map(|v| Value::String(v.as_ref().to_string()))
                        .unwrap_or(Value::Bool(true))
                } else {
                    Value::Bool(true)
                };
                flags.entry(flag.to_string()).or_default().push(value);
            }
        }

        Self { flags, positional }
    }

    /// Last occurrence of a flag, the winning value for scalar lookups.
    pub fn last(&self, name: &str) -> Option<&Value> {
        self.flags.get(name).and_then(|occurrences| occurrences.last())
    }

    /// All occurrences of a flag in order, empty if it never appeared.
    pub fn occurrences(&self, name: &str) -> &[Value] {
        self.flags.get(name).map_or(&[], Vec::as_slice)
    }

    /// Tokens not matched to any flag, in input order.
    pub fn positional(&self) -> &[String] {
        &self.positional
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_equals_form() {
        let args = ParsedArgs::parse(["--host=localhost"]);
        assert_eq!(args.last("host"), Some(&json!("localhost")));
        assert!(args.positional().is_empty());
    }

    #[test]
    fn test_space_form_consumes_next_token() {
        let args = ParsedArgs::parse(["--host", "localhost", "file.txt"]);
        assert_eq!(args.last("host"), Some(&json!("localhost")));
        assert_eq!(args.positional(), ["file.txt"]);
    }

    #[test]
    fn test_bare_flag_is_true() {
        let args = ParsedArgs::parse(["--verbose"]);
        assert_eq!(args.last("verbose"), Some(&json!(true)));
    }

    #[test]
    fn test_bare_flag_before_another_flag() {
        let args = ParsedArgs::parse(["--verbose", "--host=h"]);
        assert_eq!(args.last("verbose"), Some(&json!(true)));
        assert_eq!(args.last("host"), Some(&json!("h")));
    }

    #[test]
    fn test_repeated_flags_accumulate_in_order() {
        let args = ParsedArgs::parse(["--topic=a", "--topic", "b", "--topic=c"]);
        assert_eq!(
            args.occurrences("topic"),
            [json!("a"), json!("b"), json!("c")]
        );
        assert_eq!(args.last("topic"), Some(&json!("c")));
    }

    #[test]
    fn test_double_dash_ends_flag_parsing() {
        let args = ParsedArgs::parse(["--a=1", "--", "--b=2", "plain"]);
        assert_eq!(args.last("a"), Some(&json!("1")));
        assert_eq!(args.last("b"), None);
        assert_eq!(args.positional(), ["--b=2", "plain"]);
    }

    #[test]
    fn test_single_dash_tokens_are_positional() {
        let args = ParsedArgs::parse(["-x", "-", "file"]);
        assert_eq!(args.positional(), ["-x", "-", "file"]);
    }

    #[test]
    fn test_dash_prefixed_token_is_not_consumed_as_value() {
        let args = ParsedArgs::parse(["--port", "-5"]);
        assert_eq!(args.last("port"), Some(&json!(true)));
        assert_eq!(args.positional(), ["-5"]);
    }

    #[test]
    fn test_equals_form_keeps_dash_prefixed_value() {
        let args = ParsedArgs::parse(["--port=-5"]);
        assert_eq!(args.last("port"), Some(&json!("-5")));
    }

    #[test]
    fn test_empty_value_is_kept() {
        let args = ParsedArgs::parse(["--host="]);
        assert_eq!(args.last("host"), Some(&json!("")));
    }

    #[test]
    fn test_unknown_flag_lookup_is_empty() {
        let args = ParsedArgs::parse(["--a=1"]);
        assert!(args.occurrences("b").is_empty());
        assert!(args.last("b").is_none());
    }
}
