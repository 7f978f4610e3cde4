//! Integration tests for the process-environment entry point.
//!
//! These touch the real process environment, so they run serially. The
//! process argument list belongs to the test harness and is not asserted on
//! beyond the reserved key being present.

use envargs::{ARGV_KEY, ParamDefinition, ParamType, collect_from_process};
use serial_test::serial;

#[test]
#[serial]
fn collects_scalar_from_process_environment() {
    // SAFETY: runs serially via #[serial]; no other thread touches the env.
    unsafe {
        std::env::set_var("ENVARGS_TEST_TOKEN", "sesame");
    }

    let definitions = vec![
        ParamDefinition::new("token", ParamType::String).env("ENVARGS_TEST_TOKEN"),
    ];
    let params = collect_from_process(&definitions);
    assert_eq!(params.get_str("token"), Some("sesame"));
    assert!(params.contains(ARGV_KEY));

    // SAFETY: runs serially via #[serial]; no other thread touches the env.
    unsafe {
        std::env::remove_var("ENVARGS_TEST_TOKEN");
    }
}

#[test]
#[serial]
fn collects_indexed_array_from_process_environment() {
    // SAFETY: runs serially via #[serial]; no other thread touches the env.
    unsafe {
        std::env::set_var("ENVARGS_TEST_HOST_0", "a.example");
        std::env::set_var("ENVARGS_TEST_HOST_1", "b.example");
    }

    let definitions = vec![
        ParamDefinition::new("hosts", ParamType::StringArray).env("ENVARGS_TEST_HOST"),
    ];
    let params = collect_from_process(&definitions);
    assert_eq!(
        params.get_array("hosts").map(Vec::len),
        Some(2),
        "both indexed values should be collected"
    );

    // SAFETY: runs serially via #[serial]; no other thread touches the env.
    unsafe {
        std::env::remove_var("ENVARGS_TEST_HOST_0");
        std::env::remove_var("ENVARGS_TEST_HOST_1");
    }
}

#[test]
#[serial]
fn falls_back_to_default_when_env_is_unset() {
    // SAFETY: runs serially via #[serial]; no other thread touches the env.
    unsafe {
        std::env::remove_var("ENVARGS_TEST_MISSING");
    }

    let definitions = vec![
        ParamDefinition::new("missing", ParamType::Uint)
            .env("ENVARGS_TEST_MISSING")
            .default_value(25),
    ];
    let params = collect_from_process(&definitions);
    assert_eq!(params.get_u64("missing"), Some(25));
}
