//! Configuration Tests.
//!
//! Verifies JSON loading, defaults for missing fields, and validation.

use rstest::rstest;

use shiprrip_core::common::error::ConfigError;
use shiprrip_core::config::{Config, PolicyVariant, ShctScope};

#[test]
fn full_document() {
    let json = r#"{
        "num_cores": 4,
        "sets_per_core": 1024,
        "variant": "ShipRrip",
        "shct_scope": "PerCore",
        "line_bytes": 128,
        "heartbeat_interval": 100000
    }"#;
    let config = Config::from_json(json).unwrap();
    assert_eq!(config.num_cores, 4);
    assert_eq!(config.total_sets(), 4096);
    assert_eq!(config.variant, PolicyVariant::ShipRrip);
    assert_eq!(config.shct_scope, ShctScope::PerCore);
    assert_eq!(config.line_bytes, 128);
    assert_eq!(config.heartbeat_interval, 100_000);
}

#[test]
fn default_geometry_matches_llc_sets() {
    let config = Config::default();
    assert_eq!(config.total_sets(), 2048);
    assert_eq!(
        Config {
            num_cores: 2,
            ..Config::default()
        }
        .total_sets(),
        4096
    );
}

#[rstest]
#[case(r#"{ "num_cores": 0 }"#, ConfigError::NoCores)]
#[case(r#"{ "sets_per_core": 0 }"#, ConfigError::NoSets)]
#[case(r#"{ "line_bytes": 0 }"#, ConfigError::LineSize(0))]
#[case(r#"{ "line_bytes": 96 }"#, ConfigError::LineSize(96))]
fn invalid_documents(#[case] json: &str, #[case] expected: ConfigError) {
    assert_eq!(Config::from_json(json), Err(expected));
}

#[test]
fn unknown_variant_is_rejected() {
    assert!(matches!(
        Config::from_json(r#"{ "variant": "Lru" }"#),
        Err(ConfigError::Parse(_))
    ));
}
