//! Config Tests
//!
//! These tests verify:
//! - The documented defaults (127.0.0.1, 2181, 60s)
//! - Builder overrides
//! - Deserialization with duration strings, as a host collector supplies it

use std::time::Duration;

use zkprobe::Config;

// =============================================================================
// Defaults and Builder
// =============================================================================

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.hostname, "127.0.0.1");
    assert_eq!(config.port, "2181");
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.address(), "127.0.0.1:2181");
}

#[test]
fn test_builder_overrides() {
    let config = Config::builder()
        .hostname("zk2.internal")
        .port("2182")
        .timeout(Duration::from_millis(1500))
        .build();

    assert_eq!(config.hostname, "zk2.internal");
    assert_eq!(config.port, "2182");
    assert_eq!(config.timeout, Duration::from_millis(1500));
    assert_eq!(config.address(), "zk2.internal:2182");
}

// =============================================================================
// Deserialization
// =============================================================================

#[test]
fn test_deserialize_with_duration_string() {
    let config: Config =
        serde_json::from_str(r#"{"hostname": "zk1", "port": "2182", "timeout": "5s"}"#).unwrap();

    assert_eq!(config.hostname, "zk1");
    assert_eq!(config.port, "2182");
    assert_eq!(config.timeout, Duration::from_secs(5));
}

#[test]
fn test_deserialize_empty_object_uses_defaults() {
    let config: Config = serde_json::from_str("{}").unwrap();

    assert_eq!(config.address(), "127.0.0.1:2181");
    assert_eq!(config.timeout, Duration::from_secs(60));
}

#[test]
fn test_deserialize_rejects_unknown_fields() {
    let result = serde_json::from_str::<Config>(r#"{"hostnam": "typo"}"#);

    assert!(result.is_err());
}
