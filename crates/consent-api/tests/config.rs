use std::collections::HashMap;

use consent_api::config::{ApiConfig, ConfigError};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8080);
    assert!(!config.cors_any);
    assert!(!config.lambda);
    assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8080");
}

#[test]
fn reads_overrides() {
    let config = ApiConfig::from_lookup(lookup(&[
        ("CONSENT_API_HOST", "0.0.0.0"),
        ("CONSENT_API_PORT", "9000"),
        ("CONSENT_API_CORS_ANY", "true"),
        ("AWS_LAMBDA_RUNTIME_API", "127.0.0.1:9001"),
    ]))
    .unwrap();
    assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:9000");
    assert!(config.cors_any);
    assert!(config.lambda);
}

#[test]
fn rejects_bad_port() {
    let err = ApiConfig::from_lookup(lookup(&[("CONSENT_API_PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(raw) if raw == "eighty"));
}

#[test]
fn rejects_bad_host() {
    let config = ApiConfig::from_lookup(lookup(&[("CONSENT_API_HOST", "not a host")])).unwrap();
    assert!(matches!(config.socket_addr(), Err(ConfigError::InvalidHost(_))));
}
