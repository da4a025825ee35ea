// crates/notify-server/tests/config_env.rs
use std::collections::HashMap;
use std::time::Duration;

use notify_server::config::{Config, TransportConfig};
use notify_server::error::ConfigError;

fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

const HTTP_VARS: &[(&str, &str)] = &[
    ("NOTIFY_STAFF_ADDRESS", "staff@example.com"),
    ("NOTIFY_MAIL_API_URL", "https://mail.example.com/v1/send"),
    ("NOTIFY_MAIL_API_KEY", "key-123"),
    ("NOTIFY_MAIL_FROM", "site@example.com"),
];

#[test]
fn defaults_apply_when_only_required_vars_are_set() {
    let config = load(HTTP_VARS).expect("complete config");

    assert_eq!(config.socket_addr_string(), "0.0.0.0:8080");
    assert_eq!(config.staff_address, "staff@example.com");
    assert_eq!(config.max_body_bytes, 16 * 1024);
    assert_eq!(config.cors_origin, None);
    assert_eq!(
        config.transport,
        TransportConfig::Http {
            api_url: "https://mail.example.com/v1/send".to_string(),
            api_key: "key-123".to_string(),
            from: "site@example.com".to_string(),
            timeout: Duration::from_secs(10),
        }
    );
}

#[test]
fn staff_address_is_required() {
    let err = load(&HTTP_VARS[1..]).unwrap_err();
    assert!(matches!(err, ConfigError::Missing("NOTIFY_STAFF_ADDRESS")));
}

#[test]
fn credentials_are_required_for_http_transport() {
    let err = load(&[
        ("NOTIFY_STAFF_ADDRESS", "staff@example.com"),
        ("NOTIFY_MAIL_API_URL", "https://mail.example.com/v1/send"),
    ])
    .unwrap_err();
    assert!(matches!(err, ConfigError::Missing("NOTIFY_MAIL_API_KEY")));
}

#[test]
fn log_transport_needs_no_credentials() {
    let config = load(&[
        ("NOTIFY_STAFF_ADDRESS", "staff@example.com"),
        ("NOTIFY_MAIL_TRANSPORT", "log"),
        ("NOTIFY_PORT", "3001"),
    ])
    .unwrap();
    assert_eq!(config.transport, TransportConfig::Log);
    assert_eq!(config.port, 3001);
}

#[test]
fn bad_values_are_reported() {
    let mut vars = HTTP_VARS.to_vec();
    vars.push(("NOTIFY_PORT", "eighty"));
    assert!(matches!(
        load(&vars).unwrap_err(),
        ConfigError::Invalid { key: "NOTIFY_PORT", .. }
    ));

    let mut vars = HTTP_VARS.to_vec();
    vars.push(("NOTIFY_MAIL_TRANSPORT", "pigeon"));
    assert!(load(&vars).is_err());
}

#[test]
fn cors_origin_is_normalized() {
    let mut vars = HTTP_VARS.to_vec();
    vars.push(("NOTIFY_CORS_ORIGIN", "https://Academy.Example.com/"));
    let config = load(&vars).unwrap();
    assert_eq!(config.cors_origin.as_deref(), Some("https://academy.example.com"));

    let mut vars = HTTP_VARS.to_vec();
    vars.push(("NOTIFY_CORS_ORIGIN", "https://example.com/app"));
    assert!(load(&vars).is_err());
}
