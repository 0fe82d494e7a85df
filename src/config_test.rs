use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.predict_url, DEFAULT_PREDICT_URL);
    assert_eq!(cfg.inference_health_url, "http://localhost:5000/health");
    assert_eq!(cfg.inference_timeout, Duration::from_secs(DEFAULT_INFERENCE_TIMEOUT_SECS));
}

#[test]
fn overrides_are_parsed() {
    let cfg = config_from(&[
        ("PORT", "8080"),
        ("PREDICT_URL", "https://gpu.example.test/v1/predict"),
        ("INFERENCE_TIMEOUT_SECS", "12"),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.predict_url, "https://gpu.example.test/v1/predict");
    assert_eq!(cfg.inference_health_url, "https://gpu.example.test/v1/health");
    assert_eq!(cfg.inference_timeout, Duration::from_secs(12));
}

#[test]
fn explicit_health_url_wins() {
    let cfg = config_from(&[("INFERENCE_HEALTH_URL", "http://probe.test/ready")]).unwrap();
    assert_eq!(cfg.inference_health_url, "http://probe.test/ready");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = config_from(&[("PORT", "  "), ("PREDICT_URL", "")]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.predict_url, DEFAULT_PREDICT_URL);
}

#[test]
fn invalid_port_errors() {
    let err = config_from(&[("PORT", "eighty")]).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
}

#[test]
fn zero_timeout_errors() {
    let err = config_from(&[("INFERENCE_TIMEOUT_SECS", "0")]).unwrap_err();
    assert!(err.to_string().contains("INFERENCE_TIMEOUT_SECS"));
}

#[test]
fn non_http_predict_url_errors() {
    let err = config_from(&[("PREDICT_URL", "localhost:5000/predict")]).unwrap_err();
    assert!(matches!(err, ConfigError::NotHttp { var: "PREDICT_URL", .. }));
}
