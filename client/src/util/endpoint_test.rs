use super::*;

#[test]
fn selector_targets_named_meta() {
    assert_eq!(meta_selector(), r#"meta[name="objectdetect:predict-url"]"#);
}

#[test]
fn resolve_prefers_configured_url() {
    assert_eq!(resolve(Some(" http://gpu-box:5000/predict ")), "http://gpu-box:5000/predict");
}

#[test]
fn resolve_falls_back_on_missing_or_blank() {
    assert_eq!(resolve(None), DEFAULT_PREDICT_URL);
    assert_eq!(resolve(Some("   ")), DEFAULT_PREDICT_URL);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn predict_url_defaults_outside_browser() {
    assert_eq!(predict_url(), DEFAULT_PREDICT_URL);
}
