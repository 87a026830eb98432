use super::*;

#[test]
fn new_accepts_default_base_url() {
    let cfg = CliConfig::new(fleet::DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS).unwrap();
    assert_eq!(cfg.api_url, "http://localhost:5000");
    assert_eq!(cfg.timeout, Duration::from_secs(30));
}

#[test]
fn new_trims_whitespace_and_trailing_slashes() {
    let cfg = CliConfig::new("  https://fleet.example.com//  ", 5).unwrap();
    assert_eq!(cfg.api_url, "https://fleet.example.com");
    assert_eq!(cfg.timeout, Duration::from_secs(5));
}

#[test]
fn new_zero_timeout_uses_default() {
    let cfg = CliConfig::new("http://127.0.0.1:5000", 0).unwrap();
    assert_eq!(cfg.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
}

#[test]
fn new_rejects_non_http_url() {
    let err = CliConfig::new("localhost:5000", 30).unwrap_err();
    assert!(matches!(err, CliError::InvalidBaseUrl(url) if url == "localhost:5000"));
}
