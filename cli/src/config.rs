//! Validated CLI configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::CliError;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Base URL without a trailing slash.
    pub api_url: String,
    pub timeout: Duration,
}

impl CliConfig {
    /// Build config from the raw `--api-url` / `--timeout-secs` values.
    ///
    /// A zero timeout falls back to [`DEFAULT_TIMEOUT_SECS`].
    pub fn new(api_url: &str, timeout_secs: u64) -> Result<Self, CliError> {
        let api_url = api_url.trim().trim_end_matches('/');
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(CliError::InvalidBaseUrl(api_url.to_owned()));
        }
        let timeout_secs = if timeout_secs == 0 { DEFAULT_TIMEOUT_SECS } else { timeout_secs };
        Ok(Self { api_url: api_url.to_owned(), timeout: Duration::from_secs(timeout_secs) })
    }
}
