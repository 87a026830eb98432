//! Build-time configuration for the browser bundle.
//!
//! The bundle has no runtime environment, so the API base URL is baked in
//! from `FLEET_API_URL` at compile time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use fleet::DEFAULT_API_BASE_URL;

/// Base URL of the vehicles API for this build.
pub fn api_base_url() -> &'static str {
    resolve_base_url(option_env!("FLEET_API_URL"))
}

fn resolve_base_url(raw: Option<&'static str>) -> &'static str {
    match raw.map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_API_BASE_URL,
    }
}
