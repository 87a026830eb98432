//! Transport seam for the vehicles REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend is an external collaborator exposing three endpoints:
//!
//! - `GET  /api/vehicles`       -> `[Vehicle]`
//! - `POST /api/vehicles`       body `{name, status}`
//! - `PUT  /api/vehicles/{id}`  body `{status}`
//!
//! `client` implements [`VehicleApi`] with `gloo-net` in the browser and `cli`
//! implements it with `reqwest`. Response bodies of the two mutations are not
//! needed since every mutation is followed by a full re-fetch.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use crate::vehicle::{NewVehicle, StatusPatch, Vehicle};

/// Base URL the dashboard talks to when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// A failed call to the vehicles API.
///
/// Variants only carry log detail; every variant is handled the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout, ...).
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("{url} returned HTTP {status}")]
    Status { status: u16, url: String },
    /// The response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// No transport is available in this build.
    #[error("vehicle API not available in this build")]
    Unavailable,
}

/// The three calls the dashboard makes.
#[async_trait(?Send)]
pub trait VehicleApi {
    /// `GET /api/vehicles`.
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, ApiError>;

    /// `POST /api/vehicles`.
    async fn create_vehicle(&self, vehicle: &NewVehicle) -> Result<(), ApiError>;

    /// `PUT /api/vehicles/{id}` with a status-only body.
    async fn update_status(&self, id: &str, patch: StatusPatch) -> Result<(), ApiError>;
}

/// Collection endpoint under `base_url`.
#[must_use]
pub fn vehicles_endpoint(base_url: &str) -> String {
    format!("{}/api/vehicles", base_url.trim_end_matches('/'))
}

/// Single-record endpoint under `base_url`.
#[must_use]
pub fn vehicle_endpoint(base_url: &str, id: &str) -> String {
    format!("{}/{id}", vehicles_endpoint(base_url))
}
