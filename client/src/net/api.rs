//! REST calls to the vehicles API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call returns [`ApiError::Unavailable`] since these
//! endpoints are only reachable from the browser bundle.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status and decode failures are mapped into `fleet::ApiError`
//! and handed back to the shared flows, which log them and keep the page as
//! it was.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use fleet::{ApiError, NewVehicle, StatusPatch, Vehicle, VehicleApi};

#[cfg(any(test, feature = "csr"))]
use fleet::api::{vehicle_endpoint, vehicles_endpoint};

/// `VehicleApi` backed by the browser's `fetch`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserApi {
    base_url: String,
}

impl BrowserApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Client pointed at the base URL baked into this build.
    pub fn from_build_env() -> Self {
        Self::new(crate::config::api_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[cfg(any(test, feature = "csr"))]
    fn list_url(&self) -> String {
        vehicles_endpoint(&self.base_url)
    }

    #[cfg(any(test, feature = "csr"))]
    fn item_url(&self, id: &str) -> String {
        vehicle_endpoint(&self.base_url, id)
    }
}

#[cfg(any(test, feature = "csr"))]
fn status_error(status: u16, url: &str) -> ApiError {
    ApiError::Status { status, url: url.to_owned() }
}

#[cfg(feature = "csr")]
fn transport_error(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "csr")]
fn ensure_ok(resp: &gloo_net::http::Response, url: &str) -> Result<(), ApiError> {
    if resp.ok() { Ok(()) } else { Err(status_error(resp.status(), url)) }
}

#[async_trait(?Send)]
impl VehicleApi for BrowserApi {
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = self.list_url();
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(transport_error)?;
            ensure_ok(&resp, &url)?;
            resp.json::<Vec<Vehicle>>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn create_vehicle(&self, vehicle: &NewVehicle) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = self.list_url();
            let resp = gloo_net::http::Request::post(&url)
                .json(vehicle)
                .map_err(transport_error)?
                .send()
                .await
                .map_err(transport_error)?;
            ensure_ok(&resp, &url)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = vehicle;
            Err(ApiError::Unavailable)
        }
    }

    async fn update_status(&self, id: &str, patch: StatusPatch) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = self.item_url(id);
            let resp = gloo_net::http::Request::put(&url)
                .json(&patch)
                .map_err(transport_error)?
                .send()
                .await
                .map_err(transport_error)?;
            ensure_ok(&resp, &url)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, patch);
            Err(ApiError::Unavailable)
        }
    }
}
