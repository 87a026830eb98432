//! `VehicleApi` over `reqwest`.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use async_trait::async_trait;
use fleet::api::{vehicle_endpoint, vehicles_endpoint};
use fleet::{ApiError, NewVehicle, StatusPatch, Vehicle, VehicleApi};
use reqwest::{Client, Response};

use crate::config::CliConfig;

pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(config: &CliConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, base_url: config.api_url.clone() })
    }
}

fn request_error(err: reqwest::Error) -> ApiError {
    if err.is_decode() {
        ApiError::Decode(err.to_string())
    } else {
        ApiError::Transport(err.to_string())
    }
}

fn ensure_success(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(ApiError::Status { status: status.as_u16(), url: resp.url().to_string() })
    }
}

#[async_trait(?Send)]
impl VehicleApi for HttpApi {
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, ApiError> {
        let url = vehicles_endpoint(&self.base_url);
        tracing::debug!(%url, "GET");
        let resp = self.client.get(&url).send().await.map_err(request_error)?;
        ensure_success(resp)?
            .json::<Vec<Vehicle>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create_vehicle(&self, vehicle: &NewVehicle) -> Result<(), ApiError> {
        let url = vehicles_endpoint(&self.base_url);
        tracing::debug!(%url, name = %vehicle.name, status = %vehicle.status, "POST");
        let resp = self
            .client
            .post(&url)
            .json(vehicle)
            .send()
            .await
            .map_err(request_error)?;
        ensure_success(resp).map(drop)
    }

    async fn update_status(&self, id: &str, patch: StatusPatch) -> Result<(), ApiError> {
        let url = vehicle_endpoint(&self.base_url, id);
        tracing::debug!(%url, status = %patch.status, "PUT");
        let resp = self
            .client
            .put(&url)
            .json(&patch)
            .send()
            .await
            .map_err(request_error)?;
        ensure_success(resp).map(drop)
    }
}
