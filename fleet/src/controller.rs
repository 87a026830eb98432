//! Dashboard controller: fetch-and-render, create and status-update flows.
//!
//! ERROR HANDLING
//! ==============
//! Every API failure is logged with `log::error!` and swallowed. The list is
//! left untouched on a failed fetch; a failed create leaves the modal open
//! with the typed draft. Return values only tell the caller what happened so
//! a front-end can decide whether to re-render.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::api::{ApiError, VehicleApi};
use crate::dashboard::DashboardState;
use crate::draft::DraftError;
use crate::vehicle::{NewVehicle, StatusPatch, Vehicle, VehicleStatus};

/// Fetch the full list, logging a failure. `None` means "keep what you have".
pub async fn load_vehicles<A: VehicleApi + ?Sized>(api: &A) -> Option<Vec<Vehicle>> {
    match api.list_vehicles().await {
        Ok(vehicles) => {
            log::debug!("fetched {} vehicles", vehicles.len());
            Some(vehicles)
        }
        Err(err) => {
            log::error!("error fetching vehicles: {err}");
            None
        }
    }
}

/// POST a new vehicle, logging a failure.
///
/// # Errors
///
/// Returns the [`ApiError`] after it has been logged.
pub async fn send_new_vehicle<A: VehicleApi + ?Sized>(api: &A, body: &NewVehicle) -> Result<(), ApiError> {
    api.create_vehicle(body).await.inspect_err(|err| log::error!("error adding vehicle: {err}"))
}

/// PUT a status-only update, logging a failure.
///
/// # Errors
///
/// Returns the [`ApiError`] after it has been logged.
pub async fn send_status<A: VehicleApi + ?Sized>(api: &A, id: &str, status: VehicleStatus) -> Result<(), ApiError> {
    api.update_status(id, StatusPatch { status })
        .await
        .inspect_err(|err| log::error!("error updating vehicle {id}: {err}"))
}

/// Result of submitting the add-vehicle form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend accepted the vehicle; draft reset, modal closed, list refreshed.
    Created,
    /// The draft failed the required-field check; no request was sent.
    Invalid(DraftError),
    /// The creation request failed; modal and draft are unchanged.
    Failed(ApiError),
}

/// Owns the dashboard state and runs its flows against a [`VehicleApi`].
pub struct Dashboard<A> {
    api: A,
    state: DashboardState,
}

impl<A: VehicleApi> Dashboard<A> {
    #[must_use]
    pub fn new(api: A) -> Self {
        Self { api, state: DashboardState::default() }
    }

    #[must_use]
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Initial load. Same as [`Dashboard::refresh`].
    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    /// Fetch the full list and replace local state with it.
    ///
    /// Returns `false` when the fetch failed and the list was left as is.
    pub async fn refresh(&mut self) -> bool {
        match load_vehicles(&self.api).await {
            Some(vehicles) => {
                self.state.replace_vehicles(vehicles);
                true
            }
            None => false,
        }
    }

    pub fn open_modal(&mut self) {
        self.state.open_modal();
    }

    pub fn cancel_modal(&mut self) {
        self.state.cancel_modal();
    }

    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        self.state.set_draft_name(name);
    }

    pub fn set_draft_status(&mut self, status: VehicleStatus) {
        self.state.set_draft_status(status);
    }

    /// Send the draft to the creation endpoint.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let body = match self.state.prepare_submit() {
            Ok(body) => body,
            Err(err) => {
                log::debug!("draft rejected: {err}");
                return SubmitOutcome::Invalid(err);
            }
        };

        match send_new_vehicle(&self.api, &body).await {
            Ok(()) => {
                self.state.create_succeeded();
                self.refresh().await;
                SubmitOutcome::Created
            }
            Err(err) => SubmitOutcome::Failed(err),
        }
    }

    /// Send a status-only update for `id`, then re-fetch.
    ///
    /// Returns `false` when the update failed; no re-fetch happens then.
    pub async fn change_status(&mut self, id: &str, status: VehicleStatus) -> bool {
        if send_status(&self.api, id, status).await.is_err() {
            return false;
        }
        self.refresh().await;
        true
    }
}
