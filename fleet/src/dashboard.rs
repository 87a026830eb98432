//! Dashboard view state: the vehicle list, the add-vehicle modal and its draft.
//!
//! DESIGN
//! ======
//! Transitions here are synchronous and never touch the network. The
//! controller and the Leptos page both drive the same transitions; only the
//! place the state lives differs (`&mut` field vs. `RwSignal`).

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::draft::{Draft, DraftError};
use crate::vehicle::{NewVehicle, Vehicle, VehicleStatus};

/// Visibility of the add-vehicle modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    Open,
}

/// Summary figures shown above the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VehicleCounts {
    pub total: usize,
    pub active: usize,
    pub maintenance: usize,
}

impl VehicleCounts {
    /// Count vehicles in one pass over the list.
    #[must_use]
    pub fn tally(vehicles: &[Vehicle]) -> Self {
        vehicles.iter().fold(
            Self { total: vehicles.len(), ..Self::default() },
            |mut counts, vehicle| {
                match vehicle.status {
                    VehicleStatus::Active => counts.active += 1,
                    VehicleStatus::Maintenance => counts.maintenance += 1,
                    VehicleStatus::Inactive => {}
                }
                counts
            },
        )
    }
}

/// Everything the dashboard renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub vehicles: Vec<Vehicle>,
    pub draft: Draft,
    pub modal: Modal,
}

impl DashboardState {
    /// Replace the list with a fresh fetch result, verbatim.
    pub fn replace_vehicles(&mut self, vehicles: Vec<Vehicle>) {
        self.vehicles = vehicles;
    }

    pub fn open_modal(&mut self) {
        self.modal = Modal::Open;
    }

    /// Close the modal and discard the draft.
    pub fn cancel_modal(&mut self) {
        self.modal = Modal::Closed;
        self.draft.reset();
    }

    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_draft_status(&mut self, status: VehicleStatus) {
        self.draft.status = status;
    }

    /// Validate the draft into a creation request. State is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::NameRequired`] when the draft name is empty.
    pub fn prepare_submit(&self) -> Result<NewVehicle, DraftError> {
        self.draft.to_request()
    }

    /// Apply a successful creation: reset the draft and close the modal.
    pub fn create_succeeded(&mut self) {
        self.draft.reset();
        self.modal = Modal::Closed;
    }

    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.modal == Modal::Open
    }

    #[must_use]
    pub fn counts(&self) -> VehicleCounts {
        VehicleCounts::tally(&self.vehicles)
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }
}
