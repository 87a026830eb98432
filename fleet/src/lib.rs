//! Shared vehicle model and dashboard flows for the fleet UIs.
//!
//! This crate owns everything the browser (`client`) and terminal (`cli`)
//! front-ends have in common: the wire representation of a vehicle, the
//! new-vehicle draft, the dashboard state (list, counts, modal), and the
//! [`Dashboard`] controller that runs the fetch/create/update flows against
//! any [`VehicleApi`] transport.
//!
//! ERROR HANDLING
//! ==============
//! Network failures never escape the controller. Every failed call is written
//! to the `log` facade and the prior state is left as it was; callers install
//! whatever logger fits their platform.

pub mod api;
pub mod controller;
pub mod dashboard;
pub mod draft;
pub mod vehicle;

pub use api::{ApiError, DEFAULT_API_BASE_URL, VehicleApi};
pub use controller::{Dashboard, SubmitOutcome, load_vehicles, send_new_vehicle, send_status};
pub use dashboard::{DashboardState, Modal, VehicleCounts};
pub use draft::{Draft, DraftError};
pub use time::UtcOffset;
pub use vehicle::{
    NewVehicle, ParseStatusError, StatusPatch, StatusTone, Vehicle, VehicleStatus, format_updated_at,
    format_updated_at_in, local_offset,
};
