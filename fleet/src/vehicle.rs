//! Vehicle wire model.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON (`_id`, `updatedAt`) through serde
//! renames so the Rust side keeps snake_case. `status` is a closed enum: the
//! selectors only ever offer these three values.

#[cfg(test)]
#[path = "vehicle_test.rs"]
mod vehicle_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, UtcOffset};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

/// Lifecycle status of a vehicle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    /// In service.
    #[default]
    Active,
    /// Temporarily out of service for repairs.
    Maintenance,
    /// Not in service.
    Inactive,
}

impl VehicleStatus {
    /// Every status in selector order.
    pub const ALL: [Self; 3] = [Self::Active, Self::Maintenance, Self::Inactive];

    /// Wire value (`"active"`, `"maintenance"`, `"inactive"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Maintenance => "maintenance",
            Self::Inactive => "inactive",
        }
    }

    /// Human-readable selector label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Maintenance => "Maintenance",
            Self::Inactive => "Inactive",
        }
    }

    /// Badge colour for this status.
    #[must_use]
    pub fn tone(self) -> StatusTone {
        match self {
            Self::Active => StatusTone::Success,
            Self::Maintenance => StatusTone::Warning,
            Self::Inactive => StatusTone::Danger,
        }
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the three wire values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown vehicle status `{0}` (expected active, maintenance or inactive)")]
pub struct ParseStatusError(pub String);

impl FromStr for VehicleStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "maintenance" => Ok(Self::Maintenance),
            "inactive" => Ok(Self::Inactive),
            other => Err(ParseStatusError(other.to_owned())),
        }
    }
}

/// Colour family used to render a status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    /// Green.
    Success,
    /// Yellow.
    Warning,
    /// Red.
    Danger,
}

/// A vehicle as returned by `GET /api/vehicles`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Backend-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub status: VehicleStatus,
    /// Backend-assigned RFC 3339 timestamp; display only.
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Body of `POST /api/vehicles`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVehicle {
    pub name: String,
    pub status: VehicleStatus,
}

/// Body of `PUT /api/vehicles/{id}`. Carries the status and nothing else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPatch {
    pub status: VehicleStatus,
}

/// Placeholder shown when `updatedAt` is missing or not a valid timestamp.
pub const INVALID_DATE: &str = "Invalid Date";

/// Offset of the viewer's local time zone, or UTC when it cannot be read.
///
/// On Unix the lookup fails once the process has more than one thread, so
/// native callers should read it at startup and pass it to
/// [`format_updated_at_in`].
#[must_use]
pub fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

/// Render an `updatedAt` value for the "Last Updated" column in local time.
#[must_use]
pub fn format_updated_at(raw: Option<&str>) -> String {
    format_updated_at_in(raw, local_offset())
}

/// Render an `updatedAt` value as `YYYY-MM-DD HH:MM:SS` at `offset`.
#[must_use]
pub fn format_updated_at_in(raw: Option<&str>, offset: UtcOffset) -> String {
    let Some(raw) = raw else {
        return INVALID_DATE.to_owned();
    };
    let display = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    OffsetDateTime::parse(raw, &Rfc3339)
        .ok()
        .and_then(|ts| ts.to_offset(offset).format(&display).ok())
        .unwrap_or_else(|| INVALID_DATE.to_owned())
}
