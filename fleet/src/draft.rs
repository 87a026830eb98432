//! Unsaved input for the add-vehicle form.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use crate::vehicle::{NewVehicle, VehicleStatus};

/// Why a draft cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("vehicle name is required")]
    NameRequired,
}

/// Form fields of the add-vehicle modal. Defaults to `{ "", active }`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub status: VehicleStatus,
}

impl Draft {
    /// Build the creation request body.
    ///
    /// Only an empty name is rejected, matching an HTML `required` input.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::NameRequired`] when `name` is empty.
    pub fn to_request(&self) -> Result<NewVehicle, DraftError> {
        if self.name.is_empty() {
            return Err(DraftError::NameRequired);
        }
        Ok(NewVehicle { name: self.name.clone(), status: self.status })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
