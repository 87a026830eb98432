//! Coloured pill showing a vehicle's status.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use fleet::{StatusTone, VehicleStatus};
use leptos::prelude::*;

/// CSS class for a status badge: green, yellow or red by tone.
pub fn badge_class(status: VehicleStatus) -> &'static str {
    match status.tone() {
        StatusTone::Success => "status-badge status-badge--success",
        StatusTone::Warning => "status-badge status-badge--warning",
        StatusTone::Danger => "status-badge status-badge--danger",
    }
}

#[component]
pub fn StatusBadge(status: VehicleStatus) -> impl IntoView {
    view! { <span class=badge_class(status)>{status.as_str()}</span> }
}
