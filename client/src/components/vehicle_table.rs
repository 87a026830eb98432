//! Four-column vehicle table: name, status badge, last update, status selector.

#[cfg(test)]
#[path = "vehicle_table_test.rs"]
mod vehicle_table_test;

use fleet::{Vehicle, VehicleStatus, format_updated_at};
use leptos::prelude::*;

use super::status_badge::StatusBadge;
use super::status_select::StatusSelect;

/// Current status of row `id` in the latest list, if the row still exists.
pub fn row_status(vehicles: &[Vehicle], id: &str) -> Option<VehicleStatus> {
    vehicles.iter().find(|v| v.id == id).map(|v| v.status)
}

/// Vehicle rows in server order. Changing a row's selector reports
/// `(id, status)` immediately.
#[component]
pub fn VehicleTable(
    vehicles: Signal<Vec<Vehicle>>,
    on_status_change: Callback<(String, VehicleStatus)>,
) -> impl IntoView {
    view! {
        <div class="vehicle-table">
            <div class="vehicle-table__head">
                <span>"Vehicle Names"</span>
                <span>"Status"</span>
                <span>"Last Updated"</span>
                <span>"Actions"</span>
            </div>
            <For
                each=move || vehicles.get()
                key=|vehicle| (vehicle.id.clone(), vehicle.status, vehicle.updated_at.clone())
                children=move |vehicle: Vehicle| {
                    let id = vehicle.id.clone();
                    let status = vehicle.status;
                    let row_id = vehicle.id.clone();
                    let current = Signal::derive(move || {
                        vehicles.with(|list| row_status(list, &row_id)).unwrap_or(status)
                    });
                    let on_change = Callback::new(move |next: VehicleStatus| {
                        on_status_change.run((id.clone(), next));
                    });
                    view! {
                        <div class="vehicle-table__row">
                            <span class="vehicle-table__name">{vehicle.name.clone()}</span>
                            <span><StatusBadge status=status/></span>
                            <span class="vehicle-table__updated">
                                {format_updated_at(vehicle.updated_at.as_deref())}
                            </span>
                            <span>
                                <StatusSelect value=current on_change=on_change/>
                            </span>
                        </div>
                    }
                }
            />
        </div>
    }
}
