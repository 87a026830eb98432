//! Vehicle dashboard page: summary counts, add-vehicle modal, vehicle table.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns one `RwSignal<DashboardState>`. Every user action runs the
//! shared `fleet` request helpers on the local executor and applies the
//! matching state transition when the request resolves:
//!
//! - mount            -> fetch, replace list
//! - submit           -> POST draft; on success reset + close, then fetch
//! - row status change -> PUT `{status}`; on success fetch
//!
//! Failures are logged by the helpers and leave the state untouched.
//! Overlapping fetches are not sequenced; whichever resolves last wins.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use fleet::{
    DashboardState, SubmitOutcome, VehicleApi, VehicleCounts, VehicleStatus, load_vehicles, send_new_vehicle,
    send_status,
};
use leptos::prelude::*;

use crate::components::add_vehicle_dialog::AddVehicleDialog;
use crate::components::stat_card::StatCard;
use crate::components::vehicle_table::VehicleTable;
use crate::net::api::BrowserApi;

/// One of the three summary cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stat {
    Total,
    Active,
    Maintenance,
}

const STATS: [Stat; 3] = [Stat::Total, Stat::Active, Stat::Maintenance];

impl Stat {
    fn label(self) -> &'static str {
        match self {
            Self::Total => "Total Vehicles",
            Self::Active => "Active Vehicles",
            Self::Maintenance => "In Maintenance",
        }
    }

    fn accent(self) -> Option<&'static str> {
        match self {
            Self::Total => None,
            Self::Active => Some("success"),
            Self::Maintenance => Some("warning"),
        }
    }

    fn pick(self, counts: VehicleCounts) -> usize {
        match self {
            Self::Total => counts.total,
            Self::Active => counts.active,
            Self::Maintenance => counts.maintenance,
        }
    }
}

/// Fetch the list and, if it arrived, replace the page's copy.
async fn reload<A: VehicleApi + ?Sized>(api: &A, state: RwSignal<DashboardState>) -> bool {
    match load_vehicles(api).await {
        Some(vehicles) => {
            state.update(|s| s.replace_vehicles(vehicles));
            true
        }
        None => false,
    }
}

/// Send the draft. On success the form is reset and closed and the list
/// re-fetched; on failure the form stays open with the typed values.
async fn submit_draft<A: VehicleApi + ?Sized>(api: &A, state: RwSignal<DashboardState>) -> SubmitOutcome {
    let body = match state.with_untracked(DashboardState::prepare_submit) {
        Ok(body) => body,
        Err(err) => {
            log::debug!("draft rejected: {err}");
            return SubmitOutcome::Invalid(err);
        }
    };
    if let Err(err) = send_new_vehicle(api, &body).await {
        return SubmitOutcome::Failed(err);
    }
    state.update(DashboardState::create_succeeded);
    reload(api, state).await;
    SubmitOutcome::Created
}

/// PUT the row's new status and re-fetch. A failed update skips the re-fetch.
async fn change_row_status<A: VehicleApi + ?Sized>(
    api: &A,
    state: RwSignal<DashboardState>,
    id: &str,
    status: VehicleStatus,
) -> bool {
    if send_status(api, id, status).await.is_err() {
        return false;
    }
    reload(api, state).await;
    true
}

/// The fleet dashboard.
#[component]
pub fn VehicleDashboard() -> impl IntoView {
    let state = RwSignal::new(DashboardState::default());
    let api = StoredValue::new(BrowserApi::from_build_env());

    // Fetch on mount.
    Effect::new(move || {
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            reload(&api, state).await;
        });
    });

    let on_open = move |_| state.update(DashboardState::open_modal);
    let on_cancel = Callback::new(move |()| state.update(DashboardState::cancel_modal));

    let on_submit = Callback::new(move |()| {
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            submit_draft(&api, state).await;
        });
    });

    let on_status_change = Callback::new(move |(id, status): (String, VehicleStatus)| {
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            change_row_status(&api, state, &id, status).await;
        });
    });

    let vehicles = Signal::derive(move || state.with(|s| s.vehicles.clone()));

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Vehicle Dashboard"</h1>
                <button class="btn btn--primary" on:click=on_open>
                    "Add Vehicle"
                </button>
            </header>

            <dl class="dashboard-page__stats">
                {STATS
                    .into_iter()
                    .map(|stat| {
                        let value = Signal::derive(move || stat.pick(state.with(DashboardState::counts)));
                        view! { <StatCard label=stat.label() value=value accent=stat.accent()/> }
                    })
                    .collect::<Vec<_>>()}
            </dl>

            <Show when=move || state.with(DashboardState::is_modal_open)>
                <AddVehicleDialog state=state on_submit=on_submit on_cancel=on_cancel/>
            </Show>

            <section class="dashboard-page__table">
                <VehicleTable vehicles=vehicles on_status_change=on_status_change/>
            </section>
        </div>
    }
}
