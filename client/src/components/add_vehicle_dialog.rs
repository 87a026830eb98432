//! Modal form for adding a vehicle.

use fleet::{DashboardState, VehicleStatus};
use leptos::prelude::*;

use super::status_select::StatusSelect;

/// Add-vehicle modal bound to the page's draft.
///
/// The name input is `required`, so the browser blocks an empty submit before
/// `on_submit` runs; the shared draft check rejects it again regardless.
#[component]
pub fn AddVehicleDialog(
    state: RwSignal<DashboardState>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let draft_status = Signal::derive(move || state.with(|s| s.draft.status));
    let on_status = Callback::new(move |status: VehicleStatus| state.update(|s| s.set_draft_status(status)));

    view! {
        <div class="dialog-backdrop">
            <div class="dialog">
                <h2>"Add New Vehicle"</h2>
                <form
                    class="dialog__form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        on_submit.run(());
                    }
                >
                    <label class="dialog__label">
                        "Vehicle Name"
                        <input
                            class="dialog__input"
                            type="text"
                            required=true
                            prop:value=move || state.with(|s| s.draft.name.clone())
                            on:input=move |ev| {
                                let name = event_target_value(&ev);
                                state.update(|s| s.set_draft_name(name));
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Status"
                        <StatusSelect value=draft_status on_change=on_status input_class="dialog__input"/>
                    </label>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary">
                            "Add Vehicle"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
