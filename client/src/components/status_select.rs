//! Status `<select>` shared by the add-vehicle form and the table rows.

#[cfg(test)]
#[path = "status_select_test.rs"]
mod status_select_test;

use fleet::VehicleStatus;
use leptos::prelude::*;

/// Map a `<select>` value back to a status. Only the three offered options
/// parse, so anything else is dropped.
pub fn parse_select_value(raw: &str) -> Option<VehicleStatus> {
    raw.parse().ok()
}

/// Report a pick through `on_pick`, then return the option the control must
/// show: whatever `current` holds once the owner has reacted. A change the
/// owner does not apply therefore snaps back.
pub fn commit_selection(
    raw: &str,
    on_pick: impl FnOnce(VehicleStatus),
    current: impl FnOnce() -> VehicleStatus,
) -> &'static str {
    if let Some(status) = parse_select_value(raw) {
        on_pick(status);
    }
    current().as_str()
}

/// Controlled selector offering exactly the three statuses. The displayed
/// option always follows `value`.
#[component]
pub fn StatusSelect(
    value: Signal<VehicleStatus>,
    on_change: Callback<VehicleStatus>,
    #[prop(optional)] input_class: Option<&'static str>,
) -> impl IntoView {
    let class = input_class.unwrap_or("status-select");
    let select_ref = NodeRef::<leptos::html::Select>::new();

    view! {
        <select
            class=class
            node_ref=select_ref
            prop:value=move || value.get().as_str()
            on:change=move |ev| {
                let shown = commit_selection(
                    &event_target_value(&ev),
                    |status| on_change.run(status),
                    || value.get_untracked(),
                );
                if let Some(select) = select_ref.get_untracked() {
                    select.set_value(shown);
                }
            }
        >
            {VehicleStatus::ALL
                .into_iter()
                .map(|status| {
                    view! {
                        <option value=status.as_str() selected=move || value.get() == status>
                            {status.label()}
                        </option>
                    }
                })
                .collect::<Vec<_>>()}
        </select>
    }
}
