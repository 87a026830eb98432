//! Summary figure card shown above the vehicle table.

use leptos::prelude::*;

/// A labelled count. `accent` adds a colour modifier to the figure.
#[component]
pub fn StatCard(
    label: &'static str,
    value: Signal<usize>,
    accent: Option<&'static str>,
) -> impl IntoView {
    let value_class = match accent {
        Some(accent) => format!("stat-card__value stat-card__value--{accent}"),
        None => "stat-card__value".to_owned(),
    };

    view! {
        <div class="stat-card">
            <dt class="stat-card__label">{label}</dt>
            <dd class=value_class>{move || value.get()}</dd>
        </div>
    }
}
