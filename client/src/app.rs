//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::dashboard::VehicleDashboard;

/// Root application component. The dashboard is the only page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Vehicle Dashboard"/>
        <VehicleDashboard/>
    }
}
