//! Fleet Dashboard App
//!
//! Builds the store client and the dashboard store, and provides them to
//! the component tree.

use leptos::prelude::*;

use crate::api;
use crate::components::FleetDashboard;
use crate::config::DashboardConfig;
use crate::context::DashboardContext;
use crate::store::create_dashboard_store;

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let store = create_dashboard_store(config.page_size);
    let api = api::connect(&config);

    // Provide context to all children
    provide_context(DashboardContext::new(store, api, config.search_debounce_ms));

    view! {
        <main class="app-layout">
            <FleetDashboard />
        </main>
    }
}
