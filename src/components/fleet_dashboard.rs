//! Fleet Dashboard Component
//!
//! Filter dropdown, debounced search, the location table and the page
//! selector. Loads on mount and whenever the filter or the settled search
//! text changes.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos_debounce::use_debounced;

use crate::components::{CustomPagination, DropdownMenu, HeaderTitle, LocationTable, SearchInput};
use crate::context::use_dashboard;
use crate::controller::LocationListStateStoreFields;
use crate::models::LocationFilter;

/// Log lines shown under a failed load.
const LOG_TAIL_LINES: usize = 20;

fn recent_log_tail() -> String {
    let lines = console_logger::recent_lines();
    let start = lines.len().saturating_sub(LOG_TAIL_LINES);
    lines[start..].join("\n")
}

#[component]
pub fn FleetDashboard() -> impl IntoView {
    let ctx = use_dashboard();
    let store = ctx.store;

    let filter = Memo::new(move |_| store.filter().get());
    let search_query = Memo::new(move |_| store.search_query().get());
    let debounced_search = use_debounced(search_query, ctx.search_debounce_ms);

    // Load on mount and whenever the filter or the settled search changes
    Effect::new(move |_| {
        let filter = filter.get();
        let search = debounced_search.get();
        log::debug!("[APP] Reloading for filter={} search={:?}", filter, search);
        ctx.load(search);
    });

    let page = Memo::new(move |_| store.with(|state| state.page_view()));
    let all_active = Memo::new(move |_| store.with(|state| state.all_active()));
    let pending_stars = Memo::new(move |_| {
        store
            .pending_star_writes()
            .with(|pending| pending.keys().copied().collect::<HashSet<u32>>())
    });
    let loading = Memo::new(move |_| store.loading().get());
    let last_error = Memo::new(move |_| store.last_error().get());

    let filter_options: Vec<String> = LocationFilter::ALL
        .iter()
        .map(|filter| filter.label().to_string())
        .collect();

    view! {
        <div class="fleet-dashboard">
            <HeaderTitle text="Your Fleet" font_size="24px" font_weight="bold" />
            <div class="dashboard-header">
                <DropdownMenu
                    options=filter_options
                    value=Signal::derive(move || filter.get().label().to_string())
                    on_change=move |label: String| {
                        if let Some(filter) = LocationFilter::from_label(&label) {
                            ctx.set_filter(filter);
                        }
                    }
                />
                <SearchInput
                    placeholder="Search robot or location"
                    on_search=move |query: String| ctx.set_search_query(query)
                />
            </div>

            {move || last_error.get().map(|message| view! {
                <div class="error-banner">
                    <span>{message}</span>
                    <button class="retry-btn" on:click=move |_| ctx.retry()>"Retry"</button>
                    <details class="error-details">
                        <summary>"Details"</summary>
                        <pre>{recent_log_tail()}</pre>
                    </details>
                </div>
            })}

            {move || if loading.get() {
                view! { <p class="loading">"Loading..."</p> }.into_any()
            } else {
                view! {
                    <LocationTable
                        rows=Signal::derive(move || page.get().rows)
                        all_active=all_active
                        pending_stars=pending_stars
                        on_toggle_all=move |_: ()| ctx.toggle_active_all()
                        on_toggle_active=move |id: u32| ctx.toggle_active(id)
                        on_toggle_star=move |id: u32| ctx.toggle_star(id)
                        on_open=move |id: u32| log::info!("[APP] Open location {}", id)
                        on_assign_robot=move |id: u32| log::info!("[APP] Assign robot to location {}", id)
                    />
                    <Show when=move || page.with(|page| page.is_empty_result())>
                        <p class="no-results">"No results"</p>
                    </Show>
                    <CustomPagination
                        page_count=Signal::derive(move || page.with(|page| page.page_count))
                        page=Signal::derive(move || page.with(|page| page.current_page))
                        on_change=move |number: usize| ctx.set_page(number)
                    />
                }.into_any()
            }}
        </div>
    }
}
