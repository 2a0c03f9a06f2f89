//! Search Input Component
//!
//! Reports every edit; debouncing happens in the dashboard.

use leptos::prelude::*;

#[component]
pub fn SearchInput(
    #[prop(into)] placeholder: String,
    #[prop(into)] on_search: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="search-input">
            <input
                type="search"
                placeholder=placeholder
                autocomplete="off"
                on:input=move |ev| on_search.run(event_target_value(&ev))
            />
            <span class="search-icon">"⌕"</span>
        </div>
    }
}
