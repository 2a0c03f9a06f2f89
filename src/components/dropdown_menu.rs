//! Dropdown Menu Component
//!
//! Select over a fixed option set.

use leptos::prelude::*;

#[component]
pub fn DropdownMenu(
    options: Vec<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="dropdown"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            {options.into_iter().map(|option| {
                let current = option.clone();
                let label = option.clone();
                view! {
                    <option value=option selected=move || value.get() == current>
                        {label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
