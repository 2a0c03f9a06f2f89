//! Large Button Component
//!
//! Full-width labeled button, highlighted while active.

use leptos::prelude::*;

#[component]
pub fn LargeButton(
    #[prop(into)] label: String,
    #[prop(into)] is_active: Signal<bool>,
    #[prop(into)] on_click: Callback<()>,
    /// Show a trailing arrow after the label
    #[prop(optional)]
    has_right_arrow: bool,
) -> impl IntoView {
    view! {
        <button
            class=move || if is_active.get() { "large-btn active" } else { "large-btn" }
            on:click=move |_| on_click.run(())
        >
            <span class="large-btn-label">{label}</span>
            {has_right_arrow.then(|| view! { <span class="large-btn-arrow">"›"</span> })}
        </button>
    }
}
