//! Star Button Component
//!
//! Filled star for favorites. Dimmed while the star is being saved.

use leptos::prelude::*;

#[component]
pub fn StarButton(
    #[prop(into)] starred: Signal<bool>,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class=move || match (starred.get(), pending.get()) {
                (_, true) => "star-btn pending",
                (true, false) => "star-btn starred",
                (false, false) => "star-btn",
            }
            title=move || if starred.get() { "Unstar" } else { "Star" }
            on:click=move |ev| {
                ev.stop_propagation();
                on_click.run(());
            }
        >
            {move || if starred.get() { "★" } else { "☆" }}
        </button>
    }
}
