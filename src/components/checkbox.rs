//! Checkbox Component

use leptos::prelude::*;

#[component]
pub fn CheckboxComponent(
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_change: Callback<()>,
) -> impl IntoView {
    view! {
        <input
            type="checkbox"
            class="checkbox"
            prop:checked=move || checked.get()
            on:change=move |_| on_change.run(())
        />
    }
}
