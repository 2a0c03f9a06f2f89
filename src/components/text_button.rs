//! Text Button Component

use leptos::prelude::*;

const DEFAULT_COLOR: &str = "#0091FF";

/// Borderless button that looks like a link
#[component]
pub fn TextButton(
    #[prop(into)] label: String,
    #[prop(into)] on_click: Callback<()>,
    #[prop(optional, into)] color: Option<String>,
    #[prop(optional)] underline: bool,
) -> impl IntoView {
    let style = format!(
        "color: {}; text-decoration: {};",
        color.as_deref().unwrap_or(DEFAULT_COLOR),
        if underline { "underline" } else { "none" }
    );
    view! {
        <button class="text-btn" style=style on:click=move |_| on_click.run(())>
            {label}
        </button>
    }
}
