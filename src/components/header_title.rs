//! Header Title Component

use leptos::prelude::*;

#[component]
pub fn HeaderTitle(
    #[prop(into)] text: String,
    #[prop(optional, into)] font_size: Option<String>,
    #[prop(optional, into)] font_weight: Option<String>,
) -> impl IntoView {
    let style = format!(
        "font-size: {}; font-weight: {};",
        font_size.as_deref().unwrap_or("24px"),
        font_weight.as_deref().unwrap_or("bold")
    );
    view! { <p class="header-title" style=style>{text}</p> }
}
