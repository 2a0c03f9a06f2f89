//! Pagination Component
//!
//! Page selector with previous/next buttons. Long ranges collapse into the
//! first page, the last page, the current page with one sibling on each side,
//! and ellipses in between.

use leptos::prelude::*;

/// Up to this many pages are always listed in full.
const FULL_RANGE_MAX: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Items to render for `count` pages with `current` selected (1-based).
pub fn page_items(current: usize, count: usize) -> Vec<PageItem> {
    if count <= FULL_RANGE_MAX {
        return (1..=count).map(PageItem::Page).collect();
    }
    let current = current.clamp(1, count);
    let (start, end) = if current <= 4 {
        (2, 5)
    } else if current >= count - 3 {
        (count - 4, count - 1)
    } else {
        (current - 1, current + 1)
    };

    let mut items = vec![PageItem::Page(1)];
    if start > 2 {
        items.push(PageItem::Ellipsis);
    }
    items.extend((start..=end).map(PageItem::Page));
    if end < count - 1 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(count));
    items
}

#[component]
pub fn CustomPagination(
    #[prop(into)] page_count: Signal<usize>,
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] on_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || { page_count.get() > 0 }>
            <nav class="pagination">
                <button
                    class="page-btn"
                    disabled=move || page.get() <= 1
                    on:click=move |_| on_change.run(page.get_untracked().saturating_sub(1))
                >
                    "‹"
                </button>
                {move || {
                    let current = page.get();
                    page_items(current, page_count.get())
                        .into_iter()
                        .map(|item| match item {
                            PageItem::Page(number) => view! {
                                <button
                                    class=if number == current { "page-btn active" } else { "page-btn" }
                                    on:click=move |_| on_change.run(number)
                                >
                                    {number}
                                </button>
                            }
                            .into_any(),
                            PageItem::Ellipsis => view! { <span class="page-ellipsis">"…"</span> }.into_any(),
                        })
                        .collect_view()
                }}
                <button
                    class="page-btn"
                    disabled=move || page.get() >= page_count.get()
                    on:click=move |_| on_change.run(page.get_untracked() + 1)
                >
                    "›"
                </button>
            </nav>
        </Show>
    }
}
