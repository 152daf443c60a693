//! Pagination component

use leptos::prelude::*;
use pagewin_core::{PageClick, PagerView, PaginationConfig, Paginator};

#[component]
pub fn Pagination(
    /// Total item count
    #[prop(into)]
    total: Signal<usize>,
    /// Page size, starting page and display options (`total` is overridden)
    #[prop(optional)]
    config: PaginationConfig,
    /// Called with the new page on every accepted page change
    #[prop(into)]
    on_change: Callback<usize>,
) -> impl IntoView {
    let notify = move |page: usize| on_change.run(page);
    let paginator =
        RwSignal::new(Paginator::new(config.with_total(total.get_untracked()), notify));

    // Rebuild when the item count changes, staying on the same page if it still exists
    Effect::new(move |_| {
        let total = total.get();
        let (known_total, current) =
            paginator.with_untracked(|p| (p.config().total, p.current_page()));
        if known_total != total {
            log::debug!("Pagination total changed: {} -> {}", known_total, total);
            paginator.set(Paginator::new(config.with_total(total).with_current(current), notify));
        }
    });

    let click = move |click: PageClick| paginator.update(|p| p.click(click));

    move || paginator.with(|p| p.view()).map(|frame| render_frame(frame, click))
}

fn render_frame(
    frame: PagerView,
    click: impl Fn(PageClick) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let PagerView { prev, items, next } = frame;

    view! {
        <div class="pagination-w">
            <span class=prev.class() on:click=move |_| click(prev.click())>
                "‹"
            </span>

            {items
                .into_iter()
                .map(|item| match item.click() {
                    Some(page_click) => view! {
                        <span class=item.class() on:click=move |_| click(page_click)>
                            {item.marker.to_string()}
                        </span>
                    }
                    .into_any(),
                    None => view! { <span class=item.class()>"..."</span> }.into_any(),
                })
                .collect_view()}

            <span class=next.class() on:click=move |_| click(next.click())>
                "›"
            </span>
        </div>
    }
}
