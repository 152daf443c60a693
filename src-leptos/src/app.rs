//! Demo App: a generated list paged by the pagination control

use crate::components::Pagination;
use leptos::prelude::*;
use pagewin_core::{page_item_range, PaginationConfig};

const DEMO_ROWS: usize = 137;
const DEMO_PAGE_SIZE: usize = 10;

/// Root App component
#[component]
pub fn App() -> impl IntoView {
    let rows =
        StoredValue::new((1..=DEMO_ROWS).map(|i| format!("Row #{}", i)).collect::<Vec<_>>());
    let config = PaginationConfig::new(DEMO_ROWS).with_page_size(DEMO_PAGE_SIZE);
    let current_page = RwSignal::new(config.current);

    let on_change = Callback::new(move |page: usize| {
        log::debug!("Showing page {}", page);
        current_page.set(page);
    });

    // The caller owns the data; the control only reports which page to show
    let visible_rows = move || {
        let range = page_item_range(current_page.get(), config.page_size, DEMO_ROWS);
        rows.with_value(|all| all.get(range).map(<[String]>::to_vec).unwrap_or_default())
    };

    view! {
        <div class="app-container">
            <main class="main-content">
                <ul class="demo-rows">
                    {move || {
                        visible_rows()
                            .into_iter()
                            .map(|row| view! { <li>{row}</li> })
                            .collect_view()
                    }}
                </ul>
                <Pagination
                    total=Signal::derive(move || rows.with_value(Vec::len))
                    config=config
                    on_change=on_change
                />
            </main>
        </div>
    }
}
