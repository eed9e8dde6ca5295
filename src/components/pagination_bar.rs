//! Pagination Bar Component
//!
//! Page-size selector and first/prev/next/last controls for server-paged
//! sources; a plain record count for snapshots.

use leptos::prelude::*;

use crate::pagination::Pagination;
use crate::table::PaginationMode;

#[component]
pub fn PaginationBar(
    #[prop(into)] mode: Signal<PaginationMode>,
    pagination: Pagination,
    page_size_options: Vec<u32>,
) -> impl IntoView {
    let total_pages = move || mode.get().total_pages();
    let paged = Memo::new(move |_| mode.get().shows_page_controls());

    view! {
        {move || {
            if !paged.get() {
                return view! {
                    <div class="pagination-bar snapshot">
                        <span class="record-count">{move || format!("{} record(s)", mode.get().total_records())}</span>
                    </div>
                }
                    .into_any();
            }
            let options = page_size_options.clone();
            view! {
                <div class="pagination-bar">
                    <span class="record-count">{move || format!("{} record(s)", mode.get().total_records())}</span>
                    <label class="page-size">
                        "Rows per page"
                        <select
                            prop:value=move || pagination.page_size().to_string()
                            on:change=move |ev| {
                                if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                                    pagination.set_page_size(size);
                                }
                            }
                        >
                            {options
                                .into_iter()
                                .map(|size| view! { <option value=size.to_string()>{size.to_string()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <span class="page-indicator">
                        {move || format!("Page {} of {}", pagination.current(), total_pages().max(1))}
                    </span>
                    <div class="page-buttons">
                        <button
                            title="Go to first page"
                            disabled=move || !pagination.can_go_previous()
                            on:click=move |_| pagination.first()
                        >
                            "«"
                        </button>
                        <button
                            title="Go to previous page"
                            disabled=move || !pagination.can_go_previous()
                            on:click=move |_| pagination.previous(total_pages())
                        >
                            "‹"
                        </button>
                        <button
                            title="Go to next page"
                            disabled=move || !pagination.can_go_next(total_pages())
                            on:click=move |_| pagination.next(total_pages())
                        >
                            "›"
                        </button>
                        <button
                            title="Go to last page"
                            disabled=move || !pagination.can_go_next(total_pages())
                            on:click=move |_| pagination.last(total_pages())
                        >
                            "»"
                        </button>
                    </div>
                </div>
            }
                .into_any()
        }}
    }
}
