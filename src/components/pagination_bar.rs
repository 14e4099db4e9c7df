//! Pagination Bar Component
//!
//! Previous/next buttons and one button per page.

use leptos::prelude::*;

use asset_inventory::Pagination;

use crate::store::{store_read_inventory, store_update_inventory, use_app_store};

#[component]
pub fn PaginationBar() -> impl IntoView {
    let store = use_app_store();
    let pagination = Memo::new(move |_| store_read_inventory(&store, |inv| *inv.pagination()));

    let page_buttons = move || {
        let current = pagination.with(Pagination::current_page);
        pagination.with(Pagination::pages).map(|page| {
            let class = if page == current { "page-number active" } else { "page-number" };
            view! {
                <button
                    type="button"
                    class=class
                    on:click=move |_| store_update_inventory(&store, |inv| inv.go_to_page(page))
                >
                    {page}
                </button>
            }
        }).collect_view()
    };

    view! {
        <div class="pagination">
            <button
                type="button"
                class="btn-ghost page-btn"
                disabled=move || !pagination.with(Pagination::has_previous)
                on:click=move |_| store_update_inventory(&store, |inv| inv.previous_page())
            >
                "Previous"
            </button>
            <div class="page-numbers">{page_buttons}</div>
            <button
                type="button"
                class="btn-ghost page-btn"
                disabled=move || !pagination.with(Pagination::has_next)
                on:click=move |_| store_update_inventory(&store, |inv| inv.next_page())
            >
                "Next"
            </button>
        </div>
    }
}
