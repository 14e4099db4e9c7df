//! Asset Table Component
//!
//! Rows for the current page with edit and delete actions.

use leptos::prelude::*;

use asset_inventory::format_inr;

use crate::store::{store_read_inventory, store_update_inventory, use_app_store};

#[component]
pub fn AssetTable() -> impl IntoView {
    let store = use_app_store();
    let page = move || store_read_inventory(&store, |inv| inv.page_assets().to_vec());

    view! {
        <div class="asset-table">
            <div class="table-head">
                <span>"Asset Name"</span>
                <span>"Category"</span>
                <span>"Value"</span>
                <span>"Action"</span>
            </div>
            {move || page().into_iter().map(|asset| {
                let id = asset.id;
                view! {
                    <div class="table-row">
                        <span>{asset.name}</span>
                        <span>{asset.category}</span>
                        <strong>{format_inr(asset.value)}</strong>
                        <div class="action-group">
                            <button
                                type="button"
                                class="btn-ghost action-btn"
                                on:click=move |_| store_update_inventory(&store, |inv| inv.open_edit(id))
                            >
                                "Edit"
                            </button>
                            <button
                                type="button"
                                class="btn-danger action-btn"
                                on:click=move |_| store_update_inventory(&store, |inv| inv.request_delete(id))
                            >
                                "Delete"
                            </button>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
