//! Assets Page
//!
//! Asset inventory: header with the add button, paginated table and the
//! add/edit and delete modals.

use leptos::prelude::*;

use crate::components::{AssetFormModal, AssetTable, DeleteConfirmModal, PaginationBar};
use crate::store::{store_update_inventory, use_app_store};

#[component]
pub fn AssetsPage() -> impl IntoView {
    let store = use_app_store();

    // Modals and the page position belong to this page, not the session
    on_cleanup(move || store_update_inventory(&store, |inv| inv.reset_view()));

    view! {
        <section class="page">
            <div class="panel asset-header">
                <div>
                    <p class="eyebrow">"Asset Inventory"</p>
                    <h1>"Your Assets"</h1>
                </div>
                <button
                    class="btn-primary"
                    on:click=move |_| store_update_inventory(&store, |inv| inv.open_create())
                >
                    "Add New Asset"
                </button>
            </div>

            <div class="panel table-panel">
                <AssetTable />
                <PaginationBar />
            </div>

            <AssetFormModal />
            <DeleteConfirmModal />
        </section>
    }
}
