//! Delete Confirm Modal
//!
//! Asks "are you sure" for the asset pending deletion.

use leptos::prelude::*;

use crate::store::{store_read_inventory, store_update_inventory, use_app_store};

#[component]
pub fn DeleteConfirmModal() -> impl IntoView {
    let store = use_app_store();
    let pending = Memo::new(move |_| store_read_inventory(&store, |inv| inv.deletion().pending().cloned()));

    let confirm = move |_| {
        if let Some(removed) = store_update_inventory(&store, |inv| inv.confirm_delete()) {
            log::info!("asset {} deleted", removed.id);
        }
    };

    move || pending.get().map(|asset| view! {
        <div class="modal-backdrop" role="dialog" aria-modal="true">
            <div class="modal">
                <h2>"Delete Asset"</h2>
                <p>
                    "Are you sure you want to delete " <strong>{asset.name}</strong> "?"
                </p>
                <div class="modal-actions">
                    <button
                        type="button"
                        class="btn-ghost"
                        on:click=move |_| store_update_inventory(&store, |inv| inv.cancel_delete())
                    >
                        "No"
                    </button>
                    <button type="button" class="btn-danger" on:click=confirm>
                        "Yes"
                    </button>
                </div>
            </div>
        </div>
    })
}
