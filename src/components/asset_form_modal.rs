//! Asset Form Modal
//!
//! Add/edit dialog. An invalid submit simply leaves the dialog open.

use leptos::prelude::*;

use asset_inventory::{AssetForm, DraftField, FormMode, SubmitOutcome};

use crate::store::{store_read_inventory, store_update_inventory, use_app_store};

/// Label, placeholder and input type per draft field
const FIELDS: &[(DraftField, &str, &str, &str)] = &[
    (DraftField::Name, "Asset Name", "e.g. Sovereign Gold Bond", "text"),
    (DraftField::Category, "Category", "e.g. Commodity", "text"),
    (DraftField::Value, "Value (INR)", "e.g. 50000", "number"),
];

#[component]
pub fn AssetFormModal() -> impl IntoView {
    let store = use_app_store();
    let form = Memo::new(move |_| store_read_inventory(&store, |inv| inv.form().clone()));
    let is_create = move || form.with(|f| f.mode() == FormMode::OpenForCreate);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match store_update_inventory(&store, |inv| inv.submit_form()) {
            SubmitOutcome::Rejected(reason) => log::debug!("asset form kept open: {}", reason),
            SubmitOutcome::Stale(id) => log::warn!("asset {} disappeared while being edited", id),
            SubmitOutcome::Created(id) => log::info!("asset {} created", id),
            SubmitOutcome::Updated(id) => log::info!("asset {} updated", id),
            SubmitOutcome::NotOpen => {}
        }
    };

    view! {
        <Show when=move || form.with(AssetForm::is_open)>
            <div class="modal-backdrop" role="dialog" aria-modal="true">
                <form class="modal" on:submit=submit>
                    <h2>{move || if is_create() { "Add New Asset" } else { "Edit Asset" }}</h2>
                    {FIELDS.iter().map(|&(field, label, placeholder, input_type)| {
                        let id = match field {
                            DraftField::Name => "name",
                            DraftField::Category => "category",
                            DraftField::Value => "value",
                        };
                        view! {
                            <label for=id>{label}</label>
                            <input
                                id=id
                                name=id
                                type=input_type
                                min=(field == DraftField::Value).then_some("1")
                                placeholder=placeholder
                                required=true
                                prop:value=move || form.with(|f| f.draft().get(field).to_string())
                                on:input=move |ev| {
                                    let text = event_target_value(&ev);
                                    store_update_inventory(&store, |inv| inv.change_field(field, text));
                                }
                            />
                        }
                    }).collect_view()}

                    <div class="modal-actions">
                        <button
                            type="button"
                            class="btn-ghost"
                            on:click=move |_| store_update_inventory(&store, |inv| inv.cancel_form())
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-primary">
                            {move || if is_create() { "Save Asset" } else { "Update Asset" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
