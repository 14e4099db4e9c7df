//! Asset Inventory
//!
//! Owns the store and the three controllers for the assets page. Every store
//! mutation goes through here so the page clamp and the audit log always run
//! right after it.

use crate::asset::{Asset, AssetFields, AssetId};
use crate::audit::{AuditAction, AuditLog};
use crate::config::DashboardConfig;
use crate::deletion::DeleteConfirmation;
use crate::form::{AssetForm, DraftField, SubmitOutcome};
use crate::pagination::Pagination;
use crate::store::AssetStore;

#[derive(Debug, Clone, Default)]
pub struct AssetInventory {
    store: AssetStore,
    form: AssetForm,
    pagination: Pagination,
    deletion: DeleteConfirmation,
    audit: AuditLog,
}

impl AssetInventory {
    pub fn new(assets: Vec<Asset>, page_size: usize) -> Self {
        let store = AssetStore::with_assets(assets);
        let pagination = Pagination::new(page_size, store.len());
        Self {
            store,
            pagination,
            ..Default::default()
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.assets.clone(), config.page_size)
    }

    // ========================
    // Read access
    // ========================

    pub fn assets(&self) -> &[Asset] {
        self.store.list()
    }

    pub fn store(&self) -> &AssetStore {
        &self.store
    }

    pub fn form(&self) -> &AssetForm {
        &self.form
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn deletion(&self) -> &DeleteConfirmation {
        &self.deletion
    }

    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }

    /// Records on the current page
    pub fn page_assets(&self) -> &[Asset] {
        self.pagination.page_slice(self.store.list())
    }

    pub fn total_value(&self) -> f64 {
        self.store.total_value()
    }

    // ========================
    // Store mutations
    // ========================

    pub fn add(&mut self, fields: AssetFields) -> AssetId {
        let id = self.store.add(fields);
        self.record(AuditAction::Added, id);
        self.sync_pages();
        id
    }

    pub fn update(&mut self, id: AssetId, fields: AssetFields) {
        if self.store.update(id, fields) {
            self.record(AuditAction::Updated, id);
        }
    }

    pub fn remove(&mut self, id: AssetId) {
        if let Some(removed) = self.store.remove(id) {
            self.audit.record(AuditAction::Removed, &removed);
            self.sync_pages();
        }
    }

    // ========================
    // Form
    // ========================

    pub fn open_create(&mut self) {
        self.form.open_create();
    }

    /// Open the edit modal for `id`; ignored if the record is gone
    pub fn open_edit(&mut self, id: AssetId) {
        if let Some(asset) = self.store.get(id) {
            self.form.open_edit(asset);
        }
    }

    pub fn change_field(&mut self, field: DraftField, text: impl Into<String>) {
        self.form.change_field(field, text);
    }

    pub fn cancel_form(&mut self) {
        self.form.cancel();
    }

    pub fn submit_form(&mut self) -> SubmitOutcome {
        let outcome = self.form.submit(&mut self.store, &mut self.pagination);
        match outcome {
            SubmitOutcome::Created(id) => self.record(AuditAction::Added, id),
            SubmitOutcome::Updated(id) => self.record(AuditAction::Updated, id),
            SubmitOutcome::Stale(_) | SubmitOutcome::Rejected(_) | SubmitOutcome::NotOpen => {}
        }
        self.sync_pages();
        outcome
    }

    // ========================
    // Delete confirmation
    // ========================

    /// Ask to delete `id`; ignored if the record is gone
    pub fn request_delete(&mut self, id: AssetId) {
        if let Some(asset) = self.store.get(id) {
            self.deletion.request(asset.clone());
        }
    }

    pub fn cancel_delete(&mut self) {
        self.deletion.cancel();
    }

    pub fn confirm_delete(&mut self) -> Option<Asset> {
        let removed = self.deletion.confirm(&mut self.store)?;
        self.audit.record(AuditAction::Removed, &removed);
        self.sync_pages();
        Some(removed)
    }

    // ========================
    // Pagination
    // ========================

    pub fn go_to_page(&mut self, page: usize) {
        self.pagination.go_to(page);
    }

    pub fn next_page(&mut self) {
        self.pagination.next();
    }

    pub fn previous_page(&mut self) {
        self.pagination.previous();
    }

    /// Forget page-local state: close both modals and return to page 1.
    /// Records and the audit log are kept.
    pub fn reset_view(&mut self) {
        self.form.cancel();
        self.deletion.cancel();
        self.pagination.go_to(1);
    }

    fn sync_pages(&mut self) {
        self.pagination.set_item_count(self.store.len());
    }

    fn record(&mut self, action: AuditAction, id: AssetId) {
        if let Some(asset) = self.store.get(id) {
            self.audit.record(action, asset);
        }
    }
}
