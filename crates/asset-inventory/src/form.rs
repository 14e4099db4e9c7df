//! Asset Form Controller
//!
//! The add/edit modal. Field values stay raw text until submit; a draft that
//! fails validation leaves the modal open and the store untouched.

use crate::asset::{Asset, AssetFields, AssetId};
use crate::error::DraftError;
use crate::pagination::Pagination;
use crate::store::AssetStore;

/// Which modal, if any, is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Closed,
    OpenForCreate,
    OpenForEdit(AssetId),
}

impl FormMode {
    pub fn is_open(&self) -> bool {
        !matches!(self, FormMode::Closed)
    }
}

/// Editable draft fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Category,
    Value,
}

/// Unsaved form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetDraft {
    pub name: String,
    pub category: String,
    pub value: String,
}

impl AssetDraft {
    pub fn from_asset(asset: &Asset) -> Self {
        Self {
            name: asset.name.clone(),
            category: asset.category.clone(),
            value: asset.value.to_string(),
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Category => &self.category,
            DraftField::Value => &self.value,
        }
    }

    pub fn set(&mut self, field: DraftField, text: String) {
        match field {
            DraftField::Name => self.name = text,
            DraftField::Category => self.category = text,
            DraftField::Value => self.value = text,
        }
    }

    /// Trim the labels and parse the value
    pub fn validate(&self) -> Result<AssetFields, DraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftError::EmptyName);
        }
        let category = self.category.trim();
        if category.is_empty() {
            return Err(DraftError::EmptyCategory);
        }
        let value = self
            .value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v > 0.0)
            .ok_or_else(|| DraftError::InvalidValue(self.value.clone()))?;
        Ok(AssetFields::new(name, category, value))
    }
}

/// What a submit did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(AssetId),
    Updated(AssetId),
    /// The edited record no longer exists; nothing changed but the form closed
    Stale(AssetId),
    /// Draft invalid; the form is still open
    Rejected(DraftError),
    /// Nothing to submit
    NotOpen,
}

/// Add/edit modal state holder
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetForm {
    mode: FormMode,
    draft: AssetDraft,
}

impl AssetForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &AssetDraft {
        &self.draft
    }

    pub fn is_open(&self) -> bool {
        self.mode.is_open()
    }

    pub fn open_create(&mut self) {
        self.mode = FormMode::OpenForCreate;
        self.draft = AssetDraft::default();
    }

    pub fn open_edit(&mut self, asset: &Asset) {
        self.mode = FormMode::OpenForEdit(asset.id);
        self.draft = AssetDraft::from_asset(asset);
    }

    /// Update a single draft field. Ignored while closed.
    pub fn change_field(&mut self, field: DraftField, text: impl Into<String>) {
        if self.is_open() {
            self.draft.set(field, text.into());
        }
    }

    pub fn cancel(&mut self) {
        self.close();
    }

    /// Validate the draft and apply it to `store`.
    ///
    /// A successful create also moves `pagination` to the last page so the
    /// new record is visible.
    pub fn submit(&mut self, store: &mut AssetStore, pagination: &mut Pagination) -> SubmitOutcome {
        let mode = self.mode;
        if !mode.is_open() {
            return SubmitOutcome::NotOpen;
        }
        let fields = match self.draft.validate() {
            Ok(fields) => fields,
            Err(err) => {
                log::debug!("asset form rejected: {}", err);
                return SubmitOutcome::Rejected(err);
            }
        };
        let outcome = match mode {
            FormMode::OpenForEdit(id) => {
                if store.update(id, fields) {
                    SubmitOutcome::Updated(id)
                } else {
                    SubmitOutcome::Stale(id)
                }
            }
            _ => {
                let id = store.add(fields);
                pagination.set_item_count(store.len());
                pagination.go_to_last();
                SubmitOutcome::Created(id)
            }
        };
        self.close();
        outcome
    }

    fn close(&mut self) {
        self.mode = FormMode::Closed;
        self.draft = AssetDraft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn draft(name: &str, category: &str, value: &str) -> AssetDraft {
        AssetDraft {
            name: name.to_string(),
            category: category.to_string(),
            value: value.to_string(),
        }
    }

    fn seeded() -> (AssetStore, Pagination) {
        let mut store = AssetStore::new();
        store.add(AssetFields::new("Fixed Deposit", "Debt", 250000.0));
        store.add(AssetFields::new("Gold", "Commodity", 185000.0));
        let pagination = Pagination::new(5, store.len());
        (store, pagination)
    }

    #[test]
    fn test_validate_trims() {
        let fields = draft("  Gold Bond ", " Commodity", " 50000 ").validate();
        assert_eq!(fields, Ok(AssetFields::new("Gold Bond", "Commodity", 50000.0)));
    }

    #[test]
    fn test_validate_rejections() {
        assert_eq!(draft("", "Debt", "1").validate(), Err(DraftError::EmptyName));
        assert_eq!(draft("   ", "Debt", "1").validate(), Err(DraftError::EmptyName));
        assert_eq!(draft("Gold", " ", "1").validate(), Err(DraftError::EmptyCategory));
        for bad in ["", "abc", "0", "-10", "NaN", "inf", "-0"] {
            assert_matches!(draft("Gold", "Debt", bad).validate(), Err(DraftError::InvalidValue(_)), "value {:?}", bad);
        }
        assert!(draft("Gold", "Debt", "0.5").validate().is_ok());
        assert!(draft("Gold", "Debt", "1e3").validate().is_ok());
    }

    #[test]
    fn test_open_edit_prefills() {
        let (store, _) = seeded();
        let mut form = AssetForm::new();
        form.open_edit(&store.list()[0]);
        assert_eq!(form.mode(), FormMode::OpenForEdit(store.list()[0].id));
        assert_eq!(form.draft(), &draft("Fixed Deposit", "Debt", "250000"));
    }

    #[test]
    fn test_open_create_resets_draft() {
        let (store, _) = seeded();
        let mut form = AssetForm::new();
        form.open_edit(&store.list()[1]);
        form.open_create();
        assert_eq!(form.mode(), FormMode::OpenForCreate);
        assert_eq!(form.draft(), &AssetDraft::default());
    }

    #[test]
    fn test_change_field_only_touches_one_field() {
        let mut form = AssetForm::new();
        form.open_create();
        form.change_field(DraftField::Name, "Gold Bond");
        form.change_field(DraftField::Value, "50000");
        assert_eq!(form.draft(), &draft("Gold Bond", "", "50000"));
        assert_eq!(form.draft().get(DraftField::Name), "Gold Bond");
    }

    #[test]
    fn test_change_field_ignored_when_closed() {
        let mut form = AssetForm::new();
        form.change_field(DraftField::Name, "Ghost");
        assert_eq!(form.draft(), &AssetDraft::default());
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut form = AssetForm::new();
        form.open_create();
        form.change_field(DraftField::Name, "Gold Bond");
        form.cancel();
        assert_eq!(form.mode(), FormMode::Closed);
        assert_eq!(form.draft(), &AssetDraft::default());
    }

    #[test]
    fn test_submit_create() {
        let (mut store, mut pagination) = seeded();
        let mut form = AssetForm::new();
        form.open_create();
        form.change_field(DraftField::Name, " Gold Bond ");
        form.change_field(DraftField::Category, "Commodity");
        form.change_field(DraftField::Value, "50000");
        let outcome = form.submit(&mut store, &mut pagination);
        let id = assert_matches!(outcome, SubmitOutcome::Created(id) => id);
        assert_eq!(store.len(), 3);
        assert_eq!(store.get(id).map(|a| a.name.as_str()), Some("Gold Bond"));
        assert!(!form.is_open());
    }

    #[test]
    fn test_submit_edit() {
        let (mut store, mut pagination) = seeded();
        let target = store.list()[0].clone();
        let mut form = AssetForm::new();
        form.open_edit(&target);
        form.change_field(DraftField::Value, "260000");
        assert_eq!(form.submit(&mut store, &mut pagination), SubmitOutcome::Updated(target.id));
        assert_eq!(store.list()[0].value, 260000.0);
        assert_eq!(store.len(), 2);
        assert!(!form.is_open());
    }

    #[test]
    fn test_submit_invalid_keeps_form_open() {
        let (mut store, mut pagination) = seeded();
        let before = store.list().to_vec();
        let mut form = AssetForm::new();
        form.open_create();
        form.change_field(DraftField::Name, "Gold Bond");
        form.change_field(DraftField::Category, "Commodity");
        form.change_field(DraftField::Value, "0");
        assert_matches!(form.submit(&mut store, &mut pagination), SubmitOutcome::Rejected(_));
        assert_eq!(form.mode(), FormMode::OpenForCreate);
        assert_eq!(form.draft().name, "Gold Bond");
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn test_submit_edit_of_removed_record() {
        let (mut store, mut pagination) = seeded();
        let target = store.list()[0].clone();
        let mut form = AssetForm::new();
        form.open_edit(&target);
        store.remove(target.id);
        let before = store.list().to_vec();
        assert_eq!(form.submit(&mut store, &mut pagination), SubmitOutcome::Stale(target.id));
        assert_eq!(store.list(), before.as_slice());
        assert!(!form.is_open());
    }

    #[test]
    fn test_submit_closed_is_noop() {
        let (mut store, mut pagination) = seeded();
        let mut form = AssetForm::new();
        assert_eq!(form.submit(&mut store, &mut pagination), SubmitOutcome::NotOpen);
        assert_eq!(store.len(), 2);
    }
}
