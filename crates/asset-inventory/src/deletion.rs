//! Delete Confirmation Controller
//!
//! At most one asset waits for an explicit yes/no before it is removed.

use crate::asset::Asset;
use crate::store::AssetStore;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DeleteConfirmation {
    #[default]
    Idle,
    PendingDeletion(Asset),
}

impl DeleteConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<&Asset> {
        match self {
            DeleteConfirmation::Idle => None,
            DeleteConfirmation::PendingDeletion(asset) => Some(asset),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending().is_some()
    }

    /// Ask for confirmation before removing `asset`
    pub fn request(&mut self, asset: Asset) {
        *self = DeleteConfirmation::PendingDeletion(asset);
    }

    pub fn cancel(&mut self) {
        *self = DeleteConfirmation::Idle;
    }

    /// Remove the pending asset from `store` and return to idle.
    ///
    /// Returns the removed record; `None` when idle or when the record was
    /// already gone.
    pub fn confirm(&mut self, store: &mut AssetStore) -> Option<Asset> {
        match std::mem::take(self) {
            DeleteConfirmation::Idle => None,
            DeleteConfirmation::PendingDeletion(asset) => store.remove(asset.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::AssetFields;

    fn store() -> AssetStore {
        let mut store = AssetStore::new();
        for name in ["A", "B", "C"] {
            store.add(AssetFields::new(name, "Debt", 10.0));
        }
        store
    }

    #[test]
    fn test_request_then_cancel() {
        let mut store = store();
        let mut deletion = DeleteConfirmation::new();
        deletion.request(store.list()[1].clone());
        assert_eq!(deletion.pending().map(|a| a.name.as_str()), Some("B"));
        deletion.cancel();
        assert!(!deletion.is_pending());
        assert_eq!(deletion.confirm(&mut store), None);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_confirm_removes_and_resets() {
        let mut store = store();
        let mut deletion = DeleteConfirmation::new();
        deletion.request(store.list()[1].clone());
        let removed = deletion.confirm(&mut store);
        assert_eq!(removed.map(|a| a.name), Some("B".to_string()));
        assert_eq!(deletion, DeleteConfirmation::Idle);
        let names: Vec<_> = store.list().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[test]
    fn test_request_replaces_previous() {
        let store = store();
        let mut deletion = DeleteConfirmation::new();
        deletion.request(store.list()[0].clone());
        deletion.request(store.list()[2].clone());
        assert_eq!(deletion.pending().map(|a| a.name.as_str()), Some("C"));
    }
}
