//! Asset Store
//!
//! Ordered, in-memory list of asset records. Insertion order is display
//! order: edits keep a record's position and new records append.

use crate::asset::{Asset, AssetFields, AssetId};

/// Ordered asset records plus the id counter
#[derive(Debug, Clone, Default)]
pub struct AssetStore {
    assets: Vec<Asset>,
    next_id: u64,
}

impl AssetStore {
    pub fn new() -> Self {
        Self {
            assets: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a store from seed records, continuing the id sequence after the
    /// largest seeded id
    pub fn with_assets(assets: Vec<Asset>) -> Self {
        let next_id = assets.iter().map(|a| a.id.0).max().unwrap_or(0) + 1;
        Self { assets, next_id }
    }

    /// Append a new record and return its freshly generated id
    pub fn add(&mut self, fields: AssetFields) -> AssetId {
        let id = AssetId(self.next_id.max(1));
        self.next_id = id.0 + 1;
        self.assets.push(Asset::new(id, fields));
        log::debug!("asset {} added", id);
        id
    }

    /// Replace the fields of the record matching `id`.
    ///
    /// Returns `false` and leaves the store untouched when no record matches.
    pub fn update(&mut self, id: AssetId, fields: AssetFields) -> bool {
        match self.assets.iter_mut().find(|asset| asset.id == id) {
            Some(asset) => {
                asset.apply(fields);
                log::debug!("asset {} updated", id);
                true
            }
            None => {
                log::debug!("update ignored, asset {} not found", id);
                false
            }
        }
    }

    /// Remove the record matching `id`, returning it if it existed
    pub fn remove(&mut self, id: AssetId) -> Option<Asset> {
        let index = self.assets.iter().position(|asset| asset.id == id);
        match index {
            Some(index) => {
                log::debug!("asset {} removed", id);
                Some(self.assets.remove(index))
            }
            None => {
                log::debug!("remove ignored, asset {} not found", id);
                None
            }
        }
    }

    pub fn list(&self) -> &[Asset] {
        &self.assets
    }

    pub fn get(&self, id: AssetId) -> Option<&Asset> {
        self.assets.iter().find(|asset| asset.id == id)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Sum of all current values (the dashboard's net worth)
    pub fn total_value(&self) -> f64 {
        self.assets.iter().map(|asset| asset.value).sum()
    }
}
