//! Asset Entity
//!
//! A single portfolio holding: name, free-form category and a positive value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of an asset, stable for the record's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(pub u64);

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The replaceable part of an asset.
///
/// Values of this type are produced by validation, so `name` and `category`
/// are already trimmed and `value` is finite and positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetFields {
    pub name: String,
    pub category: String,
    pub value: f64,
}

impl AssetFields {
    pub fn new(name: impl Into<String>, category: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            value,
        }
    }

    /// Whether these fields satisfy the stored-record invariants
    pub fn is_well_formed(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.category.trim().is_empty()
            && self.value.is_finite()
            && self.value > 0.0
    }
}

/// A stored asset record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Unique identifier
    pub id: AssetId,
    /// Display label
    pub name: String,
    /// Free-form category label (e.g. "Debt", "Equity")
    pub category: String,
    /// Current value in rupees
    pub value: f64,
}

impl Asset {
    pub fn new(id: AssetId, fields: AssetFields) -> Self {
        Self {
            id,
            name: fields.name,
            category: fields.category,
            value: fields.value,
        }
    }

    pub fn fields(&self) -> AssetFields {
        AssetFields::new(self.name.clone(), self.category.clone(), self.value)
    }

    /// Replace every field except the id
    pub fn apply(&mut self, fields: AssetFields) {
        self.name = fields.name;
        self.category = fields.category;
        self.value = fields.value;
    }
}
