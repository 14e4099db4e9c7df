//! Inventory Errors
//!
//! Typed failures of the inventory. None of these reach the user: a rejected
//! draft keeps the form open and a bad seed file falls back to an empty
//! configuration.

use thiserror::Error;

use crate::asset::AssetId;

/// Why a form draft could not be turned into asset fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("asset name is empty")]
    EmptyName,
    #[error("asset category is empty")]
    EmptyCategory,
    #[error("asset value {0:?} is not a positive number")]
    InvalidValue(String),
}

/// Failures loading the embedded dashboard configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse dashboard configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("page size must be at least 1")]
    ZeroPageSize,
    #[error("seed asset {0} is malformed")]
    MalformedAsset(AssetId),
    #[error("seed asset id {0} is used more than once")]
    DuplicateId(AssetId),
}
