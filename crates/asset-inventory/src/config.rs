//! Dashboard Configuration
//!
//! Seed data compiled into the binary: starter assets, the net-worth history
//! shown on the home chart and the page size. Unknown keys are rejected so a
//! typo in the seed file fails loudly instead of being ignored.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::asset::Asset;
use crate::error::ConfigError;
use crate::pagination::DEFAULT_PAGE_SIZE;

const BUILTIN: &str = include_str!("../data/dashboard.json");

/// One point of the net-worth trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetWorthPoint {
    /// Month abbreviation
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub net_worth_history: Vec<NetWorthPoint>,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            assets: Vec::new(),
            net_worth_history: Vec::new(),
        }
    }
}

impl DashboardConfig {
    /// The configuration shipped with the app
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(BUILTIN)
    }

    /// The shipped configuration, or an empty one if it is unusable
    pub fn builtin_or_default() -> Self {
        Self::builtin().unwrap_or_else(|err| {
            log::error!("{}; starting with an empty dashboard", err);
            Self::default()
        })
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        let mut seen = HashSet::new();
        for asset in &self.assets {
            if !asset.fields().is_well_formed() {
                return Err(ConfigError::MalformedAsset(asset.id));
            }
            if !seen.insert(asset.id) {
                return Err(ConfigError::DuplicateId(asset.id));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::AssetId;
    use assert_matches::assert_matches;

    #[test]
    fn test_builtin_loads() {
        let config = DashboardConfig::builtin().expect("builtin config should parse");
        assert_eq!(config.page_size, 5);
        assert_eq!(config.assets.len(), 5);
        assert_eq!(config.assets[2].name, "Non Convertible Debentures");
        assert_eq!(config.net_worth_history.len(), 12);
        assert_eq!(config.net_worth_history[0].label, "Mar");
        assert_eq!(config.net_worth_history[11].value, 1550000.0);
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = DashboardConfig::from_json("{}").expect("empty object is valid");
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_rejects_bad_json() {
        assert_matches!(DashboardConfig::from_json("{"), Err(ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert_matches!(DashboardConfig::from_json(r#"{"currency": "USD"}"#), Err(ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_zero_page_size() {
        assert_matches!(DashboardConfig::from_json(r#"{"page_size": 0}"#), Err(ConfigError::ZeroPageSize));
    }

    #[test]
    fn test_rejects_malformed_asset() {
        let json = r#"{"assets": [{"id": 7, "name": " ", "category": "Debt", "value": 10}]}"#;
        assert_matches!(DashboardConfig::from_json(json), Err(ConfigError::MalformedAsset(AssetId(7))));
        let json = r#"{"assets": [{"id": 8, "name": "Gold", "category": "Debt", "value": -1}]}"#;
        assert_matches!(DashboardConfig::from_json(json), Err(ConfigError::MalformedAsset(AssetId(8))));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let json = r#"{"assets": [
            {"id": 1, "name": "A", "category": "Debt", "value": 10},
            {"id": 1, "name": "B", "category": "Debt", "value": 20}
        ]}"#;
        assert_matches!(DashboardConfig::from_json(json), Err(ConfigError::DuplicateId(AssetId(1))));
    }
}
