//! Audit Log
//!
//! Session-scoped history of applied add/update/remove operations, bounded to
//! the most recent entries.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use crate::asset::{Asset, AssetId};

/// Entries kept before the oldest are dropped
pub const DEFAULT_AUDIT_CAPACITY: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    Added,
    Updated,
    Removed,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Added => "Added",
            AuditAction::Updated => "Updated",
            AuditAction::Removed => "Removed",
        }
    }
}

/// Snapshot of an asset at the moment it changed
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEntry {
    pub sequence: u64,
    pub action: AuditAction,
    pub asset_id: AssetId,
    pub name: String,
    pub category: String,
    pub value: f64,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct AuditLog {
    entries: VecDeque<AuditEntry>,
    capacity: usize,
    next_sequence: u64,
}

impl Default for AuditLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_AUDIT_CAPACITY)
    }
}

impl AuditLog {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_sequence: 1,
        }
    }

    pub fn record(&mut self, action: AuditAction, asset: &Asset) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(AuditEntry {
            sequence: self.next_sequence,
            action,
            asset_id: asset.id,
            name: asset.name.clone(),
            category: asset.category.clone(),
            value: asset.value,
            recorded_at: Utc::now(),
        });
        self.next_sequence += 1;
    }

    /// Oldest first
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &AuditEntry> + ExactSizeIterator + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::AssetFields;

    fn asset(id: u64) -> Asset {
        Asset::new(AssetId(id), AssetFields::new(format!("Asset {}", id), "Debt", 100.0))
    }

    #[test]
    fn test_record_assigns_sequence() {
        let mut log = AuditLog::default();
        log.record(AuditAction::Added, &asset(1));
        log.record(AuditAction::Removed, &asset(1));
        let sequences: Vec<u64> = log.entries().map(|e| e.sequence).collect();
        assert_eq!(sequences, vec![1, 2]);
        assert_eq!(log.entries().last().map(|e| e.action), Some(AuditAction::Removed));
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut log = AuditLog::with_capacity(3);
        for id in 1..=5 {
            log.record(AuditAction::Added, &asset(id));
        }
        assert_eq!(log.len(), 3);
        let ids: Vec<AssetId> = log.entries().map(|e| e.asset_id).collect();
        assert_eq!(ids, vec![AssetId(3), AssetId(4), AssetId(5)]);
        assert_eq!(log.entries().next().map(|e| e.sequence), Some(3));
    }
}
