//! Asset Inventory
//!
//! In-memory state for the NetWorth dashboard:
//! - asset / store: records and their ordered container
//! - form, pagination, deletion: one controller per UI concern
//! - inventory: the aggregate that keeps them consistent
//! - audit, config, money: session history, seed data, rupee formatting

mod asset;
mod audit;
mod config;
mod deletion;
mod error;
mod form;
mod inventory;
mod money;
mod pagination;
mod store;


pub use asset::{Asset, AssetFields, AssetId};
pub use audit::{AuditAction, AuditEntry, AuditLog, DEFAULT_AUDIT_CAPACITY};
pub use config::{DashboardConfig, NetWorthPoint};
pub use deletion::DeleteConfirmation;
pub use error::{ConfigError, DraftError};
pub use form::{AssetDraft, AssetForm, DraftField, FormMode, SubmitOutcome};
pub use inventory::AssetInventory;
pub use money::{format_inr, format_lakhs};
pub use pagination::{Pagination, DEFAULT_PAGE_SIZE};
pub use store::AssetStore;
