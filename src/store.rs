//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use asset_inventory::{AssetInventory, DashboardConfig, NetWorthPoint};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Asset records plus form, pagination, deletion and audit state
    pub inventory: AssetInventory,
    /// Fixed series for the home chart
    pub net_worth_history: Vec<NetWorthPoint>,
}

impl AppState {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            inventory: AssetInventory::from_config(config),
            net_worth_history: config.net_worth_history.clone(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Run `f` against the inventory, notifying readers afterwards
pub fn store_update_inventory<R>(store: &AppStore, f: impl FnOnce(&mut AssetInventory) -> R) -> R {
    f(&mut store.inventory().write())
}

/// Read from the inventory, tracking it in the current reactive scope
pub fn store_read_inventory<R>(store: &AppStore, f: impl FnOnce(&AssetInventory) -> R) -> R {
    f(&store.inventory().read())
}
