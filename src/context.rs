//! Application Context
//!
//! Layout state shared via the Leptos Context API.

use leptos::prelude::*;

use crate::nav::NavState;

/// App-wide layout signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Side navigation open/collapsed flags
    nav: RwSignal<NavState>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            nav: RwSignal::new(NavState::default()),
        }
    }

    pub fn nav(&self) -> NavState {
        self.nav.get()
    }

    /// Open or close the mobile overlay
    pub fn toggle_nav(&self) {
        self.nav.update(NavState::toggle_open);
    }

    pub fn close_nav(&self) {
        self.nav.update(NavState::close);
    }

    /// Collapse or expand the desktop sidebar
    pub fn toggle_collapsed(&self) {
        self.nav.update(NavState::toggle_collapsed);
    }
}

/// Get the app context; panics if `App` did not provide it
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
