//! NetWorth Frontend App
//!
//! Root component: provides state and maps URL paths to pages inside the
//! sidebar layout.

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use asset_inventory::DashboardConfig;
use rolling_logger::RollingLogger;

use crate::components::{AppLayout, AssetsPage, AuditLogPage, HomePage, SectionStubPage};
use crate::context::AppContext;
use crate::store::{AppState, AppStore};

#[component]
pub fn App(
    /// Installed global logger, shown on the audit log page
    logger: Option<&'static RollingLogger>,
) -> impl IntoView {
    let config = DashboardConfig::builtin_or_default();
    log::info!(
        "loaded {} seed assets, page size {}",
        config.assets.len(),
        config.page_size
    );

    // Provide context to all children
    provide_context(AppStore::new(AppState::new(&config)));
    provide_context(AppContext::new());
    if let Some(logger) = logger {
        provide_context(logger);
    }

    view! {
        <Router>
            <Routes fallback=|| view! { <Redirect path="/" /> }>
                <ParentRoute path=path!("") view=AppLayout>
                    <Route path=path!("") view=HomePage />
                    <Route path=path!("home") view=HomePage />
                    <Route path=path!("assets") view=AssetsPage />
                    <Route path=path!("assets/audit-log") view=AuditLogPage />
                    <Route
                        path=path!("assets/reports")
                        view=|| view! {
                            <SectionStubPage
                                title="Reports"
                                description="Generate and review reports for your asset portfolio performance."
                            />
                        }
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
