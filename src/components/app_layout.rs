//! Sidebar Layout
//!
//! Menu button, collapsible side navigation and the routed page outlet.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use crate::context::use_app_context;
use crate::nav::{self, ASSETS_PATH, AUDIT_LOG_PATH, HOME_PATH, REPORTS_PATH};

#[component]
pub fn AppLayout() -> impl IntoView {
    let ctx = use_app_context();
    let location = use_location();
    let pathname = location.pathname;

    // Close the mobile overlay whenever the route changes
    Effect::new(move |_| {
        let _ = pathname.get();
        ctx.close_nav();
    });

    let is_open = move || ctx.nav().open;
    let is_collapsed = move || ctx.nav().collapsed;

    let link = move |target: &'static str, base: &'static str, exact: bool| {
        move || nav::link_class(base, nav::is_active(&pathname.get(), target, exact))
    };

    view! {
        <div class=move || if is_collapsed() { "app-shell collapsed" } else { "app-shell" }>
            <button type="button" class="menu-button" on:click=move |_| ctx.toggle_nav()>
                {move || if is_open() { "Close" } else { "Menu" }}
            </button>
            <Show when=is_open>
                <button type="button" class="nav-backdrop" on:click=move |_| ctx.close_nav()></button>
            </Show>

            <aside class=move || {
                let mut class = String::from("side-nav");
                if is_open() { class.push_str(" open"); }
                if is_collapsed() { class.push_str(" collapsed"); }
                class
            }>
                <div class="side-nav-header">
                    <Show when=move || !is_collapsed()>
                        <h2>"NetWorth"</h2>
                    </Show>
                    <button
                        type="button"
                        class="collapse-button"
                        aria-label=move || if is_collapsed() { "Expand navigation" } else { "Collapse navigation" }
                        on:click=move |_| ctx.toggle_collapsed()
                    >
                        {move || if is_collapsed() { "☰" } else { "✕" }}
                    </button>
                </div>

                <Show when=move || !is_collapsed()>
                    <nav>
                        <a href=HOME_PATH class=link(HOME_PATH, "nav-item", true)>"Home"</a>
                        <div class=move || nav::link_class("nav-group", nav::is_assets_section(&pathname.get()))>
                            <a href=ASSETS_PATH class=link(ASSETS_PATH, "nav-item", true)>"Assets"</a>
                            <div class="nav-submenu">
                                <a href=AUDIT_LOG_PATH class=link(AUDIT_LOG_PATH, "nav-item nav-subitem", false)>
                                    "Asset Audit Log"
                                </a>
                                <a href=REPORTS_PATH class=link(REPORTS_PATH, "nav-item nav-subitem", false)>
                                    "Reports"
                                </a>
                            </div>
                        </div>
                    </nav>
                </Show>
            </aside>

            <main class="content">
                <Outlet />
            </main>
        </div>
    }
}
