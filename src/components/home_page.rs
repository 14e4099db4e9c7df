//! Home Page
//!
//! Current net worth and the one-year trend chart.

use leptos::prelude::*;

use asset_inventory::format_inr;

use crate::components::NetWorthChart;
use crate::store::{store_read_inventory, use_app_store, AppStateStoreFields};

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_app_store();
    let latest_worth = Memo::new(move |_| store_read_inventory(&store, |inv| inv.total_value()));
    let history = Signal::derive(move || store.net_worth_history().get());

    view! {
        <section class="page">
            <div class="panel hero">
                <div>
                    <p class="eyebrow">"Net Worth Overview"</p>
                    <h1>"Track your portfolio growth"</h1>
                    <p class="muted">"Snapshot of your net worth movement over the last 12 months."</p>
                </div>
                <div class="worth-badge">
                    <p class="muted">"Current Net Worth"</p>
                    <strong>{move || format_inr(latest_worth.get())}</strong>
                </div>
            </div>

            <div class="panel chart-panel">
                <h2>"1-Year Net Worth Trend"</h2>
                <NetWorthChart series=history />
            </div>
        </section>
    }
}
