//! Asset Audit Log Page
//!
//! Every add, update and delete applied this session, newest first, followed
//! by the most recent application log lines.

use leptos::prelude::*;

use asset_inventory::{format_inr, AuditEntry};
use rolling_logger::RollingLogger;

use crate::store::{store_read_inventory, use_app_store};

const RECENT_LOG_LINES: usize = 50;

#[component]
pub fn AuditLogPage() -> impl IntoView {
    let store = use_app_store();
    let logger = use_context::<&'static RollingLogger>();
    let log_lines = move || {
        // Re-read the buffer whenever the inventory changes
        store_read_inventory(&store, |inv| inv.audit().len());
        logger.map(|logger| logger.recent(RECENT_LOG_LINES)).unwrap_or_default()
    };
    let entries = move || {
        store_read_inventory(&store, |inv| inv.audit().entries().rev().cloned().collect::<Vec<AuditEntry>>())
    };

    view! {
        <section class="page">
            <div class="panel">
                <p class="eyebrow">"Assets"</p>
                <h1>"Asset Audit Log"</h1>
                <p class="muted">"Track all add, update, and delete activity for portfolio assets."</p>
            </div>

            <div class="panel table-panel">
                <Show
                    when=move || !entries().is_empty()
                    fallback=|| view! { <p class="muted">"No activity yet this session."</p> }
                >
                    <div class="asset-table audit-table">
                        <div class="table-head">
                            <span>"When"</span>
                            <span>"Action"</span>
                            <span>"Asset"</span>
                            <span>"Value"</span>
                        </div>
                        {move || entries().into_iter().map(|entry| view! {
                            <div class="table-row">
                                <span>{entry.recorded_at.format("%H:%M:%S").to_string()}</span>
                                <span class=format!("audit-action {}", entry.action.as_str().to_lowercase())>
                                    {entry.action.as_str()}
                                </span>
                                <span>{format!("{} ({})", entry.name, entry.category)}</span>
                                <strong>{format_inr(entry.value)}</strong>
                            </div>
                        }).collect_view()}
                    </div>
                </Show>
            </div>

            <Show when=move || logger.is_some()>
                <div class="panel">
                    <h2>"Recent Log"</h2>
                    <pre class="log-lines">{move || log_lines().join("\n")}</pre>
                </div>
            </Show>
        </section>
    }
}
