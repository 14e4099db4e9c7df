//! Placeholder page for sections without content yet.

use leptos::prelude::*;

#[component]
pub fn SectionStubPage(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <section class="page">
            <div class="panel">
                <p class="eyebrow">"Assets"</p>
                <h1>{title}</h1>
                <p class="muted">{description}</p>
            </div>
        </section>
    }
}
