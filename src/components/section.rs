//! Section Component
//!
//! Titled panel with an optional action slot in the header.

use leptos::prelude::*;

#[component]
pub fn Section(
    #[prop(into)] title: String,
    #[prop(optional, into)] actions: Option<AnyView>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="panel">
            <div class="panel-header">
                <h3 class="panel-title">{title}</h3>
                <div class="panel-actions">{actions}</div>
            </div>
            <div class="panel-body">{children()}</div>
        </section>
    }
}
