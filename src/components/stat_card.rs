//! Stat Card Component
//!
//! Single summary tile: label over count.

use leptos::prelude::*;

#[component]
pub fn StatCard(label: &'static str, value: usize) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-label">{label}</p>
            <p class="stat-value">{value}</p>
        </div>
    }
}
