//! Wealth CRM Dashboard App
//!
//! Single-page dashboard: stat tiles, creation forms, AI triggers and
//! one table per backend collection.

use leptos::prelude::*;

use crate::components::columns::{
    CLIENT_COLUMNS, COMPLIANCE_COLUMNS, HOUSEHOLD_COLUMNS, RECOMMENDATION_COLUMNS, TASK_COLUMNS,
};
use crate::components::{
    AiActions, CollectionView, CreateClient, CreateHousehold, CreateTask, Section, StatCard,
};
use crate::context::AppContext;
use crate::fetch::use_collection;
use crate::models::Collection;
use crate::stats::summary_stats;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (data_version, set_data_version) = signal(0u64);

    // Provide context before the collection loaders subscribe to it
    provide_context(AppContext::new((data_version, set_data_version)));

    let households = use_collection(Collection::Household);
    let clients = use_collection(Collection::Client);
    let tasks = use_collection(Collection::Task);
    let recommendations = use_collection(Collection::Recommendation);
    let compliance = use_collection(Collection::Compliance);

    let stats = Memo::new(move |_| {
        summary_stats(
            &households.items.get(),
            &clients.items.get(),
            &tasks.items.get(),
            &recommendations.items.get(),
        )
    });

    view! {
        <div class="dashboard">
            // Header
            <header class="dashboard-header">
                <div>
                    <h1>"AI-Driven Wealth CRM"</h1>
                    <p class="tagline">
                        "Operate with an always-on compliance co-pilot and proactive AI recommendations."
                    </p>
                </div>
                <a class="health-link" href="/test">"Health Check"</a>
            </header>

            // Stat tiles
            <div class="stat-grid">
                <For
                    each=move || stats.get()
                    key=|stat| (stat.label, stat.value)
                    children=move |stat| view! { <StatCard label=stat.label value=stat.value /> }
                />
            </div>

            // Creation forms, AI triggers in the panel header
            <Section
                title="Quick Create"
                actions=view! { <AiActions households=households.items /> }.into_any()
            >
                <div class="create-forms">
                    <CreateHousehold />
                    <CreateClient households=households.items />
                    <CreateTask clients=clients.items />
                </div>
            </Section>

            // One table per collection
            <Section title="Households">
                <CollectionView handle=households columns=HOUSEHOLD_COLUMNS />
            </Section>
            <Section title="Clients">
                <CollectionView handle=clients columns=CLIENT_COLUMNS />
            </Section>
            <Section title="Tasks">
                <CollectionView handle=tasks columns=TASK_COLUMNS />
            </Section>
            <Section title="Recommendations">
                <CollectionView handle=recommendations columns=RECOMMENDATION_COLUMNS />
            </Section>
            <Section title="Compliance Activity Log">
                <CollectionView handle=compliance columns=COMPLIANCE_COLUMNS />
            </Section>

            <footer class="dashboard-footer">
                "Built with AI automation and compliance-first design."
            </footer>
        </div>
    }
}
