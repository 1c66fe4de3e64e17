//! AI Action Panel
//!
//! Triggers the backend analyses and demo seeding. The jobs run
//! server-side and publish into the recommendation and compliance
//! collections, so every completed action refreshes the dashboard and
//! raises a blocking notice.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, EstatePlanArgs, PortfolioAnalysisArgs, TaxOptimizationArgs};
use crate::context::AppContext;
use crate::models::{field_text, Record};

/// Clients materialized by one demo seeding run
const DEMO_CLIENT_COUNT: u32 = 20;

const COMPLETION_NOTICE: &str = "AI action completed. Check Recommendations and Compliance.";

/// Refresh on completion, then notify; failures only notify.
fn report(ctx: AppContext, outcome: Result<String, String>) {
    match outcome {
        Ok(notice) => {
            ctx.notify_data_changed();
            gloo_dialogs::alert(&notice);
        }
        Err(message) => gloo_dialogs::alert(&message),
    }
}

#[component]
pub fn AiActions(households: ReadSignal<Vec<Record>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (household_id, set_household_id) = signal(String::new());
    let (year, set_year) = signal(current_year());
    let (busy, set_busy) = signal(false);

    let run_portfolio = move |_| {
        let selected = household_id.get();
        set_busy.set(true);
        spawn_local(async move {
            let args = PortfolioAnalysisArgs {
                household_id: selected_id(&selected),
                account_ids: Vec::new(),
            };
            let outcome = api::portfolio_analysis(&args)
                .await
                .map(|_| COMPLETION_NOTICE.to_string());
            report(ctx, outcome);
            set_busy.set(false);
        });
    };

    let run_tax = move |_| {
        let selected = household_id.get();
        let tax_year = year.get();
        set_busy.set(true);
        spawn_local(async move {
            let args = TaxOptimizationArgs {
                household_id: selected_id(&selected),
                year: tax_year,
            };
            let outcome = api::tax_optimization(&args)
                .await
                .map(|_| COMPLETION_NOTICE.to_string());
            report(ctx, outcome);
            set_busy.set(false);
        });
    };

    let run_estate = move |_| {
        let selected = household_id.get();
        set_busy.set(true);
        spawn_local(async move {
            let args = EstatePlanArgs {
                household_id: selected_id(&selected),
                goals: Vec::new(),
                facts: serde_json::json!({}),
            };
            let outcome = api::estate_plan(&args)
                .await
                .map(|_| COMPLETION_NOTICE.to_string());
            report(ctx, outcome);
            set_busy.set(false);
        });
    };

    let run_seed = move |_| {
        set_busy.set(true);
        spawn_local(async move {
            report(ctx, api::seed_demo(DEMO_CLIENT_COUNT).await);
            set_busy.set(false);
        });
    };

    view! {
        <div class="ai-actions">
            <select
                prop:value=move || household_id.get()
                on:change=move |ev| set_household_id.set(event_target_value(&ev))
            >
                <option value="">"Select household (optional)"</option>
                <For
                    each=move || households.get()
                    key=|record| field_text(record, "_id")
                    children=move |record| {
                        let id = field_text(&record, "_id");
                        let label = field_text(&record, "name");
                        view! { <option value=id>{label}</option> }
                    }
                />
            </select>
            <button type="button" disabled=move || busy.get() on:click=run_portfolio>
                "Portfolio Analysis"
            </button>
            <input
                type="number"
                class="year-input"
                prop:value=move || year.get().to_string()
                on:input=move |ev| {
                    match event_target_value(&ev).parse::<i32>() {
                        Ok(parsed) => set_year.set(parsed),
                        Err(_) => set_year.set(current_year()),
                    }
                }
            />
            <button type="button" disabled=move || busy.get() on:click=run_tax>
                "Tax Optimization"
            </button>
            <button type="button" disabled=move || busy.get() on:click=run_estate>
                "Estate Plan Review"
            </button>
            <button type="button" class="seed-btn" disabled=move || busy.get() on:click=run_seed>
                {format!("Seed {DEMO_CLIENT_COUNT} Demo Clients")}
            </button>
        </div>
    }
}

/// Empty selection posts as JSON null.
fn selected_id(selected: &str) -> Option<&str> {
    if selected.is_empty() {
        None
    } else {
        Some(selected)
    }
}

fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}
