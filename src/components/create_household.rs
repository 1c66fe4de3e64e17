//! Household Creation Form
//!
//! Name plus risk profile; name is required.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, HouseholdDraft};
use crate::context::AppContext;

/// Risk profile options offered on creation
const RISK_PROFILES: &[&str] = &["Conservative", "Moderate", "Aggressive"];

#[component]
pub fn CreateHousehold() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (risk, set_risk) = signal(String::new());
    let (saving, set_saving) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get();
        if name_value.is_empty() {
            return;
        }
        let risk_value = risk.get();
        set_saving.set(true);

        spawn_local(async move {
            let draft = HouseholdDraft {
                name: &name_value,
                risk_profile: &risk_value,
            };
            match api::create_household(&draft).await {
                Ok(()) => {
                    set_name.set(String::new());
                    set_risk.set(String::new());
                    ctx.notify_data_changed();
                }
                Err(message) => gloo_dialogs::alert(&message),
            }
            set_saving.set(false);
        });
    };

    view! {
        <form class="create-form" on:submit=submit>
            <input
                type="text"
                placeholder="Household name"
                required
                prop:value=move || name.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_name.set(input.value());
                }
            />
            <select
                prop:value=move || risk.get()
                on:change=move |ev| set_risk.set(event_target_value(&ev))
            >
                <option value="">"Risk profile"</option>
                {RISK_PROFILES
                    .iter()
                    .map(|profile| view! { <option value=*profile>{*profile}</option> })
                    .collect_view()}
            </select>
            <button type="submit" disabled=move || saving.get()>
                {move || if saving.get() { "Saving..." } else { "Add Household" }}
            </button>
        </form>
    }
}
