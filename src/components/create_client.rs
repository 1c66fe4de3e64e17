//! Client Creation Form
//!
//! First/last name required, email free-form, optional link to one of
//! the loaded households.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, ClientDraft};
use crate::context::AppContext;
use crate::models::{field_text, Record};

#[component]
pub fn CreateClient(households: ReadSignal<Vec<Record>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (first, set_first) = signal(String::new());
    let (last, set_last) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (household_id, set_household_id) = signal(String::new());
    let (saving, set_saving) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let first_value = first.get();
        let last_value = last.get();
        if first_value.is_empty() || last_value.is_empty() {
            return;
        }
        let email_value = email.get();
        let household_value = household_id.get();
        set_saving.set(true);

        spawn_local(async move {
            let draft = ClientDraft {
                first_name: &first_value,
                last_name: &last_value,
                email: &email_value,
                household_id: if household_value.is_empty() {
                    None
                } else {
                    Some(household_value.as_str())
                },
            };
            match api::create_client(&draft).await {
                Ok(()) => {
                    set_first.set(String::new());
                    set_last.set(String::new());
                    set_email.set(String::new());
                    set_household_id.set(String::new());
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
                placeholder="First name"
                required
                prop:value=move || first.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_first.set(input.value());
                }
            />
            <input
                type="text"
                placeholder="Last name"
                required
                prop:value=move || last.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_last.set(input.value());
                }
            />
            <input
                type="text"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <select
                prop:value=move || household_id.get()
                on:change=move |ev| set_household_id.set(event_target_value(&ev))
            >
                <option value="">"No household"</option>
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
            <button type="submit" disabled=move || saving.get()>
                {move || if saving.get() { "Saving..." } else { "Add Client" }}
            </button>
        </form>
    }
}
