//! Task Creation Form
//!
//! Title required; assignee id and related client are optional.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, TaskDraft};
use crate::context::AppContext;
use crate::models::{field_text, Record};

#[component]
pub fn CreateTask(clients: ReadSignal<Vec<Record>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(String::new());
    let (assignee, set_assignee) = signal(String::new());
    let (client_id, set_client_id) = signal(String::new());
    let (saving, set_saving) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_value = title.get();
        if title_value.is_empty() {
            return;
        }
        let assignee_value = assignee.get();
        let client_value = client_id.get();
        set_saving.set(true);

        spawn_local(async move {
            let draft = TaskDraft {
                title: &title_value,
                assignee_id: if assignee_value.is_empty() {
                    None
                } else {
                    Some(assignee_value.as_str())
                },
                related_client_id: if client_value.is_empty() {
                    None
                } else {
                    Some(client_value.as_str())
                },
            };
            match api::create_task(&draft).await {
                Ok(()) => {
                    set_title.set(String::new());
                    set_assignee.set(String::new());
                    set_client_id.set(String::new());
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
                placeholder="Task title"
                required
                prop:value=move || title.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_title.set(input.value());
                }
            />
            <input
                type="text"
                placeholder="Assignee ID (optional)"
                prop:value=move || assignee.get()
                on:input=move |ev| set_assignee.set(event_target_value(&ev))
            />
            <select
                prop:value=move || client_id.get()
                on:change=move |ev| set_client_id.set(event_target_value(&ev))
            >
                <option value="">"Related client (optional)"</option>
                <For
                    each=move || clients.get()
                    key=|record| field_text(record, "_id")
                    children=move |record| {
                        let id = field_text(&record, "_id");
                        let label = format!(
                            "{} {}",
                            field_text(&record, "first_name"),
                            field_text(&record, "last_name")
                        );
                        view! { <option value=id>{label}</option> }
                    }
                />
            </select>
            <button type="submit" disabled=move || saving.get()>
                {move || if saving.get() { "Saving..." } else { "Add Task" }}
            </button>
        </form>
    }
}
