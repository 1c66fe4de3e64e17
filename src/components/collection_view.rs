//! Collection View Component
//!
//! Table panel for one collection: loading hint, local fetch error, and
//! the record table. A failing collection renders its message here and
//! never blocks the other panels.

use leptos::prelude::*;
use leptos_datatable::{Column, DataTable};

use crate::fetch::CollectionHandle;

#[component]
pub fn CollectionView(handle: CollectionHandle, columns: &'static [Column]) -> impl IntoView {
    view! {
        <Show when=move || handle.loading.get()>
            <p class="loading-hint">"Loading..."</p>
        </Show>
        {move || {
            handle
                .error
                .get()
                .map(|message| view! { <p class="fetch-error">{message}</p> })
        }}
        <DataTable rows=handle.items columns=columns />
    }
}
