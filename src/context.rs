//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Data-changed notification - read side, subscribed by every
    /// collection fetcher
    pub data_version: ReadSignal<u64>,
    /// Data-changed notification - write side, bumped after mutations
    set_data_version: WriteSignal<u64>,
}

impl AppContext {
    pub fn new(data_version: (ReadSignal<u64>, WriteSignal<u64>)) -> Self {
        Self {
            data_version: data_version.0,
            set_data_version: data_version.1,
        }
    }

    /// Publish that backend data changed. The version only ever grows;
    /// each subscriber decides on its own to reload.
    pub fn notify_data_changed(&self) {
        self.set_data_version.update(|v| *v += 1);
    }
}
