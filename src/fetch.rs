//! Collection Fetcher
//!
//! One reactive loader per backend collection. Each loader subscribes to
//! the shared data-changed notification and refetches its full list,
//! exposing the tri-state every panel renders from: last successful
//! items, loading flag, last error.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::{Collection, Record};

/// Read side of one collection's fetch state.
#[derive(Clone, Copy)]
pub struct CollectionHandle {
    /// Last successfully fetched list (empty until the first load).
    pub items: ReadSignal<Vec<Record>>,
    /// A request is in flight.
    pub loading: ReadSignal<bool>,
    /// Message of the last failed fetch, cleared when a new one starts.
    pub error: ReadSignal<Option<String>>,
}

/// A response may only commit if no newer request was issued while it
/// was in flight.
pub(crate) fn commit_allowed(issued: u64, current: u64) -> bool {
    issued == current
}

/// Load `collection` now and again on every data-changed notification.
///
/// Exactly one request is issued per notification. When notifications
/// overlap an in-flight request, the superseded response is discarded
/// untouched: requests carry the generation current at issue time and
/// only the newest generation may write the signals.
pub fn use_collection(collection: Collection) -> CollectionHandle {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (items, set_items) = signal(Vec::<Record>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let generation = StoredValue::new(0u64);

    Effect::new(move |_| {
        let version = ctx.data_version.get();
        let issued = generation.with_value(|g| g + 1);
        generation.set_value(issued);

        set_loading.set(true);
        set_error.set(None);
        web_sys::console::log_1(
            &format!(
                "[FETCH] Loading {} (version {})",
                collection.as_str(),
                version
            )
            .into(),
        );

        spawn_local(async move {
            let result = api::list(collection).await;
            if !commit_allowed(issued, generation.get_value()) {
                return;
            }
            match result {
                Ok(list) => {
                    web_sys::console::log_1(
                        &format!("[FETCH] Loaded {} {} records", list.len(), collection.as_str())
                            .into(),
                    );
                    set_items.set(list);
                }
                Err(message) => {
                    web_sys::console::warn_1(
                        &format!("[FETCH] {} failed: {}", collection.as_str(), message).into(),
                    );
                    set_error.set(Some(message));
                }
            }
            set_loading.set(false);
        });
    });

    CollectionHandle {
        items,
        loading,
        error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_allowed_only_for_current_generation() {
        assert!(commit_allowed(1, 1));
        assert!(commit_allowed(7, 7));
        // A newer request was issued while this one was in flight.
        assert!(!commit_allowed(1, 2));
        assert!(!commit_allowed(3, 9));
    }
}
