//! Dashboard Models
//!
//! Collection names and the opaque record shape. The backend owns every
//! entity schema; the dashboard only ever displays fields it knows about
//! and renders the rest as empty.

use leptos_datatable::display_value;
use serde::Serialize;

/// Opaque backend record: a bag of fields read straight from the wire.
pub type Record = leptos_datatable::Row;

/// The five backend collections the dashboard lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Household,
    Client,
    Task,
    Recommendation,
    Compliance,
}

impl Collection {
    /// Wire name used in list paths and create payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Household => "household",
            Collection::Client => "client",
            Collection::Task => "task",
            Collection::Recommendation => "recommendation",
            Collection::Compliance => "compliance",
        }
    }
}

/// Display text of one record field (empty when absent or null).
pub fn field_text(record: &Record, key: &str) -> String {
    record.get(key).map(display_value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collection_wire_names() {
        assert_eq!(Collection::Household.as_str(), "household");
        assert_eq!(Collection::Client.as_str(), "client");
        assert_eq!(Collection::Task.as_str(), "task");
        assert_eq!(Collection::Recommendation.as_str(), "recommendation");
        assert_eq!(Collection::Compliance.as_str(), "compliance");
    }

    #[test]
    fn test_collection_serializes_to_wire_name() {
        for collection in [
            Collection::Household,
            Collection::Client,
            Collection::Task,
            Collection::Recommendation,
            Collection::Compliance,
        ] {
            let serialized = serde_json::to_value(collection).unwrap();
            assert_eq!(serialized, json!(collection.as_str()));
        }
    }

    #[test]
    fn test_field_text() {
        let record = match json!({ "name": "Smith Family", "email": null }) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        assert_eq!(field_text(&record, "name"), "Smith Family");
        assert_eq!(field_text(&record, "email"), "");
        assert_eq!(field_text(&record, "missing"), "");
    }
}
