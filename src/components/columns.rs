//! Collection Columns
//!
//! Column sets for the five dashboard tables, including the formatters
//! some backend fields need. Everything else falls back to the table's
//! plain display coercion.

use chrono::DateTime;
use leptos_datatable::{display_value, Column, Row};
use serde_json::Value;

pub const HOUSEHOLD_COLUMNS: &[Column] = &[
    Column::new("name", "Name"),
    Column::new("risk_profile", "Risk"),
    Column::with_format("members", "Members", member_count),
];

pub const CLIENT_COLUMNS: &[Column] = &[
    Column::new("first_name", "First"),
    Column::new("last_name", "Last"),
    Column::new("email", "Email"),
    Column::new("household_id", "Household"),
];

pub const TASK_COLUMNS: &[Column] = &[
    Column::new("title", "Title"),
    Column::new("status", "Status"),
    Column::new("priority", "Priority"),
];

pub const RECOMMENDATION_COLUMNS: &[Column] = &[
    Column::new("category", "Category"),
    Column::new("title", "Title"),
    Column::new("status", "Status"),
    Column::new("impact_score", "Impact"),
];

pub const COMPLIANCE_COLUMNS: &[Column] = &[
    Column::with_format("timestamp", "Time", event_time),
    Column::new("action", "Action"),
    Column::new("resource_type", "Resource"),
    Column::new("resource_id", "ID"),
    Column::with_format("labels", "Labels", label_list),
];

/// Member lists render as their size; anything else counts zero.
fn member_count(value: &Value, _row: &Row) -> String {
    match value {
        Value::Array(members) => members.len().to_string(),
        _ => "0".to_string(),
    }
}

/// Label arrays join with a comma; non-arrays render empty.
fn label_list(value: &Value, _row: &Row) -> String {
    match value {
        Value::Array(labels) => labels
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
        _ => String::new(),
    }
}

/// RFC 3339 timestamps render as `%Y-%m-%d %H:%M:%S`; unparsable
/// strings pass through verbatim and anything else coerces plainly.
fn event_time(value: &Value, _row: &Row) -> String {
    match value.as_str() {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|timestamp| timestamp.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|_| raw.to_string()),
        None => display_value(value),
    }
}
