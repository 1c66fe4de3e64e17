//! Leptos DataTable
//!
//! Generic read-only table for lists of opaque JSON records.
//! Columns are described by key + label + optional formatter; cells fall
//! back to a plain display coercion of the raw value.

use leptos::prelude::*;
use serde_json::Value;

/// A row is an opaque bag of fields owned by whoever produced it.
pub type Row = serde_json::Map<String, Value>;

/// Column descriptor: which field to show, under which header, and how.
#[derive(Clone, Copy)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
    /// Formatter receives the raw field value (`Null` when the field is
    /// absent) plus the whole row for cross-field rendering.
    pub format: Option<fn(&Value, &Row) -> String>,
}

impl Column {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            format: None,
        }
    }

    pub const fn with_format(
        key: &'static str,
        label: &'static str,
        format: fn(&Value, &Row) -> String,
    ) -> Self {
        Self {
            key,
            label,
            format: Some(format),
        }
    }
}

/// Coerce a JSON value to its display string.
///
/// Strings render verbatim, numbers and bools via their usual display
/// form, null as empty, arrays as comma-joined coerced elements, and
/// objects as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Text for one cell: the column formatter if present, else coercion.
pub fn cell_text(row: &Row, column: &Column) -> String {
    let value = row.get(column.key).unwrap_or(&Value::Null);
    match column.format {
        Some(format) => format(value, row),
        None => display_value(value),
    }
}

/// All cell texts for one row, in column order.
pub fn row_cells(row: &Row, columns: &[Column]) -> Vec<String> {
    columns.iter().map(|column| cell_text(row, column)).collect()
}

/// Cell texts for every row, in input order.
pub fn table_cells(rows: &[Row], columns: &[Column]) -> Vec<Vec<String>> {
    rows.iter().map(|row| row_cells(row, columns)).collect()
}

/// Generic record table.
///
/// Renders one header row, then one body row per record in input order.
/// The body is rebuilt in full whenever the list changes, so a record
/// replaced at the same position always shows its current values.
/// An empty list renders a single placeholder row spanning every column.
#[component]
pub fn DataTable(
    #[prop(into)] rows: Signal<Vec<Row>>,
    columns: &'static [Column],
    #[prop(into, default = String::from("No records yet"))] empty_label: String,
) -> impl IntoView {
    view! {
        <div class="table-scroll">
            <table class="data-table">
                <thead>
                    <tr>
                        {columns
                            .iter()
                            .map(|column| view! { <th>{column.label}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || rows.get().is_empty()>
                        <tr class="placeholder-row">
                            <td colspan=columns.len().to_string()>{empty_label.clone()}</td>
                        </tr>
                    </Show>
                    {move || {
                        table_cells(&rows.get(), columns)
                            .into_iter()
                            .map(|cells| {
                                view! {
                                    <tr>
                                        {cells
                                            .into_iter()
                                            .map(|text| view! { <td>{text}</td> })
                                            .collect_view()}
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_row(value: Value) -> Row {
        match value {
            Value::Object(map) => map,
            _ => panic!("test rows must be objects"),
        }
    }

    #[test]
    fn test_display_value_scalars() {
        assert_eq!(display_value(&Value::Null), "");
        assert_eq!(display_value(&json!("advisory")), "advisory");
        assert_eq!(display_value(&json!(42)), "42");
        assert_eq!(display_value(&json!(8.5)), "8.5");
        assert_eq!(display_value(&json!(true)), "true");
    }

    #[test]
    fn test_display_value_array_joins_elements() {
        assert_eq!(display_value(&json!(["kyc", "aml"])), "kyc,aml");
        assert_eq!(display_value(&json!([1, 2, 3])), "1,2,3");
        assert_eq!(display_value(&json!([])), "");
    }

    #[test]
    fn test_display_value_object_is_compact_json() {
        assert_eq!(display_value(&json!({"a": 1})), r#"{"a":1}"#);
    }

    #[test]
    fn test_cell_text_missing_field_is_empty() {
        let row = make_row(json!({ "name": "Smith" }));
        let column = Column::new("email", "Email");
        assert_eq!(cell_text(&row, &column), "");
    }

    #[test]
    fn test_cell_text_null_field_is_empty() {
        let row = make_row(json!({ "email": null }));
        let column = Column::new("email", "Email");
        assert_eq!(cell_text(&row, &column), "");
    }

    #[test]
    fn test_cell_text_prefers_formatter() {
        fn shout(value: &Value, _row: &Row) -> String {
            display_value(value).to_uppercase()
        }
        let row = make_row(json!({ "status": "open" }));
        let column = Column::with_format("status", "Status", shout);
        assert_eq!(cell_text(&row, &column), "OPEN");
    }

    #[test]
    fn test_formatter_sees_null_for_missing_field() {
        fn tag_null(value: &Value, _row: &Row) -> String {
            if value.is_null() { "absent".into() } else { "present".into() }
        }
        let row = make_row(json!({}));
        let column = Column::with_format("anything", "Anything", tag_null);
        assert_eq!(cell_text(&row, &column), "absent");
    }

    #[test]
    fn test_row_cells_in_column_order() {
        let row = make_row(json!({ "last": "Doe", "first": "Jane" }));
        let columns = [Column::new("first", "First"), Column::new("last", "Last")];
        assert_eq!(row_cells(&row, &columns), vec!["Jane", "Doe"]);
    }

    #[test]
    fn test_table_cells_reflect_replaced_rows() {
        fn member_total(value: &Value, _row: &Row) -> String {
            match value {
                Value::Array(items) => items.len().to_string(),
                _ => "0".to_string(),
            }
        }
        let columns = [
            Column::new("name", "Name"),
            Column::with_format("members", "Members", member_total),
        ];

        let before = vec![make_row(json!({ "name": "Smith", "members": ["c-1"] }))];
        assert_eq!(table_cells(&before, &columns), vec![vec!["Smith", "1"]]);

        // Same position, updated record: derived cells follow the new value.
        let after = vec![make_row(json!({ "name": "Smith", "members": ["c-1", "c-2"] }))];
        assert_eq!(table_cells(&after, &columns), vec![vec!["Smith", "2"]]);
    }

    #[test]
    fn test_table_cells_follow_input_order() {
        let columns = [Column::new("action", "Action")];
        let first = vec![
            make_row(json!({ "action": "update" })),
            make_row(json!({ "action": "create" })),
        ];
        assert_eq!(
            table_cells(&first, &columns),
            vec![vec!["update"], vec!["create"]]
        );

        // A newer entry prepended to the list leads the derived rows.
        let second = vec![
            make_row(json!({ "action": "delete" })),
            make_row(json!({ "action": "update" })),
            make_row(json!({ "action": "create" })),
        ];
        assert_eq!(
            table_cells(&second, &columns),
            vec![vec!["delete"], vec!["update"], vec!["create"]]
        );
    }
}
