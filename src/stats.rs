//! Summary Stats
//!
//! Derived dashboard counts, recomputed from the current lists. No
//! state of its own.

use serde_json::Value;

use crate::models::Record;

/// Status marking a task as no longer open.
const DONE_STATUS: &str = "done";

/// One stat tile: label plus current count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: usize,
}

/// Tasks whose status differs from the done marker. A task without a
/// status (or with a non-string one) counts as open.
pub fn open_task_count(tasks: &[Record]) -> usize {
    tasks
        .iter()
        .filter(|task| task.get("status").and_then(Value::as_str) != Some(DONE_STATUS))
        .count()
}

/// The four dashboard stats in display order.
pub fn summary_stats(
    households: &[Record],
    clients: &[Record],
    tasks: &[Record],
    recommendations: &[Record],
) -> [Stat; 4] {
    [
        Stat {
            label: "Households",
            value: households.len(),
        },
        Stat {
            label: "Clients",
            value: clients.len(),
        },
        Stat {
            label: "Open Tasks",
            value: open_task_count(tasks),
        },
        Stat {
            label: "Recommendations",
            value: recommendations.len(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_record(value: serde_json::Value) -> Record {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("test records must be objects"),
        }
    }

    #[test]
    fn test_summary_stats_counts() {
        let households = vec![make_record(json!({"name": "a"})), make_record(json!({"name": "b"}))];
        let clients = vec![make_record(json!({"first_name": "x"}))];
        let tasks = vec![
            make_record(json!({"status": "open"})),
            make_record(json!({"status": "done"})),
        ];
        let recommendations = Vec::new();

        let stats = summary_stats(&households, &clients, &tasks, &recommendations);

        assert_eq!(stats[0], Stat { label: "Households", value: 2 });
        assert_eq!(stats[1], Stat { label: "Clients", value: 1 });
        assert_eq!(stats[2], Stat { label: "Open Tasks", value: 1 });
        assert_eq!(stats[3], Stat { label: "Recommendations", value: 0 });
    }

    #[test]
    fn test_task_without_status_is_open() {
        let tasks = vec![
            make_record(json!({})),
            make_record(json!({"status": null})),
            make_record(json!({"status": 3})),
            make_record(json!({"status": "done"})),
        ];
        assert_eq!(open_task_count(&tasks), 3);
    }

    #[test]
    fn test_all_empty() {
        let stats = summary_stats(&[], &[], &[], &[]);
        assert!(stats.iter().all(|stat| stat.value == 0));
    }
}
