//! Backend API Bindings
//!
//! HTTP bindings to the backend REST API, organized by domain. Every
//! binding resolves to `Result<T, String>` with a human-readable failure
//! message; callers decide whether that surfaces inline or as an alert.

mod ai;
mod records;

use crate::config;

// Re-export all public items
pub use ai::*;
pub use records::*;

/// Absolute URL for a backend path.
fn endpoint(path: &str) -> String {
    format!("{}{}", config::api_base(), path)
}
