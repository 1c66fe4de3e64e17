//! AI Action Commands
//!
//! Frontend bindings for the backend analysis jobs and demo seeding.
//! The jobs run server-side; their output lands in the recommendation
//! and compliance collections, so callers refresh after completion.

use gloo_net::http::Request;
use serde::Serialize;
use serde_json::Value;

use super::endpoint;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct PortfolioAnalysisArgs<'a> {
    pub household_id: Option<&'a str>,
    pub account_ids: Vec<String>,
}

#[derive(Serialize)]
pub struct TaxOptimizationArgs<'a> {
    pub household_id: Option<&'a str>,
    pub year: i32,
}

#[derive(Serialize)]
pub struct EstatePlanArgs<'a> {
    pub household_id: Option<&'a str>,
    pub goals: Vec<String>,
    pub facts: Value,
}

#[derive(Serialize)]
struct SeedDemoArgs {
    count_clients: u32,
}

// ========================
// Commands
// ========================

/// POST one analysis request. The jobs report through their response
/// body, so any JSON reply counts as completion regardless of status;
/// only transport or parse failures error.
async fn post_ai<T: Serialize>(path: &str, args: &T) -> Result<Value, String> {
    let response = Request::post(&endpoint(path))
        .json(args)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    response.json().await.map_err(|e| e.to_string())
}

pub async fn portfolio_analysis(args: &PortfolioAnalysisArgs<'_>) -> Result<Value, String> {
    post_ai("/api/ai/portfolio/analysis", args).await
}

pub async fn tax_optimization(args: &TaxOptimizationArgs<'_>) -> Result<Value, String> {
    post_ai("/api/ai/tax/optimization", args).await
}

pub async fn estate_plan(args: &EstatePlanArgs<'_>) -> Result<Value, String> {
    post_ai("/api/ai/estate/plan", args).await
}

/// Ask the backend to materialize synthetic clients; resolves to the
/// user-facing completion message.
pub async fn seed_demo(count_clients: u32) -> Result<String, String> {
    let body = post_ai("/api/seed/demo", &SeedDemoArgs { count_clients }).await?;
    Ok(seed_message(&body))
}

/// Backend message for a seed run, with a fallback when the reply
/// carries none.
fn seed_message(body: &Value) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| "Seeded demo data".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_portfolio_args_shape() {
        let args = PortfolioAnalysisArgs {
            household_id: None,
            account_ids: Vec::new(),
        };
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({ "household_id": null, "account_ids": [] })
        );
    }

    #[test]
    fn test_tax_args_shape() {
        let args = TaxOptimizationArgs {
            household_id: Some("h-3"),
            year: 2026,
        };
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({ "household_id": "h-3", "year": 2026 })
        );
    }

    #[test]
    fn test_estate_args_placeholders() {
        let args = EstatePlanArgs {
            household_id: None,
            goals: Vec::new(),
            facts: json!({}),
        };
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({ "household_id": null, "goals": [], "facts": {} })
        );
    }

    #[test]
    fn test_seed_args_key_name() {
        let args = SeedDemoArgs { count_clients: 20 };
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({ "count_clients": 20 })
        );
    }

    #[test]
    fn test_seed_message_prefers_backend_text() {
        assert_eq!(
            seed_message(&json!({ "message": "Seeded 20 clients" })),
            "Seeded 20 clients"
        );
    }

    #[test]
    fn test_seed_message_falls_back() {
        assert_eq!(seed_message(&json!({})), "Seeded demo data");
        assert_eq!(seed_message(&json!({ "message": "" })), "Seeded demo data");
        assert_eq!(seed_message(&json!({ "message": 7 })), "Seeded demo data");
    }
}
