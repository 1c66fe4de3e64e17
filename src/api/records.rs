//! Record Commands
//!
//! Frontend bindings for the generic list and create endpoints. Records
//! come back as opaque field bags; creation sends the constructor subset
//! each form collects.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use super::endpoint;
use crate::models::{Collection, Record};

// ========================
// Payload Structs
// ========================

#[derive(Serialize)]
pub struct HouseholdDraft<'a> {
    pub name: &'a str,
    pub risk_profile: &'a str,
}

#[derive(Serialize)]
pub struct ClientDraft<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub household_id: Option<&'a str>,
}

#[derive(Serialize)]
pub struct TaskDraft<'a> {
    pub title: &'a str,
    pub assignee_id: Option<&'a str>,
    pub related_client_id: Option<&'a str>,
}

#[derive(Serialize)]
struct CreatePayload<'a, T: Serialize> {
    collection: Collection,
    data: &'a T,
}

#[derive(Deserialize)]
struct ListResponse {
    // Absent and null both mean an empty list.
    #[serde(default)]
    items: Option<Vec<Record>>,
}

/// Path of the list endpoint for one collection.
fn list_path(collection: Collection) -> String {
    format!("/api/list/{}", collection.as_str())
}

// ========================
// Commands
// ========================

/// Fetch the full item list of one collection. A reply without an
/// `items` field counts as empty.
pub async fn list(collection: Collection) -> Result<Vec<Record>, String> {
    let response = Request::get(&endpoint(&list_path(collection)))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("List {} failed", collection.as_str()));
    }
    let body: ListResponse = response.json().await.map_err(|e| e.to_string())?;
    Ok(body.items.unwrap_or_default())
}

async fn create<T: Serialize>(collection: Collection, data: &T) -> Result<(), String> {
    let response = Request::post(&endpoint("/api/create"))
        .json(&CreatePayload { collection, data })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err("Create failed".to_string());
    }
    Ok(())
}

pub async fn create_household(draft: &HouseholdDraft<'_>) -> Result<(), String> {
    create(Collection::Household, draft).await
}

pub async fn create_client(draft: &ClientDraft<'_>) -> Result<(), String> {
    create(Collection::Client, draft).await
}

pub async fn create_task(draft: &TaskDraft<'_>) -> Result<(), String> {
    create(Collection::Task, draft).await
}
