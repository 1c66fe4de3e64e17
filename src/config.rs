//! Backend Configuration
//!
//! Resolves the backend base URL. Deployments override the default
//! without rebuilding, either through a global injected before the WASM
//! loads:
//!
//! ```text
//! window.__WEALTH_CRM_CONFIG__ = { api_base: "https://crm.example.com" };
//! ```
//!
//! or through a meta tag in the host page:
//!
//! ```text
//! <meta name="wealth-crm:api-base" content="https://crm.example.com">
//! ```

use wasm_bindgen::{JsCast, JsValue};

/// Default backend address for local development.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

const CONFIG_GLOBAL: &str = "__WEALTH_CRM_CONFIG__";
const META_NAME: &str = "wealth-crm:api-base";

/// Backend base URL, normalized without a trailing slash.
pub fn api_base() -> String {
    window_override()
        .or_else(meta_override)
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

fn window_override() -> Option<String> {
    let window = web_sys::window()?;
    let config = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).ok()?;
    if config.is_undefined() || config.is_null() {
        return None;
    }
    let value = js_sys::Reflect::get(&config, &JsValue::from_str("api_base")).ok()?;
    value.as_string().and_then(normalize_base)
}

fn meta_override() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name='{META_NAME}']");
    let element = document.query_selector(&selector).ok()??;
    let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
    normalize_base(meta.content())
}

/// Strip whitespace and any trailing slash; blank overrides are ignored.
fn normalize_base(raw: String) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
