// SPDX-License-Identifier: MIT OR Apache-2.0

use broadcast_room_client::DEFAULT_GEO_API_URL;
use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Simulated network latency of a join submission.
pub const DEFAULT_SUBMIT_DELAY_MS: u32 = 1500;

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "geoApiUrl")]
    #[serde(default = "default_geo_api_url")]
    pub geo_api_url: String,
    /// Target origin for messages posted to the hosting page.
    #[serde(rename = "parentOrigin")]
    #[serde(default)]
    pub parent_origin: Option<String>,
    /// Comma-separated origins whose join messages the host page accepts.
    #[serde(rename = "allowedOrigins")]
    #[serde(default)]
    pub allowed_origins: String,
    #[serde(rename = "seedFixtures")]
    #[serde(default = "default_seed_fixtures")]
    pub seed_fixtures: String,
    #[serde(rename = "submitDelayMs")]
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u32,
}

fn default_geo_api_url() -> String {
    DEFAULT_GEO_API_URL.to_string()
}

fn default_seed_fixtures() -> String {
    "true".to_string()
}

fn default_submit_delay_ms() -> u32 {
    DEFAULT_SUBMIT_DELAY_MS
}

pub fn app_config() -> Result<RuntimeConfig, String> {
    let win = window().ok_or_else(|| "No window available".to_string())?;
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Err("Runtime configuration not found (window.__APP_CONFIG missing)".to_string());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}

pub fn split_origins(s: Option<&str>) -> Vec<String> {
    if let Some(s) = s {
        s.split(',')
            .filter_map(|s| {
                let s = s.trim().trim_end_matches('/').to_string();
                if s.is_empty() {
                    None
                } else {
                    Some(s)
                }
            })
            .collect::<Vec<String>>()
    } else {
        Vec::new()
    }
}

pub fn geo_api_url() -> Result<String, String> {
    app_config().map(|c| c.geo_api_url)
}
pub fn parent_origin() -> Option<String> {
    app_config()
        .ok()
        .and_then(|c| c.parent_origin)
        .filter(|s| !s.is_empty())
}
pub fn submit_delay_ms() -> u32 {
    app_config()
        .map(|c| c.submit_delay_ms)
        .unwrap_or(DEFAULT_SUBMIT_DELAY_MS)
}

pub fn geo_client() -> Result<broadcast_room_client::GeoClient, String> {
    let url = geo_api_url()?;
    Ok(broadcast_room_client::GeoClient::new(&url))
}
