//! Runtime Configuration
//!
//! Optional overrides read from `window.__TRAILMARK_CONFIG__`, e.g.
//! `<script>window.__TRAILMARK_CONFIG__ = { zoom: 15, logLevel: "debug" }</script>`.

use serde::Deserialize;
use tracing::Level;
use wasm_bindgen::JsValue;

use crate::error::{AppError, AppResult};

/// Tile source; kept verbatim for license compliance
pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

const CONFIG_GLOBAL: &str = "__TRAILMARK_CONFIG__";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Id of the element Leaflet renders into
    pub map_element_id: String,
    /// Initial zoom level
    pub zoom: u8,
    /// trace | debug | info | warn | error
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            map_element_id: "map".to_string(),
            zoom: 13,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Read the config global. Missing global means defaults.
    pub fn load() -> AppResult<Self> {
        let Some(window) = web_sys::window() else {
            return Ok(Self::default());
        };
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))?;
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Parsed log level, falling back to INFO
    pub fn log_level(&self) -> Level {
        self.log_level.trim().parse().unwrap_or(Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"zoom": 15}"#).unwrap();
        assert_eq!(config.zoom, 15);
        assert_eq!(config.map_element_id, "map");
        assert_eq!(config.log_level(), Level::INFO);
    }

    #[test]
    fn test_camel_case_keys() {
        let config: AppConfig =
            serde_json::from_str(r#"{"mapElementId": "workout-map", "logLevel": "debug"}"#).unwrap();
        assert_eq!(config.map_element_id, "workout-map");
        assert_eq!(config.log_level(), Level::DEBUG);
        assert_eq!(config.zoom, 13);
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = AppConfig {
            log_level: "chatty".to_string(),
            ..Default::default()
        };
        assert_eq!(config.log_level(), Level::INFO);
    }
}
