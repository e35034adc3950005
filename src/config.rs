//! Browser Configuration
//!
//! Source config comes from `window.__PORTAL_CONFIG__`, set by the hosting
//! page before the wasm bundle loads, or else from build-time variables.

use listing_core::{ConfigError, SourceConfig};
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "__PORTAL_CONFIG__";

/// Load and validate the listing source configuration
pub fn load_source_config() -> Result<SourceConfig, ConfigError> {
    match config_global() {
        Some(value) => {
            let config: SourceConfig = serde_wasm_bindgen::from_value(value)
                .map_err(|e| ConfigError::Malformed(e.to_string()))?;
            config.validate()?;
            Ok(config)
        }
        None => from_build_env(),
    }
}

fn config_global() -> Option<JsValue> {
    let window = web_sys::window()?;
    js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

fn from_build_env() -> Result<SourceConfig, ConfigError> {
    let url = option_env!("PORTAL_SUPABASE_URL")
        .ok_or_else(|| ConfigError::Malformed(format!("window.{} is not set", CONFIG_GLOBAL)))?;
    let anon_key = option_env!("PORTAL_SUPABASE_ANON_KEY").ok_or(ConfigError::MissingAnonKey)?;
    SourceConfig::new(url, anon_key)
}
