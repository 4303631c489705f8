//! Build-time configuration for the medical-record API and the identity provider,
//! with an optional runtime override. The runtime config is read from
//! `window.MEDREC_CONFIG` (if present) so static deployments can change endpoints
//! without rebuilding. Configuration values are public; do not store secrets here.

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api.medical-record";
const DEFAULT_AUTH_URL: &str = "http://localhost:8180";
const DEFAULT_AUTH_REALM: &str = "medical-record";
const DEFAULT_AUTH_CLIENT_ID: &str = "medical-record-web";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub auth_url: String,
    pub auth_realm: String,
    pub auth_client_id: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            auth_realm: DEFAULT_AUTH_REALM.to_string(),
            auth_client_id: DEFAULT_AUTH_CLIENT_ID.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::default();
        apply_runtime_overrides(&mut config, build_time_config());

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    auth_url: Option<String>,
    auth_realm: Option<String>,
    auth_client_id: Option<String>,
    log_level: Option<String>,
}

fn build_time_config() -> RuntimeConfig {
    RuntimeConfig {
        api_base_url: option_env!("MEDREC_API_BASE_URL").and_then(normalize_runtime_value),
        auth_url: option_env!("MEDREC_AUTH_URL").and_then(normalize_runtime_value),
        auth_realm: option_env!("MEDREC_AUTH_REALM").and_then(normalize_runtime_value),
        auth_client_id: option_env!("MEDREC_AUTH_CLIENT_ID").and_then(normalize_runtime_value),
        log_level: option_env!("MEDREC_LOG_LEVEL").and_then(normalize_runtime_value),
    }
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.auth_url {
        config.auth_url = value;
    }
    if let Some(value) = runtime.auth_realm {
        config.auth_realm = value;
    }
    if let Some(value) = runtime.auth_client_id {
        config.auth_client_id = value;
    }
    if let Some(value) = runtime.log_level {
        config.log_level = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("MEDREC_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        auth_url: read_runtime_value(&object, "auth_url"),
        auth_realm: read_runtime_value(&object, "auth_realm"),
        auth_client_id: read_runtime_value(&object, "auth_client_id"),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
