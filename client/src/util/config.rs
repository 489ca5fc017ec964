//! Client configuration.
//!
//! Values come from build-time environment variables and may be overridden at
//! runtime by `window.CAREERDESK_CONFIG`, which the server emits as
//! `/config.js`. Everything here is public; never put secrets in it.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Identity-provider host used when nothing else is configured.
pub const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com";
/// Resume-to-job matching service.
pub const DEFAULT_JOB_MATCH_URL: &str = "https://hagarrrr-job-matching.hf.space";
/// Number of matches requested per resume.
pub const JOB_MATCH_TOP_K: u32 = 5;
/// Document store holding `users/{uid}` profiles.
pub const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com";
/// How long a transitional view stays up before a gate redirect fires.
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 1500;
/// Longest delay a browser timer can hold (`i32::MAX` ms).
pub const MAX_REDIRECT_DELAY_MS: u64 = 2_147_483_647;

/// Frontend configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub identity_base_url: String,
    /// Empty means auth flows report "not configured".
    pub identity_api_key: String,
    pub redirect_delay: Duration,
    pub job_match_url: String,
    pub firestore_base_url: String,
    /// Empty means profile storage reports "not configured".
    pub firestore_project_id: String,
    /// Empty hides the embedded labor-market report.
    pub dashboard_embed_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            identity_base_url: DEFAULT_IDENTITY_BASE_URL.to_owned(),
            identity_api_key: String::new(),
            redirect_delay: Duration::from_millis(DEFAULT_REDIRECT_DELAY_MS),
            job_match_url: DEFAULT_JOB_MATCH_URL.to_owned(),
            firestore_base_url: DEFAULT_FIRESTORE_BASE_URL.to_owned(),
            firestore_project_id: String::new(),
            dashboard_embed_url: String::new(),
        }
    }
}

impl AppConfig {
    /// Load build-time values, then apply runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::default();
        let build = RuntimeConfig {
            identity_base_url: option_env!("CAREERDESK_IDENTITY_BASE_URL").and_then(normalize_runtime_value),
            identity_api_key: option_env!("CAREERDESK_IDENTITY_API_KEY").and_then(normalize_runtime_value),
            redirect_delay_ms: option_env!("CAREERDESK_REDIRECT_DELAY_MS").and_then(normalize_runtime_value),
            job_match_url: option_env!("CAREERDESK_JOB_MATCH_URL").and_then(normalize_runtime_value),
            firestore_base_url: option_env!("CAREERDESK_FIRESTORE_BASE_URL").and_then(normalize_runtime_value),
            firestore_project_id: option_env!("CAREERDESK_FIRESTORE_PROJECT_ID").and_then(normalize_runtime_value),
            dashboard_embed_url: option_env!("CAREERDESK_DASHBOARD_EMBED_URL").and_then(normalize_runtime_value),
        };
        apply_overrides(&mut config, build);

        if let Some(runtime) = runtime_config() {
            apply_overrides(&mut config, runtime);
        }
        config
    }

    pub fn has_identity_provider(&self) -> bool {
        !self.identity_api_key.is_empty()
    }

    pub fn has_profile_store(&self) -> bool {
        !self.firestore_project_id.is_empty()
    }
}

#[derive(Default)]
struct RuntimeConfig {
    identity_base_url: Option<String>,
    identity_api_key: Option<String>,
    redirect_delay_ms: Option<String>,
    job_match_url: Option<String>,
    firestore_base_url: Option<String>,
    firestore_project_id: Option<String>,
    dashboard_embed_url: Option<String>,
}

fn apply_overrides(config: &mut AppConfig, overrides: RuntimeConfig) {
    if let Some(value) = overrides.identity_base_url {
        config.identity_base_url = value.trim_end_matches('/').to_owned();
    }
    if let Some(value) = overrides.identity_api_key {
        config.identity_api_key = value;
    }
    if let Some(value) = overrides.job_match_url {
        config.job_match_url = value.trim_end_matches('/').to_owned();
    }
    if let Some(value) = overrides.firestore_base_url {
        config.firestore_base_url = value.trim_end_matches('/').to_owned();
    }
    if let Some(value) = overrides.firestore_project_id {
        config.firestore_project_id = value;
    }
    if let Some(value) = overrides.dashboard_embed_url {
        config.dashboard_embed_url = value;
    }
    // Unparseable delays keep the previous value; oversized ones are capped.
    if let Some(ms) = overrides.redirect_delay_ms.and_then(|v| v.parse::<u64>().ok()) {
        config.redirect_delay = Duration::from_millis(ms.min(MAX_REDIRECT_DELAY_MS));
    }
}

#[cfg(feature = "csr")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let raw = Reflect::get(&window, &JsValue::from_str("CAREERDESK_CONFIG")).ok()?;
    if raw.is_null() || raw.is_undefined() {
        return None;
    }
    let object = Object::from(raw);
    let read = |key: &str| {
        let value = Reflect::get(&object, &JsValue::from_str(key)).ok()?;
        // Numbers are accepted for the delay.
        let text = value.as_string().or_else(|| value.as_f64().map(|n| format!("{n:.0}")))?;
        normalize_runtime_value(&text)
    };

    Some(RuntimeConfig {
        identity_base_url: read("identity_base_url"),
        identity_api_key: read("identity_api_key"),
        redirect_delay_ms: read("redirect_delay_ms"),
        job_match_url: read("job_match_url"),
        firestore_base_url: read("firestore_base_url"),
        firestore_project_id: read("firestore_project_id"),
        dashboard_embed_url: read("dashboard_embed_url"),
    })
}

#[cfg(not(feature = "csr"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}
