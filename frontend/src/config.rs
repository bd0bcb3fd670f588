use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_SIGN_IN_URL: &str = "/auth/sign-in";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub sign_in_url: Option<String>,
}

impl RuntimeConfig {
    /// Fills missing values from `fallback`.
    pub fn merged_with(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: non_empty(self.api_base_url).or(non_empty(fallback.api_base_url)),
            sign_in_url: non_empty(self.sign_in_url).or(non_empty(fallback.sign_in_url)),
        }
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    pub fn sign_in_url(&self) -> &str {
        self.sign_in_url.as_deref().unwrap_or(DEFAULT_SIGN_IN_URL)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

fn read_global_key(global: &str, keys: &[&str]) -> Option<String> {
    // Expect optional global object, e.g. window.__LEAVEDESK_ENV = { API_BASE_URL: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

fn read_global(global: &str) -> RuntimeConfig {
    RuntimeConfig {
        api_base_url: read_global_key(global, &["API_BASE_URL", "api_base_url"]),
        sign_in_url: read_global_key(global, &["SIGN_IN_URL", "sign_in_url"]),
    }
}

fn snapshot_from_globals() -> RuntimeConfig {
    read_global("__LEAVEDESK_ENV").merged_with(read_global("__LEAVEDESK_CONFIG"))
}

fn config_json_url() -> Option<String> {
    let origin = web_sys::window()?.location().origin().ok()?;
    Some(format!("{origin}/config.json"))
}

async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let url = config_json_url().context("no window location")?;
    let resp = reqwest::get(&url)
        .await
        .context("config.json request failed")?;
    if !resp.status().is_success() {
        bail!("config.json returned {}", resp.status());
    }
    resp.json::<RuntimeConfig>()
        .await
        .context("config.json is not valid runtime config")
}

pub async fn runtime_config() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    let mut resolved = snapshot_from_globals();
    if resolved.api_base_url.is_none() || resolved.sign_in_url.is_none() {
        match fetch_runtime_config().await {
            Ok(cfg) => resolved = resolved.merged_with(cfg),
            Err(err) => log::debug!("runtime config fallback to defaults: {err:#}"),
        }
    }
    RUNTIME_CONFIG.get_or_init(|| resolved).clone()
}

pub async fn await_api_base_url() -> String {
    runtime_config().await.api_base_url().to_string()
}

/// Last resolved sign-in URL without waiting; defaults until `init` ran.
pub fn sign_in_url() -> String {
    RUNTIME_CONFIG
        .get()
        .map(|cfg| cfg.sign_in_url().to_string())
        .unwrap_or_else(|| DEFAULT_SIGN_IN_URL.to_string())
}

pub async fn init() {
    let cfg = runtime_config().await;
    log::info!("runtime config loaded (api: {})", cfg.api_base_url());
}
