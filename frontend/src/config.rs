use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

const ENV_GLOBAL: &str = "__PORTAL_ENV";
const CONFIG_GLOBAL: &str = "__PORTAL_CONFIG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn normalize(value: Option<String>) -> Option<String> {
    let value = value?;
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// First non-blank source wins: env.js, then the window config object, then config.json.
pub fn resolve_base_url(
    env: Option<String>,
    window_config: Option<String>,
    file: Option<String>,
) -> String {
    normalize(env)
        .or_else(|| normalize(window_config))
        .or_else(|| normalize(file))
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

fn read_global(global: &str, keys: [&str; 2]) -> Option<String> {
    // Expect optional global object: window.__PORTAL_ENV = { API_BASE_URL: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.into_iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &key.into()).ok())
        .find(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = match reqwest::get(format!("{}/config.json", origin)).await {
        Ok(resp) => resp,
        Err(err) => {
            log::warn!("config.json unavailable: {}", err);
            return None;
        }
    };
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    let env = read_global(ENV_GLOBAL, ["API_BASE_URL", "api_base_url"]);
    let window_config = read_global(CONFIG_GLOBAL, ["api_base_url", "API_BASE_URL"]);
    let file = if normalize(env.clone()).is_none() && normalize(window_config.clone()).is_none() {
        fetch_runtime_config().await.and_then(|cfg| cfg.api_base_url)
    } else {
        None
    };
    let resolved = resolve_base_url(env, window_config, file);
    API_BASE_URL.get_or_init(|| resolved).clone()
}

pub async fn init() {
    let base_url = await_api_base_url().await;
    log::info!("API base URL: {}", base_url);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_takes_precedence() {
        assert_eq!(
            resolve_base_url(
                Some("https://env.example/api".into()),
                Some("https://window.example/api".into()),
                Some("https://file.example/api".into()),
            ),
            "https://env.example/api"
        );
    }

    #[test]
    fn blank_sources_fall_through() {
        assert_eq!(
            resolve_base_url(Some("  ".into()), None, Some("https://file.example/api/".into())),
            "https://file.example/api"
        );
        assert_eq!(resolve_base_url(None, None, None), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn runtime_config_parses_optional_url() {
        let cfg: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert!(cfg.api_base_url.is_none());
        let cfg: RuntimeConfig =
            serde_json::from_str(r#"{"api_base_url":"https://api.example"}"#).unwrap();
        assert_eq!(cfg.api_base_url.as_deref(), Some("https://api.example"));
    }
}
