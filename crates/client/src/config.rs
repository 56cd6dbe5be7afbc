use shared_types::{ApiConfig, AppConfig};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_PATH: &str = "config.toml";

pub const BASE_URL_VAR: &str = "EMPLOYEE_API_BASE_URL";
pub const SESSION_VAR: &str = "EMPLOYEE_API_SESSION";

/// Load the configuration once and return it.
///
/// Native builds read `config.toml` (missing or broken files fall back to
/// defaults) and then apply `EMPLOYEE_API_BASE_URL` / `EMPLOYEE_API_SESSION`
/// from the environment or `.env`. Browser builds only see the base URL
/// baked in at compile time.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(load)
}

pub fn api_config() -> &'static ApiConfig {
    &app_config().api
}

#[cfg(not(target_arch = "wasm32"))]
fn load() -> AppConfig {
    let _ = dotenvy::dotenv();

    let mut config = match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => parse(&contents),
        Err(e) => {
            tracing::info!(path = CONFIG_PATH, error = %e, "Config file not found, using defaults");
            AppConfig::default()
        }
    };
    apply_overrides(&mut config, |key| std::env::var(key).ok());
    tracing::info!(base_url = %config.api.base_url, "Employee API configured");
    config
}

#[cfg(target_arch = "wasm32")]
fn load() -> AppConfig {
    let mut config = AppConfig::default();
    apply_overrides(&mut config, |key| match key {
        BASE_URL_VAR => option_env!("EMPLOYEE_API_BASE_URL").map(str::to_string),
        _ => None,
    });
    config
}

/// Parse `config.toml` contents, defaulting everything on error.
pub fn parse(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to parse config, using defaults");
        AppConfig::default()
    })
}

/// Apply environment overrides. Empty values are ignored.
pub fn apply_overrides(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = lookup(BASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
        config.api.base_url = url;
    }
    if let Some(cookie) = lookup(SESSION_VAR).filter(|v| !v.trim().is_empty()) {
        config.api.session_cookie = Some(cookie);
    }
}
