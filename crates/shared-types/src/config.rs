use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://lean-x.de";
pub const DEFAULT_PROFILE_PATH: &str = "/api/employee/self";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the employee API.
///
/// Every field has a default so that a missing or partial `[api]` table
/// still yields a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_profile_path")]
    pub profile_path: String,
    /// Raw `Cookie` header value sent by native clients, e.g. `JSESSIONID=abc`.
    /// Browsers attach their own session cookie instead.
    #[serde(default)]
    pub session_cookie: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_profile_path() -> String {
    DEFAULT_PROFILE_PATH.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            profile_path: default_profile_path(),
            session_cookie: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_session_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }

    /// Absolute URL of the self-profile endpoint.
    pub fn profile_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.profile_path.trim_start_matches('/')
        )
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
}
