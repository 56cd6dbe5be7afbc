//! The employee API as seen by the dashboard.

use crate::ProfileError;
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use shared_types::{ApiConfig, EmployeeProfile};

/// Read access to the signed-in employee's own record.
///
/// The page talks to this trait only, so tests can swap in canned responses.
#[allow(async_fn_in_trait)]
pub trait EmployeeApi {
    /// `GET` the profile of the employee owning the current session.
    async fn fetch_self_profile(&self) -> Result<EmployeeProfile, ProfileError>;
}

/// [`EmployeeApi`] over HTTP, addressed through one configured base URL.
#[derive(Debug, Clone)]
pub struct HttpEmployeeApi {
    client: Client,
    profile_url: Url,
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    session_cookie: Option<String>,
}

impl HttpEmployeeApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ProfileError> {
        let profile_url = Url::parse(&config.profile_url())
            .map_err(|e| ProfileError::Config(format!("{}: {e}", config.profile_url())))?;

        #[cfg(not(target_arch = "wasm32"))]
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProfileError::Config(e.to_string()))?;

        #[cfg(target_arch = "wasm32")]
        let client = Client::new();

        Ok(Self {
            client,
            profile_url,
            session_cookie: config.session_cookie.clone(),
        })
    }

    pub fn profile_url(&self) -> &Url {
        &self.profile_url
    }
}

impl EmployeeApi for HttpEmployeeApi {
    #[tracing::instrument(skip(self), fields(url = %self.profile_url))]
    async fn fetch_self_profile(&self) -> Result<EmployeeProfile, ProfileError> {
        let request = self
            .client
            .get(self.profile_url.clone())
            .header(ACCEPT, "application/json");

        // The browser owns the session cookie; ask fetch to send it along.
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        #[cfg(not(target_arch = "wasm32"))]
        let request = match &self.session_cookie {
            Some(cookie) => request.header(reqwest::header::COOKIE, cookie),
            None => request,
        };

        let response = request.send().await.map_err(|e| {
            tracing::warn!(error = %e, "Employee profile request failed");
            ProfileError::transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Employee API returned an error status");
            return Err(ProfileError::http(status.as_u16(), &body));
        }

        let body = response.text().await.map_err(ProfileError::transport)?;
        let profile = serde_json::from_str::<EmployeeProfile>(&body).map_err(|e| {
            tracing::warn!(error = %e, "Employee profile body is not valid JSON");
            ProfileError::Parse(e.to_string())
        })?;

        tracing::info!(employee_id = ?profile.id, "Employee profile loaded");
        Ok(profile)
    }
}
