//! API client for communicating with the StockNotify backend.
//!
//! Every outgoing request passes through an authorize step that attaches the
//! current session token as a bearer credential, and every failed response is
//! inspected on the way back: a 401 invalidates the local session before the
//! failure is handed to the caller. There is no retry or recovery here.

use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::auth::SessionHandle;
use crate::config::Config;
use crate::models::{LoginResponse, NotificationSetting, RegisterAccountRequest};

use super::ApiError;

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client for the StockNotify backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection
/// pooling, and the session handle is itself a shared reference.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: SessionHandle,
}

impl ApiClient {
    /// Create a new API client against the configured base URL.
    /// The base URL is read once here; later config changes are not seen.
    pub fn new(config: &Config, session: SessionHandle) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the current session token as a bearer credential, if present.
    /// Requests without a token go out with headers untouched; this step
    /// itself cannot fail.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Pass successful responses through; map failures to `ApiError`.
    ///
    /// A 401 additionally clears the local session: the backend no longer
    /// honors the stored token, so keeping it would only repeat the failure
    /// on the next request. The error is still returned so downstream error
    /// handling observes the original failure.
    async fn check_response(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status.as_u16() == 401 {
            warn!("Received 401 from API, clearing stored session");
            if let Err(e) = self.session.log_out() {
                warn!(error = %e, "Failed to clear persisted session token");
            }
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status, &body).into())
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .map_err(ApiError::NetworkError)
            .with_context(|| format!("Failed to send GET request to {}", url))?;

        let response = self.check_response(response).await?;
        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.url(path);
        let response = self
            .authorize(self.client.post(&url))
            .json(body)
            .send()
            .await
            .map_err(ApiError::NetworkError)
            .with_context(|| format!("Failed to send POST request to {}", url))?;

        let response = self.check_response(response).await?;
        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    /// POST where the response body is irrelevant (backend returns 2xx).
    async fn post_no_content<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let url = self.url(path);
        let response = self
            .authorize(self.client.post(&url))
            .json(body)
            .send()
            .await
            .map_err(ApiError::NetworkError)
            .with_context(|| format!("Failed to send POST request to {}", url))?;

        self.check_response(response).await?;
        Ok(())
    }

    // ===== Authentication =====

    /// Exchange credentials for a backend-issued token and store it in the
    /// session. The token itself is opaque to the client; issuing and
    /// validating it is entirely the backend's business.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });
        let response: LoginResponse = self.post("/auth/login", &body).await?;
        self.session.set_token(&response.token)?;
        debug!("Login succeeded, session token stored");
        Ok(())
    }

    /// Register a new account. Does not log the new account in; the caller
    /// follows up with `login`.
    pub async fn register_account(&self, request: &RegisterAccountRequest) -> Result<()> {
        self.post_no_content("/auth/register", request).await
    }

    // ===== Notification settings =====

    /// Fetch all stock notification settings for the logged-in user.
    pub async fn fetch_notification_settings(&self) -> Result<Vec<NotificationSetting>> {
        self.get("/notificationSettings").await
    }

    /// Create or update a notification setting, returning the stored copy.
    pub async fn save_notification_setting(
        &self,
        setting: &NotificationSetting,
    ) -> Result<NotificationSetting> {
        self.post("/notificationSettings", setting).await
    }

    /// Delete a notification setting by id.
    pub async fn delete_notification_setting(&self, id: i64) -> Result<()> {
        let url = self.url(&format!("/notificationSettings/{}", id));
        let response = self
            .authorize(self.client.delete(&url))
            .send()
            .await
            .map_err(ApiError::NetworkError)
            .with_context(|| format!("Failed to send DELETE request to {}", url))?;

        self.check_response(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn client_with_base(base_url: &str, dir: &tempfile::TempDir) -> ApiClient {
        let session = SessionHandle::open(dir.path()).unwrap();
        let config = Config {
            api_base_url: base_url.to_string(),
            last_username: None,
        };
        ApiClient::new(&config, session).unwrap()
    }

    #[test]
    fn test_url_joining_strips_trailing_slash() {
        let dir = tempdir().unwrap();

        let client = client_with_base("http://localhost:8080/api/", &dir);
        assert_eq!(
            client.url("/notificationSettings"),
            "http://localhost:8080/api/notificationSettings"
        );

        let client = client_with_base("http://localhost:8080/api", &dir);
        assert_eq!(
            client.url("/notificationSettings"),
            "http://localhost:8080/api/notificationSettings"
        );
    }
}
