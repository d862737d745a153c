// File: crates/guesslab-client/src/api.rs
// Summary: JSON client for the login and profile endpoints.

use std::time::Duration;

use guesslab_core::{GameRecord, ProfileSummary};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::error::{ClientError, FALLBACK_MESSAGE};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProfileRequest {
    pub client_id: String,
    pub username: String,
}

/// `POST /api/login` takes the same body; the server binds `username` to the session.
pub type LoginRequest = ProfileRequest;

/// Body of a successful `POST /api/login`; the stored profile it carries is not needed here.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoginResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub username: String,
}

/// Body of a successful `POST /api/profile`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProfileResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub summary: ProfileSummary,
    /// Chronological, oldest first; the chart source.
    #[serde(default)]
    pub history: Vec<GameRecord>,
    /// Latest games, newest first.
    #[serde(default)]
    pub recent: Vec<GameRecord>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Turn a non-success status and its body into [`ClientError::Api`].
pub fn api_error(status: u16, body: &str) -> ClientError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
    ClientError::Api { status, message }
}

pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    client_id: String,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()?;
        let client_id = config.resolve_client_id();
        Ok(Self { http, config, client_id })
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Bind `username` to this client's session. The server refuses profile
    /// lookups from a session nobody has logged into.
    pub async fn login(&self, username: &str) -> Result<LoginResponse, ClientError> {
        let body = LoginRequest { client_id: self.client_id.clone(), username: username.trim().to_string() };
        let res: LoginResponse = self.post("/api/login", &body).await?;
        tracing::info!(username = %res.username, "logged in");
        Ok(res)
    }

    /// Fetch summary and history for `username`.
    pub async fn fetch_profile(&self, username: &str) -> Result<ProfileResponse, ClientError> {
        let body = ProfileRequest { client_id: self.client_id.clone(), username: username.trim().to_string() };
        let profile: ProfileResponse = self.post("/api/profile", &body).await?;
        tracing::debug!(games = profile.history.len(), "profile loaded");
        Ok(profile)
    }

    async fn post<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ClientError> {
        let url = self.config.endpoint(path);
        tracing::debug!(%url, "POST");

        let res = self.http.post(&url).json(body).send().await?;
        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            let err = api_error(status.as_u16(), &text);
            tracing::warn!(%url, status = status.as_u16(), error = %err, "request rejected");
            return Err(err);
        }
        Ok(serde_json::from_str(&text)?)
    }
}
