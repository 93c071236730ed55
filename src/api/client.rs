use crate::core::error::{AuthError, ProvisioningError};
use crate::models::session::Session;
use crate::models::user::{CreatedUser, SyntheticUser};
use anyhow::{Context, Result};
use reqwest::RequestBuilder;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// HTTP client for the chat server REST API.
///
/// Auth headers are applied per request from the session passed in; the
/// client itself holds no credential state, so distinct sessions can share
/// one client without stepping on each other.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub data: Option<LoginData>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginData {
    #[serde(rename = "authToken", default)]
    pub auth_token: Option<String>,
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub me: Option<MeInfo>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MeInfo {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub roles: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct MeResponse {
    #[serde(default)]
    pub success: bool,
}

#[derive(Debug, Deserialize)]
pub struct LogoutResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub user: Option<CreatedUser>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_auth(&self, mut request: RequestBuilder, session: &Session) -> RequestBuilder {
        if let Some(token) = &session.auth_token {
            request = request.header("X-Auth-Token", token);
        }
        if let Some(user_id) = &session.user_id {
            request = request.header("X-User-Id", user_id);
        }
        request
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, AuthError> {
        let response = self
            .client
            .post(self.url("/api/v1/login"))
            .json(&LoginRequest { username, password })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::LoginRejected(format!("HTTP {status}: {body}")));
        }

        Ok(response.json::<LoginResponse>().await?)
    }

    pub async fn me(&self, session: &Session) -> Result<MeResponse, AuthError> {
        let response = self
            .with_auth(self.client.get(self.url("/api/v1/me")), session)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::Transport(format!(
                "/api/v1/me returned HTTP {status}"
            )));
        }

        Ok(response.json::<MeResponse>().await?)
    }

    pub async fn logout(&self, session: &Session) -> Result<LogoutResponse, AuthError> {
        let response = self
            .with_auth(
                self.client
                    .post(self.url("/api/v1/logout"))
                    .json(&serde_json::json!({})),
                session,
            )
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::LogoutRejected(format!("HTTP {status}: {body}")));
        }

        Ok(response.json::<LogoutResponse>().await?)
    }

    pub async fn create_user(
        &self,
        session: &Session,
        user: &SyntheticUser,
    ) -> Result<CreateUserResponse, ProvisioningError> {
        let response = self
            .with_auth(
                self.client.post(self.url("/api/v1/users.create")).json(user),
                session,
            )
            .send()
            .await
            .map_err(|e| ProvisioningError::Transport {
                username: user.username.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProvisioningError::Rejected {
                username: user.username.clone(),
                reason: format!("HTTP {status}: {body}"),
            });
        }

        response
            .json::<CreateUserResponse>()
            .await
            .map_err(|e| ProvisioningError::Transport {
                username: user.username.clone(),
                message: e.to_string(),
            })
    }
}
