// Centralized error handling for the admin tool

use thiserror::Error;

/// Errors raised while establishing or tearing down the authenticated session
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Login failed: {0}")]
    LoginRejected(String),

    #[error("Login response carried no data payload")]
    MissingPayload,

    #[error("Login response carried no auth token")]
    MissingToken,

    #[error("Authenticated user is not an admin, roles: {0:?}")]
    NotAdmin(Vec<String>),

    #[error("Logout failed: {0}")]
    LogoutRejected(String),

    #[error("Request to chat server failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(error: reqwest::Error) -> Self {
        AuthError::Transport(error.to_string())
    }
}

/// First observed failure among concurrently issued create requests.
///
/// Users created by requests that succeeded alongside the failure are not
/// rolled back; the aggregate operation reports the failure regardless.
#[derive(Error, Debug)]
pub enum ProvisioningError {
    #[error("Failed to create user '{username}': {reason}")]
    Rejected { username: String, reason: String },

    #[error("Failed to create user '{username}': {message}")]
    Transport { username: String, message: String },

    #[error("Provisioning task failed: {0}")]
    TaskFailed(String),
}

/// Errors from the on-disk credential cache
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Credential cache is not valid JSON: {0}")]
    Corrupt(String),

    #[error("Failed to encode credentials: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to access credential cache: {0}")]
    Io(#[from] std::io::Error),
}
