use serde::{Deserialize, Serialize};

/// In-memory authenticated identity for the process.
///
/// Token and user id are always set together; a session is either fully
/// authenticated or holds neither field. The session is never cleared once
/// populated, even after a logout call invalidates the token server-side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub auth_token: Option<String>,
    pub user_id: Option<String>,
}

impl Session {
    pub fn adopt(&mut self, auth_token: String, user_id: String) {
        self.auth_token = Some(auth_token);
        self.user_id = Some(user_id);
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_token.is_some() && self.user_id.is_some()
    }
}

/// Wire form of the on-disk credential cache
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedCredentials {
    #[serde(rename = "authToken", default)]
    pub auth_token: Option<String>,

    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
}

/// Outcome of a session validity probe. Never an error: any transport
/// failure or server rejection collapses into `Invalid` with the reason.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionValidity {
    Valid,
    Invalid(String),
}

impl SessionValidity {
    pub fn is_valid(&self) -> bool {
        matches!(self, SessionValidity::Valid)
    }
}
