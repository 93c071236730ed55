use crate::api::client::ApiClient;
use crate::core::error::AuthError;
use crate::models::session::{Session, SessionValidity};
use crate::stores::credential_store::CredentialStore;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Owns the one authenticated identity for the process.
///
/// `connect` is the single authentication entry point: nothing else mutates
/// the session besides `load_cached_session` adopting a previously persisted
/// token. Validity is checked lazily at connect time only; there is no
/// background refresh.
pub struct SessionManager {
    api: Arc<ApiClient>,
    store: CredentialStore,
    session: Session,
}

impl SessionManager {
    pub fn new(api: Arc<ApiClient>, store: CredentialStore) -> Self {
        Self {
            api,
            store,
            session: Session::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Adopts previously persisted credentials, if any. No network call.
    ///
    /// An absent cache, an incomplete record, or a corrupt file all leave
    /// the session empty; corruption is logged and never surfaced.
    pub fn load_cached_session(&mut self) {
        match self.store.load() {
            Ok(Some(cached)) => match (cached.auth_token, cached.user_id) {
                (Some(token), Some(user_id)) => {
                    debug!(user_id = %user_id, "Adopting cached session");
                    self.session.adopt(token, user_id);
                }
                _ => debug!("Credential cache record incomplete, ignoring"),
            },
            Ok(None) => debug!("No credential cache found"),
            Err(e) => warn!(error = %e, "Credential cache unreadable, treating as missing"),
        }
    }

    /// Probes /api/v1/me with the current session headers.
    ///
    /// Never fails: a missing or empty token short-circuits without a
    /// network call, and any transport error or server rejection becomes
    /// `Invalid` with the reason attached.
    pub async fn is_session_valid(&self) -> SessionValidity {
        match &self.session.auth_token {
            None => return SessionValidity::Invalid("no auth token held".to_string()),
            Some(token) if token.is_empty() => {
                return SessionValidity::Invalid("auth token is empty".to_string())
            }
            Some(_) => {}
        }

        match self.api.me(&self.session).await {
            Ok(me) if me.success => SessionValidity::Valid,
            Ok(_) => SessionValidity::Invalid("server rejected the session".to_string()),
            Err(e) => SessionValidity::Invalid(e.to_string()),
        }
    }

    /// Establishes an authenticated session, reusing the held token when the
    /// server still accepts it.
    ///
    /// On a fresh login the response must, in order: report status
    /// "success", carry a data payload, carry a non-empty auth token, and
    /// show the "admin" role on the authenticated identity. Any failure
    /// leaves the session and the cache untouched. On success the
    /// credentials are adopted and persisted for the next run.
    pub async fn connect(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        if self.session.auth_token.is_some() {
            match self.is_session_valid().await {
                SessionValidity::Valid => {
                    info!("Reusing cached session");
                    return Ok(());
                }
                SessionValidity::Invalid(reason) => {
                    debug!(reason = %reason, "Held session invalid, performing fresh login");
                }
            }
        }

        let response = self.api.login(username, password).await?;

        if response.status != "success" {
            return Err(AuthError::LoginRejected(
                response.message.unwrap_or(response.status),
            ));
        }

        let data = response.data.ok_or(AuthError::MissingPayload)?;

        let token = match data.auth_token {
            Some(token) if !token.is_empty() => token,
            _ => return Err(AuthError::MissingToken),
        };

        let me = data.me.unwrap_or_default();
        let roles = me.roles.unwrap_or_default();
        if !roles.iter().any(|role| role == "admin") {
            return Err(AuthError::NotAdmin(roles));
        }

        let user_id = data.user_id.or(me.id).ok_or(AuthError::MissingPayload)?;

        info!(
            username = ?me.username,
            user_id = %user_id,
            "Logged in successfully"
        );

        self.session.adopt(token, user_id);

        if let Err(e) = self.store.save(&self.session) {
            warn!(error = %e, "Failed to persist session credentials");
        }

        Ok(())
    }

    /// Logs out using the current token and user id as explicit headers.
    ///
    /// The in-memory session is left intact afterwards, so the now
    /// server-invalidated token remains visible to the rest of the run.
    pub async fn disconnect(&self) -> Result<(), AuthError> {
        let response = self.api.logout(&self.session).await?;

        if response.status != "success" {
            return Err(AuthError::LogoutRejected(
                response.message.unwrap_or(response.status),
            ));
        }

        info!("Logged out successfully");
        Ok(())
    }
}
