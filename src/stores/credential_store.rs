use crate::core::error::CacheError;
use crate::models::session::{CachedCredentials, Session};
use std::fs;
use std::path::PathBuf;

/// Durable store for one session's credentials.
///
/// A single JSON file, overwritten unconditionally on save. There is no
/// file locking; two instances of the tool writing the same path will race,
/// which is unsupported rather than handled.
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn save(&self, session: &Session) -> Result<(), CacheError> {
        let record = CachedCredentials {
            auth_token: session.auth_token.clone(),
            user_id: session.user_id.clone(),
        };

        let json = serde_json::to_string(&record)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Returns `Ok(None)` when no record exists. A file that does not parse
    /// as the expected JSON object is reported as `CacheError::Corrupt`.
    pub fn load(&self) -> Result<Option<CachedCredentials>, CacheError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let record = serde_json::from_str::<CachedCredentials>(&content)
            .map_err(|e| CacheError::Corrupt(e.to_string()))?;

        Ok(Some(record))
    }
}
