use crate::api::client::ApiClient;
use crate::core::error::ProvisioningError;
use crate::models::session::Session;
use crate::models::user::CreatedUser;
use crate::provision::generator::UserGenerator;
use std::sync::Arc;
use tracing::info;

/// Creates batches of user accounts with unbounded concurrent fan-out.
///
/// Every create request is spawned at once with no concurrency cap or
/// backpressure; all run to completion regardless of the aggregate outcome,
/// so users created alongside a failure stay created.
pub struct BulkProvisioner {
    api: Arc<ApiClient>,
}

impl BulkProvisioner {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Generates `count` synthetic users locally and submits one create
    /// request per user concurrently.
    ///
    /// All requests settle before the outcome is computed; if any failed,
    /// the aggregate fails with the first failure in request order. A count
    /// of zero returns an empty result without touching the network.
    pub async fn create_users(
        &self,
        generator: &mut dyn UserGenerator,
        count: usize,
        session: &Session,
    ) -> Result<Vec<CreatedUser>, ProvisioningError> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let users: Vec<_> = (0..count).map(|_| generator.generate()).collect();

        let mut handles = Vec::with_capacity(count);
        for user in users {
            let api = Arc::clone(&self.api);
            let session = session.clone();

            handles.push(tokio::spawn(async move {
                let response = api.create_user(&session, &user).await?;

                if !response.success {
                    return Err(ProvisioningError::Rejected {
                        username: user.username,
                        reason: response
                            .error
                            .unwrap_or_else(|| "server reported failure".to_string()),
                    });
                }

                let created = response.user.ok_or_else(|| ProvisioningError::Rejected {
                    username: user.username.clone(),
                    reason: "response carried no user record".to_string(),
                })?;

                info!(username = %created.username, id = %created.id, "Created user");
                Ok(created)
            }));
        }

        let mut created = Vec::with_capacity(count);
        let mut first_failure: Option<ProvisioningError> = None;

        for handle in handles {
            match handle.await {
                Ok(Ok(user)) => created.push(user),
                Ok(Err(e)) => {
                    if first_failure.is_none() {
                        first_failure = Some(e);
                    }
                }
                Err(e) => {
                    if first_failure.is_none() {
                        first_failure = Some(ProvisioningError::TaskFailed(e.to_string()));
                    }
                }
            }
        }

        match first_failure {
            Some(e) => Err(e),
            None => Ok(created),
        }
    }
}
