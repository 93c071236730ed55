use anyhow::{Context, Result};
use chatadmin::api::client::ApiClient;
use chatadmin::core::cli::Cli;
use chatadmin::core::tracing_init;
use chatadmin::provision::bulk::BulkProvisioner;
use chatadmin::provision::generator::RandomUserGenerator;
use chatadmin::session::manager::SessionManager;
use chatadmin::stores::credential_store::CredentialStore;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_init::init_tracing();

    info!(host = %cli.host, user = %cli.user, "Connecting to chat server");

    let api = Arc::new(ApiClient::new(cli.host.clone()).context("Failed to create API client")?);
    let store = CredentialStore::new(cli.cache_file.clone());
    let mut manager = SessionManager::new(Arc::clone(&api), store);

    manager.load_cached_session();

    manager
        .connect(&cli.user, &cli.password)
        .await
        .context("Failed to connect")?;

    if let Some(count) = cli.users {
        let provisioner = BulkProvisioner::new(Arc::clone(&api));
        let mut generator = RandomUserGenerator::new();

        let created = provisioner
            .create_users(&mut generator, count, manager.session())
            .await
            .context("Failed to create users")?;

        info!(
            requested = count,
            created = created.len(),
            "User provisioning complete"
        );
    }

    if cli.logout {
        manager.disconnect().await.context("Failed to log out")?;
    }

    Ok(())
}
