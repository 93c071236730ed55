use clap::Parser;
use std::path::PathBuf;

/// Administrative helper for a chat server REST API: logs in as an admin,
/// caches the session for reuse, and optionally bulk-creates user accounts.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Host to connect to
    #[arg(long, default_value = "http://localhost:3000")]
    pub host: String,

    /// Admin username
    #[arg(long, default_value = "admin")]
    pub user: String,

    /// Admin password
    #[arg(long, default_value = "admin")]
    pub password: String,

    /// Number of users to create; omit to skip provisioning
    #[arg(long)]
    pub users: Option<usize>,

    /// Path of the credential cache file
    #[arg(long, default_value = "auth_cache.json")]
    pub cache_file: PathBuf,

    /// Log out when the run completes
    #[arg(long)]
    pub logout: bool,
}
