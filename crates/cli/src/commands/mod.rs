//! CLI command implementations.

pub mod admin;
pub mod catalog;
pub mod seed;
pub mod show;

use thiserror::Error;

use aura_store::{ConfigError, RepositoryError, StoreConfig, StoreService};

/// Errors that can occur during CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded from the environment.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] RepositoryError),

    /// A file could not be read or written.
    #[error("I/O error for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The import file is not valid JSON.
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The email argument is not a valid address.
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// No dashboard user has this email.
    #[error("No user with email: {0}")]
    UserNotFound(String),

    /// Superadmin accounts cannot be deleted from the CLI.
    #[error("Refusing to delete superadmin account: {0}")]
    SuperadminProtected(String),

    /// The login credentials were rejected.
    #[error("Login failed for: {0}")]
    LoginFailed(String),
}

/// Open a store service using environment configuration.
pub(crate) fn open_service() -> Result<StoreService, CommandError> {
    dotenvy::dotenv().ok();
    let config = StoreConfig::from_env()?;
    Ok(StoreService::open(&config)?)
}
