//! Seed data management.

use tracing::info;

use aura_store::db::FileKv;
use aura_store::{StoreConfig, seed};

use super::CommandError;

/// Reset the data directory to the shipped catalog.
///
/// Overwrites products, categories, and users with the defaults and
/// removes the published snapshot, leaving the store exactly as a fresh
/// install.
///
/// # Errors
///
/// Returns an error if configuration is missing or a write fails.
pub async fn reset() -> Result<(), CommandError> {
    dotenvy::dotenv().ok();
    let config = StoreConfig::from_env()?;
    let kv = FileKv::open(&config.data_dir).map_err(aura_store::RepositoryError::from)?;

    seed::write_defaults(&kv).await?;

    info!("Reset store data in {}", config.data_dir.display());
    Ok(())
}
