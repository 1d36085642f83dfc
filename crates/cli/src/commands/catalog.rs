//! Bulk catalog commands: import, export, publish.

use tracing::info;

use super::{CommandError, open_service};

/// Replace products and categories from a JSON file.
///
/// The file must hold an object with `products` and `categories` arrays,
/// the shape `catalog export` writes.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not JSON, or does not
/// have the import shape.
pub async fn import(path: &str) -> Result<(), CommandError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CommandError::Io {
            path: path.to_owned(),
            source,
        })?;
    let payload: serde_json::Value =
        serde_json::from_str(&content).map_err(|source| CommandError::Json {
            path: path.to_owned(),
            source,
        })?;

    let mut service = open_service()?;
    service.import_store_data(&payload).await?;

    info!("Imported store data from {path}");
    Ok(())
}

/// Write the current draft products and categories to a JSON file.
///
/// # Errors
///
/// Returns an error if the store cannot be read or the file cannot be
/// written.
pub async fn export(path: &str) -> Result<(), CommandError> {
    let mut service = open_service()?;
    let payload = service.export_store_data().await?;

    let pretty = serde_json::to_string_pretty(&payload).map_err(|source| CommandError::Json {
        path: path.to_owned(),
        source,
    })?;
    tokio::fs::write(path, pretty)
        .await
        .map_err(|source| CommandError::Io {
            path: path.to_owned(),
            source,
        })?;

    info!("Exported store data to {path}");
    Ok(())
}

/// Publish the current draft as the public catalog.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be written.
pub async fn publish() -> Result<(), CommandError> {
    let mut service = open_service()?;
    service.publish_store_data().await?;

    info!("Published current store data");
    Ok(())
}
