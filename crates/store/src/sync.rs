//! Published snapshot and the visitor sync reconciler.
//!
//! Publishing copies the current draft into a durable snapshot stamped
//! with [`PublishStamp::now`]. The reconciler runs at the top of every
//! catalog read and decides whether this session's collections must be
//! refreshed from that snapshot:
//!
//! - session stamp equals the snapshot stamp: synced, nothing to do;
//! - stamps differ and an admin is logged in: leave the draft alone, a
//!   publish (even the admin's own) must never clobber in-progress edits;
//! - stamps differ and the session is anonymous: overwrite the local
//!   products and categories with the snapshot and advance the stamp.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::db::{FileKv, RepositoryError, StorageError, kv};
use crate::models::{Category, Product};
use crate::seed;
use crate::session::SessionMarker;

/// Stamp of the sentinel snapshot representing the shipped seed data.
const INITIAL_STAMP: &str = "initial";

/// Opaque marker for a publish event.
///
/// Stamps are compared only for equality; nothing orders them or does
/// arithmetic on them. Fresh stamps are RFC 3339 timestamps, and the
/// distinguished [`PublishStamp::initial`] stands for "nothing has ever
/// been published".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublishStamp(String);

impl PublishStamp {
    /// The sentinel stamp of the shipped seed data.
    #[must_use]
    pub fn initial() -> Self {
        Self(INITIAL_STAMP.to_owned())
    }

    /// Mint a stamp for a publish happening now.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now().to_rfc3339())
    }

    /// The stamp as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PublishStamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The public catalog version, immutable until the next publish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedSnapshot {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub published_at: PublishStamp,
}

impl PublishedSnapshot {
    /// The sentinel snapshot: shipped seed data under the initial stamp.
    #[must_use]
    pub fn sentinel() -> Self {
        Self {
            products: seed::default_products(),
            categories: seed::default_categories(),
            published_at: PublishStamp::initial(),
        }
    }
}

/// Load the current source of truth for visitors.
///
/// An absent snapshot means nothing has been published; an undecodable
/// one is logged and treated the same way. Both fall back to the
/// sentinel so visitors always have a catalog to read.
///
/// # Errors
///
/// Returns [`RepositoryError::Storage`] only for I/O failures; decode
/// failures fall back instead of erroring.
pub async fn load_source_of_truth(kv: &FileKv) -> Result<PublishedSnapshot, RepositoryError> {
    match kv.load_opt::<PublishedSnapshot>(kv::keys::PUBLISHED).await {
        Ok(Some(snapshot)) => Ok(snapshot),
        Ok(None) => Ok(PublishedSnapshot::sentinel()),
        Err(StorageError::Corrupt { key, source }) => {
            tracing::warn!(key = %key, error = %source, "could not parse published data, using seed sentinel");
            Ok(PublishedSnapshot::sentinel())
        }
        Err(e) => Err(e.into()),
    }
}

/// Run the reconciler for one catalog read.
///
/// Returns the snapshot that currently serves as the visitor source of
/// truth so the caller can reuse it as the seed default for the
/// subsequent collection loads.
///
/// # Errors
///
/// Returns [`RepositoryError::Storage`] if the snapshot cannot be read
/// or the overwrite cannot be persisted.
pub async fn reconcile(
    kv: &FileKv,
    session: &mut SessionMarker,
) -> Result<PublishedSnapshot, RepositoryError> {
    let snapshot = load_source_of_truth(kv).await?;

    let synced = session.last_synced() == Some(&snapshot.published_at);
    if synced {
        return Ok(snapshot);
    }

    if session.current_admin().is_some() {
        // Stale, but an admin is editing: their draft wins until logout.
        tracing::debug!(
            published_at = %snapshot.published_at,
            "stale session belongs to an admin, keeping draft"
        );
        return Ok(snapshot);
    }

    tracing::info!(
        published_at = %snapshot.published_at,
        "stale data detected for visitor, syncing with source of truth"
    );
    kv.save(kv::keys::PRODUCTS, &snapshot.products).await?;
    kv.save(kv::keys::CATEGORIES, &snapshot.categories).await?;
    session.set_last_synced(snapshot.published_at.clone());

    Ok(snapshot)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_snapshot_falls_back_to_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKv::open(dir.path()).unwrap();

        let snapshot = load_source_of_truth(&kv).await.unwrap();
        assert_eq!(snapshot.published_at, PublishStamp::initial());
        assert_eq!(snapshot.products, seed::default_products());
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_falls_back_to_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKv::open(dir.path()).unwrap();
        std::fs::write(dir.path().join("aura-published-data.json"), b"{oops").unwrap();

        let snapshot = load_source_of_truth(&kv).await.unwrap();
        assert_eq!(snapshot.published_at, PublishStamp::initial());
    }

    #[tokio::test]
    async fn test_anonymous_stale_session_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKv::open(dir.path()).unwrap();
        let mut session = SessionMarker::new();

        // Local draft differs from what is published (nothing yet).
        kv.save(kv::keys::PRODUCTS, &Vec::<Product>::new())
            .await
            .unwrap();

        let snapshot = reconcile(&kv, &mut session).await.unwrap();
        assert_eq!(session.last_synced(), Some(&snapshot.published_at));

        let products: Vec<Product> = kv.load(kv::keys::PRODUCTS, &[]).await.unwrap();
        assert_eq!(products, seed::default_products());
    }

    #[tokio::test]
    async fn test_admin_stale_session_keeps_draft() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKv::open(dir.path()).unwrap();
        let mut session = SessionMarker::new();
        session.set_current_admin(aura_core::UserId::new("user-root-001"));

        kv.save(kv::keys::PRODUCTS, &Vec::<Product>::new())
            .await
            .unwrap();

        reconcile(&kv, &mut session).await.unwrap();

        // Neither the draft nor the session stamp moved.
        let products: Vec<Product> = kv.load(kv::keys::PRODUCTS, &[]).await.unwrap();
        assert!(products.is_empty());
        assert!(session.last_synced().is_none());
    }
}
