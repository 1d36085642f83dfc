//! Durable JSON key-value layer.
//!
//! Each named collection lives in its own `<key>.json` file under the
//! store's data directory. Writes go through a temp file and rename so
//! a collection is either fully replaced or untouched.
//!
//! # Known race
//!
//! Two processes sharing one data directory can interleave
//! load-mutate-save sequences and lose updates (last writer wins).
//! The store ships without write coordination; the behavior is pinned
//! by `tests/shared_directory.rs` rather than defended against.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Keys for the durable collections.
pub mod keys {
    /// Draft products collection.
    pub const PRODUCTS: &str = "aura-products";

    /// Draft categories collection.
    pub const CATEGORIES: &str = "aura-categories";

    /// Dashboard users collection.
    pub const USERS: &str = "aura-users";

    /// Published snapshot of products and categories.
    pub const PUBLISHED: &str = "aura-published-data";
}

/// Errors from the key-value layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed (including quota-style
    /// out-of-space failures on write).
    #[error("storage i/o error for {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The persisted data for a key no longer decodes.
    #[error("corrupt data for {key}: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be encoded for persistence.
    #[error("failed to encode {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// File-backed key-value store for JSON collections.
#[derive(Debug, Clone)]
pub struct FileKv {
    dir: PathBuf,
}

impl FileKv {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            key: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// The data directory this store reads and writes.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the collection stored under `key`.
    ///
    /// If no data exists yet, persists `default` and returns a copy of
    /// it, so first touch seeds storage exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Corrupt`] if existing data does not
    /// decode, and [`StorageError::Io`] on read or seed-write failure.
    pub async fn load<T>(&self, key: &str, default: &[T]) -> Result<Vec<T>, StorageError>
    where
        T: Serialize + DeserializeOwned + Clone,
    {
        match self.read_bytes(key).await? {
            Some(bytes) => {
                let value = serde_json::from_slice(&bytes).map_err(|source| {
                    StorageError::Corrupt {
                        key: key.to_owned(),
                        source,
                    }
                })?;
                tracing::debug!(key, "loaded collection");
                Ok(value)
            }
            None => {
                tracing::info!(key, "no data yet, seeding defaults");
                self.save(key, default).await?;
                Ok(default.to_vec())
            }
        }
    }

    /// Load the value stored under `key`, without default-seeding.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Corrupt`] if existing data does not
    /// decode, and [`StorageError::Io`] on read failure.
    pub async fn load_opt<T>(&self, key: &str) -> Result<Option<T>, StorageError>
    where
        T: DeserializeOwned,
    {
        match self.read_bytes(key).await? {
            Some(bytes) => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|source| StorageError::Corrupt {
                    key: key.to_owned(),
                    source,
                }),
            None => Ok(None),
        }
    }

    /// Serialize `value` and replace whatever is stored under `key`.
    ///
    /// The write lands atomically: data goes to a temp file which is then
    /// renamed over the target, so a failed write leaves the prior value
    /// intact.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Encode`] if serialization fails and
    /// [`StorageError::Io`] if the filesystem rejects the write.
    pub async fn save<T>(&self, key: &str, value: &T) -> Result<(), StorageError>
    where
        T: Serialize + ?Sized,
    {
        let bytes = serde_json::to_vec_pretty(value).map_err(|source| StorageError::Encode {
            key: key.to_owned(),
            source,
        })?;

        let path = self.path(key);
        let tmp = path.with_extension("json.tmp");

        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|source| StorageError::Io {
                key: key.to_owned(),
                source,
            })?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|source| StorageError::Io {
                key: key.to_owned(),
                source,
            })?;

        tracing::debug!(key, bytes = bytes.len(), "saved collection");
        Ok(())
    }

    /// Remove whatever is stored under `key`, if anything.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the filesystem rejects the
    /// removal; a missing key is not an error.
    pub async fn remove(&self, key: &str) -> Result<(), StorageError> {
        match tokio::fs::remove_file(self.path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }

    async fn read_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match tokio::fs::read(self.path(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_seeds_defaults_once() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKv::open(dir.path()).unwrap();

        let defaults = vec!["a".to_owned(), "b".to_owned()];
        let loaded: Vec<String> = kv.load("things", &defaults).await.unwrap();
        assert_eq!(loaded, defaults);

        // The seed write is durable: an empty default no longer applies.
        let loaded: Vec<String> = kv.load("things", &[]).await.unwrap();
        assert_eq!(loaded, defaults);
    }

    #[tokio::test]
    async fn test_save_replaces_prior_value() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKv::open(dir.path()).unwrap();

        kv.save("things", &vec![1, 2, 3]).await.unwrap();
        kv.save("things", &vec![9]).await.unwrap();

        let loaded: Vec<i32> = kv.load("things", &[]).await.unwrap();
        assert_eq!(loaded, vec![9]);
    }

    #[tokio::test]
    async fn test_corrupt_data_is_a_hard_error() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKv::open(dir.path()).unwrap();

        std::fs::write(dir.path().join("things.json"), b"not json").unwrap();

        let result = kv.load::<String>("things", &[]).await;
        assert!(matches!(result, Err(StorageError::Corrupt { .. })));
    }

    #[tokio::test]
    async fn test_load_opt_absent_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKv::open(dir.path()).unwrap();

        let loaded: Option<Vec<String>> = kv.load_opt("missing").await.unwrap();
        assert!(loaded.is_none());
    }
}
