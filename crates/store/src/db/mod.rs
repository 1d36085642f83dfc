//! Durable storage for the catalog store.
//!
//! # Collections
//!
//! - `aura-products` - Draft products (the working copy admins edit)
//! - `aura-categories` - Draft categories
//! - `aura-users` - Dashboard users
//! - `aura-published-data` - Published snapshot served to visitors
//!
//! Each collection is JSON in its own file under the data directory (see
//! [`kv`]). The repositories in this module are the only writers; they
//! re-read the backing file on every operation and rewrite it whole, so
//! independent services sharing a directory observe each other's writes
//! on their next operation.

pub mod categories;
pub mod kv;
pub mod products;
pub mod users;

use thiserror::Error;

pub use categories::CategoryRepository;
pub use kv::{FileKv, StorageError};
pub use products::ProductRepository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The key-value layer failed (read, write, or corrupt data).
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// A user with this email already exists (compared case-insensitively).
    #[error("a user with this email already exists")]
    DuplicateEmail,

    /// The category is referenced by at least one product.
    #[error("cannot delete category {name:?}: it is currently in use by one or more products")]
    CategoryInUse {
        /// Name of the category products still reference.
        name: String,
    },

    /// The subcategory being removed is referenced by at least one product.
    #[error("cannot remove subcategory {name:?}: it is currently in use by one or more products")]
    SubcategoryInUse {
        /// Name of the subcategory products still reference.
        name: String,
    },

    /// A bulk import payload does not have the required shape.
    #[error("invalid import payload: {0}")]
    InvalidShape(String),
}
