//! Aura Store - Embedded catalog store for Aura Living.
//!
//! This crate is the data backbone of the demo storefront and admin
//! dashboard. It persists the catalog (products, categories), dashboard
//! users, and a published snapshot of the catalog as JSON collections in
//! a local data directory, standing in for a real backend.
//!
//! # Architecture
//!
//! - [`db`] - Durable key-value layer and per-entity repositories
//! - [`models`] - Domain types (products, categories, users, store data)
//! - [`session`] - Process-local session marker (current admin, sync stamp)
//! - [`sync`] - Published snapshot and the visitor sync reconciler
//! - [`seed`] - The shipped default catalog and users
//! - [`service`] - [`StoreService`], the single entry point callers use
//! - [`config`] - Environment-driven configuration
//!
//! # Drafts and publishing
//!
//! Admins edit the persisted collections directly; that working copy is
//! the *draft*. Publishing captures the draft plus a fresh stamp as the
//! *published snapshot*. On every read, the sync reconciler refreshes an
//! anonymous visitor's collections from the snapshot, while an active
//! admin session is left alone so in-progress edits survive a publish.
//!
//! # Example
//!
//! ```no_run
//! use aura_store::{StoreConfig, StoreService};
//!
//! # async fn demo() -> Result<(), aura_store::RepositoryError> {
//! let config = StoreConfig::new("./data");
//! let mut store = StoreService::open(&config)?;
//! let data = store.get_store_data().await?;
//! println!("{} products", data.products.len());
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod models;
pub mod seed;
pub mod service;
pub mod session;
pub mod sync;

pub use config::{ConfigError, StoreConfig};
pub use db::{RepositoryError, kv::StorageError};
pub use models::{Category, NewCategory, NewProduct, Product, StoreData, Subcategory, User};
pub use service::StoreService;
pub use session::SessionMarker;
pub use sync::{PublishStamp, PublishedSnapshot};
