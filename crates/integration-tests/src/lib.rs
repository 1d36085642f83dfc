//! Integration tests for Aura Living.
//!
//! These tests drive [`aura_store::StoreService`] through its public API
//! the way the storefront and dashboard do, against a throwaway data
//! directory per test.
//!
//! # Test Categories
//!
//! - `admin_catalog` - Category/product integrity rules
//! - `admin_users` - User management and login
//! - `admin_import` - Bulk import/export
//!
//! Run with: `cargo test -p aura-integration-tests`

use std::path::Path;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use aura_store::{NewProduct, StoreConfig, StoreService};

/// A service with zero latency and a fixed RNG seed, over `dir`.
///
/// # Panics
///
/// Panics if the data directory cannot be created.
#[must_use]
pub fn service_in(dir: &Path) -> StoreService {
    let config = StoreConfig::new(dir).with_latency(Duration::ZERO);
    StoreService::open_with_rng(&config, StdRng::seed_from_u64(1234)).expect("open service")
}

/// A service whose session is logged in as the seed superadmin.
///
/// Logging in marks the session as an admin one, which keeps the sync
/// reconciler away from the draft collections.
///
/// # Panics
///
/// Panics if the seed credentials stop working.
pub async fn admin_service_in(dir: &Path) -> StoreService {
    let mut service = service_in(dir);
    let user = service
        .login("admin@example.com", "password")
        .await
        .expect("login call")
        .expect("seed credentials are valid");
    service.set_current_admin(user.id);
    service
}

/// Minimal product input for tests that only care about names.
#[must_use]
pub fn product_input(name: &str, category: &str, subcategory: Option<&str>) -> NewProduct {
    NewProduct {
        name: name.to_owned(),
        description: format!("{name} description"),
        price: aura_core::Price::from_dollars(20),
        category: category.to_owned(),
        subcategory: subcategory.map(str::to_owned),
        image_url: String::new(),
        sub_image_urls: Vec::new(),
    }
}
