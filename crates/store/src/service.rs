//! The store service: the single entry point for UI callers.
//!
//! [`StoreService`] ties the durable collections, the session marker,
//! and the sync reconciler together behind the operation set the
//! storefront and dashboard consume. Every operation:
//!
//! - is async and first awaits the configured artificial latency,
//!   simulating a real backend round-trip;
//! - re-reads the durable store rather than caching across calls, so
//!   independent services sharing a data directory observe writes;
//! - persists synchronously within the call (no queued writes);
//! - returns owned copies, so callers can never mutate stored state
//!   through a shared reference.
//!
//! The service takes `&mut self` on every operation: one service is one
//! session, and its caller awaits each operation before issuing the
//! next, so at most one operation per session is ever in flight.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use aura_core::{CategoryId, Email, ProductId, UserId, UserRole};

use crate::config::StoreConfig;
use crate::db::{
    CategoryRepository, FileKv, ProductRepository, RepositoryError, UserRepository, kv,
};
use crate::models::{Category, NewCategory, NewProduct, Product, StoreData, User};
use crate::seed;
use crate::session::SessionMarker;
use crate::sync::{self, PublishStamp, PublishedSnapshot};

/// Embedded catalog store service.
///
/// See the [module docs](self) for the behavioral contract shared by all
/// operations.
pub struct StoreService {
    kv: FileKv,
    session: SessionMarker,
    latency: Duration,
    rng: StdRng,
}

impl StoreService {
    /// Open a service over the configured data directory.
    ///
    /// The RNG seeding rating/review counts comes from the OS; use
    /// [`StoreService::open_with_rng`] for a deterministic generator in
    /// tests.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the data directory cannot
    /// be created.
    pub fn open(config: &StoreConfig) -> Result<Self, RepositoryError> {
        Self::open_with_rng(config, StdRng::from_os_rng())
    }

    /// Open a service with an injected random source.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the data directory cannot
    /// be created.
    pub fn open_with_rng(config: &StoreConfig, rng: StdRng) -> Result<Self, RepositoryError> {
        Ok(Self {
            kv: FileKv::open(config.data_dir.clone())?,
            session: SessionMarker::new(),
            latency: config.latency,
            rng,
        })
    }

    // =========================================================================
    // Session marker
    // =========================================================================

    /// This session's marker (current admin, last-synced stamp).
    #[must_use]
    pub const fn session(&self) -> &SessionMarker {
        &self.session
    }

    /// Record the authenticated admin for this session.
    ///
    /// The UI calls this after a successful [`StoreService::login`];
    /// the service itself never sets it. Authenticating and marking the
    /// session are separate steps.
    pub fn set_current_admin(&mut self, id: UserId) {
        self.session.set_current_admin(id);
    }

    /// Clear the authenticated admin (logout).
    pub fn clear_current_admin(&mut self) {
        self.session.clear_current_admin();
    }

    // =========================================================================
    // Core data
    // =========================================================================

    /// Fetch the full store aggregate.
    ///
    /// Runs the sync reconciler first: an anonymous session whose sync
    /// stamp trails the published snapshot gets its local products and
    /// categories overwritten from the snapshot before the read; an
    /// admin session is never overwritten.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if any collection cannot be
    /// read or a sync overwrite cannot be persisted.
    pub async fn get_store_data(&mut self) -> Result<StoreData, RepositoryError> {
        self.pause().await;

        let snapshot = sync::reconcile(&self.kv, &mut self.session).await?;

        let products = ProductRepository::new(&self.kv)
            .list_with_default(&snapshot.products)
            .await?;
        let categories = CategoryRepository::new(&self.kv)
            .list_with_default(&snapshot.categories)
            .await?;
        let users = UserRepository::new(&self.kv).list().await?;

        tracing::debug!("fetched all store data");
        let info = seed::store_info();
        Ok(StoreData {
            store_name: info.store_name,
            hero: info.hero,
            products,
            categories,
            users,
        })
    }

    // =========================================================================
    // User management
    // =========================================================================

    /// Authenticate a dashboard user.
    ///
    /// Emails match case-insensitively, passwords exactly. Returns
    /// `None` for invalid credentials; absence is the signal, not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the user collection cannot
    /// be read.
    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, RepositoryError> {
        self.pause().await;

        let found = UserRepository::new(&self.kv)
            .find_by_login(email, password)
            .await?;
        match &found {
            Some(user) => tracing::info!(email, id = %user.id, "login successful"),
            None => tracing::warn!(email, "login failed"),
        }
        Ok(found)
    }

    /// Create a dashboard user with the `admin` role.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DuplicateEmail` if an existing user
    /// shares the email (ignoring case).
    pub async fn add_user(
        &mut self,
        email: Email,
        password: impl Into<String>,
    ) -> Result<User, RepositoryError> {
        self.pause().await;

        let user = User {
            id: UserId::generate(),
            email,
            password: password.into(),
            role: UserRole::Admin,
        };
        let user = UserRepository::new(&self.kv).append(user).await?;
        tracing::info!(id = %user.id, email = %user.email, "added user");
        Ok(user)
    }

    /// Delete a dashboard user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no user has this id.
    pub async fn delete_user(&mut self, id: &UserId) -> Result<UserId, RepositoryError> {
        self.pause().await;

        UserRepository::new(&self.kv).delete(id).await?;
        tracing::info!(%id, "deleted user");
        Ok(id.clone())
    }

    /// Overwrite a user's password.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no user has this id.
    pub async fn update_password(
        &mut self,
        id: &UserId,
        new_password: &str,
    ) -> Result<User, RepositoryError> {
        self.pause().await;

        let user = UserRepository::new(&self.kv)
            .update_password(id, new_password)
            .await?;
        tracing::info!(%id, "updated password");
        Ok(user)
    }

    // =========================================================================
    // Product management
    // =========================================================================

    /// Create a product.
    ///
    /// A fresh id is assigned, plus a seeded rating in `3.5..=4.5` and a
    /// review count in `0..=99` drawn from the service's random source -
    /// a seed-data convenience, so two calls with identical input differ
    /// unless the service was opened with a fixed seed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if persisting fails.
    pub async fn add_product(&mut self, new: NewProduct) -> Result<Product, RepositoryError> {
        self.pause().await;

        // Round to one decimal so seeded ratings read like real ones.
        let rating = (self.rng.random_range(3.5_f64..=4.5) * 10.0).round() / 10.0;
        let reviews = self.rng.random_range(0..=99);
        let product = Product {
            id: ProductId::generate(),
            name: new.name,
            description: new.description,
            price: new.price,
            category: new.category,
            subcategory: new.subcategory,
            rating,
            reviews,
            image_url: new.image_url,
            sub_image_urls: new.sub_image_urls,
        };

        let product = ProductRepository::new(&self.kv).append(product).await?;
        tracing::info!(id = %product.id, name = %product.name, "added product");
        Ok(product)
    }

    /// Replace a product wholesale, keyed by its id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has this id.
    pub async fn update_product(&mut self, product: Product) -> Result<Product, RepositoryError> {
        self.pause().await;

        let product = ProductRepository::new(&self.kv).update(product).await?;
        tracing::info!(id = %product.id, "updated product");
        Ok(product)
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has this id.
    pub async fn delete_product(&mut self, id: &ProductId) -> Result<ProductId, RepositoryError> {
        self.pause().await;

        ProductRepository::new(&self.kv).delete(id).await?;
        tracing::info!(%id, "deleted product");
        Ok(id.clone())
    }

    // =========================================================================
    // Category management
    // =========================================================================

    /// Create a category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if persisting fails.
    pub async fn add_category(&mut self, new: NewCategory) -> Result<Category, RepositoryError> {
        self.pause().await;

        let category = Category {
            id: CategoryId::generate(),
            name: new.name,
            subcategories: new.subcategories,
        };
        let category = CategoryRepository::new(&self.kv).append(category).await?;
        tracing::info!(id = %category.id, name = %category.name, "added category");
        Ok(category)
    }

    /// Update a category, enforcing the subcategory-in-use rule and
    /// cascading a rename to every product referencing the old name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no category has this id
    /// and `RepositoryError::SubcategoryInUse` if a removed subcategory
    /// is still referenced by a product (in which case nothing is
    /// persisted).
    pub async fn update_category(&mut self, category: Category) -> Result<Category, RepositoryError> {
        self.pause().await;

        let category = CategoryRepository::new(&self.kv).update(category).await?;
        tracing::info!(id = %category.id, "updated category");
        Ok(category)
    }

    /// Delete a category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no category has this id
    /// and `RepositoryError::CategoryInUse` if any product still
    /// references its name.
    pub async fn delete_category(&mut self, id: &CategoryId) -> Result<CategoryId, RepositoryError> {
        self.pause().await;

        CategoryRepository::new(&self.kv).delete(id).await?;
        tracing::info!(%id, "deleted category");
        Ok(id.clone())
    }

    // =========================================================================
    // Data management
    // =========================================================================

    /// Bulk-import products and categories, replacing both collections.
    ///
    /// The payload must be a JSON object with `products` and
    /// `categories` arrays whose elements decode as products and
    /// categories. No merging and no cross-reference validation happen:
    /// import is a trusted wholesale overwrite.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::InvalidShape` if the payload is not an
    /// object, lacks either array, or an element does not decode.
    pub async fn import_store_data(
        &mut self,
        payload: &serde_json::Value,
    ) -> Result<(), RepositoryError> {
        self.pause().await;

        let object = payload
            .as_object()
            .ok_or_else(|| RepositoryError::InvalidShape("payload must be an object".to_owned()))?;

        let products = object
            .get("products")
            .filter(|v| v.is_array())
            .ok_or_else(|| {
                RepositoryError::InvalidShape("must include a 'products' array".to_owned())
            })?;
        let categories = object
            .get("categories")
            .filter(|v| v.is_array())
            .ok_or_else(|| {
                RepositoryError::InvalidShape("must include a 'categories' array".to_owned())
            })?;

        let products: Vec<Product> = serde_json::from_value(products.clone())
            .map_err(|e| RepositoryError::InvalidShape(format!("products: {e}")))?;
        let categories: Vec<Category> = serde_json::from_value(categories.clone())
            .map_err(|e| RepositoryError::InvalidShape(format!("categories: {e}")))?;

        ProductRepository::new(&self.kv).replace_all(&products).await?;
        CategoryRepository::new(&self.kv)
            .replace_all(&categories)
            .await?;

        tracing::info!(
            products = products.len(),
            categories = categories.len(),
            "imported store data"
        );
        Ok(())
    }

    /// Export the current draft as an import-shaped JSON value.
    ///
    /// Inverse of [`StoreService::import_store_data`]; the dashboard's
    /// export button feeds a file with exactly this shape.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if a collection cannot be
    /// read.
    pub async fn export_store_data(&mut self) -> Result<serde_json::Value, RepositoryError> {
        self.pause().await;

        let products = ProductRepository::new(&self.kv).list().await?;
        let categories = CategoryRepository::new(&self.kv).list().await?;
        Ok(serde_json::json!({
            "products": products,
            "categories": categories,
        }))
    }

    /// Publish the current draft as the new public snapshot.
    ///
    /// Captures the persisted products and categories plus a fresh stamp
    /// as the published snapshot, then advances this session's sync
    /// stamp so the publishing admin is not immediately treated as
    /// stale.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the snapshot cannot be
    /// written (for example, the disk is full).
    pub async fn publish_store_data(&mut self) -> Result<(), RepositoryError> {
        self.pause().await;

        let snapshot = PublishedSnapshot {
            products: ProductRepository::new(&self.kv).list().await?,
            categories: CategoryRepository::new(&self.kv).list().await?,
            published_at: PublishStamp::now(),
        };

        self.kv.save(kv::keys::PUBLISHED, &snapshot).await?;
        self.session.set_last_synced(snapshot.published_at.clone());

        tracing::info!(
            published_at = %snapshot.published_at,
            products = snapshot.products.len(),
            categories = snapshot.categories.len(),
            "published store data"
        );
        Ok(())
    }

    async fn pause(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;

    fn test_service(dir: &std::path::Path) -> StoreService {
        let config = StoreConfig::new(dir).with_latency(Duration::ZERO);
        StoreService::open_with_rng(&config, StdRng::seed_from_u64(7)).unwrap()
    }

    fn new_product(name: &str, category: &str) -> NewProduct {
        NewProduct {
            name: name.to_owned(),
            description: String::new(),
            price: aura_core::Price::from_dollars(20),
            category: category.to_owned(),
            subcategory: None,
            image_url: String::new(),
            sub_image_urls: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_add_product_seeds_rating_and_reviews_in_range() {
        let dir = tempfile::tempdir().unwrap();
        let mut service = test_service(dir.path());

        for i in 0..20 {
            let product = service
                .add_product(new_product(&format!("P{i}"), "Mugs"))
                .await
                .unwrap();
            assert!((3.5..=4.5).contains(&product.rating), "rating {}", product.rating);
            assert!(product.reviews <= 99);
        }
    }

    #[tokio::test]
    async fn test_seeded_rng_is_deterministic() {
        let dir_a = tempfile::tempdir().unwrap();
        let dir_b = tempfile::tempdir().unwrap();
        let mut a = test_service(dir_a.path());
        let mut b = test_service(dir_b.path());

        let product_a = a.add_product(new_product("P", "Mugs")).await.unwrap();
        let product_b = b.add_product(new_product("P", "Mugs")).await.unwrap();

        assert_eq!(product_a.rating.to_bits(), product_b.rating.to_bits());
        assert_eq!(product_a.reviews, product_b.reviews);
    }

    #[tokio::test]
    async fn test_import_rejects_malformed_payloads() {
        let dir = tempfile::tempdir().unwrap();
        let mut service = test_service(dir.path());

        for payload in [
            serde_json::json!([]),
            serde_json::json!({"products": []}),
            serde_json::json!({"categories": []}),
            serde_json::json!({"products": {}, "categories": []}),
            serde_json::json!({"products": [{"bogus": true}], "categories": []}),
        ] {
            let result = service.import_store_data(&payload).await;
            assert!(
                matches!(result, Err(RepositoryError::InvalidShape(_))),
                "accepted {payload}"
            );
        }
    }

    #[tokio::test]
    async fn test_export_matches_import_shape() {
        let dir = tempfile::tempdir().unwrap();
        let mut service = test_service(dir.path());

        let exported = service.export_store_data().await.unwrap();
        service.import_store_data(&exported).await.unwrap();
    }

    #[tokio::test]
    async fn test_publish_advances_session_stamp() {
        let dir = tempfile::tempdir().unwrap();
        let mut service = test_service(dir.path());

        assert!(service.session().last_synced().is_none());
        service.publish_store_data().await.unwrap();
        assert!(service.session().last_synced().is_some());
    }
}
