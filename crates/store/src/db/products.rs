//! Product repository.

use aura_core::ProductId;

use super::kv::{FileKv, keys};
use super::RepositoryError;
use crate::models::Product;
use crate::seed;

/// Does any product in `products` reference the category `name`?
///
/// Products join to categories by name, not id. Every name-matching join
/// in the crate goes through this helper (or
/// [`any_in_subcategory`]) so the join key could later become an id
/// without touching call sites.
#[must_use]
pub fn any_in_category(products: &[Product], name: &str) -> bool {
    products.iter().any(|p| p.category == name)
}

/// Does any product reference `subcategory_name` within `category_name`?
#[must_use]
pub fn any_in_subcategory(
    products: &[Product],
    category_name: &str,
    subcategory_name: &str,
) -> bool {
    products.iter().any(|p| {
        p.category == category_name && p.subcategory.as_deref() == Some(subcategory_name)
    })
}

/// Repository for product storage operations.
pub struct ProductRepository<'a> {
    kv: &'a FileKv,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(kv: &'a FileKv) -> Self {
        Self { kv }
    }

    /// Load all products, seeding the shipped defaults on first touch.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the collection cannot be
    /// read or is corrupt.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.kv.load(keys::PRODUCTS, &seed::default_products()).await?)
    }

    /// Load all products, seeding `default` on first touch.
    ///
    /// The catalog read path passes the published snapshot's products
    /// here so an empty store materializes the visitor source of truth
    /// rather than the shipped seed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the collection cannot be
    /// read or is corrupt.
    pub async fn list_with_default(
        &self,
        default: &[Product],
    ) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.kv.load(keys::PRODUCTS, default).await?)
    }

    /// Append a product and persist the collection.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if persisting fails.
    pub async fn append(&self, product: Product) -> Result<Product, RepositoryError> {
        let mut products = self.list().await?;
        products.push(product.clone());
        self.kv.save(keys::PRODUCTS, &products).await?;
        Ok(product)
    }

    /// Replace the product with the same id (full-record replace).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has this id.
    pub async fn update(&self, product: Product) -> Result<Product, RepositoryError> {
        let mut products = self.list().await?;
        let slot = products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = product.clone();
        self.kv.save(keys::PRODUCTS, &products).await?;
        Ok(product)
    }

    /// Remove a product by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has this id.
    pub async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError> {
        let mut products = self.list().await?;
        let before = products.len();
        products.retain(|p| &p.id != id);
        if products.len() == before {
            return Err(RepositoryError::NotFound);
        }
        self.kv.save(keys::PRODUCTS, &products).await?;
        Ok(())
    }

    /// Rewrite the `category` field of every product referencing
    /// `old_name` to `new_name`, persisting only if anything matched.
    ///
    /// Called from the category rename cascade.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if persisting fails.
    pub async fn rename_category(
        &self,
        old_name: &str,
        new_name: &str,
    ) -> Result<usize, RepositoryError> {
        let mut products = self.list().await?;
        let mut renamed = 0;
        for product in &mut products {
            if product.category == old_name {
                product.category = new_name.to_owned();
                renamed += 1;
            }
        }
        if renamed > 0 {
            self.kv.save(keys::PRODUCTS, &products).await?;
        }
        Ok(renamed)
    }

    /// Wholesale-replace the products collection (bulk import path).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if persisting fails.
    pub async fn replace_all(&self, products: &[Product]) -> Result<(), RepositoryError> {
        Ok(self.kv.save(keys::PRODUCTS, products).await?)
    }
}
