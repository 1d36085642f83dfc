//! Category repository.
//!
//! This is where the store's two referential-integrity rules live: a
//! category cannot be deleted, and a subcategory cannot be removed, while
//! any product still references it by name.

use aura_core::CategoryId;

use super::kv::{FileKv, keys};
use super::products::{ProductRepository, any_in_category, any_in_subcategory};
use super::RepositoryError;
use crate::models::Category;
use crate::seed;

/// Repository for category storage operations.
pub struct CategoryRepository<'a> {
    kv: &'a FileKv,
}

impl<'a> CategoryRepository<'a> {
    /// Create a new category repository.
    #[must_use]
    pub const fn new(kv: &'a FileKv) -> Self {
        Self { kv }
    }

    /// Load all categories, seeding the shipped defaults on first touch.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the collection cannot be
    /// read or is corrupt.
    pub async fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        Ok(self
            .kv
            .load(keys::CATEGORIES, &seed::default_categories())
            .await?)
    }

    /// Load all categories, seeding `default` on first touch.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the collection cannot be
    /// read or is corrupt.
    pub async fn list_with_default(
        &self,
        default: &[Category],
    ) -> Result<Vec<Category>, RepositoryError> {
        Ok(self.kv.load(keys::CATEGORIES, default).await?)
    }

    /// Append a category and persist the collection.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if persisting fails.
    pub async fn append(&self, category: Category) -> Result<Category, RepositoryError> {
        let mut categories = self.list().await?;
        categories.push(category.clone());
        self.kv.save(keys::CATEGORIES, &categories).await?;
        Ok(category)
    }

    /// Replace the category with the same id, enforcing the
    /// subcategory-in-use rule and cascading renames to products.
    ///
    /// Subcategories present in the stored record but absent (by id) from
    /// `category` count as removals; if any removed subcategory is still
    /// referenced by a product, the whole update aborts with no effect.
    /// When the category name changes, every product referencing the old
    /// name is rewritten first, then the category collection is
    /// persisted.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no category has this id,
    /// `RepositoryError::SubcategoryInUse` if a removed subcategory is
    /// still referenced, and `RepositoryError::Storage` if persisting
    /// fails.
    pub async fn update(&self, category: Category) -> Result<Category, RepositoryError> {
        let mut categories = self.list().await?;
        let slot = categories
            .iter_mut()
            .find(|c| c.id == category.id)
            .ok_or(RepositoryError::NotFound)?;

        let old_name = slot.name.clone();
        let removed: Vec<_> = slot
            .subcategories
            .iter()
            .filter(|old_sub| category.subcategory(&old_sub.id).is_none())
            .cloned()
            .collect();

        if !removed.is_empty() {
            let products = ProductRepository::new(self.kv).list().await?;
            for sub in removed {
                if any_in_subcategory(&products, &old_name, &sub.name) {
                    return Err(RepositoryError::SubcategoryInUse { name: sub.name });
                }
            }
        }

        *slot = category.clone();

        if old_name != category.name {
            let renamed = ProductRepository::new(self.kv)
                .rename_category(&old_name, &category.name)
                .await?;
            tracing::info!(
                from = %old_name,
                to = %category.name,
                products = renamed,
                "cascaded category rename"
            );
        }

        self.kv.save(keys::CATEGORIES, &categories).await?;
        Ok(category)
    }

    /// Remove a category by id, enforcing the category-in-use rule.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no category has this id,
    /// `RepositoryError::CategoryInUse` if any product references it,
    /// and `RepositoryError::Storage` if persisting fails.
    pub async fn delete(&self, id: &CategoryId) -> Result<(), RepositoryError> {
        let mut categories = self.list().await?;
        let name = categories
            .iter()
            .find(|c| &c.id == id)
            .map(|c| c.name.clone())
            .ok_or(RepositoryError::NotFound)?;

        let products = ProductRepository::new(self.kv).list().await?;
        if any_in_category(&products, &name) {
            return Err(RepositoryError::CategoryInUse { name });
        }

        categories.retain(|c| &c.id != id);
        self.kv.save(keys::CATEGORIES, &categories).await?;
        Ok(())
    }

    /// Wholesale-replace the categories collection (bulk import path).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if persisting fails.
    pub async fn replace_all(&self, categories: &[Category]) -> Result<(), RepositoryError> {
        Ok(self.kv.save(keys::CATEGORIES, categories).await?)
    }
}
