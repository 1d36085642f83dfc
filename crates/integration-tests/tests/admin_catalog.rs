//! Integration tests for catalog integrity rules.
//!
//! Covers the two referential-integrity checks (category-in-use,
//! subcategory-in-use) and the category rename cascade, driven through
//! the public service API the dashboard uses.

use aura_core::{CategoryId, ProductId};
use aura_store::{Category, NewCategory, RepositoryError, Subcategory};

use aura_integration_tests::{admin_service_in, product_input};

#[tokio::test]
async fn category_with_products_cannot_be_deleted_until_freed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut admin = admin_service_in(dir.path()).await;

    let category = admin
        .add_category(NewCategory {
            name: "Candles".to_owned(),
            subcategories: Vec::new(),
        })
        .await
        .expect("add category");
    let product = admin
        .add_product(product_input("Lavender Candle", "Candles", None))
        .await
        .expect("add product");

    let blocked = admin.delete_category(&category.id).await;
    assert!(matches!(
        blocked,
        Err(RepositoryError::CategoryInUse { ref name }) if name == "Candles"
    ));

    // Reassigning the product frees the category.
    let mut moved = product.clone();
    moved.category = "Mugs".to_owned();
    admin.update_product(moved).await.expect("reassign product");

    admin
        .delete_category(&category.id)
        .await
        .expect("delete now succeeds");
}

#[tokio::test]
async fn subcategory_removal_blocked_while_referenced() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut admin = admin_service_in(dir.path()).await;

    let data = admin.get_store_data().await.expect("read");
    let posters = data
        .categories
        .iter()
        .find(|c| c.name == "Posters")
        .cloned()
        .expect("seed has Posters");

    // Seed data has a product under Posters / Art Prints.
    let mut without_art_prints = posters.clone();
    without_art_prints
        .subcategories
        .retain(|s| s.name != "Art Prints");

    let blocked = admin.update_category(without_art_prints.clone()).await;
    assert!(matches!(
        blocked,
        Err(RepositoryError::SubcategoryInUse { ref name }) if name == "Art Prints"
    ));

    // The aborted update left the category untouched.
    let data = admin.get_store_data().await.expect("re-read");
    let still_posters = data
        .categories
        .iter()
        .find(|c| c.id == posters.id)
        .expect("category still present");
    assert_eq!(still_posters.subcategories, posters.subcategories);

    // Clearing the referencing product unblocks the removal.
    let art_print_ids: Vec<ProductId> = data
        .products
        .iter()
        .filter(|p| p.subcategory.as_deref() == Some("Art Prints"))
        .map(|p| p.id.clone())
        .collect();
    for id in &art_print_ids {
        admin.delete_product(id).await.expect("delete product");
    }
    admin
        .update_category(without_art_prints)
        .await
        .expect("removal now succeeds");
}

#[tokio::test]
async fn renaming_category_cascades_to_its_products_only() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut admin = admin_service_in(dir.path()).await;

    let data = admin.get_store_data().await.expect("read");
    let posters = data
        .categories
        .iter()
        .find(|c| c.name == "Posters")
        .cloned()
        .expect("seed has Posters");
    let poster_count = data
        .products
        .iter()
        .filter(|p| p.category == "Posters")
        .count();
    assert!(poster_count > 0, "seed should have poster products");

    let renamed = Category {
        name: "Wall Art".to_owned(),
        ..posters
    };
    admin.update_category(renamed).await.expect("rename");

    let data = admin.get_store_data().await.expect("re-read");
    let wall_art_count = data
        .products
        .iter()
        .filter(|p| p.category == "Wall Art")
        .count();
    assert_eq!(wall_art_count, poster_count);
    assert!(!data.products.iter().any(|p| p.category == "Posters"));

    // Products in other categories kept their names.
    assert!(data.products.iter().any(|p| p.category == "Mugs"));
}

#[tokio::test]
async fn unknown_ids_fail_not_found_and_leave_state_untouched() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut admin = admin_service_in(dir.path()).await;

    let before = admin.get_store_data().await.expect("read");

    let missing_product = admin.delete_product(&ProductId::new("prod-nope")).await;
    assert!(matches!(missing_product, Err(RepositoryError::NotFound)));

    let missing_category = admin
        .update_category(Category {
            id: CategoryId::new("cat-nope"),
            name: "Ghost".to_owned(),
            subcategories: vec![Subcategory {
                id: aura_core::SubcategoryId::new("sub-ghost"),
                name: "Ghostly".to_owned(),
            }],
        })
        .await;
    assert!(matches!(missing_category, Err(RepositoryError::NotFound)));

    let after = admin.get_store_data().await.expect("re-read");
    assert_eq!(before.products, after.products);
    assert_eq!(before.categories, after.categories);
}
