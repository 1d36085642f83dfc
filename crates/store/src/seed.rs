//! The shipped catalog and default users.
//!
//! This is the data a brand-new store starts with, and the sentinel
//! "initial" publish the sync reconciler falls back to before anything
//! has been published.

use aura_core::{CategoryId, Email, Price, ProductId, SubcategoryId, UserId, UserRole};

use crate::db::kv::{FileKv, keys};
use crate::db::RepositoryError;
use crate::models::user::UserRow;
use crate::models::{Category, Hero, Product, StoreInfo, Subcategory, User};

/// Email of the distinguished seed account. Legacy user rows without a
/// role migrate to `superadmin` when they carry this address.
pub const SUPERADMIN_EMAIL: &str = "admin@example.com";

/// Static store identity (name and hero block).
#[must_use]
pub fn store_info() -> StoreInfo {
    StoreInfo {
        store_name: "Aura Living".to_owned(),
        hero: Hero {
            title: "Express Yourself, Uniquely".to_owned(),
            subtitle: "Discover high-quality, artist-designed gear that tells your story."
                .to_owned(),
            cta_text: "Shop All Collections".to_owned(),
            image_url:
                "https://images.unsplash.com/photo-1523275335684-37898b6baf30?q=80&w=1920&auto=format&fit=crop"
                    .to_owned(),
        },
    }
}

/// The shipped category tree.
#[must_use]
pub fn default_categories() -> Vec<Category> {
    fn category(id: &str, name: &str, subs: &[(&str, &str)]) -> Category {
        Category {
            id: CategoryId::new(id),
            name: name.to_owned(),
            subcategories: subs
                .iter()
                .map(|(sub_id, sub_name)| Subcategory {
                    id: SubcategoryId::new(*sub_id),
                    name: (*sub_name).to_owned(),
                })
                .collect(),
        }
    }

    vec![
        category(
            "cat-phone-cases",
            "Phone Cases",
            &[
                ("sub-iphone", "iPhone Cases"),
                ("sub-samsung", "Samsung Cases"),
                ("sub-pixel", "Google Pixel Cases"),
            ],
        ),
        category(
            "cat-posters",
            "Posters",
            &[
                ("sub-movie", "Movie Posters"),
                ("sub-art-prints", "Art Prints"),
                ("sub-typography", "Typography"),
            ],
        ),
        category(
            "cat-stickers",
            "Stickers",
            &[
                ("sub-laptop", "Laptop Stickers"),
                ("sub-vinyl", "Vinyl Decals"),
            ],
        ),
        category(
            "cat-bags",
            "Bags",
            &[("sub-tote", "Tote Bags"), ("sub-backpack", "Backpacks")],
        ),
        category(
            "cat-mugs",
            "Mugs",
            &[("sub-ceramic", "Ceramic Mugs"), ("sub-travel", "Travel Mugs")],
        ),
        category(
            "cat-t-shirts",
            "T-Shirts",
            &[("sub-graphic", "Graphic Tees"), ("sub-plain", "Plain Tees")],
        ),
    ]
}

/// The shipped products, spanning every category.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn default_products() -> Vec<Product> {
    #[allow(clippy::too_many_arguments)]
    fn product(
        id: &str,
        name: &str,
        description: &str,
        price: u32,
        category: &str,
        subcategory: &str,
        rating: f64,
        reviews: u32,
        image_url: &str,
    ) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            description: description.to_owned(),
            price: Price::from_dollars(price),
            category: category.to_owned(),
            subcategory: Some(subcategory.to_owned()),
            rating,
            reviews,
            image_url: image_url.to_owned(),
            sub_image_urls: Vec::new(),
        }
    }

    vec![
        product(
            "prod-ph-001",
            "Abstract Wave iPhone Case",
            "Protect your iPhone with this durable case featuring a vibrant, abstract wave design.",
            25,
            "Phone Cases",
            "iPhone Cases",
            4.8,
            152,
            "https://images.unsplash.com/photo-1598335614889-a29910427e57?q=80&w=600&h=800&auto=format&fit=crop",
        ),
        product(
            "prod-ph-002",
            "Matte Black Samsung Case",
            "A sleek, minimalist matte black case for your Samsung Galaxy device. Provides a premium feel and solid protection.",
            22,
            "Phone Cases",
            "Samsung Cases",
            4.9,
            210,
            "https://images.unsplash.com/photo-1610792516307-ea2acd0a224a?q=80&w=600&h=800&auto=format&fit=crop",
        ),
        product(
            "prod-po-001",
            "Retro \"The Getaway\" Movie Poster",
            "A stylized, high-quality print of a retro-themed movie poster. Perfect for film buffs.",
            18,
            "Posters",
            "Movie Posters",
            4.7,
            88,
            "https://images.unsplash.com/photo-1533632359083-04254233e2a9?q=80&w=600&h=800&auto=format&fit=crop",
        ),
        product(
            "prod-po-002",
            "Minimalist Mountain Art Print",
            "A beautiful and calming art print featuring a minimalist mountain range. Printed on archival-quality paper.",
            20,
            "Posters",
            "Art Prints",
            4.9,
            120,
            "https://images.unsplash.com/photo-1506363329833-c40b78f0447f?q=80&w=600&h=800&auto=format&fit=crop",
        ),
        product(
            "prod-st-001",
            "Developer Laptop Sticker Pack",
            "A pack of 10 high-quality vinyl stickers for developers. Show off your love for code!",
            12,
            "Stickers",
            "Laptop Stickers",
            4.9,
            430,
            "https://images.unsplash.com/photo-1522252234503-e3565324585b?q=80&w=600&h=600&auto=format&fit=crop",
        ),
        product(
            "prod-ba-001",
            "Canvas Market Tote Bag",
            "A durable and stylish canvas tote bag with reinforced handles. Perfect for groceries, books, or everyday use.",
            28,
            "Bags",
            "Tote Bags",
            4.8,
            205,
            "https://images.unsplash.com/photo-1544441893-675973e31985?q=80&w=600&h=600&auto=format&fit=crop",
        ),
        product(
            "prod-mu-001",
            "Classic White Ceramic Mug",
            "A timeless 12oz ceramic mug, perfect for your morning coffee or tea. Microwave and dishwasher safe.",
            15,
            "Mugs",
            "Ceramic Mugs",
            4.9,
            512,
            "https://images.unsplash.com/photo-1594394629938-a155502094c0?q=80&w=600&h=600&auto=format&fit=crop",
        ),
        product(
            "prod-ts-001",
            "\"Explore More\" Graphic Tee",
            "A super-soft cotton graphic tee with a vintage-inspired \"Explore More\" print. Unisex fit.",
            30,
            "T-Shirts",
            "Graphic Tees",
            4.7,
            189,
            "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?q=80&w=600&h=600&auto=format&fit=crop",
        ),
    ]
}

/// The default user set: a single superadmin account.
#[must_use]
pub fn default_users() -> Vec<User> {
    vec![User {
        id: UserId::new("user-root-001"),
        email: Email::parse(SUPERADMIN_EMAIL).expect("seed email is valid"),
        password: "password".to_owned(),
        role: UserRole::Superadmin,
    }]
}

/// Reset every durable collection to the shipped state.
///
/// Writes the default products, categories, and users, and removes any
/// published snapshot so the store reads as never-published again.
///
/// # Errors
///
/// Returns [`RepositoryError::Storage`] if any write fails.
pub async fn write_defaults(kv: &FileKv) -> Result<(), RepositoryError> {
    kv.save(keys::PRODUCTS, &default_products()).await?;
    kv.save(keys::CATEGORIES, &default_categories()).await?;
    let rows: Vec<UserRow> = default_users().into_iter().map(Into::into).collect();
    kv.save(keys::USERS, &rows).await?;
    kv.remove(keys::PUBLISHED).await?;

    tracing::info!("reset all collections to shipped defaults");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_every_seed_product_references_a_seed_category() {
        let categories = default_categories();
        for product in default_products() {
            let category = categories
                .iter()
                .find(|c| c.name == product.category)
                .unwrap_or_else(|| panic!("no category named {:?}", product.category));

            if let Some(sub) = &product.subcategory {
                assert!(
                    category.subcategories.iter().any(|s| &s.name == sub),
                    "no subcategory named {sub:?} in {:?}",
                    category.name
                );
            }
        }
    }

    #[test]
    fn test_default_users_is_the_superadmin() {
        let users = default_users();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].role, UserRole::Superadmin);
        assert!(users[0].email.matches(SUPERADMIN_EMAIL));
    }
}
