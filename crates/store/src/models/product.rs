//! Product domain types.

use serde::{Deserialize, Serialize};

use aura_core::{Price, ProductId};

/// Maximum number of secondary images a product carries.
///
/// The dashboard's product form enforces this cap; the store itself does
/// not reject longer sequences.
pub const MAX_SUB_IMAGES: usize = 3;

/// A catalog product.
///
/// `category` and `subcategory` hold category *names*, not ids - a
/// deliberate denormalization. All name-matching joins go through the
/// lookup helpers in [`crate::db::products`] so the join key could be
/// swapped for an id without touching call sites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Non-negative price.
    pub price: Price,
    /// Name of the category this product belongs to.
    pub category: String,
    /// Name of the subcategory within that category, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    /// Star rating (seeded randomly at creation).
    pub rating: f64,
    /// Review count (seeded randomly at creation).
    pub reviews: u32,
    /// Primary image URL.
    pub image_url: String,
    /// Up to [`MAX_SUB_IMAGES`] secondary image URLs, in display order.
    #[serde(default)]
    pub sub_image_urls: Vec<String>,
}

/// Input for creating a product.
///
/// `id`, `rating`, and `reviews` are assigned by the store on creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub image_url: String,
    #[serde(default)]
    pub sub_image_urls: Vec<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_json_shape() {
        let json = r#"{
            "id": "prod-ph-001",
            "name": "Abstract Wave iPhone Case",
            "description": "Protect your iPhone.",
            "price": "25",
            "category": "Phone Cases",
            "subcategory": "iPhone Cases",
            "rating": 4.8,
            "reviews": 152,
            "imageUrl": "https://example.com/a.jpg",
            "subImageUrls": []
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id.as_str(), "prod-ph-001");
        assert_eq!(product.category, "Phone Cases");
        assert_eq!(product.subcategory.as_deref(), Some("iPhone Cases"));

        let round = serde_json::to_value(&product).unwrap();
        assert_eq!(round["imageUrl"], "https://example.com/a.jpg");
    }

    #[test]
    fn test_missing_optional_fields_decode() {
        let json = r#"{
            "id": "prod-x",
            "name": "X",
            "description": "",
            "price": "1",
            "category": "Posters",
            "rating": 4.0,
            "reviews": 0,
            "imageUrl": ""
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.subcategory.is_none());
        assert!(product.sub_image_urls.is_empty());
    }
}
