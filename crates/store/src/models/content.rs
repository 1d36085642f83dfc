//! Storefront chrome and the aggregate read model.

use serde::{Deserialize, Serialize};

use super::{Category, Product, User};

/// Homepage hero block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub cta_text: String,
    pub image_url: String,
}

/// Static store identity served from the shipped seed.
///
/// Unlike the catalog collections this is not persisted or editable; the
/// dashboard has no form for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreInfo {
    pub store_name: String,
    pub hero: Hero,
}

/// The aggregate returned by [`crate::StoreService::get_store_data`].
///
/// Every field is an owned copy; mutating it cannot affect stored state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreData {
    pub store_name: String,
    pub hero: Hero,
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub users: Vec<User>,
}
