//! Category domain types.

use serde::{Deserialize, Serialize};

use aura_core::{CategoryId, SubcategoryId};

/// A subcategory within a [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    /// Unique subcategory ID.
    pub id: SubcategoryId,
    /// Display name; products reference subcategories by this name.
    pub name: String,
}

/// A catalog category.
///
/// Products join to categories through `name`, not `id`. Removing a
/// subcategory or deleting the category is blocked while any product
/// still references the name (see [`crate::db::categories`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique category ID.
    pub id: CategoryId,
    /// Display name; products reference categories by this name.
    pub name: String,
    /// Ordered subcategories. Collections written by earlier dashboard
    /// versions may omit the field entirely.
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

impl Category {
    /// Look up a subcategory by its ID.
    #[must_use]
    pub fn subcategory(&self, id: &SubcategoryId) -> Option<&Subcategory> {
        self.subcategories.iter().find(|s| &s.id == id)
    }
}

/// Input for creating a category; `id` is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_subcategories_decode_as_empty() {
        let category: Category =
            serde_json::from_str(r#"{"id": "cat-mugs", "name": "Mugs"}"#).unwrap();
        assert!(category.subcategories.is_empty());
    }

    #[test]
    fn test_subcategory_lookup() {
        let category: Category = serde_json::from_str(
            r#"{
                "id": "cat-posters",
                "name": "Posters",
                "subcategories": [
                    {"id": "sub-movie", "name": "Movie Posters"},
                    {"id": "sub-art-prints", "name": "Art Prints"}
                ]
            }"#,
        )
        .unwrap();

        let id = SubcategoryId::new("sub-movie");
        assert_eq!(category.subcategory(&id).unwrap().name, "Movie Posters");
        assert!(category.subcategory(&SubcategoryId::new("sub-none")).is_none());
    }
}
