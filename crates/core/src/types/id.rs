//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `generate()` which mints a fresh ID with the entity's prefix
/// - `From<String>`, `From<&str>`, and `AsRef<str>` implementations
///
/// IDs are opaque strings; the prefix only exists so humans can tell
/// entity kinds apart when reading persisted JSON.
///
/// # Example
///
/// ```rust
/// # use aura_core::define_id;
/// define_id!(ProductId, "prod");
/// define_id!(CategoryId, "cat");
///
/// let product_id = ProductId::new("prod-ph-001");
/// let category_id = CategoryId::generate();
///
/// assert!(category_id.as_str().starts_with("cat-"));
///
/// // These are different types, so this won't compile:
/// // let _: ProductId = category_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from an existing string value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Mint a fresh unique ID with this entity's prefix.
            #[must_use]
            pub fn generate() -> Self {
                Self(format!("{}-{}", $prefix, ::uuid::Uuid::new_v4()))
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(ProductId, "prod");
define_id!(CategoryId, "cat");
define_id!(SubcategoryId, "sub");
define_id!(UserId, "user");

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_uses_prefix() {
        assert!(ProductId::generate().as_str().starts_with("prod-"));
        assert!(CategoryId::generate().as_str().starts_with("cat-"));
        assert!(SubcategoryId::generate().as_str().starts_with("sub-"));
        assert!(UserId::generate().as_str().starts_with("user-"));
    }

    #[test]
    fn test_generate_is_unique() {
        assert_ne!(ProductId::generate(), ProductId::generate());
    }

    #[test]
    fn test_serde_transparent() {
        let id = ProductId::new("prod-ph-001");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"prod-ph-001\"");

        let parsed: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_display() {
        let id = UserId::new("user-root-001");
        assert_eq!(format!("{id}"), "user-root-001");
    }
}
