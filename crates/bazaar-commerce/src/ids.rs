//! Newtype IDs for type-safe identifiers.
//!
//! Catalog ids are plain strings in the data files (`"1"`, `"phones"`);
//! the newtypes keep a category id from being passed where a product id
//! is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

define_id!(
    /// Identifier of a catalog product.
    ProductId
);
define_id!(
    /// Identifier of a catalog category.
    CategoryId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("1");
        assert_eq!(id.as_str(), "1");
    }

    #[test]
    fn test_id_from_string() {
        let id: CategoryId = "phones".into();
        assert_eq!(id.as_str(), "phones");
    }

    #[test]
    fn test_id_display() {
        let id = ProductId::new("7");
        assert_eq!(format!("{}", id), "7");
    }

    #[test]
    fn test_id_compares_with_str() {
        let id = ProductId::new("3");
        assert_eq!(id, "3");
        assert!(id != "4");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ProductId::new("5");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"5\"");
        let back: ProductId = serde_json::from_str("\"5\"").unwrap();
        assert_eq!(back, id);
    }
}
