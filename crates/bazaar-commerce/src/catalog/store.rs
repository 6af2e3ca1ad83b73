//! The read-only catalog loaded at startup.

use crate::catalog::{Category, Product};
use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Immutable collection of products and categories.
///
/// Products keep their load order; that order is the "popular" ordering
/// used by listings and the tie-breaker for every other sort.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    index: HashMap<ProductId, usize>,
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    categories: Vec<Category>,
    products: Vec<Product>,
}

/// Lowest and highest product price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBounds {
    pub min: Money,
    pub max: Money,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate or invalid products and
    /// duplicate categories.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::new();
        for category in &categories {
            if !seen.insert(category.id.as_str()) {
                return Err(CommerceError::DuplicateCategory(category.id.to_string()));
            }
        }

        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            product.validate()?;
            if index.insert(product.id.clone(), position).is_some() {
                return Err(CommerceError::DuplicateProduct(product.id.to_string()));
            }
        }

        Ok(Self {
            products,
            categories,
            index,
        })
    }

    /// Parse `{"categories": [...], "products": [...]}`.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.products, file.categories)
    }

    /// The storefront's bundled catalog.
    pub fn builtin() -> Result<Self, CommerceError> {
        let catalog = Self::from_json(BUILTIN_CATALOG)?;
        tracing::info!(
            products = catalog.len(),
            categories = catalog.categories.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories in catalog order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a product.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.index.get(id).map(|&i| &self.products[i])
    }

    /// Look up a category.
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Products in `category`, in catalog order.
    pub fn products_in<'a>(
        &'a self,
        category: &'a CategoryId,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |p| &p.category == category)
    }

    /// Up to `limit` other products from the same category as `id`.
    pub fn related(&self, id: &ProductId, limit: usize) -> Vec<&Product> {
        let Some(product) = self.get(id) else {
            return Vec::new();
        };
        self.products_in(&product.category)
            .filter(|p| &p.id != id)
            .take(limit)
            .collect()
    }

    /// Cheapest and most expensive price, `None` for an empty catalog.
    pub fn price_bounds(&self) -> Option<PriceBounds> {
        let min = self.products.iter().map(|p| p.price).min()?;
        let max = self.products.iter().map(|p| p.price).max()?;
        Some(PriceBounds { min, max })
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, category: &str, price: i64) -> Product {
        Product::new(id, format!("Product {id}"), category, Money::new(price), "/p.jpg")
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.categories().len(), 5);
        for product in catalog.products() {
            assert!(
                catalog.category(&product.category).is_some(),
                "product {} has unknown category",
                product.id
            );
        }
    }

    #[test]
    fn test_builtin_first_product() {
        let catalog = Catalog::builtin().unwrap();
        let first = catalog.get(&ProductId::new("1")).unwrap();
        assert_eq!(first.price, Money::new(849_000));
    }

    #[test]
    fn test_duplicate_product_rejected() {
        let result = Catalog::new(vec![product("1", "a", 10), product("1", "a", 20)], vec![]);
        assert!(matches!(result, Err(CommerceError::DuplicateProduct(id)) if id == "1"));
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let result = Catalog::new(
            vec![],
            vec![Category::new("a", "A"), Category::new("a", "Again")],
        );
        assert!(matches!(result, Err(CommerceError::DuplicateCategory(_))));
    }

    #[test]
    fn test_invalid_product_rejected() {
        let mut bad = product("1", "a", 10);
        bad.images.clear();
        assert!(Catalog::new(vec![bad], vec![]).is_err());
    }

    #[test]
    fn test_related_excludes_self_and_keeps_order() {
        let catalog = Catalog::new(
            vec![
                product("1", "a", 10),
                product("2", "b", 20),
                product("3", "a", 30),
                product("4", "a", 40),
            ],
            vec![],
        )
        .unwrap();

        let related: Vec<&str> = catalog
            .related(&ProductId::new("3"), 5)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(related, vec!["1", "4"]);
        assert!(catalog.related(&ProductId::new("missing"), 5).is_empty());
    }

    #[test]
    fn test_price_bounds() {
        let catalog =
            Catalog::new(vec![product("1", "a", 300), product("2", "a", 100)], vec![]).unwrap();
        assert_eq!(
            catalog.price_bounds(),
            Some(PriceBounds {
                min: Money::new(100),
                max: Money::new(300)
            })
        );
        assert_eq!(Catalog::default().price_bounds(), None);
    }
}
