//! Catalog filters.

use crate::catalog::Product;
use crate::ids::CategoryId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A single predicate over products. A query keeps every product that
/// matches all of its active filters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Exact category match.
    Category(CategoryId),
    /// Case-insensitive substring of name, description or category.
    Text(String),
    /// Only products with a discount.
    DiscountOnly,
    /// Only products flagged new.
    NewOnly,
    /// Only purchasable products.
    InStock,
    /// Inclusive price bounds; a missing bound is open.
    PriceRange {
        min: Option<Money>,
        max: Option<Money>,
    },
    /// Inclusive lower bound on rating.
    MinRating(f32),
}

impl Filter {
    /// Create a category filter.
    pub fn category(id: impl Into<CategoryId>) -> Self {
        Filter::Category(id.into())
    }

    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text(query.into())
    }

    /// Create an inclusive price range filter.
    pub fn price_range(min: Option<Money>, max: Option<Money>) -> Self {
        Filter::PriceRange { min, max }
    }

    /// Whether `product` satisfies this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Category(id) => &product.category == id,
            Filter::Text(query) => product.matches_text(&query.to_lowercase()),
            Filter::DiscountOnly => product.discount_percent.is_some(),
            Filter::NewOnly => product.is_new,
            Filter::InStock => product.in_stock,
            Filter::PriceRange { min, max } => {
                min.map_or(true, |min| product.price >= min)
                    && max.map_or(true, |max| product.price <= max)
            }
            Filter::MinRating(min) => product.rating >= *min,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        let mut p = Product::new(
            "1",
            "Samsung Galaxy A55",
            "phones",
            Money::new(4_899_000),
            "/a55.jpg",
        );
        p.description = "Super AMOLED display".to_string();
        p.rating = 4.7;
        p.is_new = true;
        p
    }

    #[test]
    fn test_category_filter() {
        assert!(Filter::category("phones").matches(&product()));
        assert!(!Filter::category("phone").matches(&product()));
    }

    #[test]
    fn test_text_filter_is_case_insensitive() {
        let p = product();
        assert!(Filter::text("GALAXY").matches(&p));
        assert!(Filter::text("amoled").matches(&p));
        assert!(Filter::text("PHON").matches(&p));
        assert!(!Filter::text("iphone").matches(&p));
    }

    #[test]
    fn test_text_filter_handles_cyrillic() {
        let mut p = product();
        p.name = "Смартфон Samsung".to_string();
        assert!(Filter::text("СМАРТ").matches(&p));
    }

    #[test]
    fn test_flag_filters() {
        let mut p = product();
        assert!(Filter::NewOnly.matches(&p));
        assert!(!Filter::DiscountOnly.matches(&p));
        p.original_price = Some(Money::new(5_000_000));
        p.discount_percent = Some(2);
        assert!(Filter::DiscountOnly.matches(&p));
        p.in_stock = false;
        assert!(!Filter::InStock.matches(&p));
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let p = product();
        let exact = Money::new(4_899_000);
        assert!(Filter::price_range(Some(exact), Some(exact)).matches(&p));
        assert!(Filter::price_range(None, Some(exact)).matches(&p));
        assert!(!Filter::price_range(Some(Money::new(4_899_001)), None).matches(&p));
        assert!(Filter::price_range(None, None).matches(&p));
    }

    #[test]
    fn test_min_rating_is_inclusive() {
        assert!(Filter::MinRating(4.7).matches(&product()));
        assert!(!Filter::MinRating(4.8).matches(&product()));
    }
}
