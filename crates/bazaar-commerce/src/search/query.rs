//! Listing query builder and evaluation.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::CategoryId;
use crate::money::Money;
use crate::search::Filter;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort options for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Catalog order.
    #[default]
    Popular,
    /// New products first, catalog order otherwise.
    Newest,
    /// Price, low to high.
    PriceLow,
    /// Price, high to low.
    PriceHigh,
    /// Highest rated first.
    Rating,
}

impl SortOption {
    /// Every option, in the order the sort dropdown lists them.
    pub const ALL: [SortOption; 5] = [
        SortOption::Popular,
        SortOption::Newest,
        SortOption::PriceLow,
        SortOption::PriceHigh,
        SortOption::Rating,
    ];

    /// The value used in URLs and the sort dropdown.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Popular => "popular",
            SortOption::Newest => "newest",
            SortOption::PriceLow => "price-low",
            SortOption::PriceHigh => "price-high",
            SortOption::Rating => "rating",
        }
    }

    /// Translation key of the option label.
    pub fn label_key(&self) -> &'static str {
        match self {
            SortOption::Popular => "sortPopular",
            SortOption::Newest => "sortNewest",
            SortOption::PriceLow => "sortPriceLow",
            SortOption::PriceHigh => "sortPriceHigh",
            SortOption::Rating => "sortRating",
        }
    }

    /// Parse a sort value, falling back to [`SortOption::Popular`].
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Stable-sort `products` by this option. Ties keep their input order.
    pub fn sort(&self, products: &mut [&Product]) {
        match self {
            SortOption::Popular => {}
            SortOption::Newest => products.sort_by_key(|p| !p.is_new),
            SortOption::PriceLow => products.sort_by_key(|p| p.price),
            SortOption::PriceHigh => products.sort_by(|a, b| b.price.cmp(&a.price)),
            // Ratings are never NaN once loaded; `-0.0` and `0.0` tie.
            SortOption::Rating => products.sort_by(|a, b| {
                b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
            }),
        }
    }
}

impl FromStr for SortOption {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| CommerceError::UnknownSortOption(s.to_string()))
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product listing query: filters plus one sort.
///
/// # Example
///
/// ```
/// use bazaar_commerce::prelude::*;
///
/// let catalog = Catalog::builtin().unwrap();
/// let query = CatalogQuery::new()
///     .with_category("phones")
///     .with_sort(SortOption::PriceLow);
///
/// let names: Vec<&str> = query
///     .apply(catalog.products())
///     .iter()
///     .map(|p| p.name.as_str())
///     .collect();
/// assert_eq!(names, ["Samsung Galaxy A55 5G", "Apple iPhone 15 128GB"]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CatalogQuery {
    /// Exact category.
    pub category: Option<CategoryId>,
    /// Free-text query.
    pub text: Option<String>,
    /// Only discounted products.
    pub discount_only: bool,
    /// Only new products.
    pub new_only: bool,
    /// Only purchasable products.
    pub in_stock_only: bool,
    /// Inclusive `[min, max]` price bounds.
    pub price_range: Option<(Money, Money)>,
    /// Inclusive minimum rating; 0 disables the filter.
    pub min_rating: f32,
    /// Ordering of the result.
    pub sort: SortOption,
}

impl CatalogQuery {
    /// A query that keeps everything in catalog order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one category.
    pub fn with_category(mut self, category: impl Into<CategoryId>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the text query. Blank text clears it.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        let text = text.trim();
        self.text = (!text.is_empty()).then(|| text.to_string());
        self
    }

    /// Keep only discounted products.
    pub fn discount_only(mut self) -> Self {
        self.discount_only = true;
        self
    }

    /// Keep only new products.
    pub fn new_only(mut self) -> Self {
        self.new_only = true;
        self
    }

    /// Keep only products in stock.
    pub fn in_stock_only(mut self) -> Self {
        self.in_stock_only = true;
        self
    }

    /// Keep products priced within `[min, max]`.
    pub fn with_price_range(mut self, min: Money, max: Money) -> Self {
        self.price_range = Some((min, max));
        self
    }

    /// Keep products rated at least `rating`.
    pub fn with_min_rating(mut self, rating: f32) -> Self {
        self.min_rating = rating;
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// The active filters.
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters = Vec::new();
        if let Some(category) = &self.category {
            filters.push(Filter::Category(category.clone()));
        }
        if let Some(text) = &self.text {
            filters.push(Filter::Text(text.clone()));
        }
        if self.discount_only {
            filters.push(Filter::DiscountOnly);
        }
        if self.new_only {
            filters.push(Filter::NewOnly);
        }
        if self.in_stock_only {
            filters.push(Filter::InStock);
        }
        if let Some((min, max)) = self.price_range {
            filters.push(Filter::price_range(Some(min), Some(max)));
        }
        if self.min_rating > 0.0 {
            filters.push(Filter::MinRating(self.min_rating));
        }
        filters
    }

    /// Whether the query narrows the catalog at all.
    pub fn has_filters(&self) -> bool {
        !self.filters().is_empty()
    }

    /// Whether `product` passes every active filter.
    pub fn matches(&self, product: &Product) -> bool {
        self.filters().iter().all(|f| f.matches(product))
    }

    /// Filter then sort `products`. The input is not modified.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let filters = self.filters();
        let mut result: Vec<&Product> = products
            .iter()
            .filter(|p| filters.iter().all(|f| f.matches(p)))
            .collect();
        self.sort.sort(&mut result);
        result
    }
}
