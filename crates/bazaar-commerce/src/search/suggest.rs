//! Live search suggestions for the header search box.

use crate::catalog::Product;
use crate::config::StoreConfig;
use crate::search::Filter;

/// Suggestion settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggester {
    /// Maximum number of suggestions.
    pub limit: usize,
    /// Queries shorter than this (in characters, after trimming) get no
    /// suggestions.
    pub min_chars: usize,
}

impl Default for Suggester {
    fn default() -> Self {
        Self::from_config(&StoreConfig::default())
    }
}

impl Suggester {
    /// Settings taken from the store configuration.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self {
            limit: config.suggestion_limit,
            min_chars: config.suggestion_min_chars,
        }
    }

    /// The first `limit` products matching `query`, in catalog order.
    pub fn suggest<'a>(&self, products: &'a [Product], query: &str) -> Vec<&'a Product> {
        suggest(products, query, self.limit, self.min_chars)
    }
}

/// The first `limit` products whose name, description or category contains
/// `query` (case-insensitive), in catalog order. Queries shorter than
/// `min_chars` characters yield nothing.
pub fn suggest<'a>(
    products: &'a [Product],
    query: &str,
    limit: usize,
    min_chars: usize,
) -> Vec<&'a Product> {
    let query = query.trim();
    if query.chars().count() < min_chars {
        return Vec::new();
    }
    let filter = Filter::text(query);
    products
        .iter()
        .filter(|p| filter.matches(p))
        .take(limit)
        .collect()
}
