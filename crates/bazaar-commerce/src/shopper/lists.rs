//! Product lists without quantities: wishlist, recently viewed, and the
//! recent search terms.

use crate::catalog::Product;
use crate::ids::ProductId;
use std::collections::HashSet;

fn has_unique_ids(items: &[Product]) -> bool {
    let mut seen = HashSet::new();
    items.iter().all(|p| seen.insert(&p.id))
}

/// Saved products, in the order they were saved. No duplicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wishlist {
    items: Vec<Product>,
}

impl Wishlist {
    /// Create an empty wishlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted items; `None` if an id repeats.
    pub fn from_items(items: Vec<Product>) -> Option<Self> {
        has_unique_ids(&items).then_some(Self { items })
    }

    /// Save `product`. Returns `false` when it was already saved.
    pub fn add(&mut self, product: &Product) -> bool {
        if self.contains(&product.id) {
            return false;
        }
        self.items.push(product.clone());
        true
    }

    /// Remove `product_id`. Returns whether it was saved.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|p| &p.id != product_id);
        self.items.len() < len_before
    }

    /// Add when absent, remove when present. Returns whether the product is
    /// saved afterwards.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if self.remove(&product.id) {
            false
        } else {
            self.add(product)
        }
    }

    /// Whether `product_id` is saved.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|p| &p.id == product_id)
    }

    /// Saved products.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Number of saved products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is saved.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Recently viewed products, most recent first, at most `cap` long.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentlyViewed {
    items: Vec<Product>,
    cap: usize,
}

impl RecentlyViewed {
    /// Create an empty list.
    pub fn new(cap: usize) -> Self {
        Self {
            items: Vec::new(),
            cap,
        }
    }

    /// Rebuild from persisted items; `None` if an id repeats. Lists longer
    /// than `cap` are truncated.
    pub fn from_items(mut items: Vec<Product>, cap: usize) -> Option<Self> {
        if !has_unique_ids(&items) {
            return None;
        }
        items.truncate(cap);
        Some(Self { items, cap })
    }

    /// Move `product` to the front, inserting it if new, then trim to the cap.
    pub fn record(&mut self, product: &Product) {
        self.items.retain(|p| p.id != product.id);
        self.items.insert(0, product.clone());
        self.items.truncate(self.cap);
    }

    /// Products, most recent first.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Maximum length.
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Recent search terms, most recent first, at most `cap` long.
///
/// De-duplication is exact and case-sensitive: `"Phone"` and `"phone"` are
/// different terms.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentSearches {
    terms: Vec<String>,
    cap: usize,
}

impl RecentSearches {
    /// Create an empty list.
    pub fn new(cap: usize) -> Self {
        Self {
            terms: Vec::new(),
            cap,
        }
    }

    /// Rebuild from persisted terms; `None` if a term repeats.
    pub fn from_terms(mut terms: Vec<String>, cap: usize) -> Option<Self> {
        let mut seen = HashSet::new();
        if !terms.iter().all(|t| seen.insert(t.as_str())) {
            return None;
        }
        terms.truncate(cap);
        Some(Self { terms, cap })
    }

    /// Remember `term`. Surrounding whitespace is trimmed and blank terms
    /// are ignored. Returns whether the list changed.
    pub fn record(&mut self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return false;
        }
        self.terms.retain(|t| t != term);
        self.terms.insert(0, term.to_string());
        self.terms.truncate(self.cap);
        true
    }

    /// Forget `term`. Returns whether it was present.
    pub fn remove(&mut self, term: &str) -> bool {
        let len_before = self.terms.len();
        self.terms.retain(|t| t != term);
        self.terms.len() < len_before
    }

    /// Terms, most recent first.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Whether no term is remembered.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.terms.clear();
    }
}
