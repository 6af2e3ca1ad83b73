//! Side-by-side product comparison.

use crate::catalog::{Product, StockLevel};
use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use std::collections::HashSet;

/// Result of adding a product to the compare list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOutcome {
    /// The product was added.
    Added,
    /// The product was already being compared.
    AlreadyPresent,
    /// The list is at its cap; nothing changed.
    Full,
}

/// Products selected for comparison, in the order they were picked.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareList {
    items: Vec<Product>,
    cap: usize,
}

impl CompareList {
    /// Create an empty list holding at most `cap` products.
    pub fn new(cap: usize) -> Self {
        Self {
            items: Vec::new(),
            cap,
        }
    }

    /// Rebuild from persisted items; `None` if an id repeats. Lists longer
    /// than `cap` are truncated.
    pub fn from_items(mut items: Vec<Product>, cap: usize) -> Option<Self> {
        let mut seen = HashSet::new();
        if !items.iter().all(|p| seen.insert(p.id.clone())) {
            return None;
        }
        items.truncate(cap);
        Some(Self { items, cap })
    }

    /// Add `product` unless it is present or the list is full.
    pub fn add(&mut self, product: &Product) -> CompareOutcome {
        if self.contains(&product.id) {
            CompareOutcome::AlreadyPresent
        } else if self.is_full() {
            CompareOutcome::Full
        } else {
            self.items.push(product.clone());
            CompareOutcome::Added
        }
    }

    /// Remove `product_id`. Returns whether it was present.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|p| &p.id != product_id);
        self.items.len() < len_before
    }

    /// Whether `product_id` is being compared.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|p| &p.id == product_id)
    }

    /// Whether another product can be added.
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.cap
    }

    /// Compared products.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Maximum number of products.
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Number of compared products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is being compared.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Build the comparison table: one row per attribute, one cell per
    /// compared product, columns in list order.
    pub fn table(&self) -> ComparisonTable {
        let row = |label_key: &'static str, cell: fn(&Product) -> ComparisonCell| ComparisonRow {
            label_key,
            cells: self.items.iter().map(cell).collect(),
        };

        ComparisonTable {
            products: self.items.iter().map(|p| p.id.clone()).collect(),
            rows: vec![
                row("price", |p| ComparisonCell::Price(p.price)),
                row("originalPrice", |p| {
                    p.original_price
                        .map(ComparisonCell::Price)
                        .unwrap_or(ComparisonCell::Empty)
                }),
                row("rating", |p| ComparisonCell::Rating(p.rating)),
                row("reviewCount", |p| ComparisonCell::Count(p.review_count)),
                row("availability", |p| ComparisonCell::Stock(p.stock_level())),
                row("category", |p| ComparisonCell::Category(p.category.clone())),
                row("features", |p| {
                    if p.features.is_empty() {
                        ComparisonCell::Empty
                    } else {
                        ComparisonCell::List(p.features.clone())
                    }
                }),
            ],
        }
    }
}

/// The compare page table.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    /// Column order.
    pub products: Vec<ProductId>,
    /// Attribute rows.
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    /// The row labelled `label_key`.
    pub fn row(&self, label_key: &str) -> Option<&ComparisonRow> {
        self.rows.iter().find(|r| r.label_key == label_key)
    }
}

/// One attribute across all compared products.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    /// Translation key of the row label.
    pub label_key: &'static str,
    /// One cell per compared product.
    pub cells: Vec<ComparisonCell>,
}

/// A table cell, left unformatted so the view can localize it.
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonCell {
    Price(Money),
    Rating(f32),
    Count(u32),
    Stock(StockLevel),
    Category(CategoryId),
    List(Vec<String>),
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: i64) -> Product {
        Product::new(id, format!("Product {id}"), "phones", Money::new(price), "/p.jpg")
    }

    #[test]
    fn test_add_outcomes() {
        let mut compare = CompareList::new(2);
        assert_eq!(compare.add(&product("1", 10)), CompareOutcome::Added);
        assert_eq!(compare.add(&product("1", 10)), CompareOutcome::AlreadyPresent);
        assert_eq!(compare.add(&product("2", 20)), CompareOutcome::Added);
        assert_eq!(compare.add(&product("3", 30)), CompareOutcome::Full);
        assert_eq!(compare.len(), 2);
    }

    #[test]
    fn test_remove_frees_slot() {
        let mut compare = CompareList::new(1);
        compare.add(&product("1", 10));
        assert!(compare.remove(&ProductId::new("1")));
        assert_eq!(compare.add(&product("2", 20)), CompareOutcome::Added);
    }

    #[test]
    fn test_table_columns_follow_list_order() {
        let mut compare = CompareList::new(4);
        let mut a = product("1", 849_000);
        a.original_price = Some(Money::new(999_000));
        a.discount_percent = Some(15);
        a.features = vec!["ANC".to_string()];
        compare.add(&a);
        compare.add(&product("2", 100));

        let table = compare.table();
        assert_eq!(table.products, vec![ProductId::new("1"), ProductId::new("2")]);
        assert_eq!(table.rows.len(), 7);
        assert!(table.rows.iter().all(|r| r.cells.len() == 2));

        let original = table.row("originalPrice").unwrap();
        assert_eq!(
            original.cells,
            vec![
                ComparisonCell::Price(Money::new(999_000)),
                ComparisonCell::Empty
            ]
        );
        let features = table.row("features").unwrap();
        assert_eq!(features.cells[0], ComparisonCell::List(vec!["ANC".to_string()]));
        assert_eq!(
            table.row("availability").unwrap().cells[1],
            ComparisonCell::Stock(StockLevel::Unknown)
        );
    }

    #[test]
    fn test_empty_table() {
        let table = CompareList::new(4).table();
        assert!(table.products.is_empty());
        assert!(table.rows.iter().all(|r| r.cells.is_empty()));
    }
}
