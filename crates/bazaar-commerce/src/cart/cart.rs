//! Cart and line item types.

use crate::cart::{CartPricing, LineItemPricing};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product snapshot and how many of it the shopper wants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLineItem {
    /// The product as it was when first added; its price is the unit price.
    pub product: Product,
    /// Quantity, at least 1.
    pub quantity: u32,
}

impl CartLineItem {
    /// Create a line item.
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// The product id.
    pub fn product_id(&self) -> &ProductId {
        &self.product.id
    }

    /// Unit price times quantity.
    pub fn total_price(&self) -> Money {
        self.product.price.saturating_multiply(self.quantity)
    }
}

/// A shopping cart: at most one line item per product id, in the order
/// products were first added.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from persisted line items.
    ///
    /// Returns `None` when the items break the cart invariants (a zero
    /// quantity or two items for the same product).
    pub fn from_items(items: Vec<CartLineItem>) -> Option<Self> {
        let mut seen = std::collections::HashSet::new();
        let valid = items
            .iter()
            .all(|i| i.quantity >= 1 && seen.insert(i.product.id.clone()));
        valid.then_some(Self { items })
    }

    /// Add one unit of `product`.
    ///
    /// An existing line item for the same id is incremented; the snapshot
    /// it holds, and therefore its unit price, is kept. Returns the new
    /// quantity.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return existing.quantity;
        }
        self.items.push(CartLineItem::new(product.clone(), 1));
        1
    }

    /// Set the quantity for `product_id`.
    ///
    /// A quantity of zero or less removes the line item. Returns whether a
    /// line item was present.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(product_id);
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(item) = self.items.iter_mut().find(|i| &i.product.id == product_id) {
            item.quantity = quantity;
            true
        } else {
            false
        }
    }

    /// Remove the line item for `product_id`. Returns whether one was removed.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product.id != product_id);
        self.items.len() < len_before
    }

    /// Remove every line item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// The line item for `product_id`.
    pub fn get(&self, product_id: &ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|i| &i.product.id == product_id)
    }

    /// Whether `product_id` is in the cart.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Quantity of `product_id`, zero when absent.
    pub fn quantity_of(&self, product_id: &ProductId) -> u32 {
        self.get(product_id).map(|i| i.quantity).unwrap_or(0)
    }

    /// Sum of quantities.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of unit price times quantity.
    pub fn total_price(&self) -> Money {
        self.items.iter().map(CartLineItem::total_price).sum()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Price breakdown of the cart.
    pub fn pricing(&self) -> CartPricing {
        let line_items: Vec<LineItemPricing> = self
            .items
            .iter()
            .map(|item| LineItemPricing {
                product_id: item.product.id.clone(),
                unit_price: item.product.price,
                quantity: item.quantity,
                total: item.total_price(),
                savings: item.product.savings().saturating_multiply(item.quantity),
            })
            .collect();

        let subtotal: Money = line_items.iter().map(|l| l.total).sum();
        let savings: Money = line_items.iter().map(|l| l.savings).sum();

        CartPricing {
            subtotal,
            savings,
            total: subtotal,
            line_items,
        }
    }
}
