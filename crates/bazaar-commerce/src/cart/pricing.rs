//! Cart pricing breakdown.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Pricing summary for a cart, derived from its line items on demand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of unit price times quantity.
    pub subtotal: Money,
    /// What the shopper saves against original prices.
    pub savings: Money,
    /// Amount payable. Delivery and payment are outside the storefront, so
    /// this equals the subtotal.
    pub total: Money,
    /// Per-line-item pricing breakdown.
    pub line_items: Vec<LineItemPricing>,
}

impl CartPricing {
    /// Subtotal at original (pre-discount) prices.
    pub fn original_total(&self) -> Money {
        self.subtotal + self.savings
    }

    /// Check if any discounted product is in the cart.
    pub fn has_savings(&self) -> bool {
        self.savings.is_positive()
    }

    /// Savings as a percentage of the original total.
    pub fn savings_percentage(&self) -> f64 {
        let original = self.original_total().amount();
        if original == 0 {
            return 0.0;
        }
        (self.savings.amount() as f64 / original as f64) * 100.0
    }
}

/// Pricing breakdown for a single line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    /// Product in the line item.
    pub product_id: ProductId,
    /// Unit price captured when the product was added.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// Unit price times quantity.
    pub total: Money,
    /// Savings against the original price times quantity.
    pub savings: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_savings_percentage() {
        let pricing = CartPricing {
            subtotal: Money::new(9000),
            savings: Money::new(1000),
            total: Money::new(9000),
            line_items: vec![],
        };

        assert!(pricing.has_savings());
        assert!((pricing.savings_percentage() - 10.0).abs() < 0.01);
    }

    #[test]
    fn test_empty_pricing() {
        let pricing = CartPricing {
            subtotal: Money::zero(),
            savings: Money::zero(),
            total: Money::zero(),
            line_items: vec![],
        };
        assert!(!pricing.has_savings());
        assert_eq!(pricing.savings_percentage(), 0.0);
    }
}
