//! Shopping cart module.
//!
//! Contains the cart, its line items and the derived pricing breakdown.

mod cart;
mod pricing;

pub use cart::{Cart, CartLineItem};
pub use pricing::{CartPricing, LineItemPricing};
