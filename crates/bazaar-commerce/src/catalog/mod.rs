//! Product catalog module.
//!
//! Contains product and category records and the read-only catalog store.

mod category;
mod product;
mod store;

pub use category::Category;
pub use product::{Product, StockLevel, MAX_RATING};
pub use store::{Catalog, PriceBounds};
