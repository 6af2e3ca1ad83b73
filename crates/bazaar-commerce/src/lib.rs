//! Storefront domain types and logic for Bazaar.
//!
//! This crate holds everything a storefront front end needs below the view
//! layer:
//!
//! - **Catalog**: Products, categories and the read-only catalog store
//! - **Cart**: Line items with captured prices and the pricing breakdown
//! - **Shopper**: Cart, wishlist, compare list, recently viewed and recent
//!   searches, persisted through a [`bazaar_cache::Store`]
//! - **Search**: Listing filters and sorts, live suggestions, category counts
//! - **I18n**: Locales, translated UI strings and price formatting
//!
//! # Example
//!
//! ```rust
//! use bazaar_cache::MemoryStore;
//! use bazaar_commerce::prelude::*;
//!
//! let catalog = Catalog::builtin().unwrap();
//! let config = StoreConfig::default();
//! let mut shopper = ShopperState::load(MemoryStore::new(), &config);
//!
//! let headphones = catalog.get(&ProductId::new("1")).unwrap();
//! shopper.add_to_cart(headphones);
//! shopper.add_to_cart(headphones);
//!
//! assert_eq!(shopper.total_items(), 2);
//! assert_eq!(shopper.total_price(), Money::new(1_698_000));
//! assert_eq!(shopper.total_price().display(Locale::Uz), "1 698 000 so'm");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod config;

pub mod catalog;
pub mod cart;
pub mod i18n;
pub mod search;
pub mod shopper;

pub use config::StoreConfig;
pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::StoreConfig;
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, Category, PriceBounds, Product, StockLevel};

    // Cart
    pub use crate::cart::{Cart, CartLineItem, CartPricing, LineItemPricing};

    // Shopper
    pub use crate::shopper::{
        CompareOutcome, ComparisonCell, ComparisonRow, ComparisonTable, ShopperState,
    };

    // Search
    pub use crate::search::{
        category_facets, CatalogQuery, CategoryFacet, Filter, SortOption, Suggester,
    };

    // I18n
    pub use crate::i18n::{Locale, LocaleState, LocaleStatus, Translations};
}
