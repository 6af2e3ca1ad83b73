//! Per-shopper state.
//!
//! Contains the wishlist, compare list, recently viewed and recent search
//! collections and the container that persists them together with the cart.

mod compare;
mod lists;
mod state;

pub use compare::{CompareList, CompareOutcome, ComparisonCell, ComparisonRow, ComparisonTable};
pub use lists::{RecentSearches, RecentlyViewed, Wishlist};
pub use state::{
    ShopperState, CART_KEY, COMPARE_KEY, RECENTLY_VIEWED_KEY, RECENT_SEARCHES_KEY, WISHLIST_KEY,
};
