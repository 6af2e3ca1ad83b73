//! The shopper's session state: cart, wishlist, compare list, recently
//! viewed products and recent searches, kept in sync with a [`Store`].

use crate::cart::{Cart, CartLineItem, CartPricing};
use crate::catalog::Product;
use crate::config::StoreConfig;
use crate::ids::ProductId;
use crate::money::Money;
use crate::shopper::{
    CompareList, CompareOutcome, ComparisonTable, RecentSearches, RecentlyViewed, Wishlist,
};
use bazaar_cache::{Cache, Store};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Key of the persisted cart line items.
pub const CART_KEY: &str = "cart";
/// Key of the persisted wishlist.
pub const WISHLIST_KEY: &str = "wishlist";
/// Key of the persisted compare list.
pub const COMPARE_KEY: &str = "compare";
/// Key of the persisted recently-viewed list.
pub const RECENTLY_VIEWED_KEY: &str = "recently-viewed";
/// Key of the persisted search terms.
pub const RECENT_SEARCHES_KEY: &str = "recent-searches";

/// Read `key` and rebuild a collection from it. Anything missing, unreadable
/// or rejected by `rebuild` comes back as `None`.
fn restore<S, T, C>(cache: &Cache<S>, key: &str, rebuild: impl FnOnce(T) -> Option<C>) -> Option<C>
where
    S: Store,
    T: DeserializeOwned,
{
    let raw = match cache.get::<T>(key) {
        Ok(raw) => raw?,
        Err(e) => {
            warn!(key, error = %e, "discarding unreadable persisted state");
            return None;
        }
    };
    let rebuilt = rebuild(raw);
    if rebuilt.is_none() {
        warn!(key, "discarding inconsistent persisted state");
    }
    rebuilt
}

/// Owns every per-shopper collection and writes each one back to the store
/// after it changes.
///
/// State is read from the store once, in [`ShopperState::load`]. From then
/// on the in-memory copy is authoritative: a failed write is logged and the
/// mutation still takes effect.
pub struct ShopperState<S> {
    cache: Cache<S>,
    cart: Cart,
    wishlist: Wishlist,
    compare: CompareList,
    recently_viewed: RecentlyViewed,
    recent_searches: RecentSearches,
}

impl<S: Store> ShopperState<S> {
    /// Rehydrate from `store`.
    pub fn load(store: S, config: &StoreConfig) -> Self {
        let cache = Cache::new(store, config.namespace.clone());

        let cart = restore(&cache, CART_KEY, Cart::from_items).unwrap_or_default();
        let wishlist = restore(&cache, WISHLIST_KEY, Wishlist::from_items).unwrap_or_default();
        let compare = restore(&cache, COMPARE_KEY, |items| {
            CompareList::from_items(items, config.compare_cap)
        })
        .unwrap_or_else(|| CompareList::new(config.compare_cap));
        let recently_viewed = restore(&cache, RECENTLY_VIEWED_KEY, |items| {
            RecentlyViewed::from_items(items, config.recently_viewed_cap)
        })
        .unwrap_or_else(|| RecentlyViewed::new(config.recently_viewed_cap));
        let recent_searches = restore(&cache, RECENT_SEARCHES_KEY, |terms| {
            RecentSearches::from_terms(terms, config.recent_search_cap)
        })
        .unwrap_or_else(|| RecentSearches::new(config.recent_search_cap));

        info!(
            namespace = cache.namespace(),
            cart_items = cart.unique_item_count(),
            wishlist = wishlist.len(),
            compare = compare.len(),
            recently_viewed = recently_viewed.len(),
            "shopper state loaded"
        );

        Self {
            cache,
            cart,
            wishlist,
            compare,
            recently_viewed,
            recent_searches,
        }
    }

    fn persist<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = self.cache.set(key, value) {
            warn!(key, error = %e, "failed to persist shopper state");
        }
    }

    fn persist_cart(&self) {
        self.persist(CART_KEY, self.cart.items());
    }

    fn persist_wishlist(&self) {
        self.persist(WISHLIST_KEY, self.wishlist.items());
    }

    fn persist_compare(&self) {
        self.persist(COMPARE_KEY, self.compare.items());
    }

    fn persist_recently_viewed(&self) {
        self.persist(RECENTLY_VIEWED_KEY, self.recently_viewed.items());
    }

    fn persist_recent_searches(&self) {
        self.persist(RECENT_SEARCHES_KEY, self.recent_searches.terms());
    }

    // ---- cart ----

    /// Add one unit of `product`. An existing line item keeps the price it
    /// was first added at.
    pub fn add_to_cart(&mut self, product: &Product) {
        let quantity = self.cart.add(product);
        debug!(product_id = %product.id, quantity, "added to cart");
        self.persist_cart();
    }

    /// Set the quantity of `product_id`. Zero or less removes it; an absent
    /// product is left alone.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if self.cart.update_quantity(product_id, quantity) {
            debug!(product_id = %product_id, quantity, "cart quantity updated");
            self.persist_cart();
        }
    }

    /// Remove `product_id` from the cart.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) {
        if self.cart.remove(product_id) {
            debug!(product_id = %product_id, "removed from cart");
            self.persist_cart();
        }
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        debug!("cart cleared");
        self.persist_cart();
    }

    /// Sum of quantities.
    pub fn total_items(&self) -> u64 {
        self.cart.total_items()
    }

    /// Sum of unit price times quantity.
    pub fn total_price(&self) -> Money {
        self.cart.total_price()
    }

    /// Subtotal, savings and total.
    pub fn cart_pricing(&self) -> CartPricing {
        self.cart.pricing()
    }

    /// Quantity of `product_id` in the cart, zero when absent.
    pub fn cart_quantity(&self, product_id: &ProductId) -> u32 {
        self.cart.quantity_of(product_id)
    }

    /// Whether `product_id` has a line item.
    pub fn is_in_cart(&self, product_id: &ProductId) -> bool {
        self.cart.contains(product_id)
    }

    /// The cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Cart line items in the order products were first added.
    pub fn line_items(&self) -> &[CartLineItem] {
        self.cart.items()
    }

    // ---- wishlist ----

    /// Save `product`. Saving it twice changes nothing.
    pub fn add_to_wishlist(&mut self, product: &Product) {
        if self.wishlist.add(product) {
            debug!(product_id = %product.id, "added to wishlist");
            self.persist_wishlist();
        }
    }

    /// Remove `product_id` from the wishlist.
    pub fn remove_from_wishlist(&mut self, product_id: &ProductId) {
        if self.wishlist.remove(product_id) {
            debug!(product_id = %product_id, "removed from wishlist");
            self.persist_wishlist();
        }
    }

    /// Flip the saved state of `product`. Returns whether it is saved now.
    pub fn toggle_wishlist(&mut self, product: &Product) -> bool {
        let saved = self.wishlist.toggle(product);
        debug!(product_id = %product.id, saved, "wishlist toggled");
        self.persist_wishlist();
        saved
    }

    /// Whether `product_id` is saved.
    pub fn is_in_wishlist(&self, product_id: &ProductId) -> bool {
        self.wishlist.contains(product_id)
    }

    /// Remove every saved product.
    pub fn clear_wishlist(&mut self) {
        self.wishlist.clear();
        debug!("wishlist cleared");
        self.persist_wishlist();
    }

    /// Saved products, in the order they were saved.
    pub fn wishlist(&self) -> &[Product] {
        self.wishlist.items()
    }

    // ---- compare ----

    /// Add `product` to the compare list unless it is already there or the
    /// list is full.
    pub fn add_to_compare(&mut self, product: &Product) -> CompareOutcome {
        let outcome = self.compare.add(product);
        match outcome {
            CompareOutcome::Added => {
                debug!(product_id = %product.id, "added to compare");
                self.persist_compare();
            }
            CompareOutcome::Full => {
                debug!(product_id = %product.id, cap = self.compare.cap(), "compare list full");
            }
            CompareOutcome::AlreadyPresent => {}
        }
        outcome
    }

    /// Remove `product_id` from the compare list.
    pub fn remove_from_compare(&mut self, product_id: &ProductId) {
        if self.compare.remove(product_id) {
            debug!(product_id = %product_id, "removed from compare");
            self.persist_compare();
        }
    }

    /// Whether `product_id` is being compared.
    pub fn is_in_compare(&self, product_id: &ProductId) -> bool {
        self.compare.contains(product_id)
    }

    /// Empty the compare list.
    pub fn clear_compare(&mut self) {
        self.compare.clear();
        debug!("compare list cleared");
        self.persist_compare();
    }

    /// Compared products, in the order they were picked.
    pub fn compare_items(&self) -> &[Product] {
        self.compare.items()
    }

    /// Attribute rows for the compare page.
    pub fn comparison_table(&self) -> ComparisonTable {
        self.compare.table()
    }

    // ---- recently viewed ----

    /// Record a product page view.
    pub fn add_to_recently_viewed(&mut self, product: &Product) {
        self.recently_viewed.record(product);
        debug!(product_id = %product.id, "recorded view");
        self.persist_recently_viewed();
    }

    /// Forget every viewed product.
    pub fn clear_recently_viewed(&mut self) {
        self.recently_viewed.clear();
        debug!("recently viewed cleared");
        self.persist_recently_viewed();
    }

    /// Recently viewed products, most recent first.
    pub fn recently_viewed(&self) -> &[Product] {
        self.recently_viewed.items()
    }

    // ---- recent searches ----

    /// Remember a submitted search term. Blank terms are ignored.
    pub fn add_recent_search(&mut self, term: &str) {
        if self.recent_searches.record(term) {
            debug!(term = term.trim(), "recorded search");
            self.persist_recent_searches();
        }
    }

    /// Forget `term`. Matching is exact.
    pub fn remove_recent_search(&mut self, term: &str) {
        if self.recent_searches.remove(term) {
            debug!(term, "removed search");
            self.persist_recent_searches();
        }
    }

    /// Forget every search term.
    pub fn clear_recent_searches(&mut self) {
        self.recent_searches.clear();
        debug!("recent searches cleared");
        self.persist_recent_searches();
    }

    /// Search terms, most recent first.
    pub fn recent_searches(&self) -> &[String] {
        self.recent_searches.terms()
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        self.cache.store()
    }
}
