//! Key-value persistence for the Bazaar storefront.
//!
//! The state containers never talk to a concrete storage technology. They
//! depend on the [`Store`] port, which has an in-memory implementation for
//! tests ([`MemoryStore`]) and a durable one ([`FileStore`]). [`Cache`] adds
//! namespaced keys and JSON serialization on top of any store.
//!
//! # Example
//!
//! ```
//! use bazaar_cache::{Cache, MemoryStore, Store};
//!
//! let store = MemoryStore::new();
//! let cache = Cache::new(store.clone(), "bazaar");
//!
//! cache.set("wishlist", &vec!["1", "4"]).unwrap();
//! assert!(store.get("bazaar:wishlist").unwrap().is_some());
//!
//! cache.delete("wishlist").unwrap();
//! assert!(!cache.exists("wishlist").unwrap());
//! ```

mod error;
mod kv;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use store::{FileStore, MemoryStore, Store};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, MemoryStore, Store};
}
