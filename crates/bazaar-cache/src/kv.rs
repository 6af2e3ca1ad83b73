//! Typed, namespaced view over a [`Store`] with automatic serialization.

use crate::{CacheError, Store};
use serde::{de::DeserializeOwned, Serialize};

/// Type-safe cache over any [`Store`].
///
/// Every key is prefixed with the cache namespace, so `cart` becomes
/// `bazaar:cart` for a cache opened with the `bazaar` namespace. Values go
/// through `serde_json` unless the `_raw` variants are used.
#[derive(Debug, Clone)]
pub struct Cache<S> {
    store: S,
    namespace: String,
}

impl<S: Store> Cache<S> {
    /// Wrap `store`, prefixing every key with `namespace`.
    ///
    /// # Example
    ///
    /// ```
    /// use bazaar_cache::{Cache, MemoryStore};
    ///
    /// let cache = Cache::new(MemoryStore::new(), "bazaar");
    /// cache.set("recent-searches", &vec!["phone"]).unwrap();
    /// let terms: Option<Vec<String>> = cache.get("recent-searches").unwrap();
    /// assert_eq!(terms, Some(vec!["phone".to_string()]));
    /// ```
    pub fn new(store: S, namespace: impl Into<String>) -> Self {
        Self {
            store,
            namespace: namespace.into(),
        }
    }

    /// The key namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the cache and return the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Build the fully-qualified key for `key`.
    pub fn key(&self, key: &str) -> String {
        crate::cache_key!(self.namespace.as_str(), key)
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist and an error if the stored
    /// text is not a valid `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(&self.key(key))? {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let text = serde_json::to_string(value)?;
        self.store.set(&self.key(key), &text)
    }

    /// Get the stored string without deserializing it.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.store.get(&self.key(key))
    }

    /// Store a plain string.
    pub fn set_raw(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.store.set(&self.key(key), value)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(&self.key(key))
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.store.get(&self.key(key))?.is_some())
    }

    /// Keys in this namespace, with the namespace prefix stripped.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        let prefix = crate::cache_key!(self.namespace.as_str(), "");
        Ok(self
            .store
            .keys()?
            .into_iter()
            .filter_map(|k| k.strip_prefix(&prefix).map(str::to_string))
            .collect())
    }
}

/// Helper to build cache keys with namespacing.
///
/// # Example
///
/// ```
/// use bazaar_cache::cache_key;
///
/// let key = cache_key!("bazaar", "cart");
/// assert_eq!(key, "bazaar:cart");
/// ```
#[macro_export]
macro_rules! cache_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        id: String,
        quantity: u32,
    }

    #[test]
    fn test_typed_roundtrip_uses_namespace() {
        let store = MemoryStore::new();
        let cache = Cache::new(store.clone(), "bazaar");
        let entries = vec![Entry {
            id: "1".to_string(),
            quantity: 2,
        }];

        cache.set("cart", &entries).unwrap();

        assert!(store.get("bazaar:cart").unwrap().is_some());
        let loaded: Option<Vec<Entry>> = cache.get("cart").unwrap();
        assert_eq!(loaded, Some(entries));
    }

    #[test]
    fn test_get_missing_is_none() {
        let cache = Cache::new(MemoryStore::new(), "bazaar");
        let loaded: Option<Vec<Entry>> = cache.get("cart").unwrap();
        assert!(loaded.is_none());
        assert!(!cache.exists("cart").unwrap());
    }

    #[test]
    fn test_get_malformed_is_error() {
        let store = MemoryStore::with_entries([("bazaar:cart", "{not json")]);
        let cache = Cache::new(store, "bazaar");
        let loaded: Result<Option<Vec<Entry>>, _> = cache.get("cart");
        assert!(matches!(loaded, Err(CacheError::SerializeError(_))));
    }

    #[test]
    fn test_raw_values_are_not_quoted() {
        let store = MemoryStore::new();
        let cache = Cache::new(store.clone(), "bazaar");
        cache.set_raw("locale", "ru").unwrap();
        assert_eq!(store.get("bazaar:locale").unwrap().as_deref(), Some("ru"));
        assert_eq!(cache.get_raw("locale").unwrap().as_deref(), Some("ru"));
    }

    #[test]
    fn test_keys_are_scoped_to_namespace() {
        let store = MemoryStore::with_entries([
            ("bazaar:cart", "[]"),
            ("bazaar:locale", "en"),
            ("other:cart", "[]"),
        ]);
        let cache = Cache::new(store, "bazaar");
        assert_eq!(cache.keys().unwrap(), vec!["cart", "locale"]);
    }

    #[test]
    fn test_cache_key_macro() {
        assert_eq!(cache_key!("bazaar", "cart"), "bazaar:cart");
        assert_eq!(cache_key!("bazaar", "user", 42), "bazaar:user:42");
    }
}
