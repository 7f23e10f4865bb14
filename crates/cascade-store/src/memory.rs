use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::StoreResult;
use crate::traits::{KeyIter, Store};

/// In-memory, HashMap-based store.
///
/// The mutable leaf backend used for tests, defaults, and embedding. All
/// entries are held behind a `RwLock` for safe concurrent access; values
/// are cloned on read.
pub struct MapStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MapStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }
}

impl Default for MapStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: RwLock::new(
                iter.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl Store for MapStore {
    fn exists(&self, key: &str) -> bool {
        self.entries.read().expect("lock poisoned").contains_key(key)
    }

    fn read(&self, key: &str) -> Option<String> {
        self.entries.read().expect("lock poisoned").get(key).cloned()
    }

    fn write(&self, key: &str, value: Option<&str>) -> StoreResult<()> {
        let mut entries = self.entries.write().expect("lock poisoned");
        match value {
            Some(value) => {
                entries.insert(key.to_string(), value.to_string());
            }
            None => {
                entries.remove(key);
            }
        }
        Ok(())
    }

    fn keys(&self) -> KeyIter<'_> {
        let keys: Vec<String> = self
            .entries
            .read()
            .expect("lock poisoned")
            .keys()
            .cloned()
            .collect();
        Box::new(keys.into_iter())
    }

    fn clear(&self) -> StoreResult<()> {
        self.entries.write().expect("lock poisoned").clear();
        Ok(())
    }

    fn is_immutable(&self) -> bool {
        false
    }

    fn describe(&self, out: &mut String) {
        out.push_str("map");
    }
}

impl std::fmt::Debug for MapStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapStore")
            .field("entry_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::StoreExt;

    // -----------------------------------------------------------------------
    // Core CRUD
    // -----------------------------------------------------------------------

    #[test]
    fn set_and_get() {
        let store = MapStore::new();
        store.set_value("k", "v").unwrap();
        assert_eq!(store.get_value("k").unwrap().as_deref(), Some("v"));
        assert!(store.contains("k").unwrap());
    }

    #[test]
    fn get_missing_returns_none() {
        let store = MapStore::new();
        assert_eq!(store.get_value("missing").unwrap(), None);
        assert!(!store.contains("missing").unwrap());
    }

    #[test]
    fn overwrite_replaces_value() {
        let store = MapStore::new();
        store.set_value("k", "first").unwrap();
        store.set_value("k", "second").unwrap();
        assert_eq!(store.get_value("k").unwrap().as_deref(), Some("second"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_deletes_the_entry() {
        let store = MapStore::from_iter([("a", "1"), ("b", "2")]);
        store.remove("a").unwrap();
        assert_eq!(store.get_value("a").unwrap(), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn clear_removes_all() {
        let store = MapStore::from_iter([("a", "1"), ("b", "2")]);
        store.clear().unwrap();
        assert!(store.is_empty());
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    #[test]
    fn from_iter_populates_entries() {
        let store = MapStore::from_iter([("x", "1"), ("y", "2")]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get_value("y").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn default_creates_empty_store() {
        let store = MapStore::default();
        assert!(store.is_empty());
    }

    // -----------------------------------------------------------------------
    // Key enumeration
    // -----------------------------------------------------------------------

    #[test]
    fn keys_yield_every_entry() {
        let store = MapStore::from_iter([("a", "1"), ("b", "2"), ("c", "3")]);
        let mut keys: Vec<String> = store.keys().collect();
        keys.sort();
        assert_eq!(keys, ["a", "b", "c"]);
    }

    // -----------------------------------------------------------------------
    // Mutability contract
    // -----------------------------------------------------------------------

    #[test]
    fn map_store_is_mutable() {
        assert!(!MapStore::new().is_immutable());
    }

    // -----------------------------------------------------------------------
    // Concurrent read safety
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_reads_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(MapStore::from_iter([("shared", "data")]));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    assert_eq!(
                        store.get_value("shared").unwrap().as_deref(),
                        Some("data")
                    );
                })
            })
            .collect();
        for h in handles {
            h.join().expect("thread should not panic");
        }
    }

    // -----------------------------------------------------------------------
    // Debug
    // -----------------------------------------------------------------------

    #[test]
    fn debug_format() {
        let store = MapStore::from_iter([("k", "v")]);
        let debug = format!("{store:?}");
        assert!(debug.contains("MapStore"));
        assert!(debug.contains("entry_count"));
    }
}
