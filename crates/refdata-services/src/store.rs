//! Generic keyed product store.
//!
//! Every service keeps its products in a [`ProductStore`]: an id-ordered map
//! behind a single read/write lock, with one [`select`](ProductStore::select)
//! primitive that all named queries are built on.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use refdata_traits::{Keyed, Service};

/// In-memory store of products keyed by id.
///
/// Values are cloned in and cloned out; callers never hold references into
/// the store. Iteration and query results are in ascending id order.
pub struct ProductStore<V> {
    entries: RwLock<BTreeMap<String, V>>,
}

impl<V> Default for ProductStore<V> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
        }
    }
}

impl<V: Keyed + Clone> ProductStore<V> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under its own key, replacing any previous entry.
    ///
    /// Returns the replaced entry, if there was one.
    pub fn upsert(&self, value: V) -> Option<V> {
        let key = value.key().to_string();
        self.entries.write().insert(key, value)
    }

    /// Returns a copy of the entry stored under `id`.
    pub fn get(&self, id: &str) -> Option<V> {
        self.entries.read().get(id).cloned()
    }

    /// True if an entry is stored under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.read().contains_key(id)
    }

    /// Returns copies of every entry matching `predicate`, in id order.
    pub fn select<F>(&self, predicate: F) -> Vec<V>
    where
        F: Fn(&V) -> bool,
    {
        self.entries
            .read()
            .values()
            .filter(|v| predicate(*v))
            .cloned()
            .collect()
    }

    /// Counts entries matching `predicate` without copying them.
    pub fn count_where<F>(&self, predicate: F) -> usize
    where
        F: Fn(&V) -> bool,
    {
        self.entries.read().values().filter(|v| predicate(*v)).count()
    }

    /// Returns copies of every entry, in id order.
    pub fn all(&self) -> Vec<V> {
        self.select(|_| true)
    }

    /// Returns every stored id, in ascending order.
    pub fn ids(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<V: Keyed + Clone> Service<String, V> for ProductStore<V> {
    fn get_data(&self, key: &String) -> Option<V> {
        self.get(key)
    }
}

impl<V> std::fmt::Debug for ProductStore<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductStore")
            .field("len", &self.entries.read().len())
            .finish()
    }
}
