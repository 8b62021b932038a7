//! Shared native maps with string keys
//!
//! Iteration order is part of a map's identity: an insertion-ordered map
//! yields keys in the order they were first inserted, a sorted map in
//! ascending key order. Structural changes (new keys, removals) bump a
//! modification counter that live iterators use to detect concurrent
//! modification.

use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::Arc;

use super::Native;
use crate::error::{LumenError, LumenResult};

/// Key ordering of a native map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapOrdering {
    /// Keys iterate in first-insertion order
    Insertion,
    /// Keys iterate in ascending order
    Sorted,
}

#[derive(Debug)]
struct MapStore {
    entries: IndexMap<String, Native>,
    ordering: MapOrdering,
    frozen: bool,
    mod_count: u64,
}

/// Shared handle to a native map
///
/// Cloning the handle shares the map. Mutations through any handle are
/// visible through every other handle and every adapter built on it.
#[derive(Debug, Clone)]
pub struct NativeMap {
    inner: Arc<RwLock<MapStore>>,
}

impl NativeMap {
    fn with_ordering(ordering: MapOrdering, frozen: bool) -> Self {
        NativeMap {
            inner: Arc::new(RwLock::new(MapStore {
                entries: IndexMap::new(),
                ordering,
                frozen,
                mod_count: 0,
            })),
        }
    }

    /// Create an empty insertion-ordered map
    pub fn new() -> Self {
        Self::with_ordering(MapOrdering::Insertion, false)
    }

    /// Create an empty key-sorted map
    pub fn sorted() -> Self {
        Self::with_ordering(MapOrdering::Sorted, false)
    }

    /// Create an insertion-ordered map from entries
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Native>,
    {
        let map = Self::new();
        map.extend_unchecked(entries);
        map
    }

    /// Create an insertion-ordered map that rejects all later mutation
    pub fn frozen<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Native>,
    {
        let map = Self::new();
        map.extend_unchecked(entries);
        map.inner.write().frozen = true;
        map
    }

    fn extend_unchecked<I, K, V>(&self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Native>,
    {
        let mut store = self.inner.write();
        for (k, v) in entries {
            Self::put(&mut store, k.into(), v.into());
        }
    }

    fn put(store: &mut MapStore, key: String, value: Native) -> Option<Native> {
        if let Some(slot) = store.entries.get_mut(&key) {
            return Some(std::mem::replace(slot, value));
        }
        store.mod_count += 1;
        match store.ordering {
            MapOrdering::Insertion => {
                store.entries.insert(key, value);
            }
            MapOrdering::Sorted => {
                let pos = store
                    .entries
                    .keys()
                    .position(|k| k.as_str() > key.as_str())
                    .unwrap_or(store.entries.len());
                store.entries.shift_insert(pos, key, value);
            }
        }
        None
    }

    /// Insert or replace a value, returning the previous one
    ///
    /// Replacing the value of an existing key is not a structural change.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Native>) -> LumenResult<Option<Native>> {
        let mut store = self.inner.write();
        if store.frozen {
            return Err(LumenError::ImmutableContainer("map"));
        }
        Ok(Self::put(&mut store, key.into(), value.into()))
    }

    /// Remove a key, returning its value
    pub fn remove(&self, key: &str) -> LumenResult<Option<Native>> {
        let mut store = self.inner.write();
        if store.frozen {
            return Err(LumenError::ImmutableContainer("map"));
        }
        let removed = store.entries.shift_remove(key);
        if removed.is_some() {
            store.mod_count += 1;
        }
        Ok(removed)
    }

    /// Value stored under `key`
    ///
    /// `None` means the key is absent; `Some(Native::Null)` means the key is
    /// present and mapped to null.
    pub fn get(&self, key: &str) -> Option<Native> {
        self.inner.read().entries.get(key).cloned()
    }

    /// True if `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.read().entries.contains_key(key)
    }

    /// Key lookup with an arbitrary native probe
    ///
    /// Keys are strings. A sorted map cannot order a non-string probe
    /// against its keys and reports the probe's type; an insertion-ordered
    /// map simply does not contain it.
    pub fn contains_key_native(&self, probe: &Native) -> LumenResult<bool> {
        match probe {
            Native::String(key) => Ok(self.contains_key(key)),
            other => match self.ordering() {
                MapOrdering::Insertion => Ok(false),
                MapOrdering::Sorted => Err(LumenError::IncomparableProbe {
                    offending: other.type_name(),
                    expected: "string",
                    collection: self.shape_name(),
                }),
            },
        }
    }

    /// True if some key maps to a value equal to `probe`
    pub fn contains_value(&self, probe: &Native) -> bool {
        self.values().iter().any(|v| v == probe)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    /// True if the map has no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Key ordering
    pub fn ordering(&self) -> MapOrdering {
        self.inner.read().ordering
    }

    /// True if the map rejects mutation
    pub fn is_frozen(&self) -> bool {
        self.inner.read().frozen
    }

    /// Count of structural modifications so far
    pub fn mod_count(&self) -> u64 {
        self.inner.read().mod_count
    }

    /// Key at iteration position `index`
    pub fn key_at(&self, index: usize) -> Option<String> {
        self.inner.read().entries.get_index(index).map(|(k, _)| k.clone())
    }

    /// Value at iteration position `index`
    pub fn value_at(&self, index: usize) -> Option<Native> {
        self.inner.read().entries.get_index(index).map(|(_, v)| v.clone())
    }

    /// Snapshot of all entries in iteration order
    pub fn entries(&self) -> Vec<(String, Native)> {
        self.inner
            .read()
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Snapshot of all keys in iteration order
    pub fn keys(&self) -> Vec<String> {
        self.inner.read().entries.keys().cloned().collect()
    }

    /// Snapshot of all values in iteration order
    pub fn values(&self) -> Vec<Native> {
        self.inner.read().entries.values().cloned().collect()
    }

    /// Human-readable shape, used in error messages
    pub fn shape_name(&self) -> &'static str {
        let store = self.inner.read();
        match (store.ordering, store.frozen) {
            (_, true) => "frozen map",
            (MapOrdering::Insertion, false) => "map",
            (MapOrdering::Sorted, false) => "sorted map",
        }
    }

    /// True if both handles refer to the same map
    pub fn ptr_eq(&self, other: &NativeMap) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for NativeMap {
    fn default() -> Self {
        Self::new()
    }
}
