//! Shared native sets
//!
//! Membership is by value equality. An insertion-ordered set iterates in
//! first-insertion order; a sorted set keeps its elements in natural order
//! and therefore only admits mutually comparable, non-null elements.

use parking_lot::RwLock;
use std::cmp::Ordering;
use std::sync::Arc;

use super::Native;
use crate::error::{LumenError, LumenResult};

/// Element ordering of a native set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetOrdering {
    /// Elements iterate in first-insertion order
    Insertion,
    /// Elements iterate in natural ascending order
    Sorted,
}

#[derive(Debug)]
struct SetStore {
    items: Vec<Native>,
    ordering: SetOrdering,
    mod_count: u64,
}

/// Shared handle to a native set
#[derive(Debug, Clone)]
pub struct NativeSet {
    inner: Arc<RwLock<SetStore>>,
}

impl NativeSet {
    fn with_ordering(ordering: SetOrdering) -> Self {
        NativeSet {
            inner: Arc::new(RwLock::new(SetStore {
                items: Vec::new(),
                ordering,
                mod_count: 0,
            })),
        }
    }

    /// Create an empty insertion-ordered set
    pub fn new() -> Self {
        Self::with_ordering(SetOrdering::Insertion)
    }

    /// Create an empty sorted set
    pub fn sorted() -> Self {
        Self::with_ordering(SetOrdering::Sorted)
    }

    /// Create an insertion-ordered set from items, dropping duplicates
    pub fn from_items<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Native>,
    {
        let set = Self::new();
        {
            let mut store = set.inner.write();
            for item in items {
                let item = item.into();
                if !store.items.contains(&item) {
                    store.items.push(item);
                    store.mod_count += 1;
                }
            }
        }
        set
    }

    /// Create a sorted set from items
    ///
    /// Fails if two items cannot be ordered against each other.
    pub fn sorted_from<I, T>(items: I) -> LumenResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Native>,
    {
        let set = Self::sorted();
        for item in items {
            set.insert(item)?;
        }
        Ok(set)
    }

    fn search(items: &[Native], probe: &Native) -> LumenResult<Result<usize, usize>> {
        let mut failure = None;
        let found = items.binary_search_by(|item| {
            item.natural_cmp(probe).unwrap_or_else(|| {
                failure.get_or_insert(LumenError::IncomparableProbe {
                    offending: probe.type_name(),
                    expected: item.type_name(),
                    collection: "sorted set",
                });
                Ordering::Less
            })
        });
        match failure {
            Some(err) => Err(err),
            None => Ok(found),
        }
    }

    /// Add an element; returns false if an equal element was present
    pub fn insert(&self, item: impl Into<Native>) -> LumenResult<bool> {
        let item = item.into();
        let mut store = self.inner.write();
        match store.ordering {
            SetOrdering::Insertion => {
                if store.items.contains(&item) {
                    return Ok(false);
                }
                store.items.push(item);
            }
            SetOrdering::Sorted => {
                if item.is_null() {
                    return Err(LumenError::IncomparableProbe {
                        offending: "null",
                        expected: store.items.first().map_or("comparable", Native::type_name),
                        collection: "sorted set",
                    });
                }
                match Self::search(&store.items, &item)? {
                    Ok(_) => return Ok(false),
                    Err(pos) => store.items.insert(pos, item),
                }
            }
        }
        store.mod_count += 1;
        Ok(true)
    }

    /// Remove an element equal to `item`; returns false if none was present
    pub fn remove(&self, item: &Native) -> LumenResult<bool> {
        let mut store = self.inner.write();
        let pos = match store.ordering {
            SetOrdering::Insertion => store.items.iter().position(|v| v == item),
            SetOrdering::Sorted => Self::search(&store.items, item)?.ok(),
        };
        match pos {
            Some(pos) => {
                store.items.remove(pos);
                store.mod_count += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Membership test
    ///
    /// A sorted set fails when the probe cannot be ordered against its
    /// elements; an insertion-ordered set answers by equality alone.
    pub fn contains(&self, probe: &Native) -> LumenResult<bool> {
        let store = self.inner.read();
        match store.ordering {
            SetOrdering::Insertion => Ok(store.items.contains(probe)),
            SetOrdering::Sorted => {
                if store.items.is_empty() {
                    return Ok(false);
                }
                if probe.is_null() {
                    return Err(LumenError::IncomparableProbe {
                        offending: "null",
                        expected: store.items[0].type_name(),
                        collection: "sorted set",
                    });
                }
                Ok(Self::search(&store.items, probe)?.is_ok())
            }
        }
    }

    /// Element at iteration position `index`
    pub fn element_at(&self, index: usize) -> Option<Native> {
        self.inner.read().items.get(index).cloned()
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.inner.read().items.len()
    }

    /// True if the set has no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element ordering
    pub fn ordering(&self) -> SetOrdering {
        self.inner.read().ordering
    }

    /// Count of structural modifications so far
    pub fn mod_count(&self) -> u64 {
        self.inner.read().mod_count
    }

    /// Snapshot of all elements in iteration order
    pub fn to_vec(&self) -> Vec<Native> {
        self.inner.read().items.clone()
    }

    /// Human-readable shape, used in error messages
    pub fn shape_name(&self) -> &'static str {
        match self.ordering() {
            SetOrdering::Insertion => "set",
            SetOrdering::Sorted => "sorted set",
        }
    }

    /// True if both handles refer to the same set
    pub fn ptr_eq(&self, other: &NativeSet) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for NativeSet {
    fn default() -> Self {
        Self::new()
    }
}
