//! Shared native lists

use parking_lot::RwLock;
use std::sync::Arc;

use super::Native;
use crate::error::{LumenError, LumenResult};

#[derive(Debug)]
struct ListStore {
    items: Vec<Native>,
    frozen: bool,
    mod_count: u64,
}

/// Shared handle to a growable native list
#[derive(Debug, Clone)]
pub struct NativeList {
    inner: Arc<RwLock<ListStore>>,
}

impl NativeList {
    fn from_parts(items: Vec<Native>, frozen: bool) -> Self {
        NativeList {
            inner: Arc::new(RwLock::new(ListStore {
                items,
                frozen,
                mod_count: 0,
            })),
        }
    }

    /// Create an empty list
    pub fn new() -> Self {
        Self::from_parts(Vec::new(), false)
    }

    /// Create a list from anything convertible to native values
    pub fn from_items<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Native>,
    {
        Self::from_parts(items.into_iter().map(Into::into).collect(), false)
    }

    /// Create a list that rejects all later mutation
    pub fn frozen<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Native>,
    {
        Self::from_parts(items.into_iter().map(Into::into).collect(), true)
    }

    /// Create a frozen one-element list
    pub fn singleton(item: impl Into<Native>) -> Self {
        Self::from_parts(vec![item.into()], true)
    }

    fn write_checked(&self) -> LumenResult<parking_lot::RwLockWriteGuard<'_, ListStore>> {
        let store = self.inner.write();
        if store.frozen {
            return Err(LumenError::ImmutableContainer("list"));
        }
        Ok(store)
    }

    /// Append an element
    pub fn push(&self, item: impl Into<Native>) -> LumenResult<()> {
        let mut store = self.write_checked()?;
        store.items.push(item.into());
        store.mod_count += 1;
        Ok(())
    }

    /// Insert an element at `index`, shifting later elements
    pub fn insert(&self, index: usize, item: impl Into<Native>) -> LumenResult<()> {
        let mut store = self.write_checked()?;
        let len = store.items.len();
        if index > len {
            return Err(LumenError::IndexOutOfBounds { index, len });
        }
        store.items.insert(index, item.into());
        store.mod_count += 1;
        Ok(())
    }

    /// Replace the element at `index`, returning the old one
    pub fn set(&self, index: usize, item: impl Into<Native>) -> LumenResult<Native> {
        let mut store = self.write_checked()?;
        let len = store.items.len();
        match store.items.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, item.into())),
            None => Err(LumenError::IndexOutOfBounds { index, len }),
        }
    }

    /// Remove the element at `index`
    pub fn remove(&self, index: usize) -> LumenResult<Native> {
        let mut store = self.write_checked()?;
        let len = store.items.len();
        if index >= len {
            return Err(LumenError::IndexOutOfBounds { index, len });
        }
        store.mod_count += 1;
        Ok(store.items.remove(index))
    }

    /// Element at `index`
    pub fn get(&self, index: usize) -> Option<Native> {
        self.inner.read().items.get(index).cloned()
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.inner.read().items.len()
    }

    /// True if the list has no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if the list rejects mutation
    pub fn is_frozen(&self) -> bool {
        self.inner.read().frozen
    }

    /// Count of structural modifications so far
    pub fn mod_count(&self) -> u64 {
        self.inner.read().mod_count
    }

    /// Snapshot of all elements
    pub fn to_vec(&self) -> Vec<Native> {
        self.inner.read().items.clone()
    }

    /// True if both handles refer to the same list
    pub fn ptr_eq(&self, other: &NativeList) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for NativeList {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Native>> for NativeList {
    fn from(items: Vec<Native>) -> Self {
        Self::from_parts(items, false)
    }
}
