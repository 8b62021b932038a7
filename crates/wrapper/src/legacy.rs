//! Deep-copy wrappers used before container adapters
//!
//! A legacy wrapper wraps every element through the dispatcher when it is
//! built and keeps only the resulting models. Later changes to the native
//! container are not observed, and unwrapping yields an equal, freshly
//! built native container rather than the original one.

use std::any::Any;
use std::sync::Arc;

use indexmap::IndexMap;
use lumen_core::{
    CollectionModel, HashModel, LumenError, LumenResult, Model, ModelIterator, Native, NativeMap,
    SequenceModel, SimpleScalar, TemplateModel, TypeHint,
};

use crate::unwrap::unwrap_optional;
use crate::wrapper::ObjectWrapper;

/// Frozen sequence of models
///
/// Offers both indexed access and iteration. Clones share the element
/// snapshot.
#[derive(Debug, Clone, Default)]
pub struct SimpleSequence {
    items: Arc<Vec<Option<Model>>>,
}

impl SimpleSequence {
    /// Sequence over already-wrapped models
    pub fn from_models(items: Vec<Option<Model>>) -> Self {
        SimpleSequence {
            items: Arc::new(items),
        }
    }

    /// Wrap every native value through `wrapper`
    pub fn from_natives(items: Vec<Native>, wrapper: &ObjectWrapper) -> LumenResult<Self> {
        let items = items
            .into_iter()
            .map(|item| wrapper.wrap(item))
            .collect::<LumenResult<Vec<_>>>()?;
        Ok(Self::from_models(items))
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if there are no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl TemplateModel for SimpleSequence {
    fn kind_name(&self) -> &'static str {
        "simple sequence"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_sequence(&self) -> Option<&dyn SequenceModel> {
        Some(self)
    }

    fn as_collection(&self) -> Option<&dyn CollectionModel> {
        Some(self)
    }
}

impl SequenceModel for SimpleSequence {
    fn size(&self) -> LumenResult<usize> {
        Ok(self.items.len())
    }

    fn get(&self, index: i64) -> LumenResult<Option<Model>> {
        let Ok(index) = usize::try_from(index) else {
            return Ok(None);
        };
        Ok(self.items.get(index).cloned().flatten())
    }
}

impl CollectionModel for SimpleSequence {
    fn size(&self) -> LumenResult<usize> {
        Ok(self.items.len())
    }

    fn iterator(&self) -> LumenResult<Box<dyn ModelIterator>> {
        Ok(Box::new(SnapshotIterator {
            items: Arc::clone(&self.items),
            position: 0,
        }))
    }

    fn contains(&self, probe: Option<&Model>) -> LumenResult<bool> {
        let probe = unwrap_optional(probe, TypeHint::Any)?;
        for item in self.items.iter() {
            if unwrap_optional(item.as_ref(), TypeHint::Any)? == probe {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Iterator over a frozen snapshot
#[derive(Debug)]
struct SnapshotIterator {
    items: Arc<Vec<Option<Model>>>,
    position: usize,
}

impl ModelIterator for SnapshotIterator {
    fn has_next(&self) -> LumenResult<bool> {
        Ok(self.position < self.items.len())
    }

    fn next(&mut self) -> LumenResult<Option<Model>> {
        let item = self
            .items
            .get(self.position)
            .cloned()
            .ok_or(LumenError::IteratorExhausted)?;
        self.position += 1;
        Ok(item)
    }
}

/// Frozen, insertion-ordered hash of models
#[derive(Debug, Clone, Default)]
pub struct SimpleHash {
    entries: IndexMap<String, Option<Model>>,
}

impl SimpleHash {
    /// Snapshot `map`, wrapping every value through `wrapper`
    pub fn from_map(map: &NativeMap, wrapper: &ObjectWrapper) -> LumenResult<Self> {
        // Snapshot first so no map lock is held while nested values are wrapped
        let entries = map
            .entries()
            .into_iter()
            .map(|(key, value)| -> LumenResult<_> { Ok((key, wrapper.wrap(value)?)) })
            .collect::<LumenResult<IndexMap<_, _>>>()?;
        Ok(SimpleHash { entries })
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TemplateModel for SimpleHash {
    fn kind_name(&self) -> &'static str {
        "simple hash"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_hash(&self) -> Option<&dyn HashModel> {
        Some(self)
    }
}

impl HashModel for SimpleHash {
    fn size(&self) -> LumenResult<usize> {
        Ok(self.entries.len())
    }

    fn get(&self, key: &str) -> LumenResult<Option<Model>> {
        Ok(self.entries.get(key).cloned().flatten())
    }

    fn keys(&self) -> LumenResult<Model> {
        let keys = self
            .entries
            .keys()
            .map(|key| Some(Arc::new(SimpleScalar::new(key.as_str())) as Model))
            .collect();
        Ok(Arc::new(SimpleSequence::from_models(keys)))
    }

    fn values(&self) -> LumenResult<Model> {
        Ok(Arc::new(SimpleSequence::from_models(
            self.entries.values().cloned().collect(),
        )))
    }
}
