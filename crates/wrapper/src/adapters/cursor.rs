//! Live, fail-fast iteration over native collections
//!
//! A [`LiveIterator`] is a positional cursor over the native collection
//! itself, not over a copy. It remembers the collection's structural
//! modification count when created and refuses to continue once that count
//! changes. The check is best-effort: the count and the element are read
//! under separate locks.
//!
//! Whether another element exists is decided when the cursor is created and
//! each time it advances. An exhausted cursor stays exhausted even if the
//! collection grows afterwards.

use lumen_core::{LumenError, LumenResult, Model, ModelIterator, Native, NativeMap, NativeSet};

use crate::wrapper::ObjectWrapper;

/// The native collection a cursor walks
#[derive(Debug, Clone)]
pub(crate) enum LiveSource {
    Set(NativeSet),
    MapKeys(NativeMap),
    MapValues(NativeMap),
}

impl LiveSource {
    pub(crate) fn len(&self) -> usize {
        match self {
            LiveSource::Set(set) => set.len(),
            LiveSource::MapKeys(map) | LiveSource::MapValues(map) => map.len(),
        }
    }

    fn mod_count(&self) -> u64 {
        match self {
            LiveSource::Set(set) => set.mod_count(),
            LiveSource::MapKeys(map) | LiveSource::MapValues(map) => map.mod_count(),
        }
    }

    fn element_at(&self, index: usize) -> Option<Native> {
        match self {
            LiveSource::Set(set) => set.element_at(index),
            LiveSource::MapKeys(map) => map.key_at(index).map(Native::from),
            LiveSource::MapValues(map) => map.value_at(index),
        }
    }

    fn shape_name(&self) -> &'static str {
        match self {
            LiveSource::Set(set) => set.shape_name(),
            LiveSource::MapKeys(map) | LiveSource::MapValues(map) => map.shape_name(),
        }
    }
}

/// Cursor over a live native collection, wrapping elements as it goes
#[derive(Debug)]
pub(crate) struct LiveIterator {
    source: LiveSource,
    wrapper: ObjectWrapper,
    expected_mod_count: u64,
    position: usize,
    exhausted: bool,
}

impl LiveIterator {
    pub(crate) fn new(source: LiveSource, wrapper: ObjectWrapper) -> Self {
        let expected_mod_count = source.mod_count();
        let exhausted = source.len() == 0;
        LiveIterator {
            source,
            wrapper,
            expected_mod_count,
            position: 0,
            exhausted,
        }
    }

    fn check_unmodified(&self) -> LumenResult<()> {
        if self.source.mod_count() != self.expected_mod_count {
            return Err(LumenError::ConcurrentModification {
                collection: self.source.shape_name(),
            });
        }
        Ok(())
    }
}

impl ModelIterator for LiveIterator {
    fn has_next(&self) -> LumenResult<bool> {
        Ok(!self.exhausted)
    }

    fn next(&mut self) -> LumenResult<Option<Model>> {
        if self.exhausted {
            return Err(LumenError::IteratorExhausted);
        }
        self.check_unmodified()?;
        let Some(element) = self.source.element_at(self.position) else {
            self.exhausted = true;
            return Err(LumenError::IteratorExhausted);
        };
        self.position += 1;
        self.exhausted = self.position >= self.source.len();
        self.wrapper.wrap(element)
    }
}
