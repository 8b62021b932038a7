//! Map adapter and its key/value views

use std::any::Any;
use std::sync::Arc;

use lumen_core::{
    AdapterModel, CollectionModel, HashModel, LumenResult, Model, ModelIterator, Native,
    NativeMap, TemplateModel, TypeHint, WrapperModel,
};

use super::cursor::{LiveIterator, LiveSource};
use crate::unwrap::unwrap_optional;
use crate::wrapper::ObjectWrapper;

/// Zero-copy hash view of a native map
///
/// Every call re-queries the map, so mutations made through any handle to
/// it are visible immediately. Values are wrapped on demand.
#[derive(Debug, Clone)]
pub struct MapAdapter {
    map: NativeMap,
    wrapper: ObjectWrapper,
}

impl MapAdapter {
    /// Adapt `map`; nested values are wrapped with `wrapper`
    pub fn new(map: NativeMap, wrapper: ObjectWrapper) -> Self {
        MapAdapter { map, wrapper }
    }

    /// The adapted map
    pub fn native(&self) -> &NativeMap {
        &self.map
    }
}

impl TemplateModel for MapAdapter {
    fn kind_name(&self) -> &'static str {
        "map adapter"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_hash(&self) -> Option<&dyn HashModel> {
        Some(self)
    }

    fn as_adapter(&self) -> Option<&dyn AdapterModel> {
        Some(self)
    }

    fn as_wrapper(&self) -> Option<&dyn WrapperModel> {
        Some(self)
    }
}

impl HashModel for MapAdapter {
    fn size(&self) -> LumenResult<usize> {
        Ok(self.map.len())
    }

    fn get(&self, key: &str) -> LumenResult<Option<Model>> {
        match self.map.get(key) {
            Some(value) => self.wrapper.wrap(value),
            None => Ok(None),
        }
    }

    fn keys(&self) -> LumenResult<Model> {
        Ok(Arc::new(MapView::new(
            self.map.clone(),
            MapPart::Keys,
            self.wrapper.clone(),
        )))
    }

    fn values(&self) -> LumenResult<Model> {
        Ok(Arc::new(MapView::new(
            self.map.clone(),
            MapPart::Values,
            self.wrapper.clone(),
        )))
    }
}

impl AdapterModel for MapAdapter {
    fn adapted_object(&self, _hint: TypeHint) -> LumenResult<Native> {
        Ok(Native::Map(self.map.clone()))
    }
}

impl WrapperModel for MapAdapter {
    fn wrapped_object(&self) -> Native {
        Native::Map(self.map.clone())
    }
}

/// Live collection over a map's keys or values
///
/// Each call to [`iterator`](CollectionModel::iterator) starts a fresh
/// cursor at the map's current first entry.
#[derive(Debug, Clone)]
pub struct MapView {
    map: NativeMap,
    part: MapPart,
    wrapper: ObjectWrapper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MapPart {
    Keys,
    Values,
}

impl MapView {
    fn new(map: NativeMap, part: MapPart, wrapper: ObjectWrapper) -> Self {
        MapView { map, part, wrapper }
    }

    /// True for a key view, false for a value view
    pub fn is_key_view(&self) -> bool {
        self.part == MapPart::Keys
    }

    fn source(&self) -> LiveSource {
        match self.part {
            MapPart::Keys => LiveSource::MapKeys(self.map.clone()),
            MapPart::Values => LiveSource::MapValues(self.map.clone()),
        }
    }
}

impl TemplateModel for MapView {
    fn kind_name(&self) -> &'static str {
        if self.is_key_view() {
            "map key view"
        } else {
            "map value view"
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_collection(&self) -> Option<&dyn CollectionModel> {
        Some(self)
    }
}

impl CollectionModel for MapView {
    fn size(&self) -> LumenResult<usize> {
        Ok(self.map.len())
    }

    fn iterator(&self) -> LumenResult<Box<dyn ModelIterator>> {
        Ok(Box::new(LiveIterator::new(self.source(), self.wrapper.clone())))
    }

    fn contains(&self, probe: Option<&Model>) -> LumenResult<bool> {
        let probe = unwrap_optional(probe, TypeHint::Any)?;
        match self.part {
            MapPart::Keys => self.map.contains_key_native(&probe),
            MapPart::Values => Ok(self.map.contains_value(&probe)),
        }
    }
}
