//! Zero-copy adapters over native containers
//!
//! Adapters hold a shared handle to the native container and the
//! [`ObjectWrapper`](crate::ObjectWrapper) that created them. They cache
//! nothing: size and contents are re-read from the container on every call,
//! and nested values are wrapped on demand.

mod array;
mod collection;
mod cursor;
mod list;
mod map;

pub use array::ArrayAdapter;
pub use collection::CollectionAdapter;
pub use list::ListAdapter;
pub use map::{MapAdapter, MapView};
