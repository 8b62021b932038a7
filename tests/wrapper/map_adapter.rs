//! Map adapter behavior

use crate::common::*;
use lumen::{ListAdapter, MapAdapter, Number};

fn test_map() -> NativeMap {
    let map = NativeMap::new();
    map.insert("a", 1).unwrap();
    map.insert("b", Native::Null).unwrap();
    map.insert("c", "C").unwrap();
    map.insert("d", NativeList::singleton("x")).unwrap();
    map
}

fn expected_values() -> Vec<Native> {
    vec![
        Native::Int(1),
        Native::Null,
        Native::from("C"),
        Native::from(NativeList::singleton("x")),
    ]
}

fn keys(names: &[&str]) -> Vec<Native> {
    names.iter().map(|k| Native::from(*k)).collect()
}

#[test]
fn map_adapter_without_null_model() {
    let ow = ow22();
    let model = wrap(&ow, test_map());
    let hash = model.as_hash().unwrap();

    assert_eq!(hash.size().unwrap(), 4);
    assert!(!hash.is_empty().unwrap());
    assert!(hash.get("e").unwrap().is_none());
    assert_eq!(
        hash.get("a").unwrap().unwrap().as_number().unwrap().get_number().unwrap(),
        Number::Int(1)
    );
    assert!(hash.get("b").unwrap().is_none());
    assert_eq!(scalar(hash.get("c").unwrap()), "C");
    assert!(hash.get("d").unwrap().unwrap().is::<ListAdapter>());

    assert_eq!(collection_items(&ow, &hash.keys().unwrap()), keys(&["a", "b", "c", "d"]));
    assert_eq!(collection_items(&ow, &hash.values().unwrap()), expected_values());

    let empty = wrap(&ow, NativeMap::new());
    assert!(empty.as_hash().unwrap().is_empty().unwrap());
}

#[test]
fn map_adapter_with_null_model() {
    let sentinel = NullModel::shared();
    let ow = ow22_null_model(&sentinel);
    let model = wrap(&ow, test_map());
    let hash = model.as_hash().unwrap();

    let b = hash.get("b").unwrap().unwrap();
    assert!(lumen::same_model(&b, &sentinel));
    assert!(hash.get("e").unwrap().is_none());

    assert_eq!(collection_items(&ow, &hash.keys().unwrap()), keys(&["a", "b", "c", "d"]));
    assert_eq!(collection_items(&ow, &hash.values().unwrap()), expected_values());
}

#[test]
fn ordered_map_keys_twice() {
    let ow = ow22();
    let map = NativeMap::from_entries([("1", 11), ("2", 22), ("3", 33)]);
    let model = wrap(&ow, map);
    let keys_model = model.as_hash().unwrap().keys().unwrap();
    let keys = keys_model.as_collection().unwrap();

    for _ in 0..2 {
        let mut it = keys.iterator().unwrap();
        let mut seen = Vec::new();
        while it.has_next().unwrap() {
            seen.push(scalar(it.next().unwrap()));
        }
        assert_eq!(seen, ["1", "2", "3"]);
    }
}

#[test]
fn adapter_sees_mutation_through_other_handles() {
    let ow = ow22();
    let map = NativeMap::new();
    let model = wrap(&ow, map.clone());
    let hash = model.as_hash().unwrap();
    let values = hash.values().unwrap();

    map.insert("late", 5i64).unwrap();
    assert_eq!(hash.size().unwrap(), 1);
    assert_eq!(collection_items(&ow, &values), vec![Native::Long(5)]);

    map.remove("late").unwrap();
    assert!(hash.get("late").unwrap().is_none());
    assert!(values.as_collection().unwrap().is_empty().unwrap());
}

#[test]
fn key_view_iterator_fails_after_structural_change() {
    let ow = ow22();
    let map = NativeMap::from_entries([("a", 1), ("b", 2)]);
    let model = wrap(&ow, map.clone());
    let keys = model.as_hash().unwrap().keys().unwrap();
    let mut it = keys.as_collection().unwrap().iterator().unwrap();
    it.next().unwrap();
    map.insert("c", 3).unwrap();
    assert!(matches!(
        it.next(),
        Err(LumenError::ConcurrentModification { .. })
    ));
}

#[test]
fn frozen_map_adapts_like_any_map() {
    let ow = ow22();
    let frozen = NativeMap::frozen([("a", 1), ("b", 2), ("c", 3)]);
    let model = wrap(&ow, frozen.clone());
    assert!(model.is::<MapAdapter>());
    assert_eq!(model.as_hash().unwrap().size().unwrap(), 3);
    assert!(matches!(
        frozen.insert("d", 4),
        Err(LumenError::ImmutableContainer(_))
    ));
}
