//! Deep-copy wrapping

use crate::common::*;
use lumen::{SimpleHash, SimpleSequence};

#[test]
fn legacy_non_list_collection_wrapping() {
    let ow = ow22();
    let set = NativeSet::sorted_from(["a", "b", "c"]).unwrap();
    let model = wrap(&ow, set);
    assert!(model.is::<SimpleSequence>());

    let seq = model.as_sequence().unwrap();
    assert_eq!(seq.size().unwrap(), 3);
    for (i, expected) in ["a", "b", "c"].into_iter().enumerate() {
        let element = seq.get(i as i64).unwrap();
        assert_eq!(ow.unwrap_optional(element.as_ref()).unwrap(), Native::from(expected));
    }
}

#[test]
fn legacy_hash_is_a_snapshot() {
    let ow = wrapper(Version::V2_3_21);
    let map = NativeMap::from_entries([("a", 1), ("b", 2)]);
    let model = wrap(&ow, map.clone());
    assert!(model.is::<SimpleHash>());

    map.insert("c", 3).unwrap();
    map.insert("a", 100).unwrap();
    let hash = model.as_hash().unwrap();
    assert_eq!(hash.size().unwrap(), 2);
    assert!(hash.get("c").unwrap().is_none());
    assert_eq!(
        ow.unwrap_optional(hash.get("a").unwrap().as_ref()).unwrap(),
        Native::Int(1)
    );
}

#[test]
fn legacy_nested_containers_are_copied() {
    let ow = wrapper(Version::V2_3_0);
    let inner = NativeList::from_items(["x"]);
    let outer = NativeList::from_items([Native::from(inner.clone())]);
    let model = wrap(&ow, outer);
    let nested = model.as_sequence().unwrap().get(0).unwrap().unwrap();
    assert!(nested.is::<SimpleSequence>());

    inner.push("y").unwrap();
    assert_eq!(nested.as_sequence().unwrap().size().unwrap(), 1);
}

#[test]
fn legacy_sequence_is_also_a_collection() {
    let ow = wrapper(Version::V2_3_0);
    let model = wrap(&ow, NativeList::from_items(["a", "b"]));
    assert_eq!(
        collection_items(&ow, &model),
        vec![Native::from("a"), Native::from("b")]
    );
    let coll = model.as_collection().unwrap();
    assert!(coll.contains(ow.wrap("b").unwrap().as_ref()).unwrap());
    assert!(!coll.contains(ow.wrap("c").unwrap().as_ref()).unwrap());
}

#[test]
fn legacy_hash_keys_and_values() {
    let ow = wrapper(Version::V2_3_0);
    let model = wrap(&ow, NativeMap::from_entries([("k1", "v1"), ("k2", "v2")]));
    let hash = model.as_hash().unwrap();
    assert_eq!(
        collection_items(&ow, &hash.keys().unwrap()),
        vec![Native::from("k1"), Native::from("k2")]
    );
    assert_eq!(
        collection_items(&ow, &hash.values().unwrap()),
        vec![Native::from("v1"), Native::from("v2")]
    );
}
