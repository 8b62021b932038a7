//! Non-list collection adapter behavior

use crate::common::*;
use lumen::{CollectionAdapter, ListAdapter, SimpleSequence};

#[test]
fn sorted_set_basics() {
    let ow = ow22_collections();
    let set = NativeSet::sorted_from(["a", "b", "c"]).unwrap();
    let model = wrap(&ow, set.clone());
    assert!(model.is::<CollectionAdapter>());

    let coll = model.as_collection().unwrap();
    assert_eq!(coll.size().unwrap(), 3);
    assert!(!coll.is_empty().unwrap());
    assert_eq!(
        collection_items(&ow, &model),
        vec![Native::from("a"), Native::from("b"), Native::from("c")]
    );

    for present in ["a", "b", "c", "c"] {
        assert!(coll.contains(ow.wrap(present).unwrap().as_ref()).unwrap());
    }
    assert!(!coll.contains(ow.wrap("d").unwrap().as_ref()).unwrap());

    let err = coll.contains(ow.wrap(1i32).unwrap().as_ref()).unwrap_err();
    assert!(err.is_usage_error());
    assert!(err.to_string().contains("i32"), "{err}");

    let back = ow.unwrap(&model).unwrap();
    assert!(back.same_instance(&Native::from(set)));
    assert_eq!(back.to_string(), "[a, b, c]");
}

#[test]
fn set_with_list_and_null() {
    let ow = ow22_collections();
    let list = NativeList::singleton("b");
    let set = NativeSet::from_items([Native::from(list.clone()), Native::Null]);
    let model = wrap(&ow, set.clone());
    let coll = model.as_collection().unwrap();
    assert_eq!(coll.size().unwrap(), 2);
    assert!(!coll.is_empty().unwrap());

    let mut it = coll.iterator().unwrap();
    let tm1 = it.next().unwrap();
    let obj1 = ow.unwrap_optional(tm1.as_ref()).unwrap();
    let tm2 = it.next().unwrap();
    let obj2 = ow.unwrap_optional(tm2.as_ref()).unwrap();

    assert!(obj1.is_null() || obj2.is_null());
    let list_native = Native::from(list);
    assert!(obj1 == list_native || obj2 == list_native);
    let is_list_adapter = |m: &Option<Model>| m.as_ref().map_or(false, |m| m.is::<ListAdapter>());
    assert!(is_list_adapter(&tm1) || is_list_adapter(&tm2));

    let similar = NativeList::new();
    similar.push("b").unwrap();
    assert!(coll.contains(ow.wrap(similar).unwrap().as_ref()).unwrap());
    assert!(coll.contains(ow.wrap(Native::Null).unwrap().as_ref()).unwrap());
    assert!(!coll.contains(ow.wrap("a").unwrap().as_ref()).unwrap());
    assert!(!coll.contains(ow.wrap(1i32).unwrap().as_ref()).unwrap());

    let back = ow.unwrap(&model).unwrap();
    assert!(back.same_instance(&Native::from(set)));
    assert_eq!(back.to_string(), format!("[{}, {}]", obj1, obj2));
}

#[test]
fn iterator_past_the_end() {
    let ow = ow22_collections();
    let model = wrap(&ow, NativeSet::from_items([123i32]));
    let mut it = model.as_collection().unwrap().iterator().unwrap();

    for _ in 0..3 {
        assert!(it.has_next().unwrap());
    }
    assert_eq!(ow.unwrap_optional(it.next().unwrap().as_ref()).unwrap(), Native::Int(123));

    for _ in 0..3 {
        assert!(!it.has_next().unwrap());
        let err = it.next().unwrap_err();
        assert!(err.to_string().contains("no more"), "{err}");
    }
}

#[test]
fn exhausted_iterator_stays_exhausted_after_growth() {
    let ow = ow22_collections();
    let set = NativeSet::from_items(["x"]);
    let model = wrap(&ow, set.clone());
    let mut it = model.as_collection().unwrap().iterator().unwrap();
    assert_eq!(scalar(it.next().unwrap()), "x");
    assert!(!it.has_next().unwrap());
    assert_eq!(it.next().unwrap_err(), LumenError::IteratorExhausted);

    set.insert("y").unwrap();
    for _ in 0..2 {
        assert!(!it.has_next().unwrap());
        assert_eq!(it.next().unwrap_err(), LumenError::IteratorExhausted);
    }

    // A fresh iterator sees the grown set
    assert_eq!(
        collection_items(&ow, &model),
        vec![Native::from("x"), Native::from("y")]
    );
}

#[test]
fn null_element_without_and_with_null_model() {
    let set = NativeSet::from_items([Native::Null]);

    let ow = ow22_collections();
    let model = wrap(&ow, set.clone());
    let coll = model.as_collection().unwrap();
    assert_eq!(coll.size().unwrap(), 1);
    assert!(!coll.is_empty().unwrap());
    assert!(coll.iterator().unwrap().next().unwrap().is_none());

    let sentinel = NullModel::shared();
    let mut config = WrapperConfig::new(Version::V2_3_22).unwrap();
    config.set_use_adapters_for_non_list_collections(true).unwrap();
    config.set_null_model(Some(sentinel.clone())).unwrap();
    let ow = ObjectWrapper::new(config);
    let model = wrap(&ow, set);
    let coll = model.as_collection().unwrap();
    assert_eq!(coll.size().unwrap(), 1);
    let first = coll.iterator().unwrap().next().unwrap().unwrap();
    assert!(lumen::same_model(&first, &sentinel));
}

#[test]
fn independent_iterators() {
    let ow = ow22_collections();
    let model = wrap(&ow, NativeSet::from_items(["x", "y", "z"]));
    let coll = model.as_collection().unwrap();

    let mut a = coll.iterator().unwrap();
    let mut b = coll.iterator().unwrap();
    assert_eq!(scalar(a.next().unwrap()), "x");
    assert_eq!(scalar(a.next().unwrap()), "y");
    assert_eq!(scalar(b.next().unwrap()), "x");
    assert_eq!(scalar(a.next().unwrap()), "z");
    assert!(!a.has_next().unwrap());
    assert!(b.has_next().unwrap());
}

#[test]
fn structural_change_during_iteration() {
    let ow = ow22_collections();
    let set = NativeSet::from_items(["x", "y"]);
    let model = wrap(&ow, set.clone());
    let mut it = model.as_collection().unwrap().iterator().unwrap();
    it.next().unwrap();

    set.remove(&Native::from("y")).unwrap();
    let err = it.next().unwrap_err();
    assert!(matches!(err, LumenError::ConcurrentModification { collection: "set" }));

    // A fresh iterator sees the new contents
    assert_eq!(collection_items(&ow, &model), vec![Native::from("x")]);
}

#[test]
fn sets_fall_back_to_simple_sequence_without_flag() {
    let ow = ow22();
    let set = NativeSet::sorted_from(["a", "b", "c"]).unwrap();
    let model = wrap(&ow, set.clone());
    assert!(model.is::<SimpleSequence>());
    set.insert("d").unwrap();
    assert_eq!(model.as_sequence().unwrap().size().unwrap(), 3);
}
