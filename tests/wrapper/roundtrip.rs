//! Unwrapping models back to native values

use crate::common::*;
use lumen::{ElementKind, MapAdapter, NumberKind, SimpleHash, SimpleSequence};

fn init_test_map(map: &NativeMap) {
    map.insert("a", 1).unwrap();
    map.insert("b", 2).unwrap();
    map.insert("c", 3).unwrap();
}

struct Fixtures {
    insertion_map: NativeMap,
    sorted_map: NativeMap,
    frozen_map: NativeMap,
    list: NativeList,
    int_array: NativeArray,
    string_array: NativeArray,
}

fn fixtures() -> Fixtures {
    let insertion_map = NativeMap::new();
    init_test_map(&insertion_map);
    let sorted_map = NativeMap::sorted();
    sorted_map.insert("c", 3).unwrap();
    sorted_map.insert("a", 1).unwrap();
    sorted_map.insert("b", 2).unwrap();
    Fixtures {
        insertion_map,
        sorted_map,
        frozen_map: NativeMap::frozen([("a", 1), ("b", 2), ("c", 3)]),
        list: NativeList::from_items(["a", "b", "c"]),
        int_array: NativeArray::from(vec![1i32, 2, 3]),
        string_array: NativeArray::of_objects(["a", "b", "c"]),
    }
}

#[test]
fn legacy_roundtrip_is_by_value() {
    let ow = wrapper(Version::V2_3_21);
    let f = fixtures();

    for map in [&f.insertion_map, &f.sorted_map, &f.frozen_map] {
        let model = wrap(&ow, map.clone());
        assert!(model.is::<SimpleHash>());
        let back = ow.unwrap(&model).unwrap();
        assert!(!back.same_instance(&Native::from(map.clone())));
        assert_eq!(back, Native::from(map.clone()));
        assert_eq!(back.to_string(), "{a=1, b=2, c=3}");
    }

    let model = wrap(&ow, f.list.clone());
    assert!(model.is::<SimpleSequence>());
    let back = ow.unwrap(&model).unwrap();
    assert!(matches!(back, Native::List(_)));
    assert_eq!(back, Native::from(f.list.clone()));
    assert_eq!(back.to_string(), "[a, b, c]");

    let model = wrap(&ow, f.int_array.clone());
    assert!(model.is::<SimpleSequence>());
    assert_eq!(ow.unwrap(&model).unwrap().to_string(), "[1, 2, 3]");

    let model = wrap(&ow, f.string_array.clone());
    assert!(model.is::<SimpleSequence>());
    assert_eq!(ow.unwrap(&model).unwrap().to_string(), "[a, b, c]");
}

#[test]
fn adapter_roundtrip_is_by_identity() {
    let ow = ow22();
    let f = fixtures();

    let natives = [
        Native::from(f.insertion_map.clone()),
        Native::from(f.sorted_map.clone()),
        Native::from(f.frozen_map.clone()),
        Native::from(f.list.clone()),
        Native::from(f.int_array.clone()),
        Native::from(f.string_array.clone()),
    ];
    for native in natives {
        let model = wrap(&ow, native.clone());
        assert!(model.as_adapter().is_some(), "{}", model.kind_name());
        let back = ow.unwrap(&model).unwrap();
        assert!(back.same_instance(&native), "{}", native.describe());
    }

    let model = wrap(&ow, f.sorted_map.clone());
    assert!(model.is::<MapAdapter>());
    assert_eq!(ow.unwrap(&model).unwrap().to_string(), "{a=1, b=2, c=3}");
}

#[test]
fn scalars_roundtrip() {
    let ow = ow22();
    for native in [
        Native::from("text"),
        Native::Bool(true),
        Native::Byte(-3),
        Native::Short(300),
        Native::Int(70_000),
        Native::Long(1 << 40),
        Native::Float(1.5),
        Native::Double(2.25),
    ] {
        let model = wrap(&ow, native.clone());
        assert_eq!(ow.unwrap(&model).unwrap(), native);
    }
    let model = wrap(&ow, 'q');
    assert_eq!(ow.unwrap(&model).unwrap(), Native::from("q"));
    assert_eq!(ow.unwrap_as(&model, TypeHint::Char).unwrap(), Native::Char('q'));
}

#[test]
fn existing_model_is_not_rewrapped() {
    let ow = ow22();
    let model = wrap(&ow, NativeList::new());
    let again = wrap(&ow, Native::Model(model.clone()));
    assert!(lumen::same_model(&model, &again));
}

#[test]
fn null_roundtrip() {
    let ow = ow22();
    assert!(ow.wrap(Native::Null).unwrap().is_none());
    assert_eq!(ow.unwrap_optional(None).unwrap(), Native::Null);

    let sentinel = NullModel::shared();
    let ow = ow22_null_model(&sentinel);
    let model = ow.wrap(Native::Null).unwrap().unwrap();
    assert!(lumen::same_model(&model, &sentinel));
    assert!(ow.unwrap(&model).unwrap().is_null());
}

#[test]
fn hints_coerce_within_family() {
    let ow = ow22();
    let list = NativeList::from_items([1i32, 2, 3]);
    let model = wrap(&ow, list.clone());

    assert!(ow.unwrap_as(&model, TypeHint::List).unwrap().same_instance(&Native::from(list)));
    let Native::Array(array) = ow.unwrap_as(&model, TypeHint::Array(ElementKind::Int)).unwrap()
    else {
        panic!("expected an array");
    };
    assert_eq!(array.element_kind(), ElementKind::Int);
    assert!(matches!(ow.unwrap_as(&model, TypeHint::Set).unwrap(), Native::Set(_)));
    assert!(matches!(ow.unwrap_as(&model, TypeHint::Collection).unwrap(), Native::List(_)));

    let err = ow.unwrap_as(&model, TypeHint::Map).unwrap_err();
    assert!(matches!(err, LumenError::UnwrapFailed { .. }));
    assert!(ow.unwrap_as(&model, TypeHint::Array(ElementKind::Boolean)).is_err());
}

#[test]
fn hints_never_lose_data() {
    let ow = ow22();
    let dupes = wrap(&ow, NativeList::from_items(["a", "a"]));
    assert!(ow.unwrap_as(&dupes, TypeHint::Set).is_err());

    let big = wrap(&ow, 1_000i32);
    assert!(ow.unwrap_as(&big, TypeHint::Number(NumberKind::Byte)).is_err());
    assert_eq!(
        ow.unwrap_as(&big, TypeHint::Number(NumberKind::Short)).unwrap(),
        Native::Short(1_000)
    );

    let fraction = wrap(&ow, 0.5f64);
    assert!(ow.unwrap_as(&fraction, TypeHint::Number(NumberKind::Long)).is_err());
    assert_eq!(
        ow.unwrap_as(&fraction, TypeHint::Number(NumberKind::Float)).unwrap(),
        Native::Float(0.5)
    );
}

#[test]
fn legacy_sequence_to_array_hint() {
    let ow = wrapper(Version::V2_3_0);
    let model = wrap(&ow, NativeArray::from(vec![1i32, 2, 3]));
    let back = ow.unwrap_as(&model, TypeHint::Array(ElementKind::Int)).unwrap();
    assert_eq!(back, Native::from(NativeArray::from(vec![1i32, 2, 3])));
}

#[test]
fn host_objects_are_rejected() {
    struct Widget;
    let ow = ow22();
    let err = ow.wrap(lumen::HostObject::new(Widget)).unwrap_err();
    assert!(matches!(err, LumenError::UnsupportedType(_)));

    // Inside a legacy container the failure surfaces at wrap time
    let legacy = wrapper(Version::V2_3_0);
    let list = NativeList::from_items([Native::from(lumen::HostObject::new(Widget))]);
    assert!(legacy.wrap(list.clone()).is_err());

    // An adapter defers it to element access
    let model = wrap(&ow, list);
    assert!(model.as_sequence().unwrap().get(0).is_err());
}
