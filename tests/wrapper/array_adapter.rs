//! Array adapter behavior for every element kind

use crate::common::*;
use lumen::{ArrayAdapter, ElementKind, Number, NumberKind};

#[test]
fn array_adapter_kinds() {
    let ow = ow22();
    let cases = [
        (NativeArray::of_objects(Vec::<Native>::new()), ElementKind::Object),
        (NativeArray::of_objects(Vec::<&str>::new()), ElementKind::Object),
        (NativeArray::from(Vec::<i8>::new()), ElementKind::Byte),
        (NativeArray::from(Vec::<i16>::new()), ElementKind::Short),
        (NativeArray::from(Vec::<i32>::new()), ElementKind::Int),
        (NativeArray::from(Vec::<i64>::new()), ElementKind::Long),
        (NativeArray::from(Vec::<f32>::new()), ElementKind::Float),
        (NativeArray::from(Vec::<f64>::new()), ElementKind::Double),
        (NativeArray::from(Vec::<bool>::new()), ElementKind::Boolean),
        (NativeArray::from(Vec::<char>::new()), ElementKind::Char),
    ];
    for (array, kind) in cases {
        let model = wrap(&ow, array);
        let adapter = model.downcast_ref::<ArrayAdapter>().expect("array adapter");
        assert_eq!(adapter.component_kind(), kind);
        assert_eq!(model.as_sequence().unwrap().size().unwrap(), 0);
    }
}

#[test]
fn object_array_with_nulls() {
    let array = NativeArray::of_objects([Native::from("a"), Native::Null, Native::from("c")]);

    let ow = ow22();
    let model = wrap(&ow, array.clone());
    let seq = model.as_sequence().unwrap();
    assert_eq!(seq.size().unwrap(), 3);
    assert!(seq.get(-1).unwrap().is_none());
    assert_eq!(scalar(seq.get(0).unwrap()), "a");
    assert!(seq.get(1).unwrap().is_none());
    assert_eq!(scalar(seq.get(2).unwrap()), "c");
    assert!(seq.get(3).unwrap().is_none());

    let sentinel = NullModel::shared();
    let ow = ow22_null_model(&sentinel);
    let model = wrap(&ow, array);
    let seq = model.as_sequence().unwrap();
    assert!(seq.get(-1).unwrap().is_none());
    assert!(lumen::same_model(&seq.get(1).unwrap().unwrap(), &sentinel));
    assert!(seq.get(3).unwrap().is_none());
}

fn numbers(model: &Model) -> Vec<Number> {
    let seq = model.as_sequence().unwrap();
    (0..seq.size().unwrap() as i64)
        .map(|i| seq.get(i).unwrap().unwrap().as_number().unwrap().get_number().unwrap())
        .collect()
}

#[test]
fn int_array_elements_are_ints() {
    let ow = ow22();
    let model = wrap(&ow, NativeArray::from(vec![11i32, 22]));
    assert_eq!(numbers(&model), [Number::Int(11), Number::Int(22)]);
    assert!(model.as_sequence().unwrap().get(2).unwrap().is_none());
}

#[test]
fn int_array_elements_unwrap_as_ints() {
    let ow = ow22();
    let model = wrap(&ow, NativeArray::from(vec![1i32, 2, 3]));
    let seq = model.as_sequence().unwrap();
    assert_eq!(seq.size().unwrap(), 3);
    let unwrapped: Vec<Native> = (0..3)
        .map(|i| {
            let element = seq.get(i).unwrap().unwrap();
            ow.unwrap_as(&element, TypeHint::Number(NumberKind::Int)).unwrap()
        })
        .collect();
    assert_eq!(unwrapped, [Native::Int(1), Native::Int(2), Native::Int(3)]);
}

#[test]
fn double_array_elements_are_doubles() {
    let ow = ow22();
    let model = wrap(&ow, NativeArray::from(vec![11.0f64, 22.0]));
    let values = numbers(&model);
    assert_eq!(values, [Number::Double(11.0), Number::Double(22.0)]);
    assert!(values.iter().all(|n| n.kind() == NumberKind::Double));
}

#[test]
fn bool_array_elements() {
    let ow = ow22();
    let model = wrap(&ow, NativeArray::from(vec![true, false]));
    let seq = model.as_sequence().unwrap();
    assert!(seq.get(0).unwrap().unwrap().as_boolean().unwrap().get_bool().unwrap());
    assert!(!seq.get(1).unwrap().unwrap().as_boolean().unwrap().get_bool().unwrap());
    assert!(seq.get(2).unwrap().is_none());
}

#[test]
fn char_array_elements() {
    let ow = ow22();
    let model = wrap(&ow, NativeArray::from(vec!['a', 'b']));
    let seq = model.as_sequence().unwrap();
    assert_eq!(scalar(seq.get(0).unwrap()), "a");
    assert_eq!(scalar(seq.get(1).unwrap()), "b");
    assert!(seq.get(-1).unwrap().is_none());
    assert!(seq.get(2).unwrap().is_none());
}

#[test]
fn int_array_unwraps_to_same_array_with_int_hint() {
    let ow = ow22();
    let array = NativeArray::from(vec![1i32, 2, 3]);
    let model = wrap(&ow, array.clone());
    let back = ow.unwrap_as(&model, TypeHint::Array(ElementKind::Int)).unwrap();
    assert!(back.same_instance(&Native::from(array)));
}
