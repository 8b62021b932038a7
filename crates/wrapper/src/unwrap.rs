//! Round-trip resolver: model back to native value
//!
//! Resolution happens in two steps. First the model's *natural* native
//! value is found:
//!
//! - adapter and wrapper models yield the exact native object they were
//!   built on, so identity survives the round trip
//! - scalar, number and boolean models yield the corresponding scalar
//! - hash models are rebuilt into an insertion-ordered [`NativeMap`]
//! - sequence and collection models are rebuilt into a [`NativeList`]
//!
//! Then the natural value is coerced to the requested [`TypeHint`], within
//! its family only and without losing data.

use lumen_core::{
    ArrayData, LumenError, LumenResult, Model, Native, NativeArray, NativeList, NativeMap,
    NativeSet, TypeHint,
};

/// Native value behind `model`, shaped by `hint`
pub fn unwrap_model(model: &Model, hint: TypeHint) -> LumenResult<Native> {
    let native = if let Some(adapter) = model.as_adapter() {
        adapter.adapted_object(hint)?
    } else if let Some(wrapper) = model.as_wrapper() {
        wrapper.wrapped_object()
    } else {
        natural_native(model, hint)?
    };
    coerce(native, hint, model)
}

/// Like [`unwrap_model`]; a missing model resolves to `Native::Null`
pub fn unwrap_optional(model: Option<&Model>, hint: TypeHint) -> LumenResult<Native> {
    match model {
        Some(model) => unwrap_model(model, hint),
        None if hint.accepts(&Native::Null) => Ok(Native::Null),
        None => Err(LumenError::unwrap_failed("no value", hint)),
    }
}

fn natural_native(model: &Model, hint: TypeHint) -> LumenResult<Native> {
    // Models with several capabilities resolve to the one the hint asks for
    let wants_map = matches!(hint, TypeHint::Map);
    let wants_container = matches!(
        hint,
        TypeHint::List | TypeHint::Set | TypeHint::Collection | TypeHint::Array(_)
    );

    if wants_map {
        if let Some(hash) = model.as_hash() {
            return rebuild_map(hash);
        }
    }
    if wants_container {
        if let Some(items) = rebuild_items(model)? {
            return Ok(NativeList::from_items(items).into());
        }
    }
    if let Some(scalar) = model.as_scalar() {
        return Ok(Native::from(scalar.get_string()?));
    }
    if let Some(number) = model.as_number() {
        return Ok(Native::from(number.get_number()?));
    }
    if let Some(boolean) = model.as_boolean() {
        return Ok(Native::Bool(boolean.get_bool()?));
    }
    if let Some(hash) = model.as_hash() {
        return rebuild_map(hash);
    }
    if let Some(items) = rebuild_items(model)? {
        return Ok(NativeList::from_items(items).into());
    }
    Err(LumenError::unwrap_failed(model.kind_name(), hint))
}

fn rebuild_map(hash: &dyn lumen_core::HashModel) -> LumenResult<Native> {
    let keys = hash.keys()?;
    let key_models = match keys.as_collection() {
        Some(collection) => collection.to_vec()?,
        None => return Err(LumenError::unwrap_failed(keys.kind_name(), TypeHint::Collection)),
    };
    let map = NativeMap::new();
    for key_model in key_models {
        let key = match unwrap_optional(key_model.as_ref(), TypeHint::String)? {
            Native::String(key) => key,
            other => return Err(LumenError::unwrap_failed(other.describe(), TypeHint::String)),
        };
        let value = unwrap_optional(hash.get(&key)?.as_ref(), TypeHint::Any)?;
        map.insert(key.to_string(), value)?;
    }
    Ok(map.into())
}

/// Elements of a sequence or collection model, unwrapped in order
fn rebuild_items(model: &Model) -> LumenResult<Option<Vec<Native>>> {
    let elements = if let Some(sequence) = model.as_sequence() {
        let size = sequence.size()?;
        let mut elements = Vec::with_capacity(size);
        for index in 0..size {
            elements.push(sequence.get(index as i64)?);
        }
        elements
    } else if let Some(collection) = model.as_collection() {
        collection.to_vec()?
    } else {
        return Ok(None);
    };
    elements
        .iter()
        .map(|element| unwrap_optional(element.as_ref(), TypeHint::Any))
        .collect::<LumenResult<Vec<_>>>()
        .map(Some)
}

fn items_of(native: &Native) -> Option<Vec<Native>> {
    match native {
        Native::List(list) => Some(list.to_vec()),
        Native::Array(array) => Some(array.to_vec()),
        Native::Set(set) => Some(set.to_vec()),
        _ => None,
    }
}

/// Coerce `native` to `hint`, failing rather than losing data
fn coerce(native: Native, hint: TypeHint, model: &Model) -> LumenResult<Native> {
    if hint.accepts(&native) {
        return Ok(native);
    }
    let failed = || {
        LumenError::unwrap_failed(format!("{} ({})", model.kind_name(), native.describe()), hint)
    };

    let coerced = match hint {
        TypeHint::List | TypeHint::Collection => {
            items_of(&native).map(|items| Native::from(NativeList::from_items(items)))
        }
        TypeHint::Set => items_of(&native).and_then(|items| {
            let len = items.len();
            let set = NativeSet::from_items(items);
            // Duplicates would be dropped silently
            (set.len() == len).then(|| Native::from(set))
        }),
        TypeHint::Array(kind) => items_of(&native)
            .and_then(|items| ArrayData::from_natives(kind, items).ok())
            .map(|data| Native::from(NativeArray::from_data(data))),
        TypeHint::Number(kind) => native
            .as_number()
            .and_then(|n| n.convert(kind))
            .map(Native::from),
        TypeHint::Char => native.as_char().map(Native::Char),
        TypeHint::String => match &native {
            Native::Char(c) => Some(Native::from(c.to_string())),
            _ => None,
        },
        TypeHint::Any | TypeHint::Map | TypeHint::Bool => None,
    };
    coerced.ok_or_else(failed)
}
