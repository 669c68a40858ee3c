use crate::access::deref;
use crate::shape::{Def, DecodeFn, Format, Shape};
use crate::{Error, Result, Value};

use std::any::Any;

/// Commits `value` to `dest`, an instance of `shape`.
///
/// `Null` clears the nearest `Option` level and is otherwise ignored. Non-null
/// values allocate unset pointer levels, then are converted to the base type
/// with the usual coercion rules. Lists and byte buffers fill `Vec` and array
/// destinations item by item.
pub fn assign(shape: &'static Shape, dest: &mut dyn Any, value: Value) -> Result<()> {
    match &shape.def {
        Def::Option(def) if value.is_null() => {
            (def.clear)(dest);
            Ok(())
        }
        _ if value.is_null() => Ok(()),
        Def::Option(def) => {
            let inner = deref(shape, dest).ok_or_else(|| mismatch(shape))?;
            assign((def.inner)(), inner, value)
        }
        Def::Pointer(def) => {
            let inner = deref(shape, dest).ok_or_else(|| mismatch(shape))?;
            assign((def.inner)(), inner, value)
        }
        Def::Scalar(def) => (def.set)(dest, value),
        Def::List(def) => {
            let items = into_items(shape, value)?;
            if !(def.reset)(dest, items.len()) {
                return Err(mismatch(shape));
            }
            let item = (def.item)();
            for (i, value) in items.into_iter().enumerate() {
                let slot = (def.index)(dest, i).ok_or_else(|| mismatch(shape))?;
                assign(item, slot, value)?;
            }
            Ok(())
        }
        Def::Array(def) => {
            let items = into_items(shape, value)?;
            if items.len() > def.len {
                return Err(Error::type_incompatible_because(
                    format!("list of {} items", items.len()),
                    shape,
                    "too many items",
                ));
            }
            let item = (def.item)();
            for (i, value) in items.into_iter().enumerate() {
                let slot = (def.index)(dest, i).ok_or_else(|| mismatch(shape))?;
                assign(item, slot, value)?;
            }
            Ok(())
        }
        Def::Struct(_) | Def::Opaque => Err(Error::type_incompatible(value.describe(), shape)),
    }
}

/// Decodes `value` into `dest` with the `format` decoder of `shape`.
///
/// The decoder may be declared on any pointer level of `shape`; unset levels
/// above it are allocated first. `Null` is ignored.
pub fn decode(shape: &'static Shape, dest: &mut dyn Any, format: Format, value: Value) -> Result<()> {
    if value.is_null() {
        return Ok(());
    }

    let mut shape = shape;
    let mut dest = dest;
    let decoder = loop {
        if let Some(decoder) = shape.decoders.get(format) {
            break decoder;
        }
        let inner = match &shape.def {
            Def::Option(def) => (def.inner)(),
            Def::Pointer(def) => (def.inner)(),
            _ => {
                return Err(Error::type_incompatible_because(
                    shape,
                    format!("{} decoder", format),
                    "no decoder declared",
                ))
            }
        };
        dest = deref(shape, dest).ok_or_else(|| mismatch(shape))?;
        shape = inner;
    };

    let res = match decoder {
        DecodeFn::Text(decode) => match value {
            Value::String(input) => decode(dest, &input),
            Value::Bytes(input) => match std::str::from_utf8(&input) {
                Ok(input) => decode(dest, input),
                Err(err) => Err(err.into()),
            },
            value => return Err(Error::type_incompatible(value.describe(), "string")),
        },
        DecodeFn::Bytes(decode) => match value.as_bytes() {
            Some(input) => decode(dest, input),
            None => return Err(Error::type_incompatible(value.describe(), "bytes")),
        },
    };

    res.map_err(|err| Error::decode_failure(format.name(), err))
}

fn into_items(shape: &Shape, value: Value) -> Result<Vec<Value>> {
    match value {
        Value::List(items) => Ok(items),
        Value::Bytes(bytes) => Ok(bytes.into_iter().map(Value::from).collect()),
        value => Err(Error::type_incompatible(value.describe(), shape)),
    }
}

fn mismatch(shape: &Shape) -> Error {
    Error::type_incompatible("destination", shape)
}
